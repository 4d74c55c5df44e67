//! One context shared by many workers.

use std::sync::Arc;
use std::thread;

use md_core::units::{k, unitless};
use md_props::{
    BrinePropertyPack, CollectingSink, DiagnosticKind, EvalContext, Membrane, SweepDefinition,
    Verbosity, density_nacl, thermal_conductivity_maxwell, vapor_pressure_brine,
};
use rayon::prelude::*;

fn cells() -> Vec<(f64, f64)> {
    (0..2000)
        .map(|i| {
            let t = 290.0 + (i % 70) as f64;
            let w = (i % 26) as f64 * 0.01;
            (t, w)
        })
        .collect()
}

#[test]
fn parallel_matches_serial() {
    let ctx = EvalContext::default().with_verbosity(Verbosity::QUIET);
    let cells = cells();

    let serial: Vec<f64> = cells
        .iter()
        .map(|&(t, w)| vapor_pressure_brine(&ctx, k(t), unitless(1.0 - w)).unwrap().value)
        .collect();
    let parallel: Vec<f64> = cells
        .par_iter()
        .map(|&(t, w)| vapor_pressure_brine(&ctx, k(t), unitless(1.0 - w)).unwrap().value)
        .collect();

    assert_eq!(serial, parallel);
}

#[test]
fn threads_share_one_sink() {
    let sink = Arc::new(CollectingSink::new());
    let ctx = Arc::new(
        EvalContext::default()
            .with_verbosity(Verbosity::VERBOSE)
            .with_sink(sink.clone()),
    );

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let ctx = Arc::clone(&ctx);
            thread::spawn(move || {
                let mut acc = 0.0;
                for i in 0..100 {
                    // every tenth call is above the validated temperature range
                    let t_c = if i % 10 == 0 { 320.0 } else { 20.0 + worker as f64 };
                    acc += density_nacl(&ctx, k(273.15 + t_c), unitless(0.05)).value;
                    acc +=
                        thermal_conductivity_maxwell(k(330.0), unitless(0.8), Membrane::Pp).value;
                }
                acc
            })
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap().is_finite());
    }
    assert_eq!(sink.count(DiagnosticKind::OutOfRange), 8 * 10);
}

#[test]
fn sweep_of_property_packs() {
    let ctx = EvalContext::default().with_verbosity(Verbosity::QUIET);
    let sweep = SweepDefinition::linear(0.0, 0.25, 26).unwrap();
    let result = sweep
        .try_evaluate(|w| BrinePropertyPack::evaluate(&ctx, k(333.15), unitless(w)))
        .unwrap();

    assert_eq!(result.len(), 26);
    let densities: Vec<f64> = result.values.iter().map(|p| p.rho.value).collect();
    assert!(densities.windows(2).all(|w| w[0] < w[1]));
    let vapor: Vec<f64> = result.values.iter().map(|p| p.p_vap.value).collect();
    assert!(vapor.windows(2).all(|w| w[0] > w[1]));
}

//! Diagnostic policy: verbosity gating, severity classes and sinks.

use std::sync::Arc;

use md_core::units::{degc, k, unitless};
use md_props::{
    CollectingSink, Correlation, DiagnosticKind, EvalContext, InvalidInputPolicy, PropsError,
    TracingSink, Verbosity, density_nacl, molar_fraction_from_slices, solubility_nacl,
    thermal_conductivity_maxwell_code, thermal_conductivity_nacl, viscosity_nacl,
};

fn context(verbosity: Verbosity, policy: InvalidInputPolicy) -> (EvalContext, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let ctx = EvalContext::default()
        .with_verbosity(verbosity)
        .with_invalid_input(policy)
        .with_sink(sink.clone());
    (ctx, sink)
}

fn out_of_range_calls(ctx: &EvalContext) {
    density_nacl(ctx, degc(350.0), unitless(0.0));
    viscosity_nacl(ctx, degc(25.0), unitless(0.4));
    thermal_conductivity_nacl(ctx, k(250.0), unitless(0.0)).unwrap();
}

#[test]
fn gated_advisories_follow_verbosity() {
    let (ctx, sink) = context(Verbosity::VERBOSE, InvalidInputPolicy::Fatal);
    out_of_range_calls(&ctx);
    assert_eq!(sink.count(DiagnosticKind::OutOfRange), 3);

    let (ctx, sink) = context(Verbosity(1), InvalidInputPolicy::Fatal);
    out_of_range_calls(&ctx);
    assert_eq!(sink.count(DiagnosticKind::OutOfRange), 3);

    let (ctx, sink) = context(Verbosity(2), InvalidInputPolicy::Fatal);
    out_of_range_calls(&ctx);
    assert!(sink.is_empty());
}

#[test]
fn solubility_advisory_is_unconditional() {
    for level in [0, 1, 2, 200, u8::MAX] {
        let (ctx, sink) = context(Verbosity(level), InvalidInputPolicy::Fatal);
        solubility_nacl(&ctx, degc(460.0));
        assert_eq!(sink.len(), 1, "level {level}");
    }
}

#[test]
fn advisory_carries_triage_fields() {
    let (ctx, sink) = context(Verbosity::VERBOSE, InvalidInputPolicy::Fatal);
    density_nacl(&ctx, degc(350.0), unitless(0.0));
    let events = sink.events();
    assert_eq!(events.len(), 1);
    let d = &events[0];
    assert_eq!(d.kind, DiagnosticKind::OutOfRange);
    assert_eq!(d.correlation, Correlation::DensityNaCl);
    assert_eq!(d.quantity, "temperature");
    assert!((d.value.unwrap() - 350.0).abs() < 1e-9);
    let range = d.range.unwrap();
    assert_eq!((range.min, range.max), (0.0, 300.0));
}

#[test]
fn invalid_input_is_distinct_from_advisory() {
    let (ctx, sink) = context(Verbosity::SILENT, InvalidInputPolicy::Fatal);
    let err = thermal_conductivity_maxwell_code(&ctx, k(330.0), unitless(0.8), 12).unwrap_err();
    assert!(matches!(err, PropsError::InvalidSelector { what: "membrane", .. }));

    let err = molar_fraction_from_slices(&ctx, &[18.0], &[0.5, 0.5], 0).unwrap_err();
    assert!(matches!(err, PropsError::InvalidComposition { .. }));

    assert_eq!(sink.count(DiagnosticKind::InvalidInput), 2);
    assert_eq!(sink.count(DiagnosticKind::OutOfRange), 0);
}

#[test]
fn report_policy_returns_nan_deterministically() {
    let (ctx, sink) = context(Verbosity::SILENT, InvalidInputPolicy::Report);
    for _ in 0..3 {
        let keff = thermal_conductivity_maxwell_code(&ctx, k(330.0), unitless(0.8), 7).unwrap();
        assert!(keff.value.is_nan());
    }
    assert_eq!(sink.count(DiagnosticKind::InvalidInput), 3);
}

#[test]
fn tracing_sink_under_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let ctx = EvalContext::default().with_sink(Arc::new(TracingSink));
        let rho = density_nacl(&ctx, degc(350.0), unitless(0.0));
        assert!(rho.value.is_finite());
        assert!(thermal_conductivity_maxwell_code(&ctx, k(330.0), unitless(0.8), 9).is_err());
    });
}

use mgdeos::prelude::*;
use russell_lab::approx_eq;

// Periclase (MgO) from ambient conditions to the core-mantle boundary and beyond
//
// # Reference
//
// 1. Stixrude L and Lithgow-Bertelloni C (2011) Thermodynamics of mantle minerals - II.
//    Phase equilibria, Geophysical Journal International, 184(3), 1180-1213

const V_0: f64 = 11.24e-6; // m³/mol

fn new_periclase(diagnostics: &mut Diagnostics) -> Result<MieGrueneisenDebye, EosError> {
    MieGrueneisenDebye::new(&SampleParams::param_periclase(), ShearOrder::Third, diagnostics)
}

#[test]
fn test_periclase_ambient() -> Result<(), EosError> {
    let mut diagnostics = Diagnostics::new();
    let eos = new_periclase(&mut diagnostics)?;
    let v = eos.volume(0.0, 300.0, &mut diagnostics)?;
    assert!(f64::abs(v - V_0) / V_0 < 1e-3);
    approx_eq(eos.pressure(300.0, V_0)?, 0.0, 1e3);
    assert!(diagnostics.is_empty());
    Ok(())
}

#[test]
fn test_periclase_pressure_is_monotonic() -> Result<(), EosError> {
    let mut diagnostics = Diagnostics::new();
    let eos = new_periclase(&mut diagnostics)?;
    for t in [0.0, 300.0, 1500.0, 3000.0] {
        let mut previous = f64::INFINITY;
        for i in 1..110 {
            let v = (0.6 + 0.005 * (i as f64)) * V_0;
            let p = eos.pressure(t, v)?;
            assert!(p < previous, "P(T = {}, V = {:e}) is not decreasing", t, v);
            previous = p;
        }
    }
    Ok(())
}

#[test]
fn test_periclase_along_a_geotherm() -> Result<(), EosError> {
    let mut diagnostics = Diagnostics::new();
    let eos = new_periclase(&mut diagnostics)?;
    let geotherm = [(0.0, 300.0), (24e9, 1900.0), (60e9, 2100.0), (100e9, 2400.0), (135e9, 2700.0)];
    let mut previous = f64::INFINITY;
    for (p, t) in geotherm {
        let props = eos.evaluate(p, t, &mut diagnostics)?;
        approx_eq(eos.pressure(t, props.volume)?, p, 1e-2);
        assert!(props.volume < previous);
        assert!(props.adiabatic_bulk_modulus > props.isothermal_bulk_modulus);
        assert!(props.heat_capacity_p > props.heat_capacity_v);
        assert!(props.thermal_expansivity > 0.0);
        previous = props.volume;
    }
    assert!(diagnostics.is_empty());
    Ok(())
}

#[test]
fn test_periclase_extreme_compression_uses_fallback() -> Result<(), EosError> {
    let mut diagnostics = Diagnostics::new();
    let eos = new_periclase(&mut diagnostics)?;
    let v = eos.volume(300e9, 300.0, &mut diagnostics)?;
    assert!(v < 0.6 * V_0);
    approx_eq(eos.pressure(300.0, v)?, 300e9, 1e-2);
    assert_eq!(diagnostics.len(), 1);
    let entry = &diagnostics.entries()[0];
    assert_eq!(entry.field, "volume");
    assert_eq!(entry.severity, Severity::Info);
    Ok(())
}

#[test]
fn test_periclase_strong_tension_fails() -> Result<(), EosError> {
    let mut diagnostics = Diagnostics::new();
    let eos = new_periclase(&mut diagnostics)?;
    match eos.volume(-100e9, 300.0, &mut diagnostics) {
        Err(EosError::RootFinding {
            pressure, temperature, ..
        }) => {
            assert_eq!(pressure, -100e9);
            assert_eq!(temperature, 300.0);
        }
        other => panic!("expected a root finding error, got {:?}", other),
    }
    Ok(())
}

use mgdeos::prelude::*;
use russell_lab::approx_eq;

// Checks that pressure(T, volume(P, T)) recovers P for several minerals

const PRESSURES: [f64; 6] = [1e9, 10e9, 25e9, 50e9, 100e9, 135e9]; // Pa
const TEMPERATURES: [f64; 4] = [300.0, 1000.0, 2000.0, 3000.0]; // K

#[test]
fn test_volume_round_trip() -> Result<(), EosError> {
    let minerals = [
        ("periclase", SampleParams::param_periclase()),
        ("stishovite", SampleParams::param_stishovite()),
        ("wuestite", SampleParams::param_wuestite()),
        ("mg_perovskite", SampleParams::param_mg_perovskite()),
    ];
    for (name, param) in minerals {
        let mut diagnostics = Diagnostics::new();
        let eos = MieGrueneisenDebye::new(&param, ShearOrder::Third, &mut diagnostics)?;
        for p in PRESSURES {
            for t in TEMPERATURES {
                let v = eos.volume(p, t, &mut diagnostics)?;
                let p_back = eos.pressure(t, v)?;
                assert!(
                    f64::abs(p_back - p) / p < 1e-4,
                    "{}: P = {:e}, T = {} gives {:e}",
                    name,
                    p,
                    t,
                    p_back
                );
            }
        }
    }
    Ok(())
}

#[test]
fn test_volume_at_zero_pressure() -> Result<(), EosError> {
    let mut diagnostics = Diagnostics::new();
    let eos = MieGrueneisenDebye::new(&SampleParams::param_stishovite(), ShearOrder::Second, &mut diagnostics)?;
    for t in [0.0, 300.0, 1000.0] {
        let v = eos.volume(0.0, t, &mut diagnostics)?;
        approx_eq(eos.pressure(t, v)?, 0.0, 1e-2);
    }
    Ok(())
}

#[test]
fn test_volume_with_other_reference_temperature() -> Result<(), EosError> {
    // the reference state moves to T₀
    let param = ParamMineral {
        t_0: Some(1000.0),
        ..SampleParams::param_periclase()
    };
    let mut diagnostics = Diagnostics::new();
    let eos = MieGrueneisenDebye::new(&param, ShearOrder::Third, &mut diagnostics)?;
    approx_eq(eos.volume(0.0, 1000.0, &mut diagnostics)? / 11.24e-6, 1.0, 1e-12);
    assert!(eos.volume(0.0, 300.0, &mut diagnostics)? < 11.24e-6);
    Ok(())
}

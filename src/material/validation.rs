use crate::base::{Diagnostics, EosError, ParamMineral, DEFAULT_REFERENCE_TEMPERATURE};
use serde::Serialize;

/// Holds a validated parameter set
///
/// Required parameters are plain numbers; optional ones remain `Option` so that
/// each property can check for them before use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MineralParams {
    pub v_0: f64,              // reference volume V₀
    pub k_0: f64,              // reference bulk modulus K₀
    pub kprime_0: f64,         // K₀′
    pub g_0: Option<f64>,      // reference shear modulus G₀
    pub gprime_0: Option<f64>, // G₀′
    pub molar_mass: f64,       // molar mass
    pub n: f64,                // atoms per formula unit
    pub debye_0: f64,          // reference Debye temperature Θ₀
    pub grueneisen_0: f64,     // reference Grüneisen parameter γ₀
    pub q_0: f64,              // q₀
    pub eta_s_0: Option<f64>,  // ηₛ₀
    pub f_0: Option<f64>,      // reference Helmholtz energy F₀
    pub t_0: f64,              // reference temperature T₀
}

/// Converts NaN into None
fn defined(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Returns the value of a required parameter
fn required(value: Option<f64>, key: &'static str) -> Result<f64, EosError> {
    defined(value).ok_or(EosError::MissingParameter(key))
}

/// Pushes a warning if the value lies outside [min, max]
fn check_range(diagnostics: &mut Diagnostics, key: &'static str, value: Option<f64>, min: f64, max: f64) {
    if let Some(v) = value {
        if v < min || v > max {
            diagnostics.warn(
                key,
                format!("Unusual value for {} = {:e}; expected range [{:e}, {:e}]", key, v, min, max),
            );
        }
    }
}

/// Checks for existence and plausibility of the parameters
///
/// Absent (or NaN) optional parameters become `None`; `T_0` defaults to 300 K.
/// A missing required parameter is an error naming the key. Values outside broad
/// physically plausible ranges only produce warnings; the evaluation proceeds.
pub fn validate_parameters(param: &ParamMineral, diagnostics: &mut Diagnostics) -> Result<MineralParams, EosError> {
    // required parameters
    let valid = MineralParams {
        v_0: required(param.v_0, "V_0")?,
        k_0: required(param.k_0, "K_0")?,
        kprime_0: required(param.kprime_0, "Kprime_0")?,
        g_0: defined(param.g_0),
        gprime_0: defined(param.gprime_0),
        molar_mass: required(param.molar_mass, "molar_mass")?,
        n: required(param.n, "n")?,
        debye_0: required(param.debye_0, "Debye_0")?,
        grueneisen_0: required(param.grueneisen_0, "grueneisen_0")?,
        q_0: required(param.q_0, "q_0")?,
        eta_s_0: defined(param.eta_s_0),
        f_0: defined(param.f_0),
        t_0: defined(param.t_0).unwrap_or(DEFAULT_REFERENCE_TEMPERATURE),
    };

    // plausibility
    check_range(diagnostics, "V_0", Some(valid.v_0), 1e-7, 1e-3);
    check_range(diagnostics, "K_0", Some(valid.k_0), 1e9, 1e13);
    check_range(diagnostics, "Kprime_0", Some(valid.kprime_0), 0.0, 10.0);
    check_range(diagnostics, "G_0", valid.g_0, 0.0, 1e13);
    check_range(diagnostics, "Gprime_0", valid.gprime_0, -5.0, 10.0);
    check_range(diagnostics, "molar_mass", Some(valid.molar_mass), 0.001, 10.0);
    check_range(diagnostics, "n", Some(valid.n), 1.0, 1000.0);
    check_range(diagnostics, "Debye_0", Some(valid.debye_0), 1.0, 10000.0);
    check_range(diagnostics, "grueneisen_0", Some(valid.grueneisen_0), 0.0, 10.0);
    check_range(diagnostics, "q_0", Some(valid.q_0), -10.0, 10.0);
    check_range(diagnostics, "eta_s_0", valid.eta_s_0, -10.0, 10.0);
    check_range(diagnostics, "T_0", Some(valid.t_0), 0.0, 10000.0);
    Ok(valid)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use super::EosError;
use serde::{Deserialize, Serialize};

/// Selects the truncation order of the finite-strain expansion of the shear modulus
///
/// Only the shear modulus depends on this choice; every other property is
/// third order in strain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShearOrder {
    /// Second-order expansion; use only when G₀ and G₀′ were fitted that way
    Second,

    /// Third-order expansion (thermodynamically more consistent)
    Third,
}

/// Holds the parameters of a mineral phase as supplied by the caller (SI units)
///
/// Every field is optional here because the set may come from a key/value table
/// with missing entries. A value equal to NaN is regarded as absent. Use
/// [crate::material::validate_parameters] (called by the equation of state) to
/// check which fields are required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamMineral {
    /// Reference molar volume V₀ (m³/mol)
    #[serde(rename = "V_0", default, skip_serializing_if = "Option::is_none")]
    pub v_0: Option<f64>,

    /// Reference isothermal bulk modulus K₀ (Pa)
    #[serde(rename = "K_0", default, skip_serializing_if = "Option::is_none")]
    pub k_0: Option<f64>,

    /// Pressure derivative of the bulk modulus K₀′
    #[serde(rename = "Kprime_0", default, skip_serializing_if = "Option::is_none")]
    pub kprime_0: Option<f64>,

    /// Reference shear modulus G₀ (Pa)
    #[serde(rename = "G_0", default, skip_serializing_if = "Option::is_none")]
    pub g_0: Option<f64>,

    /// Pressure derivative of the shear modulus G₀′
    #[serde(rename = "Gprime_0", default, skip_serializing_if = "Option::is_none")]
    pub gprime_0: Option<f64>,

    /// Molar mass (kg/mol)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molar_mass: Option<f64>,

    /// Number of atoms per formula unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<f64>,

    /// Reference Debye temperature Θ₀ (K)
    #[serde(rename = "Debye_0", default, skip_serializing_if = "Option::is_none")]
    pub debye_0: Option<f64>,

    /// Reference Grüneisen parameter γ₀
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grueneisen_0: Option<f64>,

    /// Logarithmic volume derivative of the Grüneisen parameter q₀
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q_0: Option<f64>,

    /// Shear strain derivative of the Grüneisen parameter ηₛ₀
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta_s_0: Option<f64>,

    /// Reference Helmholtz free energy F₀ (J/mol)
    #[serde(rename = "F_0", default, skip_serializing_if = "Option::is_none")]
    pub f_0: Option<f64>,

    /// Reference temperature T₀ (K); 300 K if absent
    #[serde(rename = "T_0", default, skip_serializing_if = "Option::is_none")]
    pub t_0: Option<f64>,
}

impl ParamMineral {
    /// Parses a JSON object mapping parameter names to numbers
    ///
    /// ```
    /// use mgdeos::base::ParamMineral;
    /// let param = ParamMineral::from_json(r#"{"V_0": 11.24e-6, "K_0": 161.0e9}"#).unwrap();
    /// assert_eq!(param.v_0, Some(11.24e-6));
    /// assert_eq!(param.q_0, None);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, EosError> {
        serde_json::from_str(text).map_err(|e| EosError::Parse(e.to_string()))
    }

    /// Builds the parameter set from (name, value) pairs
    ///
    /// Unknown names are rejected so that misspelled keys do not go unnoticed.
    pub fn from_map<'a, I>(pairs: I) -> Result<Self, EosError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut param = ParamMineral::default();
        for (key, value) in pairs {
            let slot = match key {
                "V_0" => &mut param.v_0,
                "K_0" => &mut param.k_0,
                "Kprime_0" => &mut param.kprime_0,
                "G_0" => &mut param.g_0,
                "Gprime_0" => &mut param.gprime_0,
                "molar_mass" => &mut param.molar_mass,
                "n" => &mut param.n,
                "Debye_0" => &mut param.debye_0,
                "grueneisen_0" => &mut param.grueneisen_0,
                "q_0" => &mut param.q_0,
                "eta_s_0" => &mut param.eta_s_0,
                "F_0" => &mut param.f_0,
                "T_0" => &mut param.t_0,
                _ => return Err(EosError::Parse(format!("unknown parameter: {}", key))),
            };
            *slot = Some(value);
        }
        Ok(param)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

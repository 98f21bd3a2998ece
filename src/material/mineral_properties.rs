use super::MieGrueneisenDebye;
use crate::base::{Diagnostics, EosError};
use crate::StrError;
use rayon::prelude::*;
use serde::Serialize;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::Path;

/// Holds all properties of a mineral at a given pressure and temperature
///
/// Properties that need optional parameters (`G_0`, `Gprime_0`, `eta_s_0`, `F_0`)
/// are `None` when these parameters are undefined. `q` is `None` where γ = 0.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MineralProperties {
    pub pressure: f64,                      // Pa
    pub temperature: f64,                   // K
    pub volume: f64,                        // m³/mol
    pub density: f64,                       // kg/m³
    pub debye_temperature: f64,             // K
    pub grueneisen_parameter: f64,          // [-]
    pub q: Option<f64>,                     // [-]
    pub eta_s: Option<f64>,                 // [-]
    pub isothermal_bulk_modulus: f64,       // Pa
    pub adiabatic_bulk_modulus: f64,        // Pa
    pub shear_modulus: Option<f64>,         // Pa
    pub heat_capacity_v: f64,               // J/K/mol
    pub heat_capacity_p: f64,               // J/K/mol
    pub thermal_expansivity: f64,           // 1/K
    pub entropy: f64,                       // J/K/mol
    pub helmholtz_free_energy: Option<f64>, // J/mol
    pub gibbs_free_energy: Option<f64>,     // J/mol
    pub enthalpy: Option<f64>,              // J/mol
    pub bulk_sound_velocity: f64,           // m/s
    pub shear_wave_velocity: Option<f64>,   // m/s
    pub p_wave_velocity: Option<f64>,       // m/s
}

/// Converts an unsupported property into None and keeps the other errors
fn optional(result: Result<f64, EosError>) -> Result<Option<f64>, EosError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(EosError::UnsupportedProperty { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

impl MieGrueneisenDebye {
    /// Evaluates all properties at (P, T)
    ///
    /// The volume is solved once and shared by every property (including the PV
    /// term of the enthalpy).
    pub fn evaluate(
        &self,
        pressure: f64,
        temperature: f64,
        diagnostics: &mut Diagnostics,
    ) -> Result<MineralProperties, EosError> {
        let (p, t) = (pressure, temperature);
        let v = self.volume(p, t, diagnostics)?;
        let density = self.density(v)?;
        let k_s = self.adiabatic_bulk_modulus(p, t, v)?;
        let gg = optional(self.shear_modulus(p, t, v))?;
        let ss = self.entropy(p, t, v)?;
        let ff = optional(self.helmholtz_free_energy(p, t, v))?;
        let gr = self.grueneisen_parameter(p, t, v)?;
        Ok(MineralProperties {
            pressure: p,
            temperature: t,
            volume: v,
            density,
            debye_temperature: self.debye_temperature(v)?,
            grueneisen_parameter: gr,
            q: if gr == 0.0 { None } else { Some(self.volume_dependent_q(v)?) },
            eta_s: optional(self.isotropic_eta_s(v))?,
            isothermal_bulk_modulus: self.isothermal_bulk_modulus(p, t, v)?,
            adiabatic_bulk_modulus: k_s,
            shear_modulus: gg,
            heat_capacity_v: self.heat_capacity_v(p, t, v)?,
            heat_capacity_p: self.heat_capacity_p(p, t, v)?,
            thermal_expansivity: self.thermal_expansivity(p, t, v)?,
            entropy: ss,
            helmholtz_free_energy: ff,
            gibbs_free_energy: ff.map(|f| f + p * v),
            enthalpy: ff.map(|f| f + t * ss + p * v),
            bulk_sound_velocity: f64::sqrt(k_s / density),
            shear_wave_velocity: gg.map(|g| f64::sqrt(g / density)),
            p_wave_velocity: gg.map(|g| f64::sqrt((k_s + 4.0 * g / 3.0) / density)),
        })
    }

    /// Evaluates all properties at many (P, T) states in parallel
    ///
    /// The output follows the order of `states`; each state gets its own diagnostics.
    pub fn evaluate_batch(&self, states: &[(f64, f64)]) -> Vec<(Result<MineralProperties, EosError>, Diagnostics)> {
        states
            .par_iter()
            .map(|&(pressure, temperature)| {
                let mut diagnostics = Diagnostics::new();
                let result = self.evaluate(pressure, temperature, &mut diagnostics);
                (result, diagnostics)
            })
            .collect()
    }
}

impl MineralProperties {
    /// Returns a JSON representation
    pub fn to_json(&self) -> Result<String, StrError> {
        serde_json::to_string_pretty(&self).map_err(|_| "cannot serialize properties")
    }

    /// Writes a JSON file with a sequence of properties
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(all: &[MineralProperties], full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, all).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::MineralProperties;
    use crate::base::{Diagnostics, EosError, SampleParams, ShearOrder};
    use crate::material::MieGrueneisenDebye;
    use russell_lab::approx_eq;
    use std::fs;

    fn new_eos(param: &crate::base::ParamMineral) -> MieGrueneisenDebye {
        let mut diag = Diagnostics::new();
        MieGrueneisenDebye::new(param, ShearOrder::Third, &mut diag).unwrap()
    }

    #[test]
    fn evaluate_works() {
        let eos = new_eos(&SampleParams::param_periclase());
        let mut diag = Diagnostics::new();
        let res = eos.evaluate(0.0, 300.0, &mut diag).unwrap();
        assert!(diag.is_empty());
        approx_eq(res.volume / 11.24e-6, 1.0, 1e-10);
        approx_eq(res.density, 0.0403 / res.volume, 1e-10);
        approx_eq(res.grueneisen_parameter, 1.36, 1e-8);
        approx_eq(res.isothermal_bulk_modulus / 161e9, 1.0, 1e-8);
        approx_eq(res.shear_modulus.unwrap() / 131e9, 1.0, 1e-8);
        assert_eq!(res.helmholtz_free_energy, None);
        assert_eq!(res.gibbs_free_energy, None);
        assert_eq!(res.enthalpy, None);

        // velocities of periclase at ambient conditions are about 6.6, 6.0, and 9.7 km/s
        let rho = res.density;
        approx_eq(res.bulk_sound_velocity, f64::sqrt(res.adiabatic_bulk_modulus / rho), 1e-8);
        assert!(res.bulk_sound_velocity > 6.5e3 && res.bulk_sound_velocity < 6.8e3);
        assert!(res.shear_wave_velocity.unwrap() > 5.9e3 && res.shear_wave_velocity.unwrap() < 6.1e3);
        assert!(res.p_wave_velocity.unwrap() > 9.6e3 && res.p_wave_velocity.unwrap() < 9.9e3);
    }

    #[test]
    fn evaluate_handles_optional_parameters() {
        let eos = new_eos(&SampleParams::param_periclase_bulk_only());
        let mut diag = Diagnostics::new();
        let res = eos.evaluate(10e9, 1000.0, &mut diag).unwrap();
        assert_eq!(res.shear_modulus, None);
        assert_eq!(res.eta_s, None);
        assert_eq!(res.shear_wave_velocity, None);
        assert_eq!(res.p_wave_velocity, None);
        assert!(res.bulk_sound_velocity > 0.0);

        let eos = new_eos(&SampleParams::param_mg_perovskite());
        let res = eos.evaluate(25e9, 2000.0, &mut diag).unwrap();
        let ff = res.helmholtz_free_energy.unwrap();
        approx_eq(res.gibbs_free_energy.unwrap(), ff + 25e9 * res.volume, 1e-8);
        approx_eq(
            res.enthalpy.unwrap(),
            ff + 2000.0 * res.entropy + 25e9 * res.volume,
            1e-8,
        );
    }

    #[test]
    fn evaluate_captures_errors() {
        let eos = new_eos(&SampleParams::param_periclase());
        let mut diag = Diagnostics::new();
        assert!(matches!(
            eos.evaluate(-100e9, 300.0, &mut diag),
            Err(EosError::RootFinding { .. })
        ));
        assert_eq!(
            eos.evaluate(0.0, -1.0, &mut diag).err(),
            Some(EosError::Domain("temperature must be non-negative"))
        );
    }

    #[test]
    fn evaluate_without_grueneisen_has_no_q() {
        let mut param = SampleParams::param_periclase();
        param.grueneisen_0 = Some(0.0);
        let eos = new_eos(&param);
        let mut diag = Diagnostics::new();
        let res = eos.evaluate(10e9, 1000.0, &mut diag).unwrap();
        assert_eq!(res.grueneisen_parameter, 0.0);
        assert_eq!(res.q, None);
        assert_eq!(res.thermal_expansivity, 0.0);
        approx_eq(res.heat_capacity_p, res.heat_capacity_v, 1e-15);
        let json = res.to_json().unwrap();
        assert!(json.contains("\"q\": null"));
    }

    #[test]
    fn evaluate_batch_works() {
        let eos = new_eos(&SampleParams::param_periclase());
        let states = [(0.0, 300.0), (25e9, 2000.0), (300e9, 300.0), (-100e9, 300.0), (135e9, 3500.0)];
        let batch = eos.evaluate_batch(&states);
        assert_eq!(batch.len(), states.len());
        for (i, (result, diag)) in batch.iter().enumerate() {
            let mut expected_diag = Diagnostics::new();
            let expected = eos.evaluate(states[i].0, states[i].1, &mut expected_diag);
            assert_eq!(result, &expected);
            assert_eq!(diag, &expected_diag);
        }
        assert!(batch[0].1.is_empty());
        assert_eq!(batch[2].1.len(), 1);
        assert!(batch[3].0.is_err());
    }

    #[test]
    fn json_works() {
        let eos = new_eos(&SampleParams::param_periclase_bulk_only());
        let mut diag = Diagnostics::new();
        let res = eos.evaluate(0.0, 300.0, &mut diag).unwrap();
        let json = res.to_json().unwrap();
        assert!(json.contains("\"volume\": "));
        assert!(json.contains("\"shear_modulus\": null"));

        let path = "/tmp/mgdeos/test_mineral_properties.json";
        MineralProperties::write_json(&[res.clone(), res], path).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        let values: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(values.as_array().unwrap().len(), 2);
    }
}

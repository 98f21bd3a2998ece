use super::ParamMineral;

/// Holds samples of mineral parameters
///
/// # Reference
///
/// * Stixrude L and Lithgow-Bertelloni C (2011) Thermodynamics of mantle minerals - II.
///   Phase equilibria, Geophysical Journal International, 184(3), 1180-1213,
///   <https://doi.org/10.1111/j.1365-246X.2010.04890.x>
pub struct SampleParams {}

impl SampleParams {
    /// Returns parameters for periclase, MgO (SI units)
    pub fn param_periclase() -> ParamMineral {
        ParamMineral {
            v_0: Some(11.24e-6),      // m³/mol
            k_0: Some(161.0e9),       // Pa
            kprime_0: Some(3.8),      // [-]
            g_0: Some(131.0e9),       // Pa
            gprime_0: Some(2.1),      // [-]
            molar_mass: Some(0.0403), // kg/mol
            n: Some(2.0),             // [-]
            debye_0: Some(767.0),     // K
            grueneisen_0: Some(1.36), // [-]
            q_0: Some(1.7),           // [-]
            eta_s_0: Some(2.8),       // [-]
            f_0: None,
            t_0: None,
        }
    }

    /// Returns parameters for stishovite, SiO₂ (SI units)
    pub fn param_stishovite() -> ParamMineral {
        ParamMineral {
            v_0: Some(14.02e-6),
            k_0: Some(314.0e9),
            kprime_0: Some(3.8),
            g_0: Some(220.0e9),
            gprime_0: Some(1.9),
            molar_mass: Some(0.0601),
            n: Some(3.0),
            debye_0: Some(1108.0),
            grueneisen_0: Some(1.37),
            q_0: Some(2.8),
            eta_s_0: Some(4.6),
            f_0: None,
            t_0: None,
        }
    }

    /// Returns parameters for wüstite, FeO (SI units)
    pub fn param_wuestite() -> ParamMineral {
        ParamMineral {
            v_0: Some(12.26e-6),
            k_0: Some(179.0e9),
            kprime_0: Some(4.9),
            g_0: Some(59.0e9),
            gprime_0: Some(1.4),
            molar_mass: Some(0.0718),
            n: Some(2.0),
            debye_0: Some(454.0),
            grueneisen_0: Some(1.53),
            q_0: Some(1.7),
            eta_s_0: Some(-0.1),
            f_0: None,
            t_0: None,
        }
    }

    /// Returns parameters for MgSiO₃ bridgmanite (perovskite) with a reference free energy
    pub fn param_mg_perovskite() -> ParamMineral {
        ParamMineral {
            v_0: Some(24.45e-6),
            k_0: Some(251.0e9),
            kprime_0: Some(4.1),
            g_0: Some(173.0e9),
            gprime_0: Some(1.7),
            molar_mass: Some(0.1000),
            n: Some(5.0),
            debye_0: Some(905.0),
            grueneisen_0: Some(1.57),
            q_0: Some(1.1),
            eta_s_0: Some(2.6),
            f_0: Some(-1368.0e3), // J/mol
            t_0: None,
        }
    }

    /// Returns periclase parameters without the optional shear and free-energy data
    pub fn param_periclase_bulk_only() -> ParamMineral {
        ParamMineral {
            g_0: None,
            gprime_0: None,
            eta_s_0: None,
            ..SampleParams::param_periclase()
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

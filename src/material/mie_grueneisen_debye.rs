use super::debye::{calc_entropy, calc_heat_capacity_v, calc_helmholtz_free_energy, calc_thermal_energy};
use super::{birch_murnaghan, solve_volume, validate_parameters, MineralParams};
use crate::base::{Diagnostics, EosError, ParamMineral, ShearOrder};

/// Implements the Mie-Grüneisen-Debye finite-strain equation of state
///
/// The Helmholtz energy is the sum of a third-order Birch-Murnaghan cold part and a
/// Debye quasi-harmonic thermal part. The Debye temperature depends on volume through
/// a finite-strain expansion of the vibrational frequencies; the thermal parts are
/// always taken relative to the reference temperature T₀.
///
/// Units are SI: Pa, K, m³/mol, J/mol, kg/mol.
///
/// # Reference
///
/// * Stixrude L and Lithgow-Bertelloni C (2005) Thermodynamics of mantle minerals - I.
///   Physical properties, Geophysical Journal International, 162(2), 610-632,
///   <https://doi.org/10.1111/j.1365-246X.2005.02642.x>
#[derive(Clone, Debug)]
pub struct MieGrueneisenDebye {
    params: MineralParams,
    order: ShearOrder,
}

impl MieGrueneisenDebye {
    /// Allocates a new instance
    ///
    /// The parameters are validated first; plausibility warnings go to `diagnostics`.
    pub fn new(param: &ParamMineral, order: ShearOrder, diagnostics: &mut Diagnostics) -> Result<Self, EosError> {
        let params = validate_parameters(param, diagnostics)?;
        Ok(MieGrueneisenDebye { params, order })
    }

    /// Returns the validated parameters
    pub fn params(&self) -> &MineralParams {
        &self.params
    }

    /// Returns the truncation order of the shear modulus
    pub fn order(&self) -> ShearOrder {
        self.order
    }

    /// Returns the coefficient a₁ = 6γ₀ of the frequency expansion
    fn a1_ii(&self) -> f64 {
        6.0 * self.params.grueneisen_0
    }

    /// Returns the coefficient a₂ = -12γ₀ + 36γ₀² - 18q₀γ₀ of the frequency expansion
    fn a2_iikk(&self) -> f64 {
        let g0 = self.params.grueneisen_0;
        -12.0 * g0 + 36.0 * g0 * g0 - 18.0 * self.params.q_0 * g0
    }

    /// Returns (x, f, ν²) where x = V₀/V, f is the finite strain, and ν² = (ν/ν₀)²
    fn strain(&self, volume: f64) -> (f64, f64, f64) {
        let x = self.params.v_0 / volume;
        let f = birch_murnaghan::finite_strain(x);
        let nu_o_nu0_sq = 1.0 + self.a1_ii() * f + 0.5 * self.a2_iikk() * f * f;
        (x, f, nu_o_nu0_sq)
    }

    /// Checks the parameters entering the Debye model
    ///
    /// Validation only warns about these values; evaluation cannot proceed with them.
    fn check_parameters(&self) -> Result<(), EosError> {
        if !(self.params.n >= 0.0) {
            return Err(EosError::Domain("number of atoms must be non-negative"));
        }
        if !(self.params.debye_0 >= 0.0) {
            return Err(EosError::Domain("Debye temperature must be non-negative"));
        }
        Ok(())
    }

    /// Checks the volume given to a property
    fn check_volume(&self, volume: f64) -> Result<(), EosError> {
        if !(volume > 0.0) {
            return Err(EosError::Domain("volume must be positive"));
        }
        self.check_parameters()?;
        let (_, _, nu_o_nu0_sq) = self.strain(volume);
        if !(nu_o_nu0_sq > 0.0) {
            return Err(EosError::Domain(
                "volume outside the range where the Debye temperature is defined",
            ));
        }
        Ok(())
    }

    /// Checks the temperature and volume given to a property
    fn check_state(&self, temperature: f64, volume: f64) -> Result<(), EosError> {
        if !(temperature >= 0.0) {
            return Err(EosError::Domain("temperature must be non-negative"));
        }
        self.check_volume(volume)
    }

    fn calc_grueneisen(&self, f: f64, nu_o_nu0_sq: f64) -> f64 {
        (2.0 * f + 1.0) * (self.a1_ii() + self.a2_iikk() * f) / (6.0 * nu_o_nu0_sq)
    }

    /// Calculates the product qγ, which stays finite where γ vanishes
    fn calc_q_grueneisen(&self, f: f64, nu_o_nu0_sq: f64, gr: f64) -> f64 {
        let one_2f = 2.0 * f + 1.0;
        (18.0 * gr * gr - 6.0 * gr - 0.5 / nu_o_nu0_sq * one_2f * one_2f * self.a2_iikk()) / 9.0
    }

    fn calc_debye_temperature(&self, volume: f64) -> f64 {
        let (_, _, nu_o_nu0_sq) = self.strain(volume);
        self.params.debye_0 * f64::sqrt(nu_o_nu0_sq)
    }

    /// Calculates the Debye temperature Θ = Θ₀ √ν² (K)
    pub fn debye_temperature(&self, volume: f64) -> Result<f64, EosError> {
        self.check_volume(volume)?;
        Ok(self.calc_debye_temperature(volume))
    }

    /// Calculates the Grüneisen parameter γ = (2f + 1)(a₁ + a₂f)/(6ν²)
    ///
    /// Only the volume matters; pressure and temperature are accepted for symmetry with
    /// the other properties.
    pub fn grueneisen_parameter(&self, _pressure: f64, _temperature: f64, volume: f64) -> Result<f64, EosError> {
        self.check_volume(volume)?;
        let (_, f, nu_o_nu0_sq) = self.strain(volume);
        Ok(self.calc_grueneisen(f, nu_o_nu0_sq))
    }

    /// Calculates q = dlnγ/dlnV at the given volume
    ///
    /// q is undefined where γ = 0 (e.g., with γ₀ = 0); a `Domain` error is returned there.
    pub fn volume_dependent_q(&self, volume: f64) -> Result<f64, EosError> {
        self.check_volume(volume)?;
        let (_, f, nu_o_nu0_sq) = self.strain(volume);
        let gr = self.calc_grueneisen(f, nu_o_nu0_sq);
        if gr == 0.0 {
            return Err(EosError::Domain("q is undefined where the Grüneisen parameter vanishes"));
        }
        Ok(self.calc_q_grueneisen(f, nu_o_nu0_sq, gr) / gr)
    }

    /// Calculates the shear strain derivative of the Grüneisen parameter ηₛ
    pub fn isotropic_eta_s(&self, volume: f64) -> Result<f64, EosError> {
        self.check_volume(volume)?;
        let eta_s_0 = self.require(self.params.eta_s_0, "isotropic_eta_s", "eta_s_0")?;
        Ok(self.calc_eta_s(volume, eta_s_0))
    }

    fn calc_eta_s(&self, volume: f64, eta_s_0: f64) -> f64 {
        let (_, f, nu_o_nu0_sq) = self.strain(volume);
        let gr = self.calc_grueneisen(f, nu_o_nu0_sq);
        let a2_s = -2.0 * self.params.grueneisen_0 - 2.0 * eta_s_0;
        let one_2f = 2.0 * f + 1.0;
        -gr - 0.5 / nu_o_nu0_sq * one_2f * one_2f * a2_s
    }

    /// Returns the value of an optional parameter needed by a property
    fn require(&self, value: Option<f64>, property: &'static str, parameter: &'static str) -> Result<f64, EosError> {
        value.ok_or(EosError::UnsupportedProperty { property, parameter })
    }

    /// Calculates the thermal energy difference E(T, Θ) - E(T₀, Θ)
    fn thermal_energy_change(&self, temperature: f64, debye_temperature: f64) -> f64 {
        let n = self.params.n;
        calc_thermal_energy(temperature, debye_temperature, n)
            - calc_thermal_energy(self.params.t_0, debye_temperature, n)
    }

    /// Calculates the pressure without checking the arguments
    pub(crate) fn calc_pressure(&self, temperature: f64, volume: f64) -> f64 {
        let (x, f, nu_o_nu0_sq) = self.strain(volume);
        let debye_t = self.params.debye_0 * f64::sqrt(nu_o_nu0_sq);
        let gr = self.calc_grueneisen(f, nu_o_nu0_sq);
        let p_cold = birch_murnaghan::pressure(x, self.params.k_0, self.params.kprime_0);
        p_cold + gr * self.thermal_energy_change(temperature, debye_t) / volume
    }

    /// Calculates the pressure P(T, V) (Pa)
    pub fn pressure(&self, temperature: f64, volume: f64) -> Result<f64, EosError> {
        self.check_state(temperature, volume)?;
        Ok(self.calc_pressure(temperature, volume))
    }

    /// Finds the volume V(P, T) (m³/mol)
    ///
    /// See [solve_volume] for the algorithm; fallback notes go to `diagnostics`.
    pub fn volume(&self, pressure: f64, temperature: f64, diagnostics: &mut Diagnostics) -> Result<f64, EosError> {
        if !pressure.is_finite() {
            return Err(EosError::Domain("pressure must be finite"));
        }
        if !(temperature >= 0.0) {
            return Err(EosError::Domain("temperature must be non-negative"));
        }
        self.check_parameters()?;
        solve_volume(self.params.v_0, pressure, temperature, diagnostics, |v| {
            self.calc_pressure(temperature, v)
        })
    }

    /// Calculates the isothermal bulk modulus K_T = -V (∂P/∂V)_T (Pa)
    pub fn isothermal_bulk_modulus(&self, _pressure: f64, temperature: f64, volume: f64) -> Result<f64, EosError> {
        self.check_state(temperature, volume)?;
        Ok(self.calc_isothermal_bulk_modulus(temperature, volume))
    }

    fn calc_isothermal_bulk_modulus(&self, temperature: f64, volume: f64) -> f64 {
        let (x, f, nu_o_nu0_sq) = self.strain(volume);
        let debye_t = self.params.debye_0 * f64::sqrt(nu_o_nu0_sq);
        let gr = self.calc_grueneisen(f, nu_o_nu0_sq);
        let n = self.params.n;
        let t_0 = self.params.t_0;
        let de = self.thermal_energy_change(temperature, debye_t);
        let cv = calc_heat_capacity_v(temperature, debye_t, n);
        let cv_ref = calc_heat_capacity_v(t_0, debye_t, n);
        let q_gr = self.calc_q_grueneisen(f, nu_o_nu0_sq, gr);
        birch_murnaghan::bulk_modulus(x, self.params.k_0, self.params.kprime_0)
            + (gr * gr + gr - q_gr) * de / volume
            - gr * gr / volume * (cv * temperature - cv_ref * t_0)
    }

    /// Calculates the adiabatic bulk modulus K_S = K_T (1 + γαT) (Pa)
    pub fn adiabatic_bulk_modulus(&self, _pressure: f64, temperature: f64, volume: f64) -> Result<f64, EosError> {
        self.check_state(temperature, volume)?;
        let k_t = self.calc_isothermal_bulk_modulus(temperature, volume);
        Ok(k_t * (1.0 + self.calc_gamma_alpha_t(temperature, volume, k_t)))
    }

    /// Calculates the shear modulus (Pa)
    ///
    /// Requires `G_0`, `Gprime_0`, and `eta_s_0`. The cold part is truncated at the
    /// order given to [MieGrueneisenDebye::new].
    pub fn shear_modulus(&self, _pressure: f64, temperature: f64, volume: f64) -> Result<f64, EosError> {
        self.check_state(temperature, volume)?;
        let g_0 = self.require(self.params.g_0, "shear_modulus", "G_0")?;
        let gprime_0 = self.require(self.params.gprime_0, "shear_modulus", "Gprime_0")?;
        let eta_s_0 = self.require(self.params.eta_s_0, "shear_modulus", "eta_s_0")?;
        let (x, _, _) = self.strain(volume);
        let k_0 = self.params.k_0;
        let g_cold = match self.order {
            ShearOrder::Second => birch_murnaghan::shear_modulus_second_order(x, k_0, g_0, gprime_0),
            ShearOrder::Third => {
                birch_murnaghan::shear_modulus_third_order(x, k_0, self.params.kprime_0, g_0, gprime_0)
            }
        };
        let eta_s = self.calc_eta_s(volume, eta_s_0);
        let de = self.thermal_energy_change(temperature, self.calc_debye_temperature(volume));
        Ok(g_cold - eta_s * de / volume)
    }

    /// Calculates the isochoric heat capacity C_v (J/K/mol)
    pub fn heat_capacity_v(&self, _pressure: f64, temperature: f64, volume: f64) -> Result<f64, EosError> {
        self.check_state(temperature, volume)?;
        Ok(calc_heat_capacity_v(temperature, self.calc_debye_temperature(volume), self.params.n))
    }

    /// Calculates the isobaric heat capacity C_p = C_v (1 + γαT) (J/K/mol)
    pub fn heat_capacity_p(&self, _pressure: f64, temperature: f64, volume: f64) -> Result<f64, EosError> {
        self.check_state(temperature, volume)?;
        let k_t = self.calc_isothermal_bulk_modulus(temperature, volume);
        let cv = calc_heat_capacity_v(temperature, self.calc_debye_temperature(volume), self.params.n);
        Ok(cv * (1.0 + self.calc_gamma_alpha_t(temperature, volume, k_t)))
    }

    /// Calculates the thermal expansivity α = γ C_v / (K_T V) (1/K)
    pub fn thermal_expansivity(&self, _pressure: f64, temperature: f64, volume: f64) -> Result<f64, EosError> {
        self.check_state(temperature, volume)?;
        let k_t = self.calc_isothermal_bulk_modulus(temperature, volume);
        Ok(self.calc_alpha(temperature, volume, k_t))
    }

    fn calc_alpha(&self, temperature: f64, volume: f64, k_t: f64) -> f64 {
        let (_, f, nu_o_nu0_sq) = self.strain(volume);
        let gr = self.calc_grueneisen(f, nu_o_nu0_sq);
        let cv = calc_heat_capacity_v(temperature, self.calc_debye_temperature(volume), self.params.n);
        gr * cv / (k_t * volume)
    }

    /// Calculates γαT, the factor relating the adiabatic and isothermal quantities
    fn calc_gamma_alpha_t(&self, temperature: f64, volume: f64, k_t: f64) -> f64 {
        let (_, f, nu_o_nu0_sq) = self.strain(volume);
        let gr = self.calc_grueneisen(f, nu_o_nu0_sq);
        gr * self.calc_alpha(temperature, volume, k_t) * temperature
    }

    /// Calculates the Helmholtz free energy F (J/mol); requires `F_0`
    pub fn helmholtz_free_energy(&self, _pressure: f64, temperature: f64, volume: f64) -> Result<f64, EosError> {
        self.check_state(temperature, volume)?;
        let f_0 = self.require(self.params.f_0, "helmholtz_free_energy", "F_0")?;
        Ok(self.calc_helmholtz(f_0, temperature, volume))
    }

    fn calc_helmholtz(&self, f_0: f64, temperature: f64, volume: f64) -> f64 {
        let p = &self.params;
        let (x, _, _) = self.strain(volume);
        let debye_t = self.calc_debye_temperature(volume);
        let f_quasiharmonic = calc_helmholtz_free_energy(temperature, debye_t, p.n)
            - calc_helmholtz_free_energy(p.t_0, debye_t, p.n);
        f_0 + birch_murnaghan::strain_energy(x, p.v_0, p.k_0, p.kprime_0) + f_quasiharmonic
    }

    /// Calculates the Gibbs free energy G = F + PV (J/mol); requires `F_0`
    pub fn gibbs_free_energy(&self, pressure: f64, temperature: f64, volume: f64) -> Result<f64, EosError> {
        self.check_state(temperature, volume)?;
        let f_0 = self.require(self.params.f_0, "gibbs_free_energy", "F_0")?;
        Ok(self.calc_helmholtz(f_0, temperature, volume) + pressure * volume)
    }

    /// Calculates the entropy S (J/K/mol)
    pub fn entropy(&self, _pressure: f64, temperature: f64, volume: f64) -> Result<f64, EosError> {
        self.check_state(temperature, volume)?;
        Ok(calc_entropy(temperature, self.calc_debye_temperature(volume), self.params.n))
    }

    /// Calculates the enthalpy H = F + TS + PV (J/mol); requires `F_0`
    ///
    /// F and S are evaluated at the given volume; the PV term uses the volume solved
    /// from (P, T).
    pub fn enthalpy(
        &self,
        pressure: f64,
        temperature: f64,
        volume: f64,
        diagnostics: &mut Diagnostics,
    ) -> Result<f64, EosError> {
        self.check_state(temperature, volume)?;
        let f_0 = self.require(self.params.f_0, "enthalpy", "F_0")?;
        let v_solved = self.volume(pressure, temperature, diagnostics)?;
        let ff = self.calc_helmholtz(f_0, temperature, volume);
        let ss = calc_entropy(temperature, self.calc_debye_temperature(volume), self.params.n);
        Ok(ff + temperature * ss + pressure * v_solved)
    }

    /// Calculates the density ρ = M/V (kg/m³)
    pub fn density(&self, volume: f64) -> Result<f64, EosError> {
        if !(volume > 0.0) {
            return Err(EosError::Domain("volume must be positive"));
        }
        Ok(self.params.molar_mass / volume)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

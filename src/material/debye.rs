//! Debye model of the lattice vibrations
//!
//! All functions take the temperature `T` (K), the Debye temperature `Θ` (K), and the
//! number of atoms per formula unit `n`, and return molar quantities in SI units.
//! The zero-point energy is not included; hence, every quantity vanishes at T = 0.

use crate::base::{EosError, GAS_CONSTANT};

/// Chebyshev coefficients of D₃(x) + 3x/8 on 0 ≤ x ≤ 4 (with t = x²/8 - 1)
const CHEBYSHEV_D3: [f64; 17] = [
    2.707737068327440945,
    0.340068135211091751,
    -0.12945150184440869e-01,
    0.7963755380173816e-03,
    -0.546360009590824e-04,
    0.39243019598805e-05,
    -0.2894032823539e-06,
    0.217317613962e-07,
    -0.16542099950e-08,
    0.1272796189e-09,
    -0.987963460e-11,
    0.7725074e-12,
    -0.607797e-13,
    0.48076e-14,
    -0.3820e-15,
    0.305e-16,
    -0.24e-17,
];

/// Number of Chebyshev terms actually used (the tail is below machine precision)
const CHEBYSHEV_ORDER: usize = 16;

/// Holds π⁴/5, the limit of x³ D₃(x) as x → ∞
const VAL_INFINITY: f64 = 19.4818182068004875;

/// Below this x the series 1 - 3x/8 + x²/20 is exact to machine precision
const X_SMALL: f64 = 2.0 * 1.4901161193847656e-8;

/// Below this x the exponential series needs more than a few terms
const X_SERIES: f64 = 35.35050620855721; // -(ln 2 + ln ε)

/// Above this x the exponential terms underflow
const X_CUT: f64 = 708.3964185322641; // -ln(f64::MIN_POSITIVE)

/// Evaluates a Chebyshev series at t ∈ [-1, 1] by Clenshaw's recurrence
fn chebyshev_eval(coefficients: &[f64], order: usize, t: f64) -> f64 {
    let t2 = 2.0 * t;
    let mut d = 0.0;
    let mut dd = 0.0;
    for j in (1..=order).rev() {
        let temp = d;
        d = t2 * d - dd + coefficients[j];
        dd = temp;
    }
    t * d - dd + 0.5 * coefficients[0]
}

/// Evaluates the Debye function of order three
///
/// ```text
///            3   x   t³
/// D₃(x) = ─── ∫  ────── dt
///          x³  0  eᵗ - 1
/// ```
///
/// The argument must be non-negative.
pub fn debye_fn_cheb(x: f64) -> f64 {
    if x < X_SMALL {
        1.0 - 3.0 * x / 8.0 + x * x / 20.0
    } else if x <= 4.0 {
        let t = x * x / 8.0 - 1.0;
        chebyshev_eval(&CHEBYSHEV_D3, CHEBYSHEV_ORDER, t) - 0.375 * x
    } else if x < X_SERIES {
        let nexp = f64::floor(X_CUT / x) as usize;
        let ex = f64::exp(-x);
        let mut xk = nexp as f64 * x;
        let mut rk = nexp as f64;
        let mut sum = 0.0;
        for _ in 0..nexp {
            let xk_inv = 1.0 / xk;
            sum *= ex;
            sum += (((6.0 * xk_inv + 6.0) * xk_inv + 3.0) * xk_inv + 1.0) / rk;
            rk -= 1.0;
            xk -= x;
        }
        VAL_INFINITY / (x * x * x) - 3.0 * sum * ex
    } else if x < X_CUT {
        let x3 = x * x * x;
        let sum = 6.0 + 6.0 * x + 3.0 * x * x + x3;
        (VAL_INFINITY - 3.0 * sum * f64::exp(-x)) / x3
    } else {
        ((VAL_INFINITY / x) / x) / x
    }
}

/// Checks the common arguments of the public functions
fn check_arguments(temperature: f64, debye_temperature: f64, n: f64) -> Result<(), EosError> {
    if !(temperature >= 0.0) {
        return Err(EosError::Domain("temperature must be non-negative"));
    }
    if !(debye_temperature >= 0.0) {
        return Err(EosError::Domain("Debye temperature must be non-negative"));
    }
    if !(n >= 0.0) {
        return Err(EosError::Domain("number of atoms must be non-negative"));
    }
    Ok(())
}

/// Calculates the thermal energy E = 3nRT D₃(Θ/T) without checking the arguments
pub(crate) fn calc_thermal_energy(temperature: f64, debye_temperature: f64, n: f64) -> f64 {
    if temperature <= 0.0 {
        return 0.0;
    }
    let x = debye_temperature / temperature;
    3.0 * n * GAS_CONSTANT * temperature * debye_fn_cheb(x)
}

/// Calculates the heat capacity Cv = 3nR (4 D₃(x) - 3x/(eˣ - 1)) without checking the arguments
pub(crate) fn calc_heat_capacity_v(temperature: f64, debye_temperature: f64, n: f64) -> f64 {
    if temperature <= 0.0 {
        return 0.0;
    }
    let x = debye_temperature / temperature;
    let boltzmann = if x == 0.0 { 1.0 } else { x / f64::exp_m1(x) };
    3.0 * n * GAS_CONSTANT * (4.0 * debye_fn_cheb(x) - 3.0 * boltzmann)
}

/// Calculates the Helmholtz free energy F = nRT (3 ln(1 - e⁻ˣ) - D₃(x)) without checking the arguments
pub(crate) fn calc_helmholtz_free_energy(temperature: f64, debye_temperature: f64, n: f64) -> f64 {
    if temperature <= 0.0 {
        return 0.0;
    }
    let x = debye_temperature / temperature;
    n * GAS_CONSTANT * temperature * (3.0 * ln_one_minus_exp(x) - debye_fn_cheb(x))
}

/// Calculates the entropy S = nR (4 D₃(x) - 3 ln(1 - e⁻ˣ)) without checking the arguments
pub(crate) fn calc_entropy(temperature: f64, debye_temperature: f64, n: f64) -> f64 {
    if temperature <= 0.0 {
        return 0.0;
    }
    let x = debye_temperature / temperature;
    n * GAS_CONSTANT * (4.0 * debye_fn_cheb(x) - 3.0 * ln_one_minus_exp(x))
}

/// Returns ln(1 - e⁻ˣ); -∞ at x = 0
fn ln_one_minus_exp(x: f64) -> f64 {
    f64::ln_1p(-f64::exp(-x))
}

/// Calculates the vibrational (thermal) energy (J/mol)
///
/// ```text
/// E = 9nRT (T/Θ)³ ∫₀^(Θ/T) t³/(eᵗ - 1) dt
/// ```
///
/// Returns zero at T = 0.
pub fn thermal_energy(temperature: f64, debye_temperature: f64, n: f64) -> Result<f64, EosError> {
    check_arguments(temperature, debye_temperature, n)?;
    Ok(calc_thermal_energy(temperature, debye_temperature, n))
}

/// Calculates the isochoric heat capacity (J/K/mol)
///
/// ```text
///        9nR     x   t⁴ eᵗ
/// Cv = ─────── ∫   ───────── dt    with x = Θ/T
///        x³     0  (eᵗ - 1)²
/// ```
///
/// Returns zero at T = 0 and the Dulong-Petit value 3nR at Θ = 0.
pub fn heat_capacity_v(temperature: f64, debye_temperature: f64, n: f64) -> Result<f64, EosError> {
    check_arguments(temperature, debye_temperature, n)?;
    Ok(calc_heat_capacity_v(temperature, debye_temperature, n))
}

/// Calculates the vibrational Helmholtz free energy (J/mol)
///
/// Equals E - T S. Returns zero at T = 0 and -∞ at Θ = 0 (classical limit).
pub fn helmholtz_free_energy(temperature: f64, debye_temperature: f64, n: f64) -> Result<f64, EosError> {
    check_arguments(temperature, debye_temperature, n)?;
    Ok(calc_helmholtz_free_energy(temperature, debye_temperature, n))
}

/// Calculates the vibrational entropy (J/K/mol)
///
/// Equals 4E/(3T) - 3nR ln(1 - e^(-Θ/T)). Returns zero at T = 0 and +∞ at Θ = 0.
pub fn entropy(temperature: f64, debye_temperature: f64, n: f64) -> Result<f64, EosError> {
    check_arguments(temperature, debye_temperature, n)?;
    Ok(calc_entropy(temperature, debye_temperature, n))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use crate::base::{Diagnostics, EosError, BRACKET_LOWER_FACTOR, BRACKET_UPPER_FACTOR};
use crate::base::{FALLBACK_INITIAL_STEP, FALLBACK_MAX_EXPANSIONS, FALLBACK_TOLERANCE};
use crate::StrError;
use russell_lab::{MinBracketing, MinSolver, RootFinder};

/// Holds the growth factor of the downhill steps (golden ratio)
const GOLDEN: f64 = 1.618033988749895;

/// Holds the smallest normalized volume searched by the minimization
const SMALLEST_NORMALIZED_VOLUME: f64 = 1e-3;

/// Holds the relative perturbation giving the second point of the first secant step
const POLISH_PERTURBATION: f64 = 1e-7;

/// Holds the maximum number of secant steps when polishing a root
const POLISH_MAX_ITERATIONS: usize = 20;

/// Finds the volume at which the equation of state returns the given pressure
///
/// The unknown is the normalized volume s = V/V₀, so the tolerances of the numerical
/// routines do not depend on the magnitude of V₀.
///
/// 1. If the pressure residual changes sign in `[0.6 V₀, 1.2 V₀]`, Brent's method
///    finds the root inside this bracket.
/// 2. Otherwise, the squared residual is minimized starting at V₀ (downhill
///    bracketing followed by Brent's minimization). The result is accepted if the
///    squared residual is below `FALLBACK_TOLERANCE` (Pa²); a warning is pushed if it
///    exceeds half of it.
///
/// In both cases the estimate is polished with secant steps that never increase the residual.
///
/// # Input
///
/// * `v_0` -- reference volume
/// * `pressure` -- target pressure
/// * `temperature` -- temperature (only used in messages)
/// * `diagnostics` -- receives non-fatal messages
/// * `eos_pressure` -- function returning the pressure at a given volume
pub fn solve_volume<F>(
    v_0: f64,
    pressure: f64,
    temperature: f64,
    diagnostics: &mut Diagnostics,
    eos_pressure: F,
) -> Result<f64, EosError>
where
    F: Fn(f64) -> f64,
{
    let failure = |reason: String| EosError::RootFinding {
        pressure,
        temperature,
        reason,
    };
    let residual = |s: f64| -> Result<f64, StrError> {
        let r = eos_pressure(s * v_0) - pressure;
        if r.is_finite() {
            Ok(r)
        } else {
            Err("pressure is undefined at the trial volume")
        }
    };

    // bracketing root finder
    let (sa, sb) = (BRACKET_LOWER_FACTOR, BRACKET_UPPER_FACTOR);
    if let (Ok(ra), Ok(rb)) = (residual(sa), residual(sb)) {
        let root = if ra == 0.0 {
            Some(sa)
        } else if rb == 0.0 {
            Some(sb)
        } else if ra * rb < 0.0 {
            let solver = RootFinder::new();
            let (s, _) = solver
                .brent(sa, sb, &mut 0, |s, _| residual(s))
                .map_err(|e| failure(format!("Brent's method failed: {}", e)))?;
            Some(s)
        } else {
            None
        };
        if let Some(s) = root {
            return Ok(polish(s, &residual) * v_0);
        }
    }

    // fallback: minimize the squared residual starting at V₀
    let objective = |s: f64| -> Result<f64, StrError> {
        if s <= 0.0 {
            return Ok(f64::MAX);
        }
        let r = residual(s)?;
        Ok(r * r)
    };
    let mut bracketing = MinBracketing::new();
    bracketing.initial_step = FALLBACK_INITIAL_STEP;
    bracketing.expansion_factor = GOLDEN;
    bracketing.n_iteration_max = FALLBACK_MAX_EXPANSIONS;
    let (bracket, _) = bracketing.basic(1.0, &mut 0, |s, _| objective(s)).map_err(|e| {
        failure(format!(
            "no sign change in [{:e}, {:e}] and the minimization failed: {}",
            sa * v_0,
            sb * v_0,
            e
        ))
    })?;
    let lo = f64::max(bracket.a, SMALLEST_NORMALIZED_VOLUME);
    let hi = bracket.b;
    let minimizer = MinSolver::new();
    let (s_min, _) = minimizer
        .brent(lo, hi, &mut 0, |s, _| objective(s))
        .map_err(|e| failure(format!("Brent's minimization failed: {}", e)))?;
    let s = polish(s_min, &residual);
    let value = objective(s).map_err(|e| failure(e.to_string()))?;

    // check
    if value > FALLBACK_TOLERANCE {
        return Err(failure(format!(
            "the squared residual {:e} Pa² exceeds {:e} Pa²; likely outside the range of validity for the EOS",
            value, FALLBACK_TOLERANCE
        )));
    }
    let volume = s * v_0;
    if value > 0.5 * FALLBACK_TOLERANCE {
        diagnostics.warn(
            "volume",
            format!(
                "May be outside the range of validity for the EOS: V = {:e} has squared residual {:e} Pa²",
                volume, value
            ),
        );
    } else {
        diagnostics.info(
            "volume",
            format!(
                "V = {:e} found by minimization outside the bracket [{:e}, {:e}]",
                volume,
                sa * v_0,
                sb * v_0
            ),
        );
    }
    Ok(volume)
}

/// Refines a root estimate with secant steps, accepting only steps that reduce |r|
fn polish<F>(s_guess: f64, residual: &F) -> f64
where
    F: Fn(f64) -> Result<f64, StrError>,
{
    let mut s = s_guess;
    let mut r = match residual(s) {
        Ok(r) => r,
        Err(_) => return s,
    };
    let mut s_prev = s * (1.0 + POLISH_PERTURBATION);
    let mut r_prev = match residual(s_prev) {
        Ok(r) => r,
        Err(_) => return s,
    };
    for _ in 0..POLISH_MAX_ITERATIONS {
        if r == 0.0 || r == r_prev {
            break;
        }
        let s_new = s - r * (s - s_prev) / (r - r_prev);
        if !(s_new > 0.0) {
            break;
        }
        match residual(s_new) {
            Ok(r_new) if f64::abs(r_new) < f64::abs(r) => {
                s_prev = s;
                r_prev = r;
                s = s_new;
                r = r_new;
            }
            _ => break,
        }
    }
    s
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

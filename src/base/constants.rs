/// Defines the molar gas constant R in J/(K mol) (CODATA 2018)
pub const GAS_CONSTANT: f64 = 8.31446261815324;

/// Defines the reference temperature (K) used when a parameter set does not specify `T_0`
pub const DEFAULT_REFERENCE_TEMPERATURE: f64 = 300.0;

/// Defines the lower end of the volume bracket as a fraction of V₀
pub const BRACKET_LOWER_FACTOR: f64 = 0.6;

/// Defines the upper end of the volume bracket as a fraction of V₀
pub const BRACKET_UPPER_FACTOR: f64 = 1.2;

/// Defines the maximum squared pressure residual (Pa²) accepted from the fallback minimization
pub const FALLBACK_TOLERANCE: f64 = 1e-4;

/// Defines the first downhill step of the fallback minimization as a fraction of V₀
pub const FALLBACK_INITIAL_STEP: f64 = 0.05;

/// Defines the maximum number of steps when expanding the fallback bracket
pub const FALLBACK_MAX_EXPANSIONS: usize = 60;

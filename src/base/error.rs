use crate::StrError;

/// Errors arising while validating parameters or evaluating the equation of state
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EosError {
    /// A required parameter is absent from the parameter set
    #[error("params object missing parameter: {0}")]
    MissingParameter(&'static str),

    /// The property needs an optional parameter that is undefined
    #[error("{property} requires parameter {parameter}, which is undefined")]
    UnsupportedProperty {
        property: &'static str,
        parameter: &'static str,
    },

    /// The implicit volume solve failed
    #[error("cannot find volume at P = {pressure} Pa and T = {temperature} K: {reason}")]
    RootFinding {
        pressure: f64,
        temperature: f64,
        reason: String,
    },

    /// An argument lies outside the domain of the function
    #[error("invalid input: {0}")]
    Domain(&'static str),

    /// The parameter mapping cannot be interpreted
    #[error("cannot parse parameter set: {0}")]
    Parse(String),

    /// A numerical routine failed
    #[error("numerical routine failed: {0}")]
    Numerical(StrError),
}

impl From<StrError> for EosError {
    fn from(err: StrError) -> Self {
        EosError::Numerical(err)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

//! Implements the base structures for evaluating a mineral equation of state

mod constants;
mod diagnostics;
mod error;
mod parameters;
mod sample_params;
pub use crate::base::constants::*;
pub use crate::base::diagnostics::*;
pub use crate::base::error::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;

//! Makes available common structures needed to evaluate a mineral
//!
//! You may write `use mgdeos::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Diagnostic, Diagnostics, EosError, ParamMineral, SampleParams, Severity, ShearOrder};
pub use crate::base::{DEFAULT_REFERENCE_TEMPERATURE, GAS_CONSTANT};
pub use crate::material::{MieGrueneisenDebye, MineralParams, MineralProperties};

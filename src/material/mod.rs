//! Implements the Mie-Grüneisen-Debye equation of state and its building blocks

pub mod birch_murnaghan;
pub mod debye;
mod mie_grueneisen_debye;
mod mineral_properties;
mod validation;
mod volume_solver;
pub use crate::material::mie_grueneisen_debye::*;
pub use crate::material::mineral_properties::*;
pub use crate::material::validation::*;
pub use crate::material::volume_solver::*;

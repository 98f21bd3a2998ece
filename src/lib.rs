//! Mie-Grüneisen-Debye finite-strain equation of state for mantle minerals
//!
//! Computes volume, pressure, elastic moduli, heat capacities, thermal expansivity,
//! and free energies of a single crystalline phase from the third-order
//! Birch-Murnaghan cold compression curve plus a Debye lattice-vibration correction.
//!
//! # Reference
//!
//! * Stixrude L and Lithgow-Bertelloni C (2005) Thermodynamics of mantle minerals - I.
//!   Physical properties, Geophysical Journal International, 162(2), 610-632,
//!   <https://doi.org/10.1111/j.1365-246X.2005.02642.x>

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;

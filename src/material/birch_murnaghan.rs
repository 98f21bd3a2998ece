//! Third-order Birch-Murnaghan (cold, athermal) finite-strain relations
//!
//! All functions take the compression x = V₀/V. The Eulerian finite strain is
//! f = ½(x^(2/3) - 1), positive under compression.

/// Calculates the Eulerian finite strain f = ½(x^(2/3) - 1)
pub fn finite_strain(x: f64) -> f64 {
    0.5 * (f64::powf(x, 2.0 / 3.0) - 1.0)
}

/// Calculates the cold pressure (Pa)
///
/// ```text
/// P = 3K₀ f (1 + 2f)^(5/2) (1 + 3/2 (K₀′ - 4) f)
/// ```
pub fn pressure(x: f64, k_0: f64, kprime_0: f64) -> f64 {
    let f = finite_strain(x);
    let b_iikk = 9.0 * k_0;
    let b_iikkmm = 27.0 * k_0 * (kprime_0 - 4.0);
    (1.0 / 3.0) * f64::powf(1.0 + 2.0 * f, 2.5) * (b_iikk * f + 0.5 * b_iikkmm * f * f)
}

/// Calculates the cold isothermal bulk modulus K = -V dP/dV (Pa)
pub fn bulk_modulus(x: f64, k_0: f64, kprime_0: f64) -> f64 {
    let f = finite_strain(x);
    f64::powf(1.0 + 2.0 * f, 2.5)
        * (k_0 + (3.0 * k_0 * kprime_0 - 5.0 * k_0) * f + 13.5 * (k_0 * kprime_0 - 4.0 * k_0) * f * f)
}

/// Calculates the cold shear modulus truncated at second order in strain (Pa)
pub fn shear_modulus_second_order(x: f64, k_0: f64, g_0: f64, gprime_0: f64) -> f64 {
    let f = finite_strain(x);
    f64::powf(1.0 + 2.0 * f, 2.5) * (g_0 + (3.0 * k_0 * gprime_0 - 5.0 * g_0) * f)
}

/// Calculates the cold shear modulus truncated at third order in strain (Pa)
pub fn shear_modulus_third_order(x: f64, k_0: f64, kprime_0: f64, g_0: f64, gprime_0: f64) -> f64 {
    let f = finite_strain(x);
    let c2 = 6.0 * k_0 * gprime_0 - 24.0 * k_0 - 14.0 * g_0 + 4.5 * k_0 * kprime_0;
    f64::powf(1.0 + 2.0 * f, 2.5) * (g_0 + (3.0 * k_0 * gprime_0 - 5.0 * g_0) * f + c2 * f * f)
}

/// Calculates the cold strain energy (J/mol) relative to the reference state
///
/// ```text
/// F = 9/2 K₀ V₀ f² + 9/2 K₀ (K₀′ - 4) V₀ f³
/// ```
pub fn strain_energy(x: f64, v_0: f64, k_0: f64, kprime_0: f64) -> f64 {
    let f = finite_strain(x);
    let b_iikk = 9.0 * k_0;
    let b_iikkmm = 27.0 * k_0 * (kprime_0 - 4.0);
    0.5 * b_iikk * f * f * v_0 + (1.0 / 6.0) * b_iikkmm * f * f * f * v_0
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{
        bulk_modulus, finite_strain, pressure, shear_modulus_second_order, shear_modulus_third_order, strain_energy,
    };
    use russell_lab::approx_eq;

    const V_0: f64 = 11.24e-6;
    const K_0: f64 = 161.0e9;
    const KPRIME_0: f64 = 3.8;
    const G_0: f64 = 131.0e9;
    const GPRIME_0: f64 = 2.1;

    #[test]
    fn reference_state_is_correct() {
        assert_eq!(finite_strain(1.0), 0.0);
        assert_eq!(pressure(1.0, K_0, KPRIME_0), 0.0);
        approx_eq(bulk_modulus(1.0, K_0, KPRIME_0), K_0, 1e-3);
        approx_eq(shear_modulus_second_order(1.0, K_0, G_0, GPRIME_0), G_0, 1e-3);
        approx_eq(shear_modulus_third_order(1.0, K_0, KPRIME_0, G_0, GPRIME_0), G_0, 1e-3);
        assert_eq!(strain_energy(1.0, V_0, K_0, KPRIME_0), 0.0);
    }

    #[test]
    fn pressure_matches_classical_form() {
        // P = 3K₀/2 (x^(7/3) - x^(5/3)) (1 - 3/4 (4 - K₀′)(x^(2/3) - 1))
        for x in [0.9, 1.1, 1.3, 1.6] {
            let classical = 1.5
                * K_0
                * (f64::powf(x, 7.0 / 3.0) - f64::powf(x, 5.0 / 3.0))
                * (1.0 - 0.75 * (4.0 - KPRIME_0) * (f64::powf(x, 2.0 / 3.0) - 1.0));
            approx_eq(pressure(x, K_0, KPRIME_0) / classical, 1.0, 1e-12);
        }
    }

    #[test]
    fn bulk_modulus_and_pressure_are_consistent() {
        // K = -V dP/dV with V = V₀/x, using central differences
        for v in [0.7 * V_0, 0.9 * V_0, 1.1 * V_0] {
            let dv = 1e-6 * v;
            let p_plus = pressure(V_0 / (v + dv), K_0, KPRIME_0);
            let p_minus = pressure(V_0 / (v - dv), K_0, KPRIME_0);
            let k_num = -v * (p_plus - p_minus) / (2.0 * dv);
            approx_eq(bulk_modulus(V_0 / v, K_0, KPRIME_0) / k_num, 1.0, 1e-6);
        }
    }

    #[test]
    fn strain_energy_and_pressure_are_consistent() {
        // P = -dF/dV
        for v in [0.7 * V_0, 0.95 * V_0, 1.1 * V_0] {
            let dv = 1e-6 * v;
            let f_plus = strain_energy(V_0 / (v + dv), V_0, K_0, KPRIME_0);
            let f_minus = strain_energy(V_0 / (v - dv), V_0, K_0, KPRIME_0);
            let p_num = -(f_plus - f_minus) / (2.0 * dv);
            approx_eq(pressure(V_0 / v, K_0, KPRIME_0) / p_num, 1.0, 1e-6);
        }
    }

    #[test]
    fn shear_modulus_orders_agree_at_small_strain() {
        let x = 1.0 + 1e-4;
        let g2 = shear_modulus_second_order(x, K_0, G_0, GPRIME_0);
        let g3 = shear_modulus_third_order(x, K_0, KPRIME_0, G_0, GPRIME_0);
        approx_eq(g2 / g3, 1.0, 1e-8);
        let x = 1.5;
        let g2 = shear_modulus_second_order(x, K_0, G_0, GPRIME_0);
        let g3 = shear_modulus_third_order(x, K_0, KPRIME_0, G_0, GPRIME_0);
        assert!(f64::abs(g2 - g3) > 1e9);
    }
}

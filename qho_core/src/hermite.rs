//! # Hermite Polynomials and Oscillator Functions
//!
//! Physicists' Hermite polynomials `H_k` and the normalized one-dimensional
//! harmonic oscillator eigenfunctions built from them:
//!
//! ```text
//! phi_k(t) = H_k(t) * exp(-t^2 / 2) / sqrt(2^k * k! * sqrt(pi))
//! ```
//!
//! The polynomial is evaluated by the three-term recurrence
//! `H_{k+1} = 2t H_k - 2k H_{k-1}`, and the normalization constant is
//! assembled in log space so `2^k * k!` never appears as an intermediate
//! value. This keeps the function finite well past the range the UI allows.

use std::f64::consts::PI;

/// Evaluate the physicists' Hermite polynomial `H_k(t)`.
///
/// `H_0 = 1`, `H_1 = 2t`, `H_{k+1} = 2t H_k - 2k H_{k-1}`.
pub fn hermite(k: u32, t: f64) -> f64 {
    match k {
        0 => 1.0,
        1 => 2.0 * t,
        _ => {
            let mut prev = 1.0;
            let mut cur = 2.0 * t;
            for j in 1..k {
                let next = 2.0 * t * cur - 2.0 * j as f64 * prev;
                prev = cur;
                cur = next;
            }
            cur
        }
    }
}

/// Exact `ln(k!)` as a running sum of logarithms.
///
/// Summing logs keeps full f64 precision over the range we care about and
/// never overflows, unlike computing `k!` itself.
pub fn ln_factorial(k: u32) -> f64 {
    (2..=k).map(|j| (j as f64).ln()).sum()
}

/// Normalization constant `N_k = 1 / sqrt(2^k * k! * sqrt(pi))`.
pub fn normalization(k: u32) -> f64 {
    let ln_norm = -0.5 * (k as f64 * 2.0_f64.ln() + ln_factorial(k) + 0.5 * PI.ln());
    ln_norm.exp()
}

/// Normalized 1D oscillator eigenfunction `phi_k(t)`.
pub fn hermite_function(k: u32, t: f64) -> f64 {
    normalization(k) * hermite(k, t) * (-t * t / 2.0).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_order_polynomials() {
        // H_0 = 1, H_1 = 2t, H_2 = 4t^2 - 2, H_3 = 8t^3 - 12t
        for &t in &[-2.0, -0.5, 0.0, 1.0, 3.0] {
            assert_eq!(hermite(0, t), 1.0);
            assert!((hermite(1, t) - 2.0 * t).abs() < 1e-12);
            assert!((hermite(2, t) - (4.0 * t * t - 2.0)).abs() < 1e-9);
            assert!((hermite(3, t) - (8.0 * t.powi(3) - 12.0 * t)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_polynomial_parity() {
        // H_k(-t) = (-1)^k H_k(t)
        for k in 0..8 {
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            for &t in &[0.3, 1.7, 4.2] {
                assert!((hermite(k, -t) - sign * hermite(k, t)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_ln_factorial() {
        assert_eq!(ln_factorial(0), 0.0);
        assert_eq!(ln_factorial(1), 0.0);
        // ln(5!) = ln(120)
        assert!((ln_factorial(5) - 120.0_f64.ln()).abs() < 1e-12);
        // ln(20!) against the directly computable value
        let fact20: f64 = (2..=20u64).map(|j| j as f64).product();
        assert!((ln_factorial(20) - fact20.ln()).abs() < 1e-9);
    }

    #[test]
    fn test_ground_state_is_gaussian() {
        // phi_0(t) = exp(-t^2/2) / pi^(1/4)
        let quarter_root_pi = PI.powf(0.25);
        for &t in &[0.0_f64, 0.5, 1.0, 2.5] {
            let expected = (-t * t / 2.0).exp() / quarter_root_pi;
            assert!((hermite_function(0, t) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalization_integral() {
        // Midpoint Riemann sum of phi_k^2 over a wide domain
        for k in [0, 1, 4, 10] {
            let (lo, hi, steps) = (-12.0, 12.0, 20_000);
            let dt = (hi - lo) / steps as f64;
            let sum: f64 = (0..steps)
                .map(|i| {
                    let t = lo + dt * (i as f64 + 0.5);
                    hermite_function(k, t).powi(2)
                })
                .sum::<f64>()
                * dt;
            assert!((sum - 1.0).abs() < 1e-5, "k = {k}: integral = {sum}");
        }
    }

    #[test]
    fn test_high_order_stays_finite() {
        // The log-space constant must not underflow to zero in the UI range
        for k in [50, 80] {
            let norm = normalization(k);
            assert!(norm.is_finite() && norm > 0.0);
            assert!(hermite_function(k, 1.0).is_finite());
        }
    }
}

//! Polynomial evaluation and root extraction.
//!
//! Coefficients are ordered lowest degree first throughout, matching the
//! coefficient tables. Root extraction goes through the companion matrix so
//! complex roots are available internally; callers filter down to the real
//! ones they can use.

use nalgebra::{Complex, DMatrix};

/// Relative tolerance below which an eigenvalue's imaginary part is treated
/// as numerical noise.
const IMAG_TOL: f64 = 1e-9;

/// Evaluate a lowest-degree-first polynomial at `x` (Horner).
pub fn eval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// All complex roots of a lowest-degree-first polynomial.
///
/// Zero leading coefficients are dropped before building the companion
/// matrix. Constant and empty polynomials have no roots.
pub fn roots(coeffs: &[f64]) -> Vec<Complex<f64>> {
    let mut len = coeffs.len();
    while len > 0 && coeffs[len - 1] == 0.0 {
        len -= 1;
    }
    if len <= 1 {
        return Vec::new();
    }

    let degree = len - 1;
    let lead = coeffs[len - 1];
    let mut companion = DMatrix::<f64>::zeros(degree, degree);
    for row in 1..degree {
        companion[(row, row - 1)] = 1.0;
    }
    for row in 0..degree {
        companion[(row, degree - 1)] = -coeffs[row] / lead;
    }

    companion.complex_eigenvalues().iter().copied().collect()
}

/// Real roots of a lowest-degree-first polynomial, ascending.
///
/// Eigenvalues whose imaginary part is negligible relative to their
/// magnitude count as real. Ascending order makes downstream "first root in
/// range" selection deterministic.
pub fn real_roots(coeffs: &[f64]) -> Vec<f64> {
    let mut out: Vec<f64> = roots(coeffs)
        .into_iter()
        .filter(|z| z.im.abs() <= IMAG_TOL * z.re.abs().max(1.0))
        .map(|z| z.re)
        .collect();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_is_lowest_degree_first() {
        // 1 + 2x + 3x^2 at x = 2
        assert_eq!(eval(&[1.0, 2.0, 3.0], 2.0), 17.0);
    }

    #[test]
    fn eval_empty_is_zero() {
        assert_eq!(eval(&[], 5.0), 0.0);
    }

    #[test]
    fn quadratic_real_roots_ascend() {
        // x^2 - 1
        let r = real_roots(&[-1.0, 0.0, 1.0]);
        assert_eq!(r.len(), 2);
        assert!((r[0] + 1.0).abs() < 1e-9);
        assert!((r[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn complex_pair_is_discarded() {
        // x^2 + 1 has no real roots
        assert!(real_roots(&[1.0, 0.0, 1.0]).is_empty());
        assert_eq!(roots(&[1.0, 0.0, 1.0]).len(), 2);
    }

    #[test]
    fn linear_root() {
        // 2x - 4
        let r = real_roots(&[-4.0, 2.0]);
        assert_eq!(r.len(), 1);
        assert!((r[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_leading_coefficients_are_trimmed() {
        // x^2 - 5x + 6 with a padded zero leading term
        let r = real_roots(&[6.0, -5.0, 1.0, 0.0]);
        assert_eq!(r.len(), 2);
        assert!((r[0] - 2.0).abs() < 1e-9);
        assert!((r[1] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_polynomials_have_no_roots() {
        assert!(roots(&[]).is_empty());
        assert!(roots(&[5.0]).is_empty());
        assert!(roots(&[0.0, 0.0]).is_empty());
    }
}

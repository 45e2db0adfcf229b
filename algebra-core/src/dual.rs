//! Dual numbers for forward-mode automatic differentiation.
//!
//! A dual number carries a value and its derivative together, so a
//! single evaluation pass yields both.
//!
//! # Mathematical Background
//!
//! A dual number has the form `a + a′·ε` where `ε² = 0`. Each
//! operation below is the corresponding differentiation rule:
//!
//! - `(a + a′ε) + (b + b′ε) = (a+b) + (a′+b′)ε`
//! - `(a + a′ε) * (b + b′ε) = ab + (a′b + ab′)ε`
//! - `(a + a′ε) / (b + b′ε) = a/b + ((a′b − ab′)/(b·b))ε`
//! - `sin(a + a′ε) = sin a + (cos a · a′)ε`
//! - `cos(a + a′ε) = cos a + (−sin a · a′)ε`
//! - `ln(a + a′ε) = ln a + (a′/a)ε`
//! - `(a + a′ε)^(b + b′ε) = aᵇ + aᵇ·(a′b/a + b′·ln a)ε`
//!
//! The quotient and power rules are written out in full rather than
//! derived from a reciprocal, so the floating-point operations match
//! the ones a symbolic derivative tree performs when it is evaluated.
//! No rule checks its domain: division by zero and logarithms of
//! non-positive values produce IEEE-754 infinities and NaNs.
//!
//! # Example
//!
//! ```
//! use algebra_core::Dual;
//!
//! // f(x) = x² + 2x at x = 3
//! let x = Dual::variable(3.0);
//! let f = x * x + Dual::constant(2.0) * x;
//!
//! assert_eq!(f.value, 15.0);
//! assert_eq!(f.deriv, 8.0);
//! ```

use num_traits::{Float, One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A dual number: a primal value and its derivative (tangent).
///
/// # Example
///
/// ```
/// use algebra_core::Dual;
///
/// // f(x) = (x + 1) / (x + 2) at x = 3
/// let x = Dual::variable(3.0);
/// let f = (x + Dual::constant(1.0)) / (x + Dual::constant(2.0));
///
/// assert_eq!(f.value, 0.8);
/// assert!((f.deriv - 0.04_f64).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<T> {
    /// The primal value
    pub value: T,
    /// The derivative (tangent)
    pub deriv: T,
}

impl<T> Dual<T> {
    /// Create a dual number with explicit value and derivative.
    pub fn new(value: T, deriv: T) -> Self {
        Dual { value, deriv }
    }

    /// A constant: derivative zero.
    pub fn constant(value: T) -> Self
    where
        T: Zero,
    {
        Dual {
            value,
            deriv: T::zero(),
        }
    }

    /// The independent variable: derivative one.
    ///
    /// ```
    /// use algebra_core::Dual;
    ///
    /// let x = Dual::variable(3.0);
    /// assert_eq!((x.value, x.deriv), (3.0, 1.0));
    /// ```
    pub fn variable(value: T) -> Self
    where
        T: One,
    {
        Dual {
            value,
            deriv: T::one(),
        }
    }
}

impl<T: Float> Dual<T> {
    /// Natural logarithm: `d/dx(ln f) = f′/f`.
    pub fn ln(self) -> Self {
        Dual {
            value: self.value.ln(),
            deriv: self.deriv / self.value,
        }
    }

    /// Sine: `d/dx(sin f) = cos f · f′`.
    pub fn sin(self) -> Self {
        Dual {
            value: self.value.sin(),
            deriv: self.value.cos() * self.deriv,
        }
    }

    /// Cosine: `d/dx(cos f) = −sin f · f′`.
    pub fn cos(self) -> Self {
        Dual {
            value: self.value.cos(),
            deriv: -self.value.sin() * self.deriv,
        }
    }

    /// Generalized power `f^g` for a variable base and exponent.
    ///
    /// Uses logarithmic differentiation,
    /// `d/dx(f^g) = f^g · (f′·g/f + g′·ln f)`, for every exponent,
    /// including constant ones.
    ///
    /// ```
    /// use algebra_core::Dual;
    ///
    /// // f(x) = x^ln(x) at x = e: f(e) = e, f'(e) = 2
    /// let x = Dual::variable(std::f64::consts::E);
    /// let f = x.powf(x.ln());
    ///
    /// assert!((f.value - std::f64::consts::E).abs() < 1e-12);
    /// assert!((f.deriv - 2.0).abs() < 1e-12);
    /// ```
    pub fn powf(self, exponent: Self) -> Self {
        let value = self.value.powf(exponent.value);
        Dual {
            value,
            deriv: value
                * (self.deriv * exponent.value / self.value
                    + exponent.deriv * self.value.ln()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.value, self.deriv)
    }
}

/// Sum rule: `(f + g)′ = f′ + g′`
impl<T: Add<Output = T>> Add for Dual<T> {
    type Output = Dual<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Dual {
            value: self.value + rhs.value,
            deriv: self.deriv + rhs.deriv,
        }
    }
}

/// Product rule: `(f·g)′ = f′·g + f·g′`
impl<T: Mul<Output = T> + Add<Output = T> + Clone> Mul for Dual<T> {
    type Output = Dual<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Dual {
            value: self.value.clone() * rhs.value.clone(),
            deriv: self.deriv * rhs.value + self.value * rhs.deriv,
        }
    }
}

/// Quotient rule: `(f/g)′ = (f′·g − f·g′) / (g·g)`
impl<T> Div for Dual<T>
where
    T: Div<Output = T> + Mul<Output = T> + Sub<Output = T> + Clone,
{
    type Output = Dual<T>;

    fn div(self, rhs: Self) -> Self::Output {
        let g = rhs.value;
        Dual {
            value: self.value.clone() / g.clone(),
            deriv: (self.deriv * g.clone() - self.value * rhs.deriv) / (g.clone() * g),
        }
    }
}

impl<T: Neg<Output = T>> Neg for Dual<T> {
    type Output = Dual<T>;

    fn neg(self) -> Self::Output {
        Dual {
            value: -self.value,
            deriv: -self.deriv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{E, FRAC_PI_2, PI};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * (1.0 + b.abs())
    }

    #[test]
    fn constant_has_zero_derivative() {
        let c = Dual::constant(5.0);
        assert_eq!((c.value, c.deriv), (5.0, 0.0));
    }

    #[test]
    fn variable_has_unit_derivative() {
        let x = Dual::variable(-2.0);
        assert_eq!((x.value, x.deriv), (-2.0, 1.0));
    }

    #[test]
    fn negation_flips_value_and_derivative() {
        let x = Dual::variable(5.0);
        let y = -(x + Dual::constant(-2.0));
        assert_eq!((y.value, y.deriv), (-3.0, -1.0));
    }

    #[test]
    fn multiplication_implements_product_rule() {
        // x³ at x = 2
        let x = Dual::variable(2.0);
        let y = x * x * x;
        assert_eq!((y.value, y.deriv), (8.0, 12.0));
    }

    #[test]
    fn division_implements_quotient_rule() {
        // 1/x at x = 2
        let y = Dual::constant(1.0) / Dual::variable(2.0);
        assert_eq!((y.value, y.deriv), (0.5, -0.25));
    }

    #[test]
    fn division_by_zero_propagates_ieee_values() {
        // 1/x at 0: value +inf, derivative (0·0 − 1·1)/0 = −inf
        let y = Dual::constant(1.0) / Dual::variable(0.0);
        assert_eq!(y.value, f64::INFINITY);
        assert_eq!(y.deriv, f64::NEG_INFINITY);

        // 1/(x·x) at 0: derivative 0/0
        let x = Dual::variable(0.0);
        let z = Dual::constant(1.0) / (x * x);
        assert!(z.deriv.is_nan());
    }

    #[test]
    fn transcendentals_follow_the_chain_rule() {
        // sin(2x) at π/2: derivative 2·cos(π) = −2
        let x = Dual::variable(FRAC_PI_2);
        let s = (Dual::constant(2.0) * x).sin();
        assert!(close(s.deriv, -2.0));

        // cos(2x) at π/4: derivative −2·sin(π/2) = −2
        let x = Dual::variable(PI / 4.0);
        let c = (Dual::constant(2.0) * x).cos();
        assert!(close(c.deriv, -2.0));

        // ln(x) at e
        let l = Dual::variable(E).ln();
        assert!(close(l.value, 1.0));
        assert!(close(l.deriv, 1.0 / E));
    }

    #[test]
    fn ln_of_zero_is_negative_infinity() {
        let l = Dual::variable(0.0).ln();
        assert_eq!(l.value, f64::NEG_INFINITY);
        assert_eq!(l.deriv, f64::INFINITY);
    }

    #[test]
    fn powf_with_constant_exponent_matches_power_rule() {
        // x³ at x = 2 through the logarithmic form
        let y = Dual::variable(2.0).powf(Dual::constant(3.0));
        assert!(close(y.value, 8.0));
        assert!(close(y.deriv, 12.0));
    }

    #[test]
    fn powf_with_variable_exponent() {
        // x^ln(x) at x = 1: value 1, derivative 0
        let x = Dual::variable(1.0);
        let y = x.powf(x.ln());
        assert!(close(y.value, 1.0));
        assert!(close(y.deriv, 0.0));

        // at x = e²: value e⁴, derivative 4e²
        let x = Dual::variable(E * E);
        let y = x.powf(x.ln());
        assert!(close(y.value, E.powi(4)));
        assert!(close(y.deriv, 4.0 * E * E));
    }

    #[test]
    fn display_shows_both_parts() {
        assert_eq!(Dual::new(1.5, -2.0).to_string(), "1.5 + -2ε");
    }
}

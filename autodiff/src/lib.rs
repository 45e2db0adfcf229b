//! Symbolic and automatic differentiation of scalar expressions.
//!
//! **Part of the algebra workspace; builds on [`algebra_core`].**
//!
//! An expression in one variable is built from literals, the variable
//! and the operations `+ - * /`, [`sin`], [`cos`], [`ln`] and [`pow`].
//! Its derivative can then be taken two ways:
//!
//! - **Symbolically** with [`d`] / [`Expr::derivative`]: a new
//!   expression for the derivative function, unsimplified
//! - **At a point** with [`d_at`] / [`Expr::derivative_at`]: the
//!   derivative's value, computed in one forward pass with [`Dual`]
//!   numbers and no intermediate tree
//!
//! Both paths apply the same rule per node and agree on every input.
//!
//! # Example
//!
//! ```
//! use autodiff::{d, d_at, ln, pow, Expr};
//! use std::f64::consts::E;
//!
//! let x: Expr = Expr::variable();
//! let f = pow(&x, ln(&x));
//!
//! assert!((f.evaluate(E) - E).abs() < 1e-12);
//!
//! // Symbolic derivative, evaluated at e
//! let df = d(&f);
//! assert!((df.evaluate(E) - 2.0).abs() < 1e-12);
//!
//! // Forward-mode derivative at e
//! assert!((d_at(&f, E) - 2.0).abs() < 1e-12);
//! ```
//!
//! # Domain errors
//!
//! Nothing is checked at evaluation time. Division by zero, logarithms
//! of non-positive numbers and the like produce IEEE-754 infinities and
//! NaN, on both derivative paths alike:
//!
//! ```
//! use autodiff::{d, d_at, Expr};
//!
//! let x: Expr = Expr::variable();
//! let f = 1.0 / &x + 1.0 / (&x * &x);
//! assert_eq!(f.evaluate(0.0), f64::INFINITY);
//! assert!(d(&f).evaluate(0.0).is_nan());
//! assert!(d_at(&f, 0.0).is_nan());
//! ```
//!
//! # Numeric domain
//!
//! [`Expr<T>`] is generic over [`num_traits::Float`] and defaults to
//! `f64`. One tree always has one `T`; [`Expr::cast`] converts a whole
//! tree and reports constants the target cannot hold.

mod builder;
mod display;
mod error;
mod expr;

pub use algebra_core::Dual;
pub use builder::{cos, d, d_at, ln, pow, sin, IntoExpr};
pub use error::{Error, Result};
pub use expr::{Expr, ExprF};

#![deny(missing_docs)]
//! # algebra-core: algebra for expression engines
//!
//! This crate provides the two pieces the `autodiff` expression engine
//! is built from:
//!
//! - [`fix`]: shared least fixed points of a base functor
//!   ([`Fix`](fix::Fix)) and the recursion schemes
//!   [`fold`](fix::fold) and [`para`](fix::para) that consume them
//! - [`dual`]: [`Dual`] numbers, whose arithmetic is the table of
//!   differentiation rules, for forward-mode derivatives
//!
//! ## Quick start
//!
//! ```rust
//! use algebra_core::Dual;
//!
//! // d/dx sin(x·x) at x = 0 is 0
//! let x = Dual::variable(0.0);
//! let y = (x * x).sin();
//! assert_eq!(y.value, 0.0);
//! assert_eq!(y.deriv, 0.0);
//! ```

pub mod dual;
pub mod fix;

pub use dual::Dual;

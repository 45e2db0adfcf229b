//! Surface syntax for building expressions.
//!
//! Operands come in three kinds: an owned [`Expr`], a borrowed
//! `&Expr`, and a bare literal of the expression's float type. Every
//! operator and function accepts any mix of them (two literals
//! excepted) and returns a new node; existing nodes are never
//! modified. A literal is promoted to a fresh `Constant` node at each
//! use, so two uses of `1.0` are two distinct nodes, while a handle
//! used twice is one node referenced twice.
//!
//! ```
//! use autodiff::{cos, ln, pow, sin, Expr};
//!
//! let x: Expr = Expr::variable();
//! let f = 3.0 * &x - &x - 17.0;
//! let g = pow(&x, ln(&x)) + sin(2.0 * &x) / cos(&x);
//! assert_eq!(f.evaluate(5.0), -7.0);
//! assert!(g.evaluate(1.0).is_finite());
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Float;

use crate::expr::{Expr, ExprF};

/// Conversion of an operand into an expression node.
///
/// Implemented for `Expr<T>`, `&Expr<T>` and the literals `f32` and
/// `f64`.
pub trait IntoExpr<T> {
    /// The operand as an expression.
    fn into_expr(self) -> Expr<T>;
}

impl<T: Float> IntoExpr<T> for Expr<T> {
    fn into_expr(self) -> Expr<T> {
        self
    }
}

impl<T: Float> IntoExpr<T> for &Expr<T> {
    fn into_expr(self) -> Expr<T> {
        self.clone()
    }
}

impl<T: Float> From<T> for Expr<T> {
    fn from(value: T) -> Self {
        Expr::constant(value)
    }
}

impl<T: Float> From<&Expr<T>> for Expr<T> {
    fn from(e: &Expr<T>) -> Self {
        e.clone()
    }
}

fn negate<T: Float>(f: Expr<T>) -> Expr<T> {
    Expr::from_layer(ExprF::Negate(f))
}

fn add<T: Float>(f: Expr<T>, g: Expr<T>) -> Expr<T> {
    Expr::from_layer(ExprF::Add(f, g))
}

fn sub<T: Float>(f: Expr<T>, g: Expr<T>) -> Expr<T> {
    Expr::from_layer(ExprF::Add(f, negate(g)))
}

fn mul<T: Float>(f: Expr<T>, g: Expr<T>) -> Expr<T> {
    Expr::from_layer(ExprF::Mul(f, g))
}

fn div<T: Float>(f: Expr<T>, g: Expr<T>) -> Expr<T> {
    Expr::from_layer(ExprF::Div(f, g))
}

impl<T: Float> Neg for Expr<T> {
    type Output = Expr<T>;

    fn neg(self) -> Expr<T> {
        negate(self)
    }
}

impl<T: Float> Neg for &Expr<T> {
    type Output = Expr<T>;

    fn neg(self) -> Expr<T> {
        negate(self.clone())
    }
}

// Node and literal operands in every order, for one operator.
macro_rules! impl_binary_op {
    ( $Op:ident, $method:ident, $build:ident ) => {
        impl<T: Float> $Op<Expr<T>> for Expr<T> {
            type Output = Expr<T>;
            fn $method(self, rhs: Expr<T>) -> Expr<T> {
                $build(self, rhs)
            }
        }

        impl<T: Float> $Op<&Expr<T>> for Expr<T> {
            type Output = Expr<T>;
            fn $method(self, rhs: &Expr<T>) -> Expr<T> {
                $build(self, rhs.clone())
            }
        }

        impl<T: Float> $Op<Expr<T>> for &Expr<T> {
            type Output = Expr<T>;
            fn $method(self, rhs: Expr<T>) -> Expr<T> {
                $build(self.clone(), rhs)
            }
        }

        impl<T: Float> $Op<&Expr<T>> for &Expr<T> {
            type Output = Expr<T>;
            fn $method(self, rhs: &Expr<T>) -> Expr<T> {
                $build(self.clone(), rhs.clone())
            }
        }

        impl<T: Float> $Op<T> for Expr<T> {
            type Output = Expr<T>;
            fn $method(self, rhs: T) -> Expr<T> {
                $build(self, Expr::constant(rhs))
            }
        }

        impl<T: Float> $Op<T> for &Expr<T> {
            type Output = Expr<T>;
            fn $method(self, rhs: T) -> Expr<T> {
                $build(self.clone(), Expr::constant(rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);
impl_binary_op!(Div, div, div);

// Literal on the left. Orphan rules rule out a blanket impl over `T`,
// so each float type gets its own.
macro_rules! impl_literal_operand {
    ( $( $F:ty ),+ ) => {
        $(
            impl IntoExpr<$F> for $F {
                fn into_expr(self) -> Expr<$F> {
                    Expr::constant(self)
                }
            }

            impl_literal_lhs!($F, Add, add, add);
            impl_literal_lhs!($F, Sub, sub, sub);
            impl_literal_lhs!($F, Mul, mul, mul);
            impl_literal_lhs!($F, Div, div, div);
        )+
    };
}

macro_rules! impl_literal_lhs {
    ( $F:ty, $Op:ident, $method:ident, $build:ident ) => {
        impl $Op<Expr<$F>> for $F {
            type Output = Expr<$F>;
            fn $method(self, rhs: Expr<$F>) -> Expr<$F> {
                $build(Expr::constant(self), rhs)
            }
        }

        impl $Op<&Expr<$F>> for $F {
            type Output = Expr<$F>;
            fn $method(self, rhs: &Expr<$F>) -> Expr<$F> {
                $build(Expr::constant(self), rhs.clone())
            }
        }
    };
}

impl_literal_operand!(f32, f64);

/// `sin f`
pub fn sin<T: Float>(f: impl IntoExpr<T>) -> Expr<T> {
    Expr::from_layer(ExprF::Sin(f.into_expr()))
}

/// `cos f`
pub fn cos<T: Float>(f: impl IntoExpr<T>) -> Expr<T> {
    Expr::from_layer(ExprF::Cos(f.into_expr()))
}

/// Natural logarithm `ln f`.
pub fn ln<T: Float>(f: impl IntoExpr<T>) -> Expr<T> {
    Expr::from_layer(ExprF::Ln(f.into_expr()))
}

/// `base ^ exponent`; either side may depend on the variable.
pub fn pow<T: Float>(base: impl IntoExpr<T>, exponent: impl IntoExpr<T>) -> Expr<T> {
    Expr::from_layer(ExprF::Pow(base.into_expr(), exponent.into_expr()))
}

/// Symbolic derivative of `f`; same as [`Expr::derivative`].
pub fn d<T: Float>(f: &Expr<T>) -> Expr<T> {
    f.derivative()
}

/// Derivative of `f` at `x`; same as [`Expr::derivative_at`].
///
/// ```
/// use autodiff::{d, d_at, Expr};
///
/// let x: Expr = Expr::variable();
/// let f = 1.0 / &x + 1.0 / (&x * &x);
/// assert_eq!(f.evaluate(0.0), f64::INFINITY);
/// assert!(d_at(&f, 0.0).is_nan());
/// assert!(d(&f).evaluate(0.0).is_nan());
/// ```
pub fn d_at<T: Float>(f: &Expr<T>, x: T) -> T {
    f.derivative_at(x)
}

impl<T: Float> Expr<T> {
    /// `sin self`
    pub fn sin(&self) -> Expr<T> {
        sin(self)
    }

    /// `cos self`
    pub fn cos(&self) -> Expr<T> {
        cos(self)
    }

    /// `ln self`
    pub fn ln(&self) -> Expr<T> {
        ln(self)
    }

    /// `self ^ exponent`
    pub fn pow(&self, exponent: impl IntoExpr<T>) -> Expr<T> {
        pow(self, exponent)
    }
}

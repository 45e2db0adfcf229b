//! Expression graphs over one scalar variable.
//!
//! An [`Expr`] is a handle to an immutable node. Nodes are shared by
//! reference count: cloning a handle, or using the same handle twice
//! while building, makes several parents point at one child. Every
//! operation is a recursion over the node's [`ExprF`] layer:
//!
//! | Node          | evaluate      | derivative                       |
//! |---------------|---------------|----------------------------------|
//! | `Constant(c)` | `c`           | `0`                              |
//! | `Variable`    | `x`           | `1`                              |
//! | `Negate(f)`   | `−f`          | `−f′`                            |
//! | `Sin(f)`      | `sin f`       | `cos f · f′`                     |
//! | `Cos(f)`      | `cos f`       | `−sin f · f′`                    |
//! | `Ln(f)`       | `ln f`        | `f′ / f`                         |
//! | `Add(f, g)`   | `f + g`       | `f′ + g′`                        |
//! | `Mul(f, g)`   | `f · g`       | `f′·g + f·g′`                    |
//! | `Div(f, g)`   | `f / g`       | `(f′·g − f·g′) / (g·g)`          |
//! | `Pow(f, g)`   | `f^g`         | `f^g · (f′·g/f + g′·ln f)`       |
//!
//! [`Expr::derivative`] builds the right-hand column as a new tree
//! without simplifying it. [`Expr::derivative_at`] computes the same
//! column numerically in one pass with [`Dual`] numbers.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use algebra_core::fix::{self, Fix, Functor, TypeApp};
use algebra_core::Dual;
use num_traits::{Float, NumCast, ToPrimitive};

use crate::error::{Error, Result};

/// One layer of an expression: a node kind whose children are `X`.
///
/// With `X = Expr<T>` this is a node whose children are expressions
/// (see [`Expr::layer`]); with `X = A` it is what an algebra passed to
/// [`Expr::fold`] receives, each child already reduced to an `A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExprF<T, X> {
    /// A fixed scalar.
    Constant(T),
    /// The independent input.
    Variable,
    /// `−f`
    Negate(X),
    /// `sin f`
    Sin(X),
    /// `cos f`
    Cos(X),
    /// `ln f`
    Ln(X),
    /// `f + g`
    Add(X, X),
    /// `f · g`
    Mul(X, X),
    /// `f / g`
    Div(X, X),
    /// `f ^ g`
    Pow(X, X),
}

impl<T, X> ExprF<T, X> {
    /// Map `g` over the children, left to right.
    pub fn map<Y>(self, mut g: impl FnMut(X) -> Y) -> ExprF<T, Y> {
        match self {
            ExprF::Constant(c) => ExprF::Constant(c),
            ExprF::Variable => ExprF::Variable,
            ExprF::Negate(f) => ExprF::Negate(g(f)),
            ExprF::Sin(f) => ExprF::Sin(g(f)),
            ExprF::Cos(f) => ExprF::Cos(g(f)),
            ExprF::Ln(f) => ExprF::Ln(g(f)),
            ExprF::Add(f, h) => ExprF::Add(g(f), g(h)),
            ExprF::Mul(f, h) => ExprF::Mul(g(f), g(h)),
            ExprF::Div(f, h) => ExprF::Div(g(f), g(h)),
            ExprF::Pow(f, h) => ExprF::Pow(g(f), g(h)),
        }
    }
}

struct ExprTag<T>(PhantomData<T>);

impl<T> TypeApp for ExprTag<T> {
    type Applied<X> = ExprF<T, X>;
}

impl<T> Functor for ExprTag<T> {
    fn fmap<X, Y, G>(fx: ExprF<T, X>, g: G) -> ExprF<T, Y>
    where
        G: FnMut(X) -> Y,
    {
        fx.map(g)
    }
}

/// A shared, immutable expression in one scalar variable.
///
/// Cloning is cheap and shares the node. `Expr<T>` is `Send + Sync`
/// when `T` is, so one expression can be evaluated from several
/// threads at once.
///
/// # Example
///
/// ```
/// use autodiff::{d, d_at, Expr};
///
/// let x: Expr = Expr::variable();
/// let f = &x * &x * &x + 12.5 * &x + 35.2;
///
/// assert!((f.evaluate(5.0) - 222.7).abs() < 1e-9);
/// assert!((d(&f).evaluate(5.0) - 87.5).abs() < 1e-9);
/// assert!((d_at(&f, 5.0) - 87.5).abs() < 1e-9);
/// ```
pub struct Expr<T = f64>(Fix<ExprTag<T>>);

impl<T> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Expr(self.0.clone())
    }
}

impl<T: Float> Expr<T> {
    pub(crate) fn from_layer(layer: ExprF<T, Expr<T>>) -> Self {
        Expr(Fix::new(layer.map(|e| e.0)))
    }

    /// The independent variable.
    pub fn variable() -> Self {
        Self::from_layer(ExprF::Variable)
    }

    /// A new constant node holding `value`.
    pub fn constant(value: T) -> Self {
        Self::from_layer(ExprF::Constant(value))
    }

    /// A new constant node from any primitive number.
    ///
    /// Fails when `value` has no representation in `T`, including a
    /// finite value that would overflow to an infinity. Infinities and
    /// NaN convert to their counterparts in `T`.
    ///
    /// ```
    /// use autodiff::Expr;
    ///
    /// let three = Expr::<f32>::try_constant(3_u8).unwrap();
    /// assert_eq!(three.evaluate(0.0), 3.0);
    /// ```
    pub fn try_constant<N>(value: N) -> Result<Self>
    where
        N: ToPrimitive + Copy + fmt::Debug,
    {
        let finite_source = value.to_f64().map_or(false, f64::is_finite);
        match <T as NumCast>::from(value) {
            Some(c) if c.is_finite() || !finite_source => Ok(Self::constant(c)),
            _ => Err(Error::Unrepresentable {
                value: format!("{value:?}"),
                domain: type_name::<T>(),
            }),
        }
    }

    /// The top node with its children as expressions.
    ///
    /// The children share their nodes with `self`.
    pub fn layer(&self) -> ExprF<T, Expr<T>> {
        self.0.out().map(Expr)
    }

    /// `true` when both handles refer to the same node.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Fix::ptr_eq(&a.0, &b.0)
    }

    /// Reduce the expression bottom-up with `alg`.
    ///
    /// A node reachable along several paths is reduced once per path.
    ///
    /// ```
    /// use autodiff::{Expr, ExprF};
    ///
    /// let x: Expr = Expr::variable();
    /// let f = (&x + 1.0) * &x;
    /// let leaves = f.fold(|layer: ExprF<f64, usize>| match layer {
    ///     ExprF::Constant(_) | ExprF::Variable => 1,
    ///     ExprF::Negate(a) | ExprF::Sin(a) | ExprF::Cos(a) | ExprF::Ln(a) => a,
    ///     ExprF::Add(a, b) | ExprF::Mul(a, b) | ExprF::Div(a, b) | ExprF::Pow(a, b) => a + b,
    /// });
    /// assert_eq!(leaves, 3);
    /// ```
    pub fn fold<A>(&self, alg: impl FnMut(ExprF<T, A>) -> A) -> A {
        fix::fold(&self.0, alg)
    }

    /// The value of the expression at `x`.
    ///
    /// Never fails: out-of-domain operations produce infinities or NaN.
    pub fn evaluate(&self, x: T) -> T {
        self.fold(|layer: ExprF<T, T>| match layer {
            ExprF::Constant(c) => c,
            ExprF::Variable => x,
            ExprF::Negate(f) => -f,
            ExprF::Sin(f) => f.sin(),
            ExprF::Cos(f) => f.cos(),
            ExprF::Ln(f) => f.ln(),
            ExprF::Add(f, g) => f + g,
            ExprF::Mul(f, g) => f * g,
            ExprF::Div(f, g) => f / g,
            ExprF::Pow(f, g) => f.powf(g),
        })
    }

    /// The expression as a plain function `T -> T`.
    pub fn as_fn(&self) -> impl Fn(T) -> T + '_ {
        move |x| self.evaluate(x)
    }

    /// The symbolic derivative, as a new expression.
    ///
    /// Every rule allocates fresh nodes and references the children of
    /// `self` where the rule mentions them; nothing is simplified, so
    /// repeated differentiation grows the tree. `Pow` always uses
    /// logarithmic differentiation, even for a constant exponent.
    pub fn derivative(&self) -> Expr<T> {
        let result = fix::para(
            &self.0,
            |layer: ExprF<T, (Fix<ExprTag<T>>, Expr<T>)>| match layer.map(|(f, df)| (Expr(f), df)) {
                ExprF::Constant(_) => Expr::constant(T::zero()),
                ExprF::Variable => Expr::constant(T::one()),
                ExprF::Negate((_, df)) => -df,
                ExprF::Sin((f, df)) => f.cos() * df,
                ExprF::Cos((f, df)) => -f.sin() * df,
                ExprF::Ln((f, df)) => df / f,
                ExprF::Add((_, df), (_, dg)) => df + dg,
                ExprF::Mul((f, df), (g, dg)) => df * &g + f * dg,
                ExprF::Div((f, df), (g, dg)) => (df * &g - f * dg) / (&g * &g),
                ExprF::Pow((f, df), (g, dg)) => f.pow(&g) * (df * &g / &f + dg * f.ln()),
            },
        );

        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "symbolic derivative: {} nodes -> {} nodes",
                self.node_count(),
                result.node_count()
            );
        }
        result
    }

    /// The `n`-th symbolic derivative; `n = 0` returns `self`.
    pub fn nth_derivative(&self, n: usize) -> Expr<T> {
        (0..n).fold(self.clone(), |e, _| e.derivative())
    }

    /// Value and derivative at `x`, in one traversal.
    ///
    /// ```
    /// use autodiff::{pow, Expr};
    ///
    /// let x: Expr = Expr::variable();
    /// let f = pow(&x, 3.0);
    /// let y = f.dual(2.0);
    /// assert!((y.value - 8.0).abs() < 1e-12);
    /// assert!((y.deriv - 12.0).abs() < 1e-12);
    /// ```
    pub fn dual(&self, x: T) -> Dual<T> {
        self.fold(|layer: ExprF<T, Dual<T>>| match layer {
            ExprF::Constant(c) => Dual::constant(c),
            ExprF::Variable => Dual::variable(x),
            ExprF::Negate(f) => -f,
            ExprF::Sin(f) => f.sin(),
            ExprF::Cos(f) => f.cos(),
            ExprF::Ln(f) => f.ln(),
            ExprF::Add(f, g) => f + g,
            ExprF::Mul(f, g) => f * g,
            ExprF::Div(f, g) => f / g,
            ExprF::Pow(f, g) => f.powf(g),
        })
    }

    /// The derivative at `x`, by forward-mode differentiation.
    ///
    /// Agrees with `self.derivative().evaluate(x)` without building
    /// the derivative tree.
    pub fn derivative_at(&self, x: T) -> T {
        self.dual(x).deriv
    }

    /// Number of nodes, counting a shared node once per reference.
    pub fn node_count(&self) -> usize {
        self.fold(|layer: ExprF<T, usize>| match layer {
            ExprF::Constant(_) | ExprF::Variable => 1,
            ExprF::Negate(f) | ExprF::Sin(f) | ExprF::Cos(f) | ExprF::Ln(f) => 1 + f,
            ExprF::Add(f, g) | ExprF::Mul(f, g) | ExprF::Div(f, g) | ExprF::Pow(f, g) => 1 + f + g,
        })
    }

    /// Length of the longest root-to-leaf path, in nodes.
    pub fn depth(&self) -> usize {
        self.fold(|layer: ExprF<T, usize>| match layer {
            ExprF::Constant(_) | ExprF::Variable => 1,
            ExprF::Negate(f) | ExprF::Sin(f) | ExprF::Cos(f) | ExprF::Ln(f) => 1 + f,
            ExprF::Add(f, g) | ExprF::Mul(f, g) | ExprF::Div(f, g) | ExprF::Pow(f, g) => {
                1 + f.max(g)
            }
        })
    }

    /// The same expression over another numeric domain.
    ///
    /// Fails on the first constant (in traversal order) that `U`
    /// cannot represent.
    ///
    /// ```
    /// use autodiff::{sin, Expr};
    ///
    /// let x: Expr<f64> = Expr::variable();
    /// let f = sin(2.0 * &x);
    /// let g: Expr<f32> = f.cast().unwrap();
    /// assert!((g.evaluate(0.25) - 0.5_f32.sin()).abs() < 1e-6);
    /// ```
    pub fn cast<U: Float>(&self) -> Result<Expr<U>>
    where
        T: fmt::Debug,
    {
        let converted = self.fold(|layer: ExprF<T, Result<Expr<U>>>| -> Result<Expr<U>> {
            Ok(match layer {
                ExprF::Constant(c) => Expr::try_constant(c)?,
                ExprF::Variable => Expr::variable(),
                ExprF::Negate(f) => -f?,
                ExprF::Sin(f) => f?.sin(),
                ExprF::Cos(f) => f?.cos(),
                ExprF::Ln(f) => f?.ln(),
                ExprF::Add(f, g) => f? + g?,
                ExprF::Mul(f, g) => f? * g?,
                ExprF::Div(f, g) => f? / g?,
                ExprF::Pow(f, g) => f?.pow(g?),
            })
        });
        if let Err(err) = &converted {
            log::debug!("cast to {} failed: {}", type_name::<U>(), err);
        }
        converted
    }
}

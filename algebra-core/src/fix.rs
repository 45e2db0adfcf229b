//! Shared fixed-point types and recursion schemes.
//!
//! This module provides the building blocks for recursive data whose
//! subterms may be shared:
//!
//! - [`TypeApp`]: Higher-kinded type encoding
//! - [`Functor`]: Functor on one type parameter
//! - [`Fix`]: Least fixed point (μF) with reference-counted layers
//! - [`fold`]: Catamorphism / F-algebra eliminator
//! - [`para`]: Paramorphism, a fold whose algebra also sees the
//!   original subterms
//!
//! # Example: Arithmetic with a shared subterm
//!
//! ```rust
//! use algebra_core::fix::{TypeApp, Functor, Fix, fold};
//!
//! // Base functor: ExprF<X> = Lit(i64) | Add(X, X) | Mul(X, X)
//! #[derive(Clone)]
//! enum ExprF<X> {
//!     Lit(i64),
//!     Add(X, X),
//!     Mul(X, X),
//! }
//!
//! struct ExprTag;
//!
//! impl TypeApp for ExprTag {
//!     type Applied<X> = ExprF<X>;
//! }
//!
//! impl Functor for ExprTag {
//!     fn fmap<X, Y, G>(fx: ExprF<X>, mut g: G) -> ExprF<Y>
//!     where
//!         G: FnMut(X) -> Y,
//!     {
//!         match fx {
//!             ExprF::Lit(n) => ExprF::Lit(n),
//!             ExprF::Add(l, r) => ExprF::Add(g(l), g(r)),
//!             ExprF::Mul(l, r) => ExprF::Mul(g(l), g(r)),
//!         }
//!     }
//! }
//!
//! type Expr = Fix<ExprTag>;
//!
//! // (2 + 3) is built once and referenced twice.
//! let five: Expr = Fix::new(ExprF::Add(Fix::new(ExprF::Lit(2)), Fix::new(ExprF::Lit(3))));
//! let square: Expr = Fix::new(ExprF::Mul(five.clone(), five));
//!
//! let value: i64 = fold(&square, |layer| match layer {
//!     ExprF::Lit(n) => n,
//!     ExprF::Add(l, r) => l + r,
//!     ExprF::Mul(l, r) => l * r,
//! });
//! assert_eq!(value, 25);
//! ```

use std::sync::Arc;

/// A **type constructor** encoding via associated types.
///
/// Rust lacks higher-kinded types, so we encode `F : Type → Type` as:
/// - A marker type `F` (the "tag")
/// - An associated type `Applied<X>` representing `F(X)`
///
/// # Example
///
/// ```rust
/// use algebra_core::fix::TypeApp;
///
/// struct OptionTag;
///
/// impl TypeApp for OptionTag {
///     type Applied<X> = Option<X>;
/// }
///
/// let x: <OptionTag as TypeApp>::Applied<i32> = Some(42);
/// ```
pub trait TypeApp {
    /// The result of applying this type constructor to `X`.
    type Applied<X>;
}

/// A **functor** for type constructors.
///
/// Laws (not enforced by type system):
///
/// - **Identity**: `fmap id = id`
/// - **Composition**: `fmap g ∘ fmap f = fmap (g ∘ f)`
///
/// `fmap` visits holes left to right; [`fold`] and [`para`] rely on
/// that order being deterministic.
pub trait Functor: TypeApp {
    /// Map a function over the holes (type parameter positions).
    fn fmap<X, Y, G>(fx: Self::Applied<X>, g: G) -> Self::Applied<Y>
    where
        G: FnMut(X) -> Y;
}

/// The **least fixed point** (μF) of a functor F, with shared layers.
///
/// `Fix<F>` satisfies the isomorphism:
///
/// ```text
/// Fix<F> ≅ F(Fix<F>)
/// ```
///
/// witnessed by [`Fix::new`] (`F(Fix F) → Fix F`) and [`Fix::out`]
/// (`Fix F → F(Fix F)`).
///
/// Each layer lives behind an [`Arc`]. Cloning a `Fix` shares the
/// layer instead of copying it, so one subterm may appear under
/// several parents and the value is a DAG rather than a tree. Layers
/// are never mutated after construction and a layer can only refer
/// to layers built before it, so no cycle can form and reference
/// counting alone reclaims everything.
///
/// # `Send` / `Sync`
///
/// `Fix<F>` is `Send` and `Sync` iff `F::Applied<Fix<F>>` is both
/// `Send` and `Sync`.
///
/// # Example
///
/// ```rust
/// use algebra_core::fix::{TypeApp, Fix};
///
/// enum NatF<X> {
///     Zero,
///     Succ(X),
/// }
///
/// struct NatTag;
///
/// impl TypeApp for NatTag {
///     type Applied<X> = NatF<X>;
/// }
///
/// type Nat = Fix<NatTag>;
///
/// fn zero() -> Nat { Fix::new(NatF::Zero) }
/// fn succ(n: Nat) -> Nat { Fix::new(NatF::Succ(n)) }
///
/// let one = succ(zero());
/// let two = succ(one.clone());
/// match two.as_out() {
///     NatF::Succ(pred) => assert!(Fix::ptr_eq(pred, &one)),
///     NatF::Zero => unreachable!(),
/// }
/// ```
#[repr(transparent)]
pub struct Fix<F: TypeApp>(Arc<F::Applied<Fix<F>>>);

impl<F: TypeApp> Fix<F> {
    /// Construct a `Fix` from one layer of the functor.
    ///
    /// This is the "in" morphism: `F(Fix F) → Fix F`
    #[inline]
    pub fn new(node: F::Applied<Fix<F>>) -> Self {
        Fix(Arc::new(node))
    }

    /// Borrow one layer of the functor.
    #[inline]
    pub fn as_out(&self) -> &F::Applied<Fix<F>> {
        &self.0
    }

    /// Copy out one layer of the functor.
    ///
    /// This is the "out" morphism: `Fix F → F(Fix F)`. The children of
    /// the returned layer share their subterms with `self`.
    #[inline]
    pub fn out(&self) -> F::Applied<Fix<F>>
    where
        F::Applied<Fix<F>>: Clone,
    {
        (*self.0).clone()
    }

    /// `true` when both handles refer to the same layer.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<F: TypeApp> Clone for Fix<F> {
    fn clone(&self) -> Self {
        Fix(Arc::clone(&self.0))
    }
}

/// A **catamorphism**: fold a recursive structure using an F-algebra.
///
/// Given an algebra `alg : F(A) → A`, this produces a function
/// `&Fix<F> → A` that recursively applies the algebra from the
/// leaves up.
///
/// A shared subterm is folded once per reference to it: the result
/// is the fold of the tree the DAG unfolds to.
///
/// # Stack Safety
///
/// This implementation uses direct recursion. The risk of stack
/// overflow is proportional to the **recursion depth**, not the total
/// size of the structure.
pub fn fold<F, A>(t: &Fix<F>, alg: impl FnMut(F::Applied<A>) -> A) -> A
where
    F: Functor,
    F::Applied<Fix<F>>: Clone,
{
    // Internal helper avoids moving the closure on each recursive call
    fn go<F, A>(t: &Fix<F>, alg: &mut impl FnMut(F::Applied<A>) -> A) -> A
    where
        F: Functor,
        F::Applied<Fix<F>>: Clone,
    {
        let mapped = F::fmap(t.out(), |child| go::<F, A>(&child, alg));
        alg(mapped)
    }

    let mut alg = alg;
    go::<F, A>(t, &mut alg)
}

/// A **paramorphism**: like [`fold`], but every hole of the layer
/// handed to the algebra carries the original subterm next to its
/// folded result.
///
/// Use this when the result for a node needs the children themselves
/// and not only what they fold to, e.g. when a rewrite has to
/// reference its inputs.
///
/// # Example
///
/// ```rust
/// use algebra_core::fix::{TypeApp, Functor, Fix, para};
///
/// #[derive(Clone)]
/// enum NatF<X> {
///     Zero,
///     Succ(X),
/// }
///
/// struct NatTag;
///
/// impl TypeApp for NatTag {
///     type Applied<X> = NatF<X>;
/// }
///
/// impl Functor for NatTag {
///     fn fmap<X, Y, G>(fx: NatF<X>, mut g: G) -> NatF<Y>
///     where
///         G: FnMut(X) -> Y,
///     {
///         match fx {
///             NatF::Zero => NatF::Zero,
///             NatF::Succ(x) => NatF::Succ(g(x)),
///         }
///     }
/// }
///
/// type Nat = Fix<NatTag>;
///
/// fn zero() -> Nat { Fix::new(NatF::Zero) }
/// fn succ(n: Nat) -> Nat { Fix::new(NatF::Succ(n)) }
///
/// // Factorial needs the predecessor itself, not only its fold.
/// fn to_u64(n: &Nat) -> u64 {
///     algebra_core::fix::fold(n, |layer| match layer {
///         NatF::Zero => 0,
///         NatF::Succ(k) => k + 1,
///     })
/// }
///
/// let three = succ(succ(succ(zero())));
/// let fact: u64 = para(&three, |layer| match layer {
///     NatF::Zero => 1,
///     NatF::Succ((pred, acc)) => (to_u64(&pred) + 1) * acc,
/// });
/// assert_eq!(fact, 6);
/// ```
pub fn para<F, A>(t: &Fix<F>, alg: impl FnMut(F::Applied<(Fix<F>, A)>) -> A) -> A
where
    F: Functor,
    F::Applied<Fix<F>>: Clone,
{
    fn go<F, A>(t: &Fix<F>, alg: &mut impl FnMut(F::Applied<(Fix<F>, A)>) -> A) -> A
    where
        F: Functor,
        F::Applied<Fix<F>>: Clone,
    {
        let mapped = F::fmap(t.out(), |child| {
            let folded = go::<F, A>(&child, alg);
            (child, folded)
        });
        alg(mapped)
    }

    let mut alg = alg;
    go::<F, A>(t, &mut alg)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test fixture: a small arithmetic functor with one free variable.

    #[derive(Clone, Debug, PartialEq)]
    enum TermF<X> {
        Lit(i64),
        Var,
        Neg(X),
        Add(X, X),
        Mul(X, X),
    }

    struct TermTag;

    impl TypeApp for TermTag {
        type Applied<X> = TermF<X>;
    }

    impl Functor for TermTag {
        fn fmap<X, Y, G>(fx: TermF<X>, mut g: G) -> TermF<Y>
        where
            G: FnMut(X) -> Y,
        {
            match fx {
                TermF::Lit(n) => TermF::Lit(n),
                TermF::Var => TermF::Var,
                TermF::Neg(x) => TermF::Neg(g(x)),
                TermF::Add(l, r) => TermF::Add(g(l), g(r)),
                TermF::Mul(l, r) => TermF::Mul(g(l), g(r)),
            }
        }
    }

    type Term = Fix<TermTag>;

    fn lit(n: i64) -> Term {
        Fix::new(TermF::Lit(n))
    }

    fn var() -> Term {
        Fix::new(TermF::Var)
    }

    fn add(l: Term, r: Term) -> Term {
        Fix::new(TermF::Add(l, r))
    }

    fn mul(l: Term, r: Term) -> Term {
        Fix::new(TermF::Mul(l, r))
    }

    fn eval(t: &Term, x: i64) -> i64 {
        fold(t, |layer: TermF<i64>| match layer {
            TermF::Lit(n) => n,
            TermF::Var => x,
            TermF::Neg(a) => -a,
            TermF::Add(a, b) => a + b,
            TermF::Mul(a, b) => a * b,
        })
    }

    fn size(t: &Term) -> usize {
        fold(t, |layer: TermF<usize>| match layer {
            TermF::Lit(_) | TermF::Var => 1,
            TermF::Neg(a) => 1 + a,
            TermF::Add(a, b) | TermF::Mul(a, b) => 1 + a + b,
        })
    }

    // Fix tests

    #[test]
    fn clone_shares_the_layer() {
        let t = add(lit(1), var());
        let u = t.clone();
        assert!(Fix::ptr_eq(&t, &u));
    }

    #[test]
    fn separately_built_layers_are_distinct() {
        assert!(!Fix::ptr_eq(&lit(1), &lit(1)));
    }

    #[test]
    fn out_children_share_subterms() {
        let x = var();
        let sq = mul(x.clone(), x.clone());
        match sq.out() {
            TermF::Mul(l, r) => {
                assert!(Fix::ptr_eq(&l, &x));
                assert!(Fix::ptr_eq(&r, &x));
            }
            _ => panic!("expected Mul"),
        }
    }

    #[test]
    fn as_out_borrows_layer() {
        let t = lit(7);
        assert!(matches!(t.as_out(), TermF::Lit(7)));
    }

    // fold tests

    #[test]
    fn fold_evaluates() {
        // (x + 2) * x at x = 3
        let x = var();
        let t = mul(add(x.clone(), lit(2)), x);
        assert_eq!(eval(&t, 3), 15);
    }

    #[test]
    fn fold_visits_shared_subterms_once_per_reference() {
        let x = var();
        let sq = mul(x.clone(), x);
        let quad = mul(sq.clone(), sq);
        assert_eq!(size(&quad), 7);
        assert_eq!(eval(&quad, 2), 16);
    }

    #[test]
    fn fold_does_not_consume() {
        let t = add(lit(1), lit(2));
        assert_eq!(eval(&t, 0), 3);
        assert_eq!(eval(&t, 0), 3);
    }

    // para tests

    #[test]
    fn para_sees_original_children() {
        // Rewrite x*y into y*x, keeping the original children.
        let l = lit(2);
        let r = var();
        let t = mul(l.clone(), r.clone());
        let swapped: Term = para(&t, |layer: TermF<(Term, Term)>| match layer {
            TermF::Mul((a, _), (b, _)) => mul(b, a),
            TermF::Lit(n) => lit(n),
            TermF::Var => var(),
            TermF::Neg((_, a)) => Fix::new(TermF::Neg(a)),
            TermF::Add((_, a), (_, b)) => add(a, b),
        });
        match swapped.as_out() {
            TermF::Mul(a, b) => {
                assert!(Fix::ptr_eq(a, &r));
                assert!(Fix::ptr_eq(b, &l));
            }
            _ => panic!("expected Mul"),
        }
    }

    #[test]
    fn para_agrees_with_fold_when_children_are_ignored() {
        let x = var();
        let t = add(mul(x.clone(), x.clone()), Fix::new(TermF::Neg(x)));
        let via_para: i64 = para(&t, |layer: TermF<(Term, i64)>| match layer {
            TermF::Lit(n) => n,
            TermF::Var => 5,
            TermF::Neg((_, a)) => -a,
            TermF::Add((_, a), (_, b)) => a + b,
            TermF::Mul((_, a), (_, b)) => a * b,
        });
        assert_eq!(via_para, eval(&t, 5));
    }

    // Functor law tests

    #[test]
    fn functor_identity_law() {
        let layer: TermF<i32> = TermF::Add(1, 2);
        assert_eq!(TermTag::fmap(layer.clone(), |x| x), layer);
    }

    #[test]
    fn functor_composition_law() {
        let layer: TermF<i32> = TermF::Mul(3, 10);
        let f = |x: i32| x * 2;
        let g = |x: i32| x + 1;
        let left = TermTag::fmap(TermTag::fmap(layer.clone(), f), g);
        let right = TermTag::fmap(layer, |x| g(f(x)));
        assert_eq!(left, right);
    }

    #[test]
    fn fmap_visits_left_to_right() {
        let mut seen = Vec::new();
        let _ = TermTag::fmap(TermF::Add("l", "r"), |x| seen.push(x));
        assert_eq!(seen, vec!["l", "r"]);
    }
}

use std::fmt;

use num_traits::Float;

use crate::expr::{Expr, ExprF};

impl<T: Float + fmt::Display> Expr<T> {
    fn render(&self) -> String {
        self.fold(|layer: ExprF<T, String>| match layer {
            // Bracketed when negative so `-1` is always a negation.
            ExprF::Constant(c) if c.is_sign_negative() => format!("({})", c),
            ExprF::Constant(c) => c.to_string(),
            ExprF::Variable => "x".to_string(),
            ExprF::Negate(f) => format!("-{}", f),
            ExprF::Sin(f) => format!("sin({})", f),
            ExprF::Cos(f) => format!("cos({})", f),
            ExprF::Ln(f) => format!("ln({})", f),
            ExprF::Add(f, g) => format!("({} + {})", f, g),
            ExprF::Mul(f, g) => format!("({} * {})", f, g),
            ExprF::Div(f, g) => format!("({} / {})", f, g),
            ExprF::Pow(f, g) => format!("({} ^ {})", f, g),
        })
    }
}

impl<T: Float + fmt::Display> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T: Float + fmt::Display> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Expr").field(&format_args!("{}", self)).finish()
    }
}

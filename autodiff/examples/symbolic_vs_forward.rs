//! Differentiate a few functions both symbolically and in forward mode.
//!
//! Prints each function, its unsimplified derivative tree and the two
//! derivative values side by side.
//!
//! Run with: `RUST_LOG=trace cargo run --example symbolic_vs_forward`

use std::f64::consts::{E, FRAC_PI_8};

use autodiff::{cos, d, d_at, ln, pow, sin, Expr};

fn report(name: &str, f: &Expr, points: &[f64]) {
    let df = d(f);
    println!("{name}");
    println!("  f(x)  = {f}");
    println!("  f'(x) = {df}");
    for &x in points {
        println!(
            "  x = {x:<10.6} f = {:<22} symbolic f' = {:<22} forward f' = {}",
            f.evaluate(x),
            df.evaluate(x),
            d_at(f, x)
        );
    }
    println!();
}

fn main() {
    env_logger::init();

    println!("=== Symbolic and forward-mode derivatives ===\n");

    let x: Expr = Expr::variable();

    report(
        "Polynomial: x³ + 12.5x + 35.2",
        &(&x * &x * &x + 12.5 * &x + 35.2),
        &[-5.0, 0.0, 5.0],
    );

    report(
        "Quotient: 1/x + 1/x²  (poles at 0)",
        &(1.0 / &x + 1.0 / (&x * &x)),
        &[-5.0, 0.0, 8.0],
    );

    report(
        "Trigonometric: sin(2x) + cos(2x)",
        &(sin(2.0 * &x) + cos(2.0 * &x)),
        &[0.0, FRAC_PI_8],
    );

    report(
        "Logarithm: ln(ex + e)",
        &ln(E * &x + E),
        &[-1.0, 0.0, E - 1.0],
    );

    report(
        "Variable exponent: x^ln(x)",
        &pow(&x, ln(&x)),
        &[1.0, E, E * E],
    );
}

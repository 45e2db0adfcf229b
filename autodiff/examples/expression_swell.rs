//! Show how unsimplified symbolic derivatives grow.
//!
//! Each pass of `d` builds a new tree from the previous one; the
//! forward-mode derivative of the same tree stays one traversal.
//!
//! Run with: `RUST_LOG=trace cargo run --example expression_swell`

use autodiff::{d_at, sin, Expr};

fn main() {
    env_logger::init();

    let x: Expr = Expr::variable();
    let f = sin(&x * &x);
    let at = 0.5;

    println!("=== Expression swell: f(x) = sin(x²) ===\n");
    println!(
        "{:>5} {:>10} {:>7} {:>24} {:>24}",
        "order", "nodes", "depth", "value at 0.5", "slope at 0.5"
    );

    let mut current = f;
    for order in 0..=5 {
        println!(
            "{:>5} {:>10} {:>7} {:>24} {:>24}",
            order,
            current.node_count(),
            current.depth(),
            current.evaluate(at),
            d_at(&current, at)
        );
        current = current.derivative();
    }
}

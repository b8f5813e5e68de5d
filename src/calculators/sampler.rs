//! Numeric sampling of symbolic expressions on an even grid, feeding the
//! chart renderer. Sampling is total: a point where the function is undefined
//! or overflows is plotted at zero rather than dropped, so every series has
//! exactly as many points as the grid.

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::linspace;
use log::warn;

/// Default plotting domain when the user supplies no bounds.
pub const DEFAULT_DOMAIN: (f64, f64) = (-10.0, 10.0);
/// Default number of grid points per series.
pub const DEFAULT_POINTS: usize = 400;

/// Samples `expr` as a function of `var` on `n` evenly spaced points of
/// `[a, b]`. Points where evaluation fails or yields a non-finite value are
/// pinned to zero.
pub fn sample_function(expr: &Expr, var: &str, a: f64, b: f64, n: usize) -> Vec<(f64, f64)> {
    let f = expr.lambdify1D(var);
    let mut fallbacks = 0usize;
    let series: Vec<(f64, f64)> = linspace(a, b, n)
        .into_iter()
        .map(|x| {
            let y = f(x);
            if y.is_finite() {
                (x, y)
            } else {
                fallbacks += 1;
                (x, 0.0)
            }
        })
        .collect();
    if fallbacks > 0 {
        warn!(
            "{} of {} sample points of {} were non-finite, plotted at zero",
            fallbacks, n, expr
        );
    }
    series
}

/// Samples on the default domain with the default resolution.
pub fn sample_default(expr: &Expr, var: &str) -> Vec<(f64, f64)> {
    let (a, b) = DEFAULT_DOMAIN;
    sample_function(expr, var, a, b, DEFAULT_POINTS)
}

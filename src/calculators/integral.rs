//! The integral calculator pipeline: one synchronous pass from a raw input
//! string and two bounds to the exact symbolic value, the Gauss-quadrature
//! value with its error estimate and a shaded area chart.

use crate::Utils::plots::{RenderedChart, render_area_chart};
use crate::calculators::derivative::VARIABLE;
use crate::calculators::error::ComputationError;
use crate::calculators::normalizer::normalize;
use crate::calculators::sampler::{DEFAULT_POINTS, sample_function};
use crate::symbolic::symbolic_engine::Expr;
use log::info;

/// Everything one integration request produces.
#[derive(Debug, Clone)]
pub struct IntegralReport {
    /// normalized input, as handed to the parser
    pub input: String,
    /// the exact definite integral, printed (a plain number for numeric input)
    pub symbolic: String,
    /// Gauss-Legendre quadrature value
    pub numeric: f64,
    /// quadrature error estimate
    pub est_error: f64,
    /// the integrand on `[lower, upper]` with the integrated area shaded
    pub chart: RenderedChart,
}

/// Runs the whole integration pipeline on one raw input string and a pair of
/// bounds. Symbolic and numeric integration must both succeed; an integrand
/// outside the symbolic table fails the request as a whole.
pub fn integrate_over(
    raw: &str,
    lower: f64,
    upper: f64,
) -> Result<IntegralReport, ComputationError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(ComputationError::Bounds(format!(
            "bounds must be finite, got [{}, {}]",
            lower, upper
        )));
    }

    let normalized = normalize(raw);
    let expr = Expr::parse_expression(&normalized).map_err(ComputationError::Parse)?;
    let exact = expr
        .definite_integrate(VARIABLE, lower, upper)
        .map_err(ComputationError::Integration)?;
    let (numeric, est_error) = expr
        .quad(VARIABLE, lower, upper)
        .map_err(ComputationError::Integration)?;
    info!(
        "integral of {} over [{}, {}]: exact {}, quadrature {} (error estimate {:e})",
        expr, lower, upper, exact, numeric, est_error
    );

    let series = sample_function(&expr, VARIABLE, lower, upper, DEFAULT_POINTS);
    let chart = render_area_chart(
        &format!("integral of {} from {} to {}", normalized, lower, upper),
        VARIABLE,
        &[(format!("f(x) = {}", normalized), series)],
    )
    .map_err(ComputationError::Render)?;

    Ok(IntegralReport {
        input: normalized,
        symbolic: exact.to_string(),
        numeric,
        est_error,
        chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial_report() {
        let report = integrate_over("x^2", 0.0, 3.0).unwrap();
        assert_eq!(report.input, "x**2");
        assert_eq!(report.symbolic, "9");
        assert_relative_eq!(report.numeric, 9.0, epsilon = 1e-9);
        assert!(report.est_error < 1e-6);
        assert!(!report.chart.as_base64().is_empty());
    }

    #[test]
    fn test_trig_report() {
        let report = integrate_over("sin(x)", 0.0, std::f64::consts::PI).unwrap();
        assert_relative_eq!(report.numeric, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_symbolic_failure_fails_whole_request() {
        // x*sin(x) integrates numerically but is outside the symbolic table
        let err = integrate_over("x*sin(x)", 0.0, 1.0).unwrap_err();
        assert!(matches!(err, ComputationError::Integration(_)));
    }

    #[test]
    fn test_parse_failure_propagates() {
        let err = integrate_over("x++", 0.0, 1.0).unwrap_err();
        assert!(matches!(err, ComputationError::Parse(_)));
    }

    #[test]
    fn test_non_finite_bound_rejected() {
        let err = integrate_over("x", 0.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, ComputationError::Bounds(_)));
    }
}

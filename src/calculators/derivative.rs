//! The derivative calculator pipeline: one synchronous pass from a raw input
//! string to the simplified derivative, the rule trace and a chart of the
//! function next to its derivative.

use crate::Utils::plots::{RenderedChart, render_function_chart};
use crate::calculators::classifier::{RuleStep, explain_derivative};
use crate::calculators::error::ComputationError;
use crate::calculators::normalizer::normalize;
use crate::calculators::sampler::sample_default;
use crate::symbolic::symbolic_engine::Expr;
use log::info;

/// The independent variable of both calculators.
pub const VARIABLE: &str = "x";

/// Everything one derivative request produces.
#[derive(Debug, Clone)]
pub struct DerivativeReport {
    /// normalized input, as handed to the parser
    pub input: String,
    /// the simplified derivative, printed
    pub derivative: String,
    /// rule trace in classification order
    pub steps: Vec<RuleStep>,
    /// f and f' plotted together on the default domain
    pub chart: RenderedChart,
}

/// Runs the whole derivative pipeline on one raw input string.
pub fn differentiate_with_steps(raw: &str) -> Result<DerivativeReport, ComputationError> {
    let normalized = normalize(raw);
    let expr = Expr::parse_expression(&normalized).map_err(ComputationError::Parse)?;
    let (derivative, steps) = explain_derivative(&expr, VARIABLE);
    let derivative = derivative.simplify();
    info!("d/d{}[{}] = {}", VARIABLE, expr, derivative);

    let function_series = sample_default(&expr, VARIABLE);
    let derivative_series = sample_default(&derivative, VARIABLE);
    let chart = render_function_chart(
        &format!("f(x) = {}", normalized),
        VARIABLE,
        &[
            ("f(x)".to_string(), function_series),
            ("f'(x)".to_string(), derivative_series),
        ],
    )
    .map_err(ComputationError::Render)?;

    Ok(DerivativeReport {
        input: normalized,
        derivative: derivative.to_string(),
        steps,
        chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::classifier::Rule;

    #[test]
    fn test_polynomial_report() {
        let report = differentiate_with_steps("2x^2+3x").unwrap();
        assert_eq!(report.input, "2*x**2+3*x");
        let derivative = Expr::parse_expression(&report.derivative).unwrap();
        for x in [0.0, 1.0, 2.5] {
            let expected = 4.0 * x + 3.0;
            assert!((derivative.eval1d("x", x).unwrap() - expected).abs() < 1e-12);
        }
        assert_eq!(report.steps[0].rule, Rule::Sum);
        assert!(!report.chart.as_base64().is_empty());
    }

    #[test]
    fn test_trig_report_uses_chain_rule() {
        let report = differentiate_with_steps("sin(x)").unwrap();
        assert_eq!(report.derivative, "cos(x)");
        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.steps[0].rule, Rule::Chain);
    }

    #[test]
    fn test_parse_failure_propagates() {
        let err = differentiate_with_steps("sin(").unwrap_err();
        assert!(matches!(err, ComputationError::Parse(_)));
    }

    #[test]
    fn test_non_ascii_symbol_is_a_foreign_constant() {
        // a symbol other than x has zero slope; multi-byte input must flow
        // through the whole pipeline like any other
        let report = differentiate_with_steps("π+x").unwrap();
        let derivative = Expr::parse_expression(&report.derivative).unwrap();
        assert_eq!(derivative, Expr::Const(1.0));
    }
}

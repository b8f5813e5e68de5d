//! Per-session view-models. Each calculator owns the text of its input
//! fields, the last result line and the last chart; `calculate` reruns the
//! pipeline from the current field contents. A failed run replaces the result
//! with one error line and clears the chart, so the session never shows a
//! chart that does not match the result text.

use crate::Utils::plots::RenderedChart;
use crate::calculators::classifier::RuleStep;
use crate::calculators::derivative::differentiate_with_steps;
use crate::calculators::error::ComputationError;
use crate::calculators::integral::integrate_over;
use log::error;

fn parse_bound(label: &str, text: &str) -> Result<f64, ComputationError> {
    text.trim().parse::<f64>().map_err(|_| {
        ComputationError::Bounds(format!("{} bound {:?} is not a number", label, text))
    })
}

/// View-model of one integral calculator session.
#[derive(Debug, Clone, Default)]
pub struct IntegralCalculator {
    pub function_text: String,
    pub lower_text: String,
    pub upper_text: String,
    pub result: String,
    pub chart: Option<RenderedChart>,
    /// true while the pointer is over the input pane, used by the front end
    /// to decide which calculator receives keyboard events
    pub hovering: bool,
}

impl IntegralCalculator {
    pub fn new() -> Self {
        IntegralCalculator::default()
    }

    pub fn set_function(&mut self, text: &str) {
        self.function_text = text.to_string();
    }

    pub fn set_lower(&mut self, text: &str) {
        self.lower_text = text.to_string();
    }

    pub fn set_upper(&mut self, text: &str) {
        self.upper_text = text.to_string();
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Reruns the integration pipeline from the current field contents.
    pub fn calculate(&mut self) {
        match self.run() {
            Ok(()) => {}
            Err(e) => {
                error!("integral calculation failed: {}", e);
                self.result = format!("error: {}", e);
                self.chart = None;
            }
        }
    }

    fn run(&mut self) -> Result<(), ComputationError> {
        let lower = parse_bound("lower", &self.lower_text)?;
        let upper = parse_bound("upper", &self.upper_text)?;
        let report = integrate_over(&self.function_text, lower, upper)?;
        self.result = format!(
            "exact: {}, quadrature: {:.6} (error estimate {:.3e})",
            report.symbolic, report.numeric, report.est_error
        );
        self.chart = Some(report.chart);
        Ok(())
    }
}

/// View-model of one derivative calculator session.
#[derive(Debug, Clone, Default)]
pub struct DerivativeCalculator {
    pub function_text: String,
    pub result: String,
    pub steps: Vec<RuleStep>,
    pub chart: Option<RenderedChart>,
    pub hovering: bool,
}

impl DerivativeCalculator {
    pub fn new() -> Self {
        DerivativeCalculator::default()
    }

    pub fn set_function(&mut self, text: &str) {
        self.function_text = text.to_string();
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Reruns the derivative pipeline from the current field contents.
    pub fn calculate(&mut self) {
        match differentiate_with_steps(&self.function_text) {
            Ok(report) => {
                self.result = format!("f'(x) = {}", report.derivative);
                self.steps = report.steps;
                self.chart = Some(report.chart);
            }
            Err(e) => {
                error!("derivative calculation failed: {}", e);
                self.result = format!("error: {}", e);
                self.steps.clear();
                self.chart = None;
            }
        }
    }
}

#![allow(non_snake_case)]
/// # Calculator cores
///
/// Two structurally identical request pipelines wrapping the symbolic engine:
///
/// - the **integral calculator** takes a function string and two bounds and
///   produces the exact symbolic definite integral, a Gauss-quadrature value
///   with its error estimate and an area chart;
/// - the **derivative calculator** takes a function string and produces the
///   simplified symbolic derivative together with a human-readable rule trace
///   and a chart of the function and its derivative.
///
/// Control flow of one request: normalizer -> parser -> (classifier +
/// differentiation | symbolic/numeric integration) -> sampler -> chart
/// renderer -> session view-model. Each request is synchronous, stateless and
/// independent; nothing is cached between requests.
///
///# Example
/// ```
/// use symcalc::calculators::derivative::differentiate_with_steps;
/// let report = differentiate_with_steps("2x^2+3x").unwrap();
/// println!("derivative: {}", report.derivative);
/// for step in &report.steps {
///     println!("  {}", step.text);
/// }
/// ```
/// rewrites free-form calculator input into parseable form
pub mod normalizer;
/// structural rule classification and step narration for derivatives
pub mod classifier;
/// the single error taxonomy of the calculator pipelines
pub mod error;
/// numeric sampling of symbolic functions on an even grid
pub mod sampler;
/// the derivative calculator pipeline
pub mod derivative;
/// the integral calculator pipeline
pub mod integral;
/// per-session view-models binding text fields to the pipelines
pub mod session;

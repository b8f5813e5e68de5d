use thiserror::Error;

/// The single error taxonomy of both calculator pipelines.
///
/// Every failure, from bad input to an integral outside the symbolic table to
/// a chart that would not render, is caught once at the top of the user-triggered
/// handler and turned into one display string. The user is never shown partial
/// results and never told whether the failure was their input or ours.
#[derive(Debug, Error)]
pub enum ComputationError {
    #[error("failed to parse expression: {0}")]
    Parse(String),
    #[error("invalid bound: {0}")]
    Bounds(String),
    #[error("integration failed: {0}")]
    Integration(String),
    #[error("chart rendering failed: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // every variant of the taxonomy is constructed by some pipeline stage;
    // the display strings are what the session shows the user
    #[test]
    fn test_display_of_every_variant() {
        let cases = [
            (
                ComputationError::Parse("x+(".to_string()),
                "failed to parse expression: x+(",
            ),
            (
                ComputationError::Bounds("zero".to_string()),
                "invalid bound: zero",
            ),
            (
                ComputationError::Integration("x * sin(x)".to_string()),
                "integration failed: x * sin(x)",
            ),
            (
                ComputationError::Render("font".to_string()),
                "chart rendering failed: font",
            ),
        ];
        for (err, text) in cases {
            assert_eq!(err.to_string(), text);
        }
    }
}

use crate::symbolic::symbolic_engine::{Expr, Func};
use crate::symbolic::utils::{
    find_power_operator_outside_brackets, find_rightmost_operator_outside_brackets,
    wrapped_in_brackets,
};
use log::debug;

/// a module turns a String expression into a symbolic expression
///# Example
/// ```
/// use symcalc::symbolic::symbolic_engine::Expr;
/// let input = "2*x**2 + sin(x)";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// ```
//                  search recursion diagram
//                "x**2+exp(x)+ln(x)/y"             |
//                |       left  | right             |
//                |_________________________________|
//                |           div by    +           |
//                |_________________________________|
//                | x**2+exp(x) |   ln(x)/y         |
//                |      |      |          |        |
//                |_____\|/     |          |        |
//                |    div by + |          |        |
//                |  x**2|exp(x)|          |        |
//                |   Ok |  Ok  |         \|/       |
//                |_____________|____ div by /______|
//                |             | ln(x)  |  y       |
//                |_____________|___Ok___|__Ok______|
//
// Operands are split at the rightmost '+'/'-' outside brackets, then the
// rightmost '*'/'/' (a '*' belonging to the doubled power operator "**" does
// not count), then the leftmost power operator, which keeps "**"
// right-associative. What remains is a function application, a constant or a
// variable. The input must already carry explicit multiplication signs; the
// calculators run it through the input normalizer first.
pub fn parse_expression_func(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty expression".to_string());
    }

    // a fully wrapping bracket pair is transparent
    if wrapped_in_brackets(input) {
        return parse_expression_func(&input[1..input.len() - 1]);
    }

    // Handling addition and subtraction
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['+', '-']) {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        debug!("SIGN '{}' found at position {}: left: {}, right: {}", op, pos, left, right);

        // Handle unary minus
        if left.is_empty() {
            return if op == '-' {
                Ok(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(parse_expression_func(right)?),
                ))
            } else {
                parse_expression_func(right)
            };
        }

        return match op {
            '+' => Ok(parse_expression_func(left)? + parse_expression_func(right)?),
            _ => Ok(parse_expression_func(left)? - parse_expression_func(right)?),
        };
    }

    // Handling multiplication and division
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['*', '/']) {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        debug!("SIGN '{}' found at position {}: left: {}, right: {}", op, pos, left, right);
        if left.is_empty() || right.is_empty() {
            return Err(format!("dangling '{}' in '{}'", op, input));
        }
        return match op {
            '*' => Ok(parse_expression_func(left)? * parse_expression_func(right)?),
            _ => Ok(parse_expression_func(left)? / parse_expression_func(right)?),
        };
    }

    // Handling exponentiation
    if let Some((pos, op_len)) = find_power_operator_outside_brackets(input) {
        let base = input[..pos].trim();
        let exponent = input[pos + op_len..].trim();
        debug!("power operator at position {}: base: {}, exponent: {}", pos, base, exponent);
        if base.is_empty() || exponent.is_empty() {
            return Err(format!("dangling power operator in '{}'", input));
        }
        return Ok(Expr::Pow(
            Box::new(parse_expression_func(base)?),
            Box::new(parse_expression_func(exponent)?),
        ));
    }

    // Handling named functions: a known name followed by a bracketed argument
    if let Some(bracket_start) = input.find('(') {
        if input.ends_with(')') {
            let name = &input[..bracket_start];
            let inner = &input[bracket_start + 1..input.len() - 1];
            return match Func::from_name(name) {
                Some(func) => Ok(Expr::Fun(func, Box::new(parse_expression_func(inner)?))),
                None => Err(format!("unknown function '{}'", name)),
            };
        }
    }

    // Handling constants and variables
    if let Ok(value) = input.parse::<f64>() {
        debug!("found constant: {}", value);
        return Ok(Expr::Const(value));
    }
    if input.chars().all(|c| c.is_alphanumeric() || c == '_') && !input.chars().next().unwrap().is_ascii_digit() {
        debug!("found variable: {}", input);
        return Ok(Expr::Var(input.to_string()));
    }

    Err(format!("invalid expression format: '{}'", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constant() {
        let expr = parse_expression_func("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
    }

    #[test]
    fn test_parse_variable() {
        let expr = parse_expression_func("x").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_parse_addition() {
        let expr = parse_expression_func("x + 2").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_subtraction() {
        let expr = parse_expression_func("x - 2").unwrap();
        assert_eq!(
            expr,
            Expr::Sub(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_multiplication() {
        let expr = parse_expression_func("x * 2").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_division() {
        let expr = parse_expression_func("x / 2").unwrap();
        assert_eq!(
            expr,
            Expr::Div(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_power_doubled_star() {
        let expr = parse_expression_func("x**2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_power_caret() {
        let expr = parse_expression_func("x^2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_power_is_right_associative() {
        let expr = parse_expression_func("x**2**3").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Pow(
                    Box::new(Expr::Const(2.0)),
                    Box::new(Expr::Const(3.0))
                ))
            )
        );
    }

    #[test]
    fn test_coefficient_times_power() {
        let expr = parse_expression_func("2*x**2").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Const(2.0)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Const(2.0))
                ))
            )
        );
    }

    #[test]
    fn test_parse_exponential() {
        let expr = parse_expression_func("exp(x)").unwrap();
        assert_eq!(
            expr,
            Expr::Fun(Func::Exp, Box::new(Expr::Var("x".to_string())))
        );
    }

    #[test]
    fn test_parse_logarithm() {
        let expr = parse_expression_func("log(x)").unwrap();
        assert_eq!(
            expr,
            Expr::Fun(Func::Ln, Box::new(Expr::Var("x".to_string())))
        );
    }

    #[test]
    fn test_parse_sin() {
        let expr = parse_expression_func("sin(x)").unwrap();
        assert_eq!(
            expr,
            Expr::Fun(Func::Sin, Box::new(Expr::Var("x".to_string())))
        );
    }

    #[test]
    fn test_parse_tan_spellings() {
        assert_eq!(
            parse_expression_func("tan(x)").unwrap(),
            parse_expression_func("tg(x)").unwrap()
        );
    }

    #[test]
    fn test_parse_nested_trig() {
        let expr = parse_expression_func("sin(cos(x))").unwrap();
        assert_eq!(
            expr,
            Expr::Fun(
                Func::Sin,
                Box::new(Expr::Fun(Func::Cos, Box::new(Expr::Var("x".to_string()))))
            )
        );
    }

    #[test]
    fn test_parse_expression_with_brackets() {
        let expr = parse_expression_func("(x + y) * z").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Add(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Var("y".to_string()))
                )),
                Box::new(Expr::Var("z".to_string()))
            )
        );
    }

    #[test]
    fn test_unary_minus() {
        let expr = parse_expression_func("-x").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_non_ascii_symbol() {
        let expr = parse_expression_func("π+x").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Var("π".to_string())),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_non_ascii_coefficient_product() {
        let expr = parse_expression_func("π*x").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Var("π".to_string())),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_unary_minus_after_operator() {
        let expr = parse_expression_func("x*-2").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::Const(2.0))
                ))
            )
        );
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_expression_func("1e-5").unwrap(), Expr::Const(1e-5));
        assert_eq!(parse_expression_func("2.5e+3").unwrap(), Expr::Const(2500.0));
        assert_eq!(
            parse_expression_func("x - 1e-5").unwrap(),
            Expr::Var("x".to_string()) - Expr::Const(1e-5)
        );
    }

    #[test]
    fn test_multiple_terms() {
        let result = parse_expression_func("x**2 - x - 1").unwrap();
        let x = Box::new(Expr::Var("x".to_string()));
        let to_check =
            Expr::Pow(x.clone(), Box::new(Expr::Const(2.0))) - *x - Expr::Const(1.0);
        assert_eq!(result, to_check);
    }

    #[test]
    fn test_invalid_expression() {
        assert!(parse_expression_func("x + (").is_err());
    }

    #[test]
    fn test_unmatched_brackets() {
        assert!(parse_expression_func("(x + y").is_err());
    }

    #[test]
    fn test_unknown_function() {
        assert!(parse_expression_func("sinh(x)").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_expression_func("").is_err());
    }
}

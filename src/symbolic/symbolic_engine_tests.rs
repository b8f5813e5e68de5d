use crate::symbolic::symbolic_engine::{Expr, Func};
use approx::assert_relative_eq;

fn parse(s: &str) -> Expr {
    Expr::parse_expression(s).unwrap()
}

#[test]
fn test_symbols() {
    let vars = Expr::Symbols("x, y, z");
    assert_eq!(vars.len(), 3);
    assert_eq!(vars[0], Expr::Var("x".to_string()));
}

#[test]
fn test_symbols_macro() {
    let (x, y) = crate::symbols!(x, y);
    assert_eq!(x, Expr::Var("x".to_string()));
    assert_eq!(y, Expr::Var("y".to_string()));
}

#[test]
fn test_display() {
    let expr = parse("x + 2");
    assert_eq!(expr.to_string(), "(x + 2)");
    assert_eq!(parse("sin(x)").to_string(), "sin(x)");
}

#[test]
fn test_contains_variable() {
    let expr = parse("2*x**2 + sin(y)");
    assert!(expr.contains_variable("x"));
    assert!(expr.contains_variable("y"));
    assert!(!expr.contains_variable("z"));
}

#[test]
fn test_all_arguments_are_variables() {
    let expr = parse("x*y + x");
    assert_eq!(expr.all_arguments_are_variables(), vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn test_set_variable() {
    let expr = parse("x**2 + 1").set_variable("x", 3.0).simplify();
    assert_eq!(expr, Expr::Const(10.0));
}

#[test]
fn test_as_numer_denom_plain_quotient() {
    let (num, den) = parse("x/(x+1)").as_numer_denom();
    assert_eq!(num, Expr::Var("x".to_string()));
    assert_eq!(den, parse("x+1"));
}

#[test]
fn test_as_numer_denom_trivial() {
    let (_, den) = parse("2*x").as_numer_denom();
    assert!(den.is_one());
}

#[test]
fn test_as_numer_denom_negative_power() {
    // a quotient disguised as a product of a negative power
    let expr = Expr::Var("x".to_string())
        * Expr::Var("y".to_string()).pow(Expr::Const(-2.0));
    let (num, den) = expr.as_numer_denom();
    assert_eq!(num, Expr::Var("x".to_string()));
    assert_eq!(den, Expr::Var("y".to_string()).pow(Expr::Const(2.0)));
}

#[test]
fn test_as_terms_flattens_chain() {
    let terms = parse("x**2 + 2*x - 5").as_terms();
    assert_eq!(terms.len(), 3);
    assert_eq!(terms[2], (-1.0, Expr::Const(5.0)));
}

#[test]
fn test_as_terms_single() {
    let terms = parse("sin(x)").as_terms();
    assert_eq!(terms, vec![(1.0, parse("sin(x)"))]);
}

#[test]
fn test_func_names_round_trip() {
    for func in [Func::Exp, Func::Sin, Func::Cos, Func::Tg, Func::Arctg] {
        assert_eq!(Func::from_name(func.name()), Some(func));
    }
}

#[test]
fn test_eval1d_polynomial() {
    let f = parse("2*x**2 + 3*x");
    assert_relative_eq!(f.eval1d("x", 2.0).unwrap(), 14.0);
}

#[test]
fn test_eval1d_trig() {
    let f = parse("sin(x)");
    assert_relative_eq!(f.eval1d("x", std::f64::consts::PI / 2.0).unwrap(), 1.0);
}

#[test]
fn test_eval1d_unknown_variable() {
    assert!(parse("x + y").eval1d("x", 1.0).is_err());
}

#[test]
fn test_lambdify1D() {
    let f = parse("x**2").lambdify1D("x");
    assert_relative_eq!(f(3.0), 9.0);
}

#[test]
fn test_lambdify1D_domain_violation_is_nan() {
    let f = parse("ln(x)").lambdify1D("x");
    assert!(f(-1.0).is_nan());
}

#[test]
fn test_diff_constant_is_zero() {
    assert_eq!(parse("5").diff("x").simplify(), Expr::Const(0.0));
}

#[test]
fn test_diff_of_variable() {
    assert_eq!(parse("x").diff("x"), Expr::Const(1.0));
    assert_eq!(parse("y").diff("x"), Expr::Const(0.0));
}

#[test]
fn test_diff_sin() {
    let df = parse("sin(x)").diff("x").simplify();
    assert_eq!(df, parse("cos(x)"));
}

#[test]
fn test_diff_quotient_numerically() {
    // d/dx [x/(x+1)] = 1/(x+1)^2
    let f = parse("x/(x+1)");
    let df = f.diff("x").simplify();
    let expected = |x: f64| 1.0 / ((x + 1.0) * (x + 1.0));
    for x in [0.0, 0.5, 2.0] {
        assert_relative_eq!(df.eval1d("x", x).unwrap(), expected(x), max_relative = 1e-12);
    }
}

#[test]
fn test_diff_exp_chain() {
    // d/dx exp(2*x) = 2*exp(2*x)
    let df = parse("exp(2*x)").diff("x").simplify();
    assert_relative_eq!(df.eval1d("x", 1.0).unwrap(), 2.0 * (2.0f64).exp(), max_relative = 1e-12);
}

#[test]
fn test_integrate_x() {
    let exact = parse("x").definite_integrate("x", 0.0, 1.0).unwrap();
    assert_eq!(exact, Expr::Const(0.5));
}

#[test]
fn test_integrate_polynomial() {
    // ∫ (3x² + 1) dx over [0, 2] = 8 + 2 = 10
    let exact = parse("3*x**2 + 1").definite_integrate("x", 0.0, 2.0).unwrap();
    match exact {
        Expr::Const(val) => assert_relative_eq!(val, 10.0, max_relative = 1e-12),
        other => panic!("expected a constant, got {}", other),
    }
}

#[test]
fn test_integrate_cos() {
    let exact = parse("cos(x)")
        .definite_integrate("x", 0.0, std::f64::consts::PI / 2.0)
        .unwrap();
    match exact {
        Expr::Const(val) => assert_relative_eq!(val, 1.0, max_relative = 1e-12),
        other => panic!("expected a constant, got {}", other),
    }
}

#[test]
fn test_integrate_product_fails() {
    assert!(parse("x*sin(x)").integrate("x").is_err());
}

#[test]
fn test_quad_matches_exact() {
    let (numeric, est_error) = parse("x").quad("x", 0.0, 1.0).unwrap();
    assert_relative_eq!(numeric, 0.5, epsilon = 1e-6);
    assert!(est_error < 1e-6);
}

#[test]
fn test_quad_sin() {
    let (numeric, _) = parse("sin(x)").quad("x", 0.0, std::f64::consts::PI).unwrap();
    assert_relative_eq!(numeric, 2.0, epsilon = 1e-9);
}

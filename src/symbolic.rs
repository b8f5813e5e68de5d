#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use symcalc::symbolic::symbolic_engine::Expr;
/// let input = "2*x**2 + sin(x)";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let df_dx = parsed_expression.diff("x").simplify();
/// println!("{}, derivative: {}  \n", input, df_dx);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the symbolic expression tree `Expr` with its node kinds
/// 2) turns a symbolic expression into a string expression for printing and control of results
/// 3) decomposes an expression into numerator/denominator pairs for rule classification
///# Example#
/// ```
/// use symcalc::symbolic::symbolic_engine::Expr;
/// let input = "x/(x+1)";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// let (num, den) = parsed_expression.as_numer_denom();
/// println!("numerator {}, denominator {}", num, den);
/// ```
pub mod symbolic_engine;
/// differentiation, numeric evaluation and lambdification of symbolic expressions
///# Example#
/// ```
/// use symcalc::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("x**2 + exp(x)").unwrap();
/// let df_dx = f.diff("x").simplify();
/// let f_of_x = f.lambdify1D("x");
/// println!("df/dx = {}, f(1) = {}", df_dx, f_of_x(1.0));
/// ```
pub mod symbolic_engine_derivatives;
/// symbolic definite/indefinite integration and Gauss quadrature
///# Example#
/// ```
/// use symcalc::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("x").unwrap();
/// let exact = f.definite_integrate("x", 0.0, 1.0).unwrap();
/// let (numeric, est_error) = f.quad("x", 0.0, 1.0).unwrap();
/// println!("exact = {}, numeric = {} +/- {}", exact, numeric, est_error);
/// ```
pub mod symbolic_integration;
/// algebraic simplification: constant folding and identity rules
pub mod symbolic_simplify;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and linspace grids
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;

#[cfg(test)]
mod symbolic_engine_tests;

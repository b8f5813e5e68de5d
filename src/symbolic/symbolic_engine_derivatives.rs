//! # Symbolic Derivatives Module
//!
//! Extends the symbolic engine with analytical differentiation, numeric
//! evaluation and function conversion. It is the computational backbone of the
//! derivative calculator: the rule classifier narrates the top-level structure,
//! this module produces the actual derivative, and `eval1d`/`lambdify1D` turn
//! expressions into sampled curves for the chart renderer.
//!
//! ## Key Methods
//!
//! - `diff(var: &str)` - analytical derivative with respect to a variable
//! - `eval1d(var, x)` - numeric evaluation of a single-variable expression
//! - `lambdify1D(var)` - boxed closure for repeated evaluation
//! - `parse_expression(input)` - string to symbolic expression

use crate::symbolic::parse_expr::parse_expression_func;
use crate::symbolic::symbolic_engine::{Expr, Func};

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// Implements the standard differentiation rules from calculus:
    /// - Power rule: d/dx(f^g) for constant and variable exponents
    /// - Product rule: d/dx(f*g) = f'*g + f*g'
    /// - Quotient rule: d/dx(f/g) = (f'*g - f*g')/g^2
    /// - Chain rule: d/dx(f(g(x))) = f'(g(x))*g'(x)
    ///
    /// The result is not simplified; call `simplify()` on it for a readable form.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x**2").unwrap();
    /// let df_dx = f.diff("x").simplify(); // 2*x
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => {
                if exp.contains_variable(var) {
                    // general case via f^g = exp(g*ln(f))
                    let f_pow_g = self.clone();
                    let inner = Expr::Mul(
                        exp.clone(),
                        Box::new(Expr::Fun(Func::Ln, base.clone())),
                    );
                    Expr::Mul(Box::new(f_pow_g), Box::new(inner.diff(var)))
                } else {
                    // power rule with the chain factor for the base
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            exp.clone(),
                            Box::new(Expr::Pow(
                                base.clone(),
                                Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                            )),
                        )),
                        Box::new(base.diff(var)),
                    )
                }
            }
            Expr::Fun(func, arg) => Expr::Mul(
                Box::new(Self::outer_derivative(*func, arg)),
                Box::new(arg.diff(var)),
            ),
        }
    } // end of diff

    /// Derivative of a named function with respect to its own argument,
    /// i.e. the f'(u) factor of the chain rule.
    fn outer_derivative(func: Func, arg: &Expr) -> Expr {
        let u = Box::new(arg.clone());
        match func {
            Func::Exp => Expr::Fun(Func::Exp, u),
            Func::Ln => Expr::Div(Box::new(Expr::Const(1.0)), u),
            Func::Sqrt => Expr::Div(
                Box::new(Expr::Const(1.0)),
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(2.0)),
                    Box::new(Expr::Fun(Func::Sqrt, u)),
                )),
            ),
            Func::Sin => Expr::Fun(Func::Cos, u),
            Func::Cos => Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::Fun(Func::Sin, u)),
            ),
            Func::Tg => Expr::Div(
                Box::new(Expr::Const(1.0)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Fun(Func::Cos, u)),
                    Box::new(Expr::Const(2.0)),
                )),
            ),
            Func::Ctg => Expr::Div(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Fun(Func::Sin, u)),
                    Box::new(Expr::Const(2.0)),
                )),
            ),
            Func::Arcsin => Expr::Div(
                Box::new(Expr::Const(1.0)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::Pow(u, Box::new(Expr::Const(2.0)))),
                    )),
                    Box::new(Expr::Const(0.5)),
                )),
            ),
            Func::Arccos => Expr::Div(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::Pow(u, Box::new(Expr::Const(2.0)))),
                    )),
                    Box::new(Expr::Const(0.5)),
                )),
            ),
            Func::Arctg => Expr::Div(
                Box::new(Expr::Const(1.0)),
                Box::new(Expr::Add(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(u, Box::new(Expr::Const(2.0)))),
                )),
            ),
        }
    }

    /// EVALUATION

    /// Numerically evaluates a single-variable expression at a point.
    ///
    /// Follows IEEE semantics for partial functions (ln of a negative number
    /// is NaN, division by zero is infinite); a variable other than `var`
    /// appearing in the expression is an error.
    pub fn eval1d(&self, var: &str, x: f64) -> Result<f64, String> {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Ok(x)
                } else {
                    Err(format!("unknown variable '{}'", name))
                }
            }
            Expr::Const(val) => Ok(*val),
            Expr::Add(lhs, rhs) => Ok(lhs.eval1d(var, x)? + rhs.eval1d(var, x)?),
            Expr::Sub(lhs, rhs) => Ok(lhs.eval1d(var, x)? - rhs.eval1d(var, x)?),
            Expr::Mul(lhs, rhs) => Ok(lhs.eval1d(var, x)? * rhs.eval1d(var, x)?),
            Expr::Div(lhs, rhs) => Ok(lhs.eval1d(var, x)? / rhs.eval1d(var, x)?),
            Expr::Pow(base, exp) => Ok(base.eval1d(var, x)?.powf(exp.eval1d(var, x)?)),
            Expr::Fun(func, arg) => Ok(func.eval(arg.eval1d(var, x)?)),
        }
    }

    /// Converts a single-variable symbolic expression into an executable Rust closure.
    ///
    /// The resulting closure can be called repeatedly with different input values;
    /// evaluation failures surface as NaN so callers sampling a grid can apply
    /// their own fallback.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x**2").unwrap();
    /// let func = f.lambdify1D("x");
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self, var: &str) -> Box<dyn Fn(f64) -> f64> {
        let expr = self.clone();
        let var = var.to_string();
        Box::new(move |x| expr.eval1d(&var, x).unwrap_or(f64::NAN))
    } // end of lambdify1D

    /// PARSING

    /// Parses a string into a symbolic expression.
    ///
    /// The input must use explicit multiplication signs and `**` (or `^`) for
    /// powers; free-form calculator input goes through the input normalizer
    /// first.
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        parse_expression_func(input)
    }
}

//! # Symbolic Integration Module
//!
//! Table-driven symbolic integration plus Gauss-Legendre quadrature. The
//! symbolic side handles the textbook antiderivative table (power rule,
//! constant factoring, affine substitution, logarithmic patterns); shapes
//! outside the table return an error rather than a wrong answer. The numeric
//! side evaluates a definite integral on two quadrature orders and reports the
//! difference as the error estimate.

use crate::symbolic::symbolic_engine::{Expr, Func};
use gauss_quad::GaussLegendre;
use log::debug;

/// Quadrature orders used for the numeric definite integral. The coarse order
/// only serves the error estimate.
const QUAD_DEGREE_COARSE: usize = 32;
const QUAD_DEGREE_FINE: usize = 64;

impl Expr {
    /// SYMBOLIC INTEGRATION

    /// Main integration method - integrates with respect to a variable.
    /// Returns the indefinite integral (without constant of integration).
    /// This module deals with simple integrals; shapes with no entry in the
    /// table are an error.
    pub fn integrate(&self, var: &str) -> Result<Expr, String> {
        match self {
            // ∫ c dx = c*x
            Expr::Const(c) => Ok(Expr::Const(*c) * Expr::Var(var.to_string())),

            // ∫ x dx = x²/2, ∫ y dx = y*x (if y ≠ x)
            Expr::Var(name) => {
                if name == var {
                    Ok(Expr::Pow(
                        Box::new(Expr::Var(var.to_string())),
                        Box::new(Expr::Const(2.0)),
                    ) / Expr::Const(2.0))
                } else {
                    Ok(Expr::Var(name.clone()) * Expr::Var(var.to_string()))
                }
            }

            // ∫ (f ± g) dx = ∫ f dx ± ∫ g dx
            Expr::Add(lhs, rhs) => {
                let lhs_int = lhs.integrate(var)?;
                let rhs_int = rhs.integrate(var)?;
                Ok(lhs_int + rhs_int)
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_int = lhs.integrate(var)?;
                let rhs_int = rhs.integrate(var)?;
                Ok(lhs_int - rhs_int)
            }

            Expr::Mul(lhs, rhs) => self.integrate_multiplication(lhs, rhs, var),

            Expr::Div(lhs, rhs) => self.integrate_division(lhs, rhs, var),

            Expr::Pow(base, exp) => self.integrate_power(base, exp, var),

            Expr::Fun(func, arg) => self.integrate_function(*func, arg, var),
        }
    }

    /// Multiplication: a constant factor moves outside the integral; anything
    /// needing integration by parts is out of the table.
    fn integrate_multiplication(&self, lhs: &Expr, rhs: &Expr, var: &str) -> Result<Expr, String> {
        if !lhs.contains_variable(var) {
            let rhs_int = rhs.integrate(var)?;
            return Ok(lhs.clone() * rhs_int);
        }

        if !rhs.contains_variable(var) {
            let lhs_int = lhs.integrate(var)?;
            return Ok(rhs.clone() * lhs_int);
        }

        Err(format!("Cannot integrate product: {} * {}", lhs, rhs))
    }

    /// Division: constant denominator, the ∫ f'/f pattern and ∫ 1/x.
    fn integrate_division(&self, lhs: &Expr, rhs: &Expr, var: &str) -> Result<Expr, String> {
        // ∫ f(x)/c dx = (1/c) * ∫ f(x) dx
        if !rhs.contains_variable(var) {
            let lhs_int = lhs.integrate(var)?;
            return Ok(lhs_int / rhs.clone());
        }

        // ∫ f'(x)/f(x) dx = ln(f(x))
        if rhs.diff(var).simplify() == lhs.simplify() {
            return Ok(Expr::Fun(Func::Ln, Box::new(rhs.clone())));
        }

        // ∫ 1/x dx = ln(x)
        if let (Expr::Const(c), Expr::Var(x)) = (lhs, rhs) {
            if *c == 1.0 && x == var {
                return Ok(Expr::Fun(Func::Ln, Box::new(Expr::Var(var.to_string()))));
            }
        }

        Err(format!("Cannot integrate division: {} / {}", lhs, rhs))
    }

    /// Power integration: ∫ x^n, ∫ c^x and ∫ (ax+b)^n by affine substitution.
    fn integrate_power(&self, base: &Expr, exp: &Expr, var: &str) -> Result<Expr, String> {
        // ∫ x^n dx where n is constant
        if let (Expr::Var(x), Expr::Const(n)) = (base, exp) {
            if x == var {
                if (*n - (-1.0)).abs() < f64::EPSILON {
                    // ∫ x^(-1) dx = ln(x)
                    return Ok(Expr::Fun(Func::Ln, Box::new(Expr::Var(var.to_string()))));
                } else {
                    // ∫ x^n dx = x^(n+1)/(n+1)
                    let new_exp = Expr::Const(n + 1.0);
                    let integrated = Expr::Pow(
                        Box::new(Expr::Var(var.to_string())),
                        Box::new(new_exp.clone()),
                    ) / new_exp;
                    return Ok(integrated);
                }
            }
        }

        // ∫ c^x dx = c^x / ln(c) where c is a positive constant
        if let (Expr::Const(c), Expr::Var(x)) = (base, exp) {
            if x == var && *c > 0.0 && (*c - 1.0).abs() > f64::EPSILON {
                return Ok(Expr::Pow(
                    Box::new(Expr::Const(*c)),
                    Box::new(Expr::Var(var.to_string())),
                ) / Expr::Fun(Func::Ln, Box::new(Expr::Const(*c))));
            }
        }

        // base free of the variable: the whole power is a constant
        if !base.contains_variable(var) && !exp.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        // ∫ u^n dx = u^(n+1)/((n+1)*a) when u is affine with u' = a
        if let Expr::Const(n) = exp {
            if let Some(a) = base.affine_slope(var) {
                if (*n - (-1.0)).abs() < f64::EPSILON {
                    return Ok(Expr::Fun(Func::Ln, Box::new(base.clone())) / Expr::Const(a));
                }
                let new_exp = Expr::Const(n + 1.0);
                return Ok(Expr::Pow(Box::new(base.clone()), Box::new(new_exp.clone()))
                    / (new_exp * Expr::Const(a)));
            }
        }

        Err(format!("Cannot integrate power: ({})^({})", base, exp))
    }

    /// Named functions of an affine argument u = a*x + b: F(u)/a for the
    /// table antiderivative F.
    fn integrate_function(&self, func: Func, arg: &Expr, var: &str) -> Result<Expr, String> {
        // a function of something free of the variable is a constant
        if !arg.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        let a = match arg.affine_slope(var) {
            Some(a) => a,
            None => {
                return Err(format!(
                    "Cannot integrate {}({}): argument is not affine in {}",
                    func, arg, var
                ));
            }
        };
        let u = || Box::new(arg.clone());

        let antiderivative = match func {
            // ∫ exp(u) = exp(u)
            Func::Exp => Expr::Fun(Func::Exp, u()),
            // ∫ sin(u) = -cos(u)
            Func::Sin => -Expr::Fun(Func::Cos, u()),
            // ∫ cos(u) = sin(u)
            Func::Cos => Expr::Fun(Func::Sin, u()),
            // ∫ tg(u) = -ln(cos(u))
            Func::Tg => -Expr::Fun(Func::Ln, Box::new(Expr::Fun(Func::Cos, u()))),
            // ∫ ctg(u) = ln(sin(u))
            Func::Ctg => Expr::Fun(Func::Ln, Box::new(Expr::Fun(Func::Sin, u()))),
            // ∫ ln(u) = u*ln(u) - u
            Func::Ln => Expr::Mul(u(), Box::new(Expr::Fun(Func::Ln, u()))) - arg.clone(),
            // ∫ sqrt(u) = (2/3)*u^(3/2)
            Func::Sqrt => {
                Expr::Const(2.0 / 3.0)
                    * Expr::Pow(u(), Box::new(Expr::Const(1.5)))
            }
            // ∫ arctg(u) = u*arctg(u) - ln(1 + u²)/2
            Func::Arctg => {
                Expr::Mul(u(), Box::new(Expr::Fun(Func::Arctg, u())))
                    - Expr::Fun(
                        Func::Ln,
                        Box::new(Expr::Add(
                            Box::new(Expr::Const(1.0)),
                            Box::new(Expr::Pow(u(), Box::new(Expr::Const(2.0)))),
                        )),
                    ) / Expr::Const(2.0)
            }
            // ∫ arcsin(u) = u*arcsin(u) + sqrt(1 - u²)
            Func::Arcsin => {
                Expr::Mul(u(), Box::new(Expr::Fun(Func::Arcsin, u())))
                    + Expr::Fun(
                        Func::Sqrt,
                        Box::new(Expr::Sub(
                            Box::new(Expr::Const(1.0)),
                            Box::new(Expr::Pow(u(), Box::new(Expr::Const(2.0)))),
                        )),
                    )
            }
            // ∫ arccos(u) = u*arccos(u) - sqrt(1 - u²)
            Func::Arccos => {
                Expr::Mul(u(), Box::new(Expr::Fun(Func::Arccos, u())))
                    - Expr::Fun(
                        Func::Sqrt,
                        Box::new(Expr::Sub(
                            Box::new(Expr::Const(1.0)),
                            Box::new(Expr::Pow(u(), Box::new(Expr::Const(2.0)))),
                        )),
                    )
            }
        };

        Ok(antiderivative / Expr::Const(a))
    }

    /// Returns Some(a) when the expression is affine in the variable,
    /// i.e. its derivative simplifies to a non-zero constant a.
    fn affine_slope(&self, var: &str) -> Option<f64> {
        match self.diff(var).simplify() {
            Expr::Const(a) if a != 0.0 => Some(a),
            _ => None,
        }
    }

    /// DEFINITE INTEGRATION

    /// Exact definite integral over [lower, upper]: the antiderivative is
    /// evaluated symbolically at both bounds and the difference simplified,
    /// so polynomial cases come out as plain constants.
    pub fn definite_integrate(&self, var: &str, lower: f64, upper: f64) -> Result<Expr, String> {
        let indefinite = self.integrate(var)?;
        debug!("antiderivative of {}: {}", self, indefinite);
        let upper_val = indefinite.set_variable(var, upper).simplify();
        let lower_val = indefinite.set_variable(var, lower).simplify();
        Ok((upper_val - lower_val).simplify())
    }

    /// Numerical integration using Gauss-Legendre quadrature.
    ///
    /// Integrates on two quadrature orders and returns the fine value together
    /// with the coarse/fine difference as the error estimate, floored at
    /// machine epsilon so a zero estimate never over-promises.
    pub fn quad(&self, var: &str, lower: f64, upper: f64) -> Result<(f64, f64), String> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err("Gauss-Legendre quadrature is for finite intervals".to_string());
        }
        let f = self.lambdify1D(var);

        let coarse = GaussLegendre::new(QUAD_DEGREE_COARSE)
            .map_err(|e| format!("Failed to create Gauss-Legendre quadrature: {:?}", e))?
            .integrate(lower, upper, |x| f(x));
        let fine = GaussLegendre::new(QUAD_DEGREE_FINE)
            .map_err(|e| format!("Failed to create Gauss-Legendre quadrature: {:?}", e))?
            .integrate(lower, upper, |x| f(x));

        if !fine.is_finite() {
            return Err(format!("numeric integration of {} diverged", self));
        }
        let est_error = (fine - coarse).abs().max(f64::EPSILON);
        debug!("quad of {} over [{}, {}]: {} +/- {}", self, lower, upper, fine, est_error);
        Ok((fine, est_error))
    }
}

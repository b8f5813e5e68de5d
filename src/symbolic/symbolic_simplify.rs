//! # Symbolic Expression Simplification Module
//!
//! Algebraic simplification for symbolic expressions: constant folding plus the
//! usual identity rules (x + 0 = x, x * 1 = x, x * 0 = 0, x^1 = x, x^0 = 1,
//! x - x = 0), applied bottom-up and iterated to a fixed point. The derivative
//! calculator reports `diff(...).simplify()`; the rule trace is produced from
//! the unsimplified tree, so the two may legitimately disagree in appearance.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// Simplifies the expression by constant folding and identity rules.
    ///
    /// Applies `simplify_once` repeatedly until the expression stops changing.
    /// Rewrites never grow the tree, so the iteration terminates.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x**2").unwrap();
    /// assert_eq!(f.diff("x").simplify().to_string(), "(2 * x)");
    /// ```
    pub fn simplify(&self) -> Expr {
        let mut current = self.clone();
        loop {
            let next = current.simplify_once();
            if next == current {
                return next;
            }
            current = next;
        }
    }

    /// One bottom-up rewriting pass.
    fn simplify_once(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                    _ if lhs.is_zero() => rhs,
                    _ if rhs.is_zero() => lhs,
                    _ => Expr::Add(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Sub(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                    _ if rhs.is_zero() => lhs,
                    _ if lhs == rhs => Expr::Const(0.0),
                    _ if lhs.is_zero() => {
                        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(rhs))
                    }
                    _ => Expr::Sub(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Mul(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                    _ if lhs.is_zero() || rhs.is_zero() => Expr::Const(0.0),
                    _ if lhs.is_one() => rhs,
                    _ if rhs.is_one() => lhs,
                    // keep the constant coefficient on the left for readability
                    (_, Expr::Const(_)) if !matches!(lhs, Expr::Const(_)) => {
                        Expr::Mul(Box::new(rhs), Box::new(lhs))
                    }
                    _ => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Div(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) if *b != 0.0 => Expr::Const(a / b),
                    _ if rhs.is_one() => lhs,
                    _ if lhs.is_zero() && !rhs.is_zero() => Expr::Const(0.0),
                    _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Pow(base, exp) => {
                let base = base.simplify_once();
                let exp = exp.simplify_once();
                match (&base, &exp) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(*b)),
                    _ if exp.is_one() => base,
                    _ if exp.is_zero() => Expr::Const(1.0),
                    _ if base.is_one() => Expr::Const(1.0),
                    _ => Expr::Pow(Box::new(base), Box::new(exp)),
                }
            }
            Expr::Fun(func, arg) => {
                let arg = arg.simplify_once();
                if let Expr::Const(val) = arg {
                    let folded = func.eval(val);
                    if folded.is_finite() {
                        return Expr::Const(folded);
                    }
                }
                Expr::Fun(*func, Box::new(arg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Expr {
        Expr::parse_expression(s).unwrap()
    }

    #[test]
    fn test_constant_folding() {
        assert_eq!(parse("2 + 3 * 4").simplify(), Expr::Const(14.0));
    }

    #[test]
    fn test_add_zero() {
        assert_eq!(parse("x + 0").simplify(), Expr::Var("x".to_string()));
    }

    #[test]
    fn test_mul_one() {
        assert_eq!(parse("1 * x").simplify(), Expr::Var("x".to_string()));
    }

    #[test]
    fn test_mul_zero() {
        assert_eq!(parse("0 * (x + 1)").simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_pow_one() {
        assert_eq!(parse("x**1").simplify(), Expr::Var("x".to_string()));
    }

    #[test]
    fn test_pow_zero() {
        assert_eq!(parse("x**0").simplify(), Expr::Const(1.0));
    }

    #[test]
    fn test_sub_self() {
        assert_eq!(parse("x - x").simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_function_of_constant_folds() {
        assert_eq!(parse("sin(0)").simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_derivative_of_square_is_two_x() {
        let df = parse("x**2").diff("x").simplify();
        assert_eq!(df, Expr::Const(2.0) * Expr::Var("x".to_string()));
    }
}

//! # Symbolic Engine Module
//!
//! Core symbolic mathematics engine: expression trees for creating, printing and
//! restructuring algebraic formulas. It is the foundation the calculator pipelines
//! are built on: the parser produces `Expr` values, the classifier walks their
//! top-level structure, differentiation and integration consume them.
//!
//! ## Main Structures
//!
//! ### `Expr` Enum
//! The symbolic expression type supporting:
//! - **Variables**: `Var(String)` - symbolic variables like "x"
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//! - **Functions**: `Fun(Func, _)` - named unary functions (exp, ln, sin, ...)
//!
//! ### `Func` Enum
//! The catalogue of named unary functions the engine knows how to print,
//! evaluate and differentiate.
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: Uses Box<Expr> for nested expressions; each
//!    composite node owns its children outright, no sharing, no cycles
//!
//! 2. **Operator Overloading**: Implements std::ops traits (Add, Sub, Mul, Div) for
//!    natural mathematical syntax: `x + y * z`
//!
//! 3. **Quotient Decomposition**: `as_numer_denom` rewrites an expression as a
//!    numerator/denominator pair, mirroring how a CAS classifies quotients that
//!    are structurally products of negative powers

#![allow(non_camel_case_types)]

use std::fmt;

/// Named unary functions recognized by the parser, evaluator and differentiator.
///
/// Non-standard mathematical notation (tg, ctg) is used for printing the
/// tangent family, while the parser accepts both spellings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Func {
    Exp,
    Ln,
    Sqrt,
    Sin,
    Cos,
    Tg,
    Ctg,
    Arcsin,
    Arccos,
    Arctg,
}

impl Func {
    /// Canonical printed name of the function.
    pub fn name(&self) -> &'static str {
        match self {
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Sqrt => "sqrt",
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tg => "tg",
            Func::Ctg => "ctg",
            Func::Arcsin => "arcsin",
            Func::Arccos => "arccos",
            Func::Arctg => "arctg",
        }
    }

    /// Maps a spelled-out function name to the catalogue entry. Accepts both
    /// mathematical (tg, ctg, arctg) and programming (tan, cot, atan) spellings.
    pub fn from_name(name: &str) -> Option<Func> {
        match name {
            "exp" => Some(Func::Exp),
            "ln" | "log" => Some(Func::Ln),
            "sqrt" => Some(Func::Sqrt),
            "sin" => Some(Func::Sin),
            "cos" => Some(Func::Cos),
            "tg" | "tan" => Some(Func::Tg),
            "ctg" | "cot" => Some(Func::Ctg),
            "arcsin" | "asin" => Some(Func::Arcsin),
            "arccos" | "acos" => Some(Func::Arccos),
            "arctg" | "arctan" | "atan" => Some(Func::Arctg),
            _ => None,
        }
    }

    /// Numeric evaluation of the function at a point.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Func::Exp => x.exp(),
            Func::Ln => x.ln(),
            Func::Sqrt => x.sqrt(),
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tg => x.tan(),
            Func::Ctg => 1.0 / x.tan(),
            Func::Arcsin => x.asin(),
            Func::Arccos => x.acos(),
            Func::Arctg => x.atan(),
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Core symbolic expression enum representing mathematical expressions as an
/// abstract syntax tree.
///
/// Each variant represents a different type of mathematical construct, from simple
/// variables and constants to complex nested operations. The enum uses Box<Expr>
/// for recursive structures, allowing arbitrarily deep expression trees.
///
/// # Examples
/// ```rust, ignore
/// let x = Expr::Var("x".to_string());
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "x")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Named function application: f(argument)
    Fun(Func, Box<Expr>),
}

/// Display implementation for pretty printing symbolic expressions.
///
/// Converts expressions to human-readable mathematical notation with parentheses
/// for proper precedence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Fun(func, arg) => write!(f, "{}({})", func, arg),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// # Arguments
    /// * `symbols` - Comma-separated string of variable names (e.g., "x, y")
    ///
    /// # Returns
    /// Vector of Expr::Var instances for each variable name
    pub fn Symbols(symbols: &str) -> Vec<Expr> {
        symbols
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| Expr::Var(s.to_string()))
            .collect()
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Creates a named function application around this expression.
    pub fn fun(self, func: Func) -> Expr {
        Expr::Fun(func, self.boxed())
    }

    /// Checks if expression is exactly the constant 0.0.
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(val) if *val == 0.0)
    }

    /// Checks if expression is exactly the constant 1.0.
    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Const(val) if *val == 1.0)
    }

    /// Substitutes a variable with a constant value throughout the expression.
    ///
    /// Recursively traverses the expression tree and replaces all occurrences
    /// of the specified variable with the given constant value.
    ///
    /// # Arguments
    /// * `var` - Name of the variable to substitute
    /// * `value` - Numerical value to substitute for the variable
    ///
    /// # Returns
    /// New expression with the variable substituted
    pub fn set_variable(&self, var: &str, value: f64) -> Expr {
        match self {
            Expr::Var(name) if name == var => Expr::Const(value),
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => Expr::Add(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Mul(lhs, rhs) => Expr::Mul(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Pow(base, exp) => Expr::Pow(
                Box::new(base.set_variable(var, value)),
                Box::new(exp.set_variable(var, value)),
            ),
            Expr::Fun(func, arg) => Expr::Fun(*func, Box::new(arg.set_variable(var, value))),
        }
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            Expr::Const(_) => false,
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right)
            | Expr::Pow(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
            Expr::Fun(_, arg) => arg.contains_variable(var_name),
        }
    }

    /// Collects the names of all variables appearing in the expression,
    /// sorted and deduplicated.
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars.sort();
        vars.dedup();
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<String>) {
        match self {
            Expr::Var(name) => vars.push(name.clone()),
            Expr::Const(_) => {}
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right)
            | Expr::Pow(left, right) => {
                left.collect_variables(vars);
                right.collect_variables(vars);
            }
            Expr::Fun(_, arg) => arg.collect_variables(vars),
        }
    }

    //__________________________________STRUCTURAL DECOMPOSITION____________________________________

    /// Rewrites the expression as a (numerator, denominator) pair.
    ///
    /// A plain quotient splits directly; a product combines the decompositions
    /// of its factors; a power with a negative constant exponent moves into the
    /// denominator with the sign of the exponent flipped. Every other shape has
    /// the trivial denominator 1. This mirrors how a CAS fraction-decomposes an
    /// expression, so a quotient hidden inside a product of negative powers is
    /// still recognized as a quotient.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x/(x+1)").unwrap();
    /// let (num, den) = f.as_numer_denom();
    /// assert!(!den.is_one());
    /// ```
    pub fn as_numer_denom(&self) -> (Expr, Expr) {
        match self {
            Expr::Div(num, den) => (*num.clone(), *den.clone()),
            Expr::Mul(lhs, rhs) => {
                let (ln, ld) = lhs.as_numer_denom();
                let (rn, rd) = rhs.as_numer_denom();
                let num = if ln.is_one() {
                    rn
                } else if rn.is_one() {
                    ln
                } else {
                    ln * rn
                };
                let den = if ld.is_one() {
                    rd
                } else if rd.is_one() {
                    ld
                } else {
                    ld * rd
                };
                (num, den)
            }
            Expr::Pow(base, exp) => match exp.as_ref() {
                Expr::Const(n) if *n < 0.0 => {
                    (Expr::Const(1.0), base.as_ref().clone().pow(Expr::Const(-*n)))
                }
                _ => (self.clone(), Expr::Const(1.0)),
            },
            _ => (self.clone(), Expr::Const(1.0)),
        }
    }

    /// Flattens the top-level chain of additions and subtractions into signed
    /// terms. Subtraction contributes its right operand with a flipped sign.
    /// Only the top level is flattened; a parenthesized sum deeper in the tree
    /// stays a single term.
    pub fn as_terms(&self) -> Vec<(f64, Expr)> {
        let mut terms = Vec::new();
        self.collect_terms(1.0, &mut terms);
        terms
    }

    fn collect_terms(&self, sign: f64, terms: &mut Vec<(f64, Expr)>) {
        match self {
            Expr::Add(lhs, rhs) => {
                lhs.collect_terms(sign, terms);
                rhs.collect_terms(sign, terms);
            }
            Expr::Sub(lhs, rhs) => {
                lhs.collect_terms(sign, terms);
                rhs.collect_terms(-sign, terms);
            }
            _ => terms.push((sign, self.clone())),
        }
    }
}

//___________________________________MACROS____________________________________

/// Macro to create symbolic variables from a comma-separated list
/// Usage: symbols!(x, y) -> creates variables x, y
#[macro_export]
macro_rules! symbols {
    ($($var:ident),+ $(,)?) => {
        {
            let var_names = stringify!($($var),+);
            let vars = Expr::Symbols(var_names);
            let mut iter = vars.into_iter();
            ($(
                {
                    let $var = iter.next().unwrap();
                    $var
                }
            ),+)
        }
    };
}

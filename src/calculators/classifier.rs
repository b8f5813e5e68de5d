//! Rule classifier for the derivative calculator: walks the top-level
//! structure of a parsed expression and narrates which calculus rule applies
//! at each decomposition point, while the actual derivative is delegated to
//! the symbolic engine.
//!
//! The dispatch is a single pass over mutually exclusive, exhaustively ordered
//! structural cases. Order matters: an expression can be a quotient and a
//! product at the same time (a product carrying a negative power), so the
//! denominator check runs before the product check. The ordering is part of
//! the contract even where it classifies such products as quotients.
//!
//! The rule trace always describes the original tree. The reported derivative
//! is simplified afterwards, so the trace may mention sub-expressions that
//! look different from the final answer; that is accepted behavior.

use crate::symbolic::symbolic_engine::Expr;
use itertools::Itertools;
use log::debug;
use strum_macros::Display;

/// The calculus rule named by one classification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rule {
    #[strum(serialize = "sum rule")]
    Sum,
    #[strum(serialize = "quotient rule")]
    Quotient,
    #[strum(serialize = "product rule")]
    Product,
    #[strum(serialize = "power rule")]
    Power,
    #[strum(serialize = "chain rule")]
    Chain,
    #[strum(serialize = "derivative of the variable")]
    Symbol,
    #[strum(serialize = "derivative of a constant")]
    Constant,
    #[strum(serialize = "direct derivative")]
    Direct,
}

/// One entry of the rule trace: which rule fired and the sentence shown to
/// the user. Steps are appended in classification order and consumed once by
/// the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleStep {
    pub rule: Rule,
    pub text: String,
}

impl RuleStep {
    fn new(rule: Rule, text: String) -> Self {
        RuleStep { rule, text }
    }
}

/// Classifies the expression and produces its derivative together with the
/// ordered rule trace.
pub fn explain_derivative(expr: &Expr, var: &str) -> (Expr, Vec<RuleStep>) {
    let mut steps = Vec::new();
    let derivative = classify(expr, var, &mut steps);
    debug!("classified {} into {} step(s)", expr, steps.len());
    (derivative, steps)
}

fn classify(expr: &Expr, var: &str, steps: &mut Vec<RuleStep>) -> Expr {
    // sum of several terms: narrate once, then recurse per term to gather the
    // sub-steps of the top term set
    let terms = expr.as_terms();
    if terms.len() > 1 {
        steps.push(RuleStep::new(
            Rule::Sum,
            format!(
                "sum rule: differentiate each of the terms {} separately and add the results",
                terms.iter().map(|(_, term)| term.to_string()).join(", ")
            ),
        ));
        let mut derivative = Expr::Const(0.0);
        for (sign, term) in &terms {
            let term_derivative = classify(term, var, steps);
            if *sign < 0.0 {
                derivative = derivative - term_derivative;
            } else {
                derivative = derivative + term_derivative;
            }
        }
        return derivative;
    }

    // quotient check BEFORE the product check: a product carrying a negative
    // power decomposes into a non-trivial denominator and must be narrated as
    // a quotient
    let (num, den) = expr.as_numer_denom();
    if !den.is_one() {
        steps.push(RuleStep::new(
            Rule::Quotient,
            format!(
                "quotient rule: d/d{var}[u/v] = (u'*v - u*v')/v^2 with u = {num} and v = {den}"
            ),
        ));
        return expr.diff(var);
    }

    match expr {
        Expr::Mul(lhs, rhs) => {
            steps.push(RuleStep::new(
                Rule::Product,
                format!(
                    "product rule: d/d{var}[u*v] = u'*v + u*v' with u = {lhs} and v = {rhs}"
                ),
            ));
            expr.diff(var)
        }
        Expr::Pow(base, exp) => {
            let base_derivative = base.diff(var).simplify();
            steps.push(RuleStep::new(
                Rule::Power,
                format!(
                    "power rule: d/d{var}[{base}^{exp}] = {exp}*{base}^({exp} - 1) times {base_derivative}, the derivative of the base"
                ),
            ));
            expr.diff(var)
        }
        Expr::Fun(func, arg) => {
            steps.push(RuleStep::new(
                Rule::Chain,
                format!(
                    "chain rule: differentiate {func}(u) with u = {arg}, then multiply by the derivative of u"
                ),
            ));
            expr.diff(var)
        }
        Expr::Var(name) => {
            if name == var {
                steps.push(RuleStep::new(
                    Rule::Symbol,
                    format!("the derivative of {var} is 1"),
                ));
            } else {
                steps.push(RuleStep::new(
                    Rule::Symbol,
                    format!("{name} does not depend on {var}, its derivative is 0"),
                ));
            }
            expr.diff(var)
        }
        Expr::Const(c) => {
            steps.push(RuleStep::new(
                Rule::Constant,
                format!("the derivative of the constant {c} is 0"),
            ));
            Expr::Const(0.0)
        }
        other => {
            steps.push(RuleStep::new(
                Rule::Direct,
                format!("direct derivative of {other}"),
            ));
            expr.diff(var)
        }
    }
}

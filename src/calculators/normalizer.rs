//! Input normalizer: rewrites user-typed expression strings into the explicit
//! form the expression parser requires. Free-form calculator input habitually
//! drops multiplication signs (`2x`, `3(x+1)` typed as `)2` chains) and uses
//! `^` for powers; the parser wants `**` and explicit `*` everywhere.
//!
//! The rewrite is a pure, total text transform: it never fails and never
//! validates. Semantically invalid input passes through and is rejected later
//! by the parser.

use regex::Regex;
use std::sync::LazyLock;

// Each insertion rule is an independent regex pass; the passes run in a fixed
// order over the whole string, so a pair matched by one rule is not
// re-examined by the next and nothing is inserted twice.
static DIGIT_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)([a-zA-Z])").unwrap());
static PAREN_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\))(\d)").unwrap());
static LETTER_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z])(\d)").unwrap());

/// Normalizes a raw expression string:
///
/// 1. `^` becomes the doubled power operator `**`
/// 2. a digit directly followed by a letter gets a `*` (`2x` -> `2*x`)
/// 3. a closing parenthesis directly followed by a digit gets a `*` (`)2` -> `)*2`)
/// 4. a letter directly followed by a digit gets a `*` (`x2` -> `x*2`)
///
/// Idempotent: already-normalized input comes back unchanged.
pub fn normalize(raw: &str) -> String {
    let step = raw.replace('^', "**");
    let step = DIGIT_LETTER.replace_all(&step, "$1*$2");
    let step = PAREN_DIGIT.replace_all(&step, "$1*$2");
    let step = LETTER_DIGIT.replace_all(&step, "$1*$2");
    step.into_owned()
}

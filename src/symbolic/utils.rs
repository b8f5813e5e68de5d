// the collection of utility functions mainly for bracket parsing and proceeding

/// finds the rightmost occurrence of any of the given single-char operators at
/// bracket depth zero. A '*' that is part of the two-char power operator "**"
/// is not an occurrence, and neither is a '+'/'-' gluing a sign to its operand.
/// Positions are byte offsets, so callers can slice the input at them even
/// when it carries multi-byte symbols.
pub fn find_rightmost_operator_outside_brackets(
    input: &str,
    operators: &[char],
) -> Option<(usize, char)> {
    let bytes = input.as_bytes();
    let mut bracket_depth = 0;
    let mut last_op = None;

    for (i, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            _ if bracket_depth == 0 && operators.contains(&c) => {
                if c == '*' {
                    let doubled = (i > 0 && bytes[i - 1] == b'*')
                        || (i + 1 < bytes.len() && bytes[i + 1] == b'*');
                    if doubled {
                        continue;
                    }
                }
                if (c == '+' || c == '-') && is_unary_sign(bytes, i) {
                    continue;
                }
                last_op = Some((i, c)); // Updates to LAST match
            }
            _ => {}
        }
    }

    last_op
}

/// true when the '+'/'-' at `pos` is a sign rather than a binary operator:
/// directly after another operator or an opening bracket (`x*-2`), or the
/// exponent sign of a scientific-notation literal (`1e-5`).
fn is_unary_sign(bytes: &[u8], pos: usize) -> bool {
    let mut j = pos;
    while j > 0 {
        j -= 1;
        if bytes[j] == b' ' {
            continue;
        }
        if (bytes[j] == b'e' || bytes[j] == b'E') && j > 0 && bytes[j - 1].is_ascii_digit() {
            return pos + 1 < bytes.len() && bytes[pos + 1].is_ascii_digit();
        }
        return matches!(bytes[j], b'+' | b'-' | b'*' | b'/' | b'^' | b'(');
    }
    false
}

/// finds the leftmost power operator outside brackets, either "**" or '^'.
/// Returns (position, operator length). The leftmost split keeps the power
/// operator right-associative.
pub fn find_power_operator_outside_brackets(input: &str) -> Option<(usize, usize)> {
    let bytes = input.as_bytes();
    let mut bracket_depth = 0;
    for i in 0..bytes.len() {
        match bytes[i] {
            b'(' => bracket_depth += 1,
            b')' => bracket_depth -= 1,
            b'*' if bracket_depth == 0 && i + 1 < bytes.len() && bytes[i + 1] == b'*' => {
                return Some((i, 2));
            }
            b'^' if bracket_depth == 0 => return Some((i, 1)),
            _ => {}
        }
    }
    None
}

/// finds the byte position of the closing bracket pairing the bracket that
/// opens the given prefix of the input
pub fn find_pair_to_this_bracket(input: &str, bracket_start: usize) -> Option<usize> {
    let mut stack = bracket_start;
    for (i, c) in input.char_indices() {
        if c == '(' {
            stack += 1;
        } else if c == ')' {
            stack -= 1;
            if stack == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// true when the whole string is one balanced bracketed group, e.g. "(x + 1)"
/// but not "(x) + (1)"
pub fn wrapped_in_brackets(input: &str) -> bool {
    if !(input.starts_with('(') && input.ends_with(')')) {
        return false;
    }
    match find_pair_to_this_bracket(input, 0) {
        Some(end) => end == input.len() - 1,
        None => false,
    }
}

pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(num_values);
    let step = (end - start) / (num_values as f64 - 1.0);

    for i in 0..num_values {
        let value = start + (i as f64 * step);
        values.push(value);
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_position_is_a_byte_offset() {
        // 'π' occupies two bytes, so the '+' sits at byte 2
        assert_eq!(
            find_rightmost_operator_outside_brackets("π+x", &['+', '-']),
            Some((2, '+'))
        );
    }

    #[test]
    fn test_multibyte_neighbour_is_not_a_doubled_star() {
        assert_eq!(
            find_rightmost_operator_outside_brackets("π*x", &['*', '/']),
            Some((2, '*'))
        );
    }

    #[test]
    fn test_doubled_star_is_skipped() {
        assert_eq!(
            find_rightmost_operator_outside_brackets("x**2", &['*', '/']),
            None
        );
    }

    #[test]
    fn test_operator_inside_brackets_is_skipped() {
        assert_eq!(
            find_rightmost_operator_outside_brackets("(x+1)", &['+', '-']),
            None
        );
    }

    #[test]
    fn test_sign_after_operator_is_unary() {
        assert_eq!(
            find_rightmost_operator_outside_brackets("x*-2", &['+', '-']),
            None
        );
        assert_eq!(
            find_rightmost_operator_outside_brackets("(-x)", &['+', '-']),
            None
        );
    }

    #[test]
    fn test_exponent_sign_is_not_an_operator() {
        assert_eq!(
            find_rightmost_operator_outside_brackets("1e-5", &['+', '-']),
            None
        );
        assert_eq!(
            find_rightmost_operator_outside_brackets("x - 1e-5", &['+', '-']),
            Some((2, '-'))
        );
    }

    #[test]
    fn test_leading_minus_is_still_reported() {
        // the parser's unary-minus branch relies on seeing it
        assert_eq!(
            find_rightmost_operator_outside_brackets("-x", &['+', '-']),
            Some((0, '-'))
        );
    }

    #[test]
    fn test_power_operator_positions() {
        assert_eq!(find_power_operator_outside_brackets("x**2"), Some((1, 2)));
        assert_eq!(find_power_operator_outside_brackets("x^2"), Some((1, 1)));
        assert_eq!(find_power_operator_outside_brackets("(x**2)"), None);
    }

    #[test]
    fn test_wrapped_in_brackets_multibyte() {
        assert!(wrapped_in_brackets("(π + x)"));
        assert!(!wrapped_in_brackets("(x) + (π)"));
    }
}

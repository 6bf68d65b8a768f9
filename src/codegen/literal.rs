//! # Value Encoders
//!
//! Pure functions turning captured values into Python literals that evaluate
//! back to the same value inside the host. Floats use Rust's shortest
//! round-trip formatting, so every `f32` survives exactly.

use std::fmt::Write as _;

/// Python string literal in double quotes.
pub fn py_str(s: &str) -> String {
    quote(s, '"')
}

/// Python string literal in single quotes, used for enum identifiers.
pub fn py_enum(s: &str) -> String {
    quote(s, '\'')
}

fn quote(s: &str, delim: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    escape_into(&mut out, s, delim);
    out.push(delim);
    out
}

/// Body of a double-quoted string without the quotes, for docstrings.
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s, '"');
    out
}

fn escape_into(out: &mut String, s: &str, delim: char) {
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xff {
                    let _ = write!(out, "\\x{code:02x}");
                } else {
                    let _ = write!(out, "\\u{code:04x}");
                }
            }
            c => out.push(c),
        }
    }
}

pub fn py_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

pub fn py_int(i: i64) -> String {
    i.to_string()
}

pub fn py_float(f: f32) -> String {
    if f.is_nan() {
        String::from("float('nan')")
    } else if f.is_infinite() {
        if f > 0.0 {
            String::from("float('inf')")
        } else {
            String::from("float('-inf')")
        }
    } else {
        format!("{f:?}")
    }
}

pub fn py_double(f: f64) -> String {
    if f.is_nan() {
        String::from("float('nan')")
    } else if f.is_infinite() {
        if f > 0.0 {
            String::from("float('inf')")
        } else {
            String::from("float('-inf')")
        }
    } else {
        format!("{f:?}")
    }
}

/// Python tuple of floats. A single component keeps its trailing comma.
pub fn py_vec(values: &[f32]) -> String {
    match values {
        [] => String::from("()"),
        [x] => format!("({},)", py_float(*x)),
        _ => {
            let parts: Vec<String> = values.iter().map(|v| py_float(*v)).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// Python tuple of exactly `n` floats, `None` if `values` has another length.
pub fn py_vec_n(values: &[f32], n: usize) -> Option<String> {
    (values.len() == n).then(|| py_vec(values))
}

/// Four-component color tuple. RGB inputs get an opaque alpha.
pub fn py_color(values: &[f32]) -> Option<String> {
    match values.len() {
        4 => Some(py_vec(values)),
        3 => Some(py_vec(&[values[0], values[1], values[2], 1.0])),
        _ => None,
    }
}

/// Python set of enum identifiers.
pub fn py_enum_set<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return String::from("set()");
    }
    let parts: Vec<String> = items.iter().map(|i| py_enum(i.as_ref())).collect();
    format!("{{{}}}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strings_are_escaped() {
        assert_eq!(py_str("Principled BSDF"), "\"Principled BSDF\"");
        assert_eq!(py_str("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(py_str("a\\b\nc"), "\"a\\\\b\\nc\"");
        assert_eq!(py_str("it's"), "\"it's\"");
        assert_eq!(py_str("\u{7}"), "\"\\x07\"");
        assert_eq!(py_str("Größe"), "\"Größe\"");
    }

    #[test]
    fn bare_escapes_keep_backslashes_and_quotes_apart() {
        assert_eq!(escape_str(r#"C:\New "x""#), r#"C:\\New \"x\""#);
        assert_eq!(escape_str("line\nbreak"), "line\\nbreak");
    }

    #[test]
    fn enums_use_single_quotes() {
        assert_eq!(py_enum("MULTI_GGX"), "'MULTI_GGX'");
        assert_eq!(py_enum("it's"), "'it\\'s'");
    }

    #[test]
    fn floats_keep_a_decimal_point() {
        assert_eq!(py_float(1.0), "1.0");
        assert_eq!(py_float(0.5), "0.5");
        assert_eq!(py_float(-0.0), "-0.0");
        assert_eq!(py_float(f32::INFINITY), "float('inf')");
        assert_eq!(py_float(f32::NEG_INFINITY), "float('-inf')");
        assert_eq!(py_float(f32::NAN), "float('nan')");
    }

    #[test]
    fn vectors_and_colors() {
        assert_eq!(py_vec(&[0.25]), "(0.25,)");
        assert_eq!(py_vec(&[1.0, 2.0]), "(1.0, 2.0)");
        assert_eq!(py_vec_n(&[1.0, 2.0], 3), None);
        assert_eq!(
            py_color(&[0.2, 0.4, 0.6, 1.0]).as_deref(),
            Some("(0.2, 0.4, 0.6, 1.0)")
        );
        assert_eq!(py_color(&[0.0, 0.0, 0.0]).as_deref(), Some("(0.0, 0.0, 0.0, 1.0)"));
        assert_eq!(py_color(&[0.0]), None);
    }

    #[test]
    fn enum_sets() {
        assert_eq!(py_enum_set::<&str>(&[]), "set()");
        assert_eq!(py_enum_set(&["X", "Z"]), "{'X', 'Z'}");
    }

    proptest! {
        #[test]
        fn finite_floats_round_trip(bits in any::<u32>()) {
            let value = f32::from_bits(bits);
            prop_assume!(value.is_finite());
            let literal = py_float(value);
            let parsed: f32 = literal.parse().unwrap();
            prop_assert_eq!(parsed.to_bits(), value.to_bits());
        }

        #[test]
        fn quoted_strings_never_contain_raw_newlines(s in ".*") {
            let literal = py_str(&s);
            prop_assert!(!literal.contains('\n'));
            prop_assert!(literal.starts_with('"') && literal.ends_with('"'));
        }
    }
}

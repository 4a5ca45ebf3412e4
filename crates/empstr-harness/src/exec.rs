//! Fixture execution: run one case against `empstr-core` and render the result.
//!
//! Rendering rules:
//! - predicates: `true` / `false`
//! - byte mappings: the resulting byte as a decimal number
//! - lengths and search hits: decimal index, `none` when not found
//! - in-place string operations: the resulting string up to its NUL
//! - numeric parsers: the value, or `value,consumed` for the `strto*` forms.
//!   Under `strict` the same shapes come from the checked parsers, and a
//!   failure renders `error:<message>`. The `*_clamped` integer forms
//!   saturate and render the same way in both modes.

use serde_json::Value;

use empstr_core::ParseMode;
use empstr_core::ctype;
use empstr_core::stdlib::{self, Parsed};
use empstr_core::string::{self, strlen};

use crate::error::HarnessError;

/// Execute `function` with `inputs` under `mode` and render its output.
pub fn execute_case(
    function: &str,
    inputs: &Value,
    mode: ParseMode,
) -> Result<String, HarnessError> {
    let out = match function {
        "is_lower" => render_bool(ctype::is_lower(byte_input(function, inputs, "ch")?)),
        "is_upper" => render_bool(ctype::is_upper(byte_input(function, inputs, "ch")?)),
        "is_alpha" => render_bool(ctype::is_alpha(byte_input(function, inputs, "ch")?)),
        "is_digit" => render_bool(ctype::is_digit(byte_input(function, inputs, "ch")?)),
        "is_space" => render_bool(ctype::is_space(byte_input(function, inputs, "ch")?)),
        "to_lower" => ctype::to_lower(byte_input(function, inputs, "ch")?).to_string(),
        "to_upper" => ctype::to_upper(byte_input(function, inputs, "ch")?).to_string(),

        "strlen" => strlen(&str_input(function, inputs, "s")?).to_string(),
        "streq" => {
            let (a, b) = pair(function, inputs)?;
            render_bool(string::streq(&a, &b))
        }
        "strceq" => {
            let (a, b) = pair(function, inputs)?;
            render_bool(string::strceq(&a, &b))
        }
        "strneq" => {
            let (a, b) = pair(function, inputs)?;
            render_bool(string::strneq(&a, &b, usize_input(function, inputs, "n")?))
        }
        "strcneq" => {
            let (a, b) = pair(function, inputs)?;
            render_bool(string::strcneq(&a, &b, usize_input(function, inputs, "n")?))
        }
        "strstr" | "strcstr" => {
            let hay = str_input(function, inputs, "haystack")?;
            let needle = str_input(function, inputs, "needle")?;
            let hit = if function == "strstr" {
                string::strstr(&hay, &needle)
            } else {
                string::strcstr(&hay, &needle)
            };
            hit.map_or_else(|| "none".to_string(), |i| i.to_string())
        }

        "strlwr" | "strupr" | "strcapitalize" => {
            let mut s = str_input(function, inputs, "s")?;
            match function {
                "strlwr" => string::strlwr(&mut s),
                "strupr" => string::strupr(&mut s),
                _ => string::strcapitalize(&mut s),
            };
            render_str(&s, 0)
        }
        "lstrip" => {
            let s = str_input(function, inputs, "s")?;
            render_str(&s, string::lstrip(&s))
        }
        "rstrip" => {
            let mut s = str_input(function, inputs, "s")?;
            string::rstrip(&mut s);
            render_str(&s, 0)
        }
        "strip" => {
            let mut s = str_input(function, inputs, "s")?;
            let start = string::strip(&mut s);
            render_str(&s, start)
        }

        "stol" | "strtol" | "stod" | "strtod" => {
            let s = str_input(function, inputs, "s")?;
            let with_end = function.starts_with("strto");
            let integer = function.ends_with('l');
            match (mode, integer) {
                (ParseMode::Strict, true) => render_checked(stdlib::stol_checked(&s), with_end),
                (ParseMode::Strict, false) => render_checked(stdlib::stod_checked(&s), with_end),
                (ParseMode::Compat, true) => {
                    let (val, len) = stdlib::strtol(&s);
                    render_number(val, len, with_end)
                }
                (ParseMode::Compat, false) => {
                    let (val, len) = stdlib::strtod(&s);
                    render_number(val, len, with_end)
                }
            }
        }
        "stol_clamped" | "strtol_clamped" => {
            let s = str_input(function, inputs, "s")?;
            let (val, len) = stdlib::strtol_clamped(&s);
            render_number(val, len, function.starts_with("strto"))
        }

        other => return Err(HarnessError::UnknownFunction(other.to_string())),
    };
    Ok(out)
}

fn render_bool(b: bool) -> String {
    b.to_string()
}

fn render_str(buf: &[u8], start: usize) -> String {
    let tail = &buf[start..];
    String::from_utf8_lossy(&tail[..strlen(tail)]).into_owned()
}

fn render_number<T: std::fmt::Display>(value: T, consumed: usize, with_end: bool) -> String {
    if with_end {
        format!("{value},{consumed}")
    } else {
        value.to_string()
    }
}

fn render_checked<T: std::fmt::Display>(
    result: Result<Parsed<T>, empstr_core::ParseError>,
    with_end: bool,
) -> String {
    match result {
        Ok(Parsed { value, consumed }) => render_number(value, consumed, with_end),
        Err(err) => format!("error:{err}"),
    }
}

fn bad_input(function: &str, field: &'static str) -> HarnessError {
    HarnessError::BadInput {
        function: function.to_string(),
        field,
    }
}

/// A string input as a NUL-terminated byte buffer.
fn str_input(function: &str, inputs: &Value, field: &'static str) -> Result<Vec<u8>, HarnessError> {
    let s = inputs
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| bad_input(function, field))?;
    let mut buf = s.as_bytes().to_vec();
    buf.push(0);
    Ok(buf)
}

fn pair(function: &str, inputs: &Value) -> Result<(Vec<u8>, Vec<u8>), HarnessError> {
    Ok((
        str_input(function, inputs, "a")?,
        str_input(function, inputs, "b")?,
    ))
}

fn byte_input(function: &str, inputs: &Value, field: &'static str) -> Result<u8, HarnessError> {
    inputs
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| bad_input(function, field))
}

fn usize_input(function: &str, inputs: &Value, field: &'static str) -> Result<usize, HarnessError> {
    inputs
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| bad_input(function, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(function: &str, inputs: Value) -> String {
        execute_case(function, &inputs, ParseMode::Compat).unwrap()
    }

    #[test]
    fn renders_each_family() {
        assert_eq!(run("is_alpha", json!({"ch": 65})), "true");
        assert_eq!(run("to_lower", json!({"ch": 65})), "97");
        assert_eq!(run("strlen", json!({"s": "hello"})), "5");
        assert_eq!(run("strceq", json!({"a": "Hello", "b": "HELLO"})), "true");
        assert_eq!(run("strneq", json!({"a": "ab", "b": "ab", "n": 3})), "false");
        assert_eq!(run("strstr", json!({"haystack": "hello", "needle": "xyz"})), "none");
        assert_eq!(run("strcapitalize", json!({"s": "heLlo"})), "Hello");
        assert_eq!(run("strip", json!({"s": "  hi  "})), "hi");
        assert_eq!(run("stol", json!({"s": "  -42abc"})), "-42");
        assert_eq!(run("strtod", json!({"s": "3.14xyz"})), "3.14,4");
        assert_eq!(run("stod", json!({"s": "5"})), "5");
    }

    #[test]
    fn strict_mode_renders_errors() {
        let out = execute_case("stol", &json!({"s": "abc"}), ParseMode::Strict).unwrap();
        assert_eq!(out, "error:no digits to parse");
        let out = execute_case("stol", &json!({"s": " 7x"}), ParseMode::Strict).unwrap();
        assert_eq!(out, "7");
        let out = execute_case("strtol", &json!({"s": " 7x"}), ParseMode::Strict).unwrap();
        assert_eq!(out, "7,2");
    }

    #[test]
    fn clamped_forms_saturate_in_both_modes() {
        for mode in [ParseMode::Compat, ParseMode::Strict] {
            let big = json!({"s": "9223372036854775808"});
            let out = execute_case("stol_clamped", &big, mode).unwrap();
            assert_eq!(out, "9223372036854775807");
            let small = json!({"s": "-9223372036854775809x"});
            let out = execute_case("strtol_clamped", &small, mode).unwrap();
            assert_eq!(out, "-9223372036854775808,20");
        }
        assert_eq!(run("stol", json!({"s": "9223372036854775808"})), "-9223372036854775808");
    }

    #[test]
    fn unknown_function_and_bad_input() {
        let err = execute_case("strtok", &json!({}), ParseMode::Compat).unwrap_err();
        assert!(matches!(err, HarnessError::UnknownFunction(name) if name == "strtok"));

        let err = execute_case("to_upper", &json!({"ch": 300}), ParseMode::Compat).unwrap_err();
        assert!(matches!(err, HarnessError::BadInput { field: "ch", .. }));

        let err = execute_case("strlen", &json!({"s": 5}), ParseMode::Compat).unwrap_err();
        assert!(matches!(err, HarnessError::BadInput { field: "s", .. }));
    }
}

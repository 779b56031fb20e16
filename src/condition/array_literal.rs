//! Brace-delimited array literal text for binding a list as one parameter.

use super::ScalarValue;

/// Encodes `items` as an array literal such as `{1,"a b",null}`.
///
/// Strings are quoted when empty, equal to `null`, or containing a comma,
/// brace, quote, backslash or whitespace. Inside quotes, backslashes and
/// quotes are backslash-escaped. Null elements become the bare token `null`.
#[must_use]
pub fn encode(items: &[ScalarValue]) -> String {
    let mut out = String::from("{");
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        match item {
            ScalarValue::Utf8(text) if needs_quoting(text) => push_quoted(&mut out, text),
            other => out.push_str(&other.to_string()),
        }
    }
    out.push('}');
    out
}

fn needs_quoting(text: &str) -> bool {
    text.is_empty()
        || text == "null"
        || text
            .chars()
            .any(|c| matches!(c, ',' | '{' | '}' | '\\' | '"') || c.is_whitespace())
}

fn push_quoted(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        if matches!(c, '\\' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

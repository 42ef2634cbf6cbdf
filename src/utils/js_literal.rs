use serde_json::Value;

/// Encode `value` as a JavaScript string literal that is safe inside `<script>`.
///
/// JSON string syntax is valid JavaScript; `<`, `>` and `&` are additionally
/// written as unicode escapes so the value can never close the script element.
pub fn js_string_literal(value: &str) -> String {
    Value::String(value.to_owned())
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifier() {
        assert_eq!(js_string_literal("mod-unwetterwarnung-7"), "\"mod-unwetterwarnung-7\"");
    }

    #[test]
    fn test_cannot_close_script() {
        let out = js_string_literal("x</script><script>alert(1)</script>");
        assert!(!out.contains('<'));
        assert!(out.contains("\\u003c/script\\u003e"));
    }

    #[test]
    fn test_parses_back_as_json() {
        let raw = "quote \" backslash \\ line\nbreak & <b>";
        let decoded: String = serde_json::from_str(&js_string_literal(raw)).unwrap();
        assert_eq!(decoded, raw);
    }
}

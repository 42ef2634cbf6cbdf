/// Parse a module switch the way the CMS stores them (`"1"`, `"0"`, `"yes"`, ...)
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) => {
            let t = v.trim().to_lowercase();
            if t.is_empty() {
                default
            } else {
                matches!(t.as_str(), "1" | "true" | "yes" | "on")
            }
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_values() {
        for v in ["1", "true", "YES", " on "] {
            assert!(parse_flag(Some(v), false), "{v} should be truthy");
        }
    }

    #[test]
    fn test_falsy_and_default() {
        assert!(!parse_flag(Some("0"), true));
        assert!(!parse_flag(Some("off"), true));
        assert!(parse_flag(Some("  "), true));
        assert!(!parse_flag(None, false));
    }
}

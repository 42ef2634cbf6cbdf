/// Parse a non-negative number of seconds, e.g. the module's `cache_time`
pub fn parse_seconds(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            t.parse::<u32>().ok()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds(Some(" 900 ")), Some(900));
        assert_eq!(parse_seconds(Some("-5")), None);
        assert_eq!(parse_seconds(Some("soon")), None);
        assert_eq!(parse_seconds(Some("")), None);
        assert_eq!(parse_seconds(None), None);
    }
}

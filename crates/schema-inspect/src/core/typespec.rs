//! Native type specification parsing.

/// Split a native type specification into type, size and scale.
///
/// The spec is lower-cased first. Anything inside the parentheses is split
/// on the first comma; size and scale stay raw strings here and are coerced
/// later, when the column descriptor is built.
///
/// ```
/// use schema_inspect::core::parse_type_spec;
///
/// assert_eq!(
///     parse_type_spec("NUMERIC(10,2)"),
///     ("numeric".to_string(), Some("10".to_string()), Some("2".to_string()))
/// );
/// assert_eq!(parse_type_spec("text"), ("text".to_string(), None, None));
/// ```
pub fn parse_type_spec(spec: &str) -> (String, Option<String>, Option<String>) {
    let spec = spec.to_lowercase();

    let Some(pos) = spec.find('(') else {
        return (spec, None, None);
    };

    let data_type = spec[..pos].trim_end().to_string();

    // tolerate a missing or doubled closing paren
    let inner = spec[pos..].trim_matches(|c| c == '(' || c == ')');

    match inner.split_once(',') {
        Some((size, scale)) => (
            data_type,
            Some(size.trim().to_string()),
            Some(scale.trim().to_string()),
        ),
        None => (data_type, Some(inner.trim().to_string()), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(spec: &str) -> (String, Option<String>, Option<String>) {
        parse_type_spec(spec)
    }

    #[test]
    fn test_no_parens() {
        assert_eq!(parts("INTEGER"), ("integer".into(), None, None));
        assert_eq!(
            parts("character varying"),
            ("character varying".into(), None, None)
        );
    }

    #[test]
    fn test_size_only() {
        assert_eq!(
            parts("varchar(255)"),
            ("varchar".into(), Some("255".into()), None)
        );
    }

    #[test]
    fn test_size_and_scale() {
        assert_eq!(
            parts("numeric(10,2)"),
            ("numeric".into(), Some("10".into()), Some("2".into()))
        );
        assert_eq!(
            parts("DECIMAL(12, 4)"),
            ("decimal".into(), Some("12".into()), Some("4".into()))
        );
    }

    #[test]
    fn test_missing_closing_paren() {
        assert_eq!(
            parts("varchar(64"),
            ("varchar".into(), Some("64".into()), None)
        );
        assert_eq!(
            parts("numeric(8,3"),
            ("numeric".into(), Some("8".into()), Some("3".into()))
        );
    }

    #[test]
    fn test_only_first_comma_splits() {
        assert_eq!(
            parts("foo(1,2,3)"),
            ("foo".into(), Some("1".into()), Some("2,3".into()))
        );
    }
}

//! Column descriptor construction.

use tracing::trace;

use super::schema::{ColumnDescriptor, ColumnSpec, DefaultValue};

/// Builds [`ColumnDescriptor`]s from normalized column fields.
///
/// This is the one place raw catalog strings become typed values: size and
/// scale are parsed to integers and the default literal is coerced to the
/// category of the declared type. Dialects only produce a [`ColumnSpec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnFactory;

impl ColumnFactory {
    pub fn new() -> Self {
        Self
    }

    /// Build a descriptor, consuming the spec.
    pub fn build(&self, spec: ColumnSpec) -> ColumnDescriptor {
        let size = spec.size.as_deref().and_then(parse_unsigned);
        // scale is meaningless without a size
        let scale = size
            .and(spec.scale.as_deref())
            .and_then(parse_unsigned)
            .and_then(|s| u32::try_from(s).ok());

        let default = spec.default.and_then(|literal| {
            let coerced = DefaultValue::coerce(literal.clone(), &spec.data_type);
            if coerced.is_none() {
                trace!(
                    "Column {}: default {:?} does not fit type {}, dropped",
                    spec.name,
                    literal,
                    spec.data_type
                );
            }
            coerced
        });

        ColumnDescriptor {
            name: spec.name,
            data_type: spec.data_type,
            size,
            scale,
            not_null: spec.not_null,
            default,
            auto_increment: spec.auto_increment,
            primary_key: spec.primary_key,
            options: spec.options,
        }
    }
}

fn parse_unsigned(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    raw.parse::<u64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|f| *f >= 0.0).map(|f| f as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, data_type: &str) -> ColumnSpec {
        ColumnSpec {
            name: name.to_string(),
            data_type: data_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_coerces_size_and_scale() {
        let mut s = spec("price", "numeric");
        s.size = Some("10".into());
        s.scale = Some("2".into());
        s.not_null = true;

        let col = ColumnFactory::new().build(s);
        assert_eq!(col.name, "price");
        assert_eq!(col.data_type, "numeric");
        assert_eq!(col.size, Some(10));
        assert_eq!(col.scale, Some(2));
        assert!(col.not_null);
    }

    #[test]
    fn test_scale_dropped_without_size() {
        let mut s = spec("x", "numeric");
        s.scale = Some("2".into());
        let col = ColumnFactory::new().build(s);
        assert_eq!(col.size, None);
        assert_eq!(col.scale, None);
    }

    #[test]
    fn test_unparseable_size_is_absent() {
        let mut s = spec("x", "varchar");
        s.size = Some("max".into());
        assert_eq!(ColumnFactory::new().build(s).size, None);
    }

    #[test]
    fn test_default_coerced_by_type() {
        let mut s = spec("count", "int");
        s.default = Some("42".into());
        assert_eq!(
            ColumnFactory::new().build(s).default,
            Some(DefaultValue::Int(42))
        );

        let mut s = spec("ratio", "double");
        s.default = Some("1.5".into());
        assert_eq!(
            ColumnFactory::new().build(s).default,
            Some(DefaultValue::Float(1.5))
        );

        let mut s = spec("status", "varchar");
        s.default = Some("active".into());
        assert_eq!(
            ColumnFactory::new().build(s).default,
            Some(DefaultValue::Text("active".into()))
        );
    }

    #[test]
    fn test_flags_and_options_pass_through() {
        let mut s = spec("kind", "enum");
        s.auto_increment = false;
        s.primary_key = true;
        s.options = Some(vec!["a".into(), "b".into()]);
        let col = ColumnFactory::new().build(s);
        assert!(col.primary_key);
        assert!(!col.auto_increment);
        assert_eq!(col.options, Some(vec!["a".to_string(), "b".to_string()]));
    }
}

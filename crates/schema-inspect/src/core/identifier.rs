//! Identifier validation, quoting and splitting.
//!
//! Identifiers cannot be bound as statement parameters, so catalog SQL that
//! names a schema or table (`SHOW TABLES IN ...`, `sp_columns`) embeds them
//! quoted. Quoting wraps each dot-separated part in the dialect's prefix and
//! suffix characters and doubles any embedded suffix character.
//!
//! Aliases are not understood: `users AS u` is quoted as one identifier.
//! Callers that need alias-safe quoting split on `AS` themselves.

use crate::error::{InspectError, Result};

/// Maximum identifier length (conservative limit across databases).
/// - PostgreSQL: 63 bytes
/// - SQL Server: 128 characters
/// - MySQL: 64 characters
const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Validate an identifier.
///
/// Rejects empty identifiers, identifiers containing null bytes and
/// identifiers exceeding the maximum length.
///
/// # Errors
///
/// Returns `InspectError::Config` for invalid identifiers with a descriptive message.
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(InspectError::Config(
            "Identifier cannot be empty".to_string(),
        ));
    }

    if name.contains('\0') {
        return Err(InspectError::Config(format!(
            "Identifier contains null byte: {:?}",
            name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(InspectError::Config(format!(
            "Identifier exceeds maximum length of {} bytes (got {} bytes): {:?}",
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        )));
    }

    Ok(())
}

/// Quote a possibly dotted identifier with the given delimiters.
///
/// The name is trimmed, then split at its last dot; both sides are quoted
/// recursively. A dot at position 0 does not split.
///
/// ```
/// use schema_inspect::core::quote_name;
///
/// assert_eq!(quote_name("a.b", "`", "`"), "`a`.`b`");
/// assert_eq!(quote_name(" x ", "`", "`"), "`x`");
/// assert_eq!(quote_name("dbo.orders", "[", "]"), "[dbo].[orders]");
/// ```
pub fn quote_name(name: &str, prefix: &str, suffix: &str) -> String {
    let name = name.trim();

    match name.rfind('.') {
        Some(pos) if pos > 0 => format!(
            "{}.{}",
            quote_name(&name[..pos], prefix, suffix),
            quote_name(&name[pos + 1..], prefix, suffix)
        ),
        _ => {
            let escaped = if suffix.is_empty() {
                name.to_string()
            } else {
                name.replace(suffix, &suffix.repeat(2))
            };
            format!("{}{}{}", prefix, escaped, suffix)
        }
    }
}

/// Split a table spec at its first dot into `(schema, name)`.
///
/// `"a.b.c"` yields `(Some("a"), "b.c")`.
pub fn split_name(name: &str) -> (Option<&str>, &str) {
    match name.split_once('.') {
        Some((schema, table)) => (Some(schema), table),
        None => (None, name),
    }
}

//! Folding of repeated catalog rows.
//!
//! The information-schema column query LEFT JOINs key constraints, so a
//! column appears once per matching constraint (and once with NULLs when
//! there is none). A column in a composite primary key plus a foreign key
//! shows up twice, with different `_primary` values.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::core::schema::CatalogColumnRow;

/// Fold catalog rows into one row per column name.
///
/// Names keep their first-seen order. The first row for a name is kept as
/// is; later rows only contribute their primary-key flag (logical OR).
pub fn merge_rows<I>(rows: I) -> IndexMap<String, CatalogColumnRow>
where
    I: IntoIterator<Item = CatalogColumnRow>,
{
    rows.into_iter().fold(IndexMap::new(), |mut merged, row| {
        match merged.entry(row.name.clone()) {
            Entry::Occupied(mut existing) => {
                existing.get_mut().primary_key |= row.primary_key;
            }
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
        }
        merged
    })
}

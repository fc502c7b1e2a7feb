//! ID generation utilities.

use uuid::Uuid;

/// Generates a new UUID v7 as a string.
///
/// This is the format used for internally minted tab ids. UUID v7 is
/// time-ordered, so ids minted later sort after earlier ones.
#[must_use]
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

//! Client-side advisory identifiers.

use uuid::Uuid;

/// A 36-character GUID in canonical 8-4-4-4-12 hyphenated hexadecimal form.
///
/// Values are random version-4 identifiers. They are advisory client-side
/// ids, not authenticated tokens; collisions are possible and acceptable.
pub fn guid() -> String {
    Uuid::new_v4().as_hyphenated().to_string()
}

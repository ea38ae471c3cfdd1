#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A user profile as returned by the placeholder API.
///
/// The payload carries more fields than this (email, address, company, ...);
/// only the ones the UI consumes are decoded and the rest are ignored. No
/// shape validation happens: absent fields fall back to their defaults, so a
/// record without a name renders as empty display text.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

use crate::domain::dictionary::FlatDictionary;

/// Serializes a value into its flat wire keys (unprefixed).
pub trait ToDictionary {
    fn to_dictionary(&self) -> FlatDictionary;
}

/// Rebuilds a value from its flat wire keys.
///
/// Decoding is permissive: missing keys fall back to documented defaults and
/// never fail.
pub trait FromDictionary: Sized {
    fn from_dictionary(dict: &FlatDictionary) -> Self;
}

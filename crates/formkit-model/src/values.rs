//! Respondent value map and the synthesized keys of composite fields.

use std::collections::BTreeMap;

use serde_json::Value;

/// Current entries keyed by field id or synthesized sub-key.
///
/// An absent key means "not answered yet". A present `null` is an answer.
pub type ValueMap = BTreeMap<String, Value>;

/// Parts of an address field, each stored under its own sub-key.
pub const ADDRESS_PARTS: [&str; 3] = ["street", "city", "zip"];

/// Sub-key for one part of an address field (`"{id}_street"`).
pub fn address_part(field_id: &str, part: &str) -> String {
    format!("{field_id}_{part}")
}

/// Sub-key holding the free-text companion of an "Other" choice.
pub fn other_text(field_id: &str) -> String {
    format!("{field_id}_other")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_keys_are_prefixed_by_field_id() {
        assert_eq!(address_part("f1", "city"), "f1_city");
        assert_eq!(other_text("f1"), "f1_other");
    }
}

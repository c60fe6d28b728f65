//! Storage key namespace: `{collection}:edit_mode` and `{collection}:override`.

use entity::collection::CollectionKind;

const EDIT_MODE_SUFFIX: &str = "edit_mode";
const OVERRIDE_SUFFIX: &str = "override";

pub fn edit_mode_key(kind: CollectionKind) -> String {
    format!("{}:{}", kind.key(), EDIT_MODE_SUFFIX)
}

pub fn override_key(kind: CollectionKind) -> String {
    format!("{}:{}", kind.key(), OVERRIDE_SUFFIX)
}

/// Every key the content tiers write, for all collections.
pub fn all_keys() -> Vec<String> {
    CollectionKind::ALL
        .into_iter()
        .flat_map(|kind| [edit_mode_key(kind), override_key(kind)])
        .collect()
}

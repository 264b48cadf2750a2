//! Item id generation.

use uuid::Uuid;

/// Returns a new string id, unique among all ids generated for the life of
/// the process.
pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<String> = (0..200).map(|_| new_item_id()).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_ids_are_non_empty() {
        assert!(!new_item_id().is_empty());
    }
}

pub mod criteria;
pub mod patterns;
pub mod requirements;
pub mod stakeholders;
pub mod story;

pub use criteria::*;
pub use patterns::*;
pub use requirements::*;
pub use stakeholders::*;
pub use story::*;

use std::collections::HashSet;

/// Drop exact duplicates, keeping the first occurrence of each string
pub(crate) fn dedup_preserving_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_preserving_order() {
        let items = vec!["b", "a", "b", "c", "a"]
            .into_iter()
            .map(String::from);

        assert_eq!(dedup_preserving_order(items), vec!["b", "a", "c"]);
    }
}

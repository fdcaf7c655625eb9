//! # Category Display Ordering
//!
//! Merges the store's category list with its pin set and priority list into
//! the single order shown in the category navigation.
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Display Order Derivation                             │
//! │                                                                         │
//! │  categories     = [A, B, favorites, C]                                 │
//! │  category_order = [C, A]                                               │
//! │  pinned         = {B}                                                  │
//! │                                                                         │
//! │  1. Partition      favorites │ [A, B, C]                               │
//! │  2. Priority sort            │ [C, A, B]   (B absent → after C, A)     │
//! │  3. Pin partition            │ pinned [B]  unpinned [C, A]             │
//! │  4. Concatenate    [favorites, B, C, A]                                │
//! │                                                                         │
//! │  The sort is stable: absent names keep their input order, and pinned   │
//! │  / unpinned groups keep the priority order.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The result is a pure function of its inputs. [`DisplayOrderCache`] only
//! skips recomputation when the inputs are equal to the previous call.

use std::collections::{HashMap, HashSet};

/// Derives the display order of categories.
///
/// `favorites` names the reserved pseudo-category; it is placed first when
/// present in `categories`, regardless of pin or priority data. Names in
/// `category_order` that are not categories are ignored.
pub fn derive_display_order(
    categories: &[String],
    pinned: &[String],
    category_order: &[String],
    favorites: &str,
) -> Vec<String> {
    let mut rank: HashMap<&str, usize> = HashMap::with_capacity(category_order.len());
    for (i, name) in category_order.iter().enumerate() {
        rank.entry(name.as_str()).or_insert(i);
    }

    let (head, mut rest): (Vec<&String>, Vec<&String>) =
        categories.iter().partition(|c| c.as_str() == favorites);

    // slice::sort_by_key is stable
    rest.sort_by_key(|c| rank.get(c.as_str()).copied().unwrap_or(usize::MAX));

    let pinned: HashSet<&str> = pinned.iter().map(String::as_str).collect();
    let (pinned_rest, unpinned_rest): (Vec<&String>, Vec<&String>) =
        rest.into_iter().partition(|c| pinned.contains(c.as_str()));

    head.into_iter()
        .take(1)
        .chain(pinned_rest)
        .chain(unpinned_rest)
        .cloned()
        .collect()
}

// =============================================================================
// Memoization
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderingKey {
    categories: Vec<String>,
    pinned: Vec<String>,
    category_order: Vec<String>,
    favorites: String,
}

impl OrderingKey {
    fn matches(
        &self,
        categories: &[String],
        pinned: &[String],
        category_order: &[String],
        favorites: &str,
    ) -> bool {
        self.categories == categories
            && self.pinned == pinned
            && self.category_order == category_order
            && self.favorites == favorites
    }
}

/// Caches the last derived order keyed by equality of the input tuple.
#[derive(Debug, Default)]
pub struct DisplayOrderCache {
    key: Option<OrderingKey>,
    value: Vec<String>,
    recomputations: u64,
}

impl DisplayOrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the display order, recomputing only when an input changed.
    pub fn get(
        &mut self,
        categories: &[String],
        pinned: &[String],
        category_order: &[String],
        favorites: &str,
    ) -> &[String] {
        let hit = self
            .key
            .as_ref()
            .is_some_and(|k| k.matches(categories, pinned, category_order, favorites));

        if !hit {
            self.value = derive_display_order(categories, pinned, category_order, favorites);
            self.key = Some(OrderingKey {
                categories: categories.to_vec(),
                pinned: pinned.to_vec(),
                category_order: category_order.to_vec(),
                favorites: favorites.to_string(),
            });
            self.recomputations += 1;
        }

        &self.value
    }

    /// Number of times the order was actually derived.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reference_ordering() {
        let order = derive_display_order(
            &names(&["A", "B", "favorites", "C"]),
            &names(&["B"]),
            &names(&["C", "A"]),
            "favorites",
        );
        assert_eq!(order, names(&["favorites", "B", "C", "A"]));
    }

    #[test]
    fn test_favorites_first_even_if_ranked_or_pinned() {
        let order = derive_display_order(
            &names(&["Drinks", "favorites", "Rice"]),
            &names(&["favorites", "Rice"]),
            &names(&["Rice", "Drinks", "favorites"]),
            "favorites",
        );
        assert_eq!(order, names(&["favorites", "Rice", "Drinks"]));
    }

    #[test]
    fn test_absent_names_keep_input_order() {
        let order = derive_display_order(
            &names(&["D", "C", "B", "A"]),
            &[],
            &names(&["A"]),
            "favorites",
        );
        assert_eq!(order, names(&["A", "D", "C", "B"]));
    }

    #[test]
    fn test_stale_order_entries_ignored() {
        let order = derive_display_order(
            &names(&["Soup", "Noodles"]),
            &[],
            &names(&["Deleted", "Noodles", "Gone"]),
            "favorites",
        );
        assert_eq!(order, names(&["Noodles", "Soup"]));
    }

    #[test]
    fn test_pinned_groups_keep_priority_order() {
        let order = derive_display_order(
            &names(&["A", "B", "C", "D"]),
            &names(&["D", "B"]),
            &names(&["D", "C", "B", "A"]),
            "favorites",
        );
        assert_eq!(order, names(&["D", "B", "C", "A"]));
    }

    #[test]
    fn test_without_favorites_category() {
        let order = derive_display_order(&names(&["B", "A"]), &names(&["A"]), &[], "favorites");
        assert_eq!(order, names(&["A", "B"]));
    }

    #[test]
    fn test_cache_recomputes_only_on_change() {
        let mut cache = DisplayOrderCache::new();
        let categories = names(&["A", "B", "favorites"]);
        let pinned = names(&["B"]);
        let order: Vec<String> = Vec::new();

        let first = cache.get(&categories, &pinned, &order, "favorites").to_vec();
        let second = cache.get(&categories, &pinned, &order, "favorites").to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.recomputations(), 1);

        let pinned = names(&["A"]);
        let third = cache.get(&categories, &pinned, &order, "favorites").to_vec();
        assert_eq!(third, names(&["favorites", "A", "B"]));
        assert_eq!(cache.recomputations(), 2);
    }
}

//! Search & Sort Derivation
//!
//! Pure helpers that derive the displayed view from the item collection.
//! Filtering and sorting are view-only; the store keeps insertion order.

use crate::models::Item;

/// Sort options offered by the list header selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Insertion order (newest first)
    #[default]
    Default,
    /// Title A-Z
    TitleAsc,
    /// Title Z-A
    TitleDesc,
}

impl SortOrder {
    /// Parse a `<select>` value; unknown values fall back to insertion order
    pub fn parse(value: &str) -> Self {
        match value {
            "asc" => Self::TitleAsc,
            "desc" => Self::TitleDesc,
            _ => Self::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::TitleAsc => "asc",
            Self::TitleDesc => "desc",
        }
    }
}

/// Case-insensitive substring match of the trimmed term against title or body.
/// An empty term selects everything.
pub fn filter_items(items: &[Item], term: &str) -> Vec<Item> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.body.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable lexicographic sort on title; `Default` preserves the incoming order
pub fn sort_items(mut items: Vec<Item>, order: SortOrder) -> Vec<Item> {
    match order {
        SortOrder::Default => {}
        SortOrder::TitleAsc => items.sort_by(|a, b| a.title.cmp(&b.title)),
        SortOrder::TitleDesc => items.sort_by(|a, b| b.title.cmp(&a.title)),
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u64, title: &str, body: &str) -> Item {
        Item::new(id, title.to_string(), body.to_string())
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item(1, "Charlie", "notes about ABC"),
            make_item(2, "alpha", "second entry"),
            make_item(3, "Bravo", "contains abc too"),
        ]
    }

    #[test]
    fn test_filter_matches_title_or_body_case_insensitive() {
        let hits = filter_items(&sample(), "abc");
        assert_eq!(hits.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);

        let hits = filter_items(&sample(), "ALPHA");
        assert_eq!(hits.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_filter_trims_term_and_empty_selects_all() {
        assert_eq!(filter_items(&sample(), "  abc  ").len(), 2);
        assert_eq!(filter_items(&sample(), "").len(), 3);
        assert_eq!(filter_items(&sample(), "   ").len(), 3);
    }

    #[test]
    fn test_filter_no_matches() {
        assert!(filter_items(&sample(), "zzz").is_empty());
    }

    #[test]
    fn test_sort_orders_by_title() {
        let asc = sort_items(sample(), SortOrder::TitleAsc);
        assert_eq!(
            asc.iter().map(|i| i.title.as_str()).collect::<Vec<_>>(),
            vec!["Bravo", "Charlie", "alpha"]
        );

        let desc = sort_items(sample(), SortOrder::TitleDesc);
        assert_eq!(
            desc.iter().map(|i| i.title.as_str()).collect::<Vec<_>>(),
            vec!["alpha", "Charlie", "Bravo"]
        );
    }

    #[test]
    fn test_sort_default_preserves_insertion_order() {
        let kept = sort_items(sample(), SortOrder::Default);
        assert_eq!(kept, sample());
    }

    #[test]
    fn test_sort_is_stable_on_equal_titles() {
        let items = vec![
            make_item(1, "same", "a"),
            make_item(2, "same", "b"),
            make_item(3, "same", "c"),
        ];
        let sorted = sort_items(items.clone(), SortOrder::TitleAsc);
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_sort_order_parse_round_trip() {
        assert_eq!(SortOrder::parse("asc"), SortOrder::TitleAsc);
        assert_eq!(SortOrder::parse("desc"), SortOrder::TitleDesc);
        assert_eq!(SortOrder::parse("default"), SortOrder::Default);
        assert_eq!(SortOrder::parse("garbage"), SortOrder::Default);
        for order in [SortOrder::Default, SortOrder::TitleAsc, SortOrder::TitleDesc] {
            assert_eq!(SortOrder::parse(order.as_str()), order);
        }
    }
}

//! Category derivation and filtering for a loaded menu.
//!
//! Pure and stateless: categories are collected once per menu load, and the
//! filter keeps source order.

use crate::models::MenuItem;

/// Sentinel selection meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Bucket for items whose category is missing.
pub const DEFAULT_CATEGORY: &str = "Other";

fn category_label(item: &MenuItem) -> &str {
    item.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
}

/// Distinct category labels in source order, with [`ALL_CATEGORIES`]
/// prepended. Items without a category contribute [`DEFAULT_CATEGORY`].
pub fn categories(items: &[MenuItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        let label = category_label(item);
        if !seen.iter().any(|c| c == label) {
            seen.push(label.to_string());
        }
    }

    let mut out = Vec::with_capacity(seen.len() + 1);
    out.push(ALL_CATEGORIES.to_string());
    out.extend(seen);
    out
}

/// Items whose (defaulted) category equals `selection`, in source order.
/// The [`ALL_CATEGORIES`] sentinel returns the full list unchanged.
pub fn filter_by_category(items: &[MenuItem], selection: &str) -> Vec<MenuItem> {
    if selection == ALL_CATEGORIES {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| category_label(item) == selection)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: Option<&str>) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            price: 100.0,
            description: None,
            category: category.map(String::from),
            original_price: None,
        }
    }

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            item("a", Some("Starters")),
            item("b", Some("Mains")),
            item("c", None),
            item("d", Some("Starters")),
            item("e", None),
        ]
    }

    #[test]
    fn categories_are_distinct_in_source_order_with_all_first() {
        let cats = categories(&sample_menu());
        assert_eq!(cats, vec!["all", "Starters", "Mains", "Other"]);
    }

    #[test]
    fn all_sentinel_returns_the_list_unchanged() {
        let menu = sample_menu();
        let filtered = filter_by_category(&menu, ALL_CATEGORIES);
        assert_eq!(filtered, menu);
    }

    #[test]
    fn filtering_by_category_keeps_only_matches() {
        let menu = sample_menu();
        let starters = filter_by_category(&menu, "Starters");
        let ids: Vec<&str> = starters.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn missing_categories_match_the_default_bucket() {
        let menu = sample_menu();
        let other = filter_by_category(&menu, DEFAULT_CATEGORY);
        let ids: Vec<&str> = other.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "e"]);
    }

    #[test]
    fn empty_menu_yields_only_the_sentinel() {
        assert_eq!(categories(&[]), vec!["all"]);
        assert!(filter_by_category(&[], "Starters").is_empty());
    }
}

//! Category selection from command-line flags.

use wago_core::CategoryRequest;

use crate::cli::Cli;

/// Extracted when no category is selected.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["food", "drinks", "potions"];

/// Raw category keys from `--categories` plus the shortcut flags, in flag order.
pub fn selected_keys(cli: &Cli) -> Vec<String> {
    let mut keys = cli.categories.clone();
    for (enabled, key) in [(cli.food, "food"), (cli.drinks, "drinks"), (cli.potions, "potions")] {
        if enabled {
            keys.push(key.to_string());
        }
    }
    keys
}

/// Normalizes raw keys into requests, falling back to [`DEFAULT_CATEGORIES`].
///
/// Keys that parse to the same category select it once, named by the first
/// spelling: `weapons WEAPON weapon` gives a single `weapons`.
pub fn normalize_categories<S: AsRef<str>>(raw: &[S]) -> Vec<CategoryRequest> {
    let requests = CategoryRequest::parse_all(raw);
    if requests.is_empty() {
        CategoryRequest::parse_all(DEFAULT_CATEGORIES)
    } else {
        requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(requests: &[CategoryRequest]) -> Vec<&str> {
        requests.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_defaults_when_nothing_selected() {
        let empty: [&str; 0] = [];
        assert_eq!(names(&normalize_categories(&empty)), vec!["food", "drinks", "potions"]);
        assert_eq!(names(&normalize_categories(&["  "])), vec!["food", "drinks", "potions"]);
    }

    #[test]
    fn test_plural_and_case_forms() {
        let requests = normalize_categories(&["weapons", "potions", "PLATE", "Weapon"]);
        assert_eq!(names(&requests), vec!["weapons", "potions", "plate"]);

        let requests = normalize_categories(&["potion", "Potions", "Axe-1H"]);
        assert_eq!(names(&requests), vec!["potion", "axe1h"]);
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let requests = normalize_categories(&["Dragons"]);
        assert_eq!(names(&requests), vec!["dragons"]);
        assert!(requests[0].key.is_none());
    }
}

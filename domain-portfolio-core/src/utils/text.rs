//! Locale-style string comparison.
//!
//! Approximates the default collation used by the dashboard front end:
//! letters compare case-insensitively first, and only strings that are equal
//! ignoring case are ordered by case, lowercase before uppercase.

use std::cmp::Ordering;

/// Compares two strings the way a locale-aware collator would for the
/// ASCII/CJK data the dashboard holds.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }
    a.chars()
        .map(case_key)
        .cmp(b.chars().map(case_key))
}

fn case_key(c: char) -> (bool, char) {
    (c.is_uppercase(), c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_at_first_level() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("GoDaddy", "google"), Ordering::Less);
    }

    #[test]
    fn lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Namecheap", "namecheap"), Ordering::Greater);
    }

    #[test]
    fn equal_strings_are_equal() {
        assert_eq!(locale_compare("活跃", "活跃"), Ordering::Equal);
    }
}

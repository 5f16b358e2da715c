//! Size label ordering.

use std::cmp::Ordering;

/// Reference ordering for recognized size labels.
pub const CANONICAL_SIZES: [&str; 7] = ["XS", "S", "M", "L", "XL", "XXL", "ONE SIZE"];

/// Position of a label in [`CANONICAL_SIZES`], ignoring case.
pub fn canonical_size_index(label: &str) -> Option<usize> {
    let upper = label.to_uppercase();
    CANONICAL_SIZES.iter().position(|s| *s == upper)
}

/// Compare two size labels.
///
/// Canonical order applies only when both labels are recognized. Any pair
/// involving an unrecognized label falls back to dictionary order, so
/// `"L" < "Large" < "XS"` while `"XS" < "L"`. The relation is therefore not
/// transitive on mixed inputs; [`sort_sizes`] copes with that.
pub fn compare_sizes(a: &str, b: &str) -> Ordering {
    match (canonical_size_index(a), canonical_size_index(b)) {
        (Some(ia), Some(ib)) => ia.cmp(&ib),
        _ => compare_labels(a, b),
    }
}

/// Dictionary order for labels: letters compare without regard to case, and
/// only labels that differ in case alone are split, lowercase first.
///
/// `"large" < "M" < "Petite"`, and `"large" < "Large"`.
fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Sort size labels with [`compare_sizes`].
///
/// `slice::sort_by` requires a total order and may panic when it detects a
/// violation, which mixed vocabularies can trigger. A stable insertion sort
/// only ever asks about neighbours: it terminates on any comparator and leaves
/// every adjacent pair in non-descending order.
pub fn sort_sizes(sizes: &mut [String]) {
    for i in 1..sizes.len() {
        let mut j = i;
        while j > 0 && compare_sizes(&sizes[j - 1], &sizes[j]) == Ordering::Greater {
            sizes.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(labels: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        sort_sizes(&mut v);
        v
    }

    #[test]
    fn test_canonical_index_is_case_insensitive() {
        assert_eq!(canonical_size_index("xs"), Some(0));
        assert_eq!(canonical_size_index("One Size"), Some(6));
        assert_eq!(canonical_size_index("Petite"), None);
    }

    #[test]
    fn test_canonical_sizes_sort_by_vocabulary() {
        assert_eq!(sorted(&["XL", "S", "XS", "L", "M"]), vec!["XS", "S", "M", "L", "XL"]);
        assert_eq!(sorted(&["ONE SIZE", "xxl", "m"]), vec!["m", "xxl", "ONE SIZE"]);
    }

    #[test]
    fn test_unrecognized_sizes_sort_lexicographically() {
        assert_eq!(sorted(&["52", "48", "50"]), vec!["48", "50", "52"]);
    }

    #[test]
    fn test_unrecognized_sizes_ignore_case() {
        assert_eq!(sorted(&["M", "large", "Petite"]), vec!["large", "M", "Petite"]);
        assert_eq!(sorted(&["petite", "Plus", "Maternity"]), vec!["Maternity", "petite", "Plus"]);
    }

    #[test]
    fn test_case_only_difference_puts_lowercase_first() {
        assert_eq!(compare_labels("large", "Large"), Ordering::Less);
        assert_eq!(compare_labels("Large", "large"), Ordering::Greater);
        assert_eq!(compare_labels("Large", "Large"), Ordering::Equal);
        assert_eq!(sorted(&["Tall", "tall"]), vec!["tall", "Tall"]);
    }

    #[test]
    fn test_mixed_pair_uses_label_order() {
        // "XS" is recognized, "Petite" is not: label order puts "Petite" first.
        assert_eq!(compare_sizes("Petite", "XS"), Ordering::Less);
        assert_eq!(compare_sizes("XS", "L"), Ordering::Less);
        assert_eq!(compare_sizes("L", "Large"), Ordering::Less);
        assert_eq!(compare_sizes("Large", "XS"), Ordering::Less);
    }

    #[test]
    fn test_sort_terminates_on_cyclic_input() {
        let out = sorted(&["Large", "L", "XS"]);
        assert_eq!(out.len(), 3);
        for pair in out.windows(2) {
            assert_ne!(compare_sizes(&pair[0], &pair[1]), Ordering::Greater);
        }
    }
}

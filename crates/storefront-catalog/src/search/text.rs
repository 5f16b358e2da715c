//! Free-text name search.
//!
//! Runs after [`apply_filters`](crate::search::apply_filters) on the already
//! filtered set, so the count a user sees reflects both steps.

use crate::catalog::Product;

/// Case-insensitive substring match on the product name. An empty query
/// matches everything.
pub fn matches_query(product: &Product, query: &str) -> bool {
    product.name.to_lowercase().contains(&query.to_lowercase())
}

/// Keep the products whose name contains `query`, in input order.
pub fn search_by_name(products: Vec<Product>, query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products;
    }
    products
        .into_iter()
        .filter(|p| matches_query(p, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn products() -> Vec<Product> {
        vec![
            Product::new("a1", "Black Abaya", Price::from_major(485), "abayas"),
            Product::new("a2", "Pink Abaya", Price::from_major(525), "abayas"),
            Product::new("s1", "Silk Scarf", Price::from_major(60), "accessories"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let found = search_by_name(products(), "ABAYA");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id.as_str(), "a1");
    }

    #[test]
    fn test_empty_query_is_identity() {
        assert_eq!(search_by_name(products(), "").len(), 3);
    }

    #[test]
    fn test_whitespace_is_part_of_the_query() {
        let found = search_by_name(products(), " ");
        assert_eq!(found.len(), 3);
        assert!(search_by_name(products(), "abaya ").is_empty());
    }

    #[test]
    fn test_substring_in_middle() {
        let found = search_by_name(products(), "k sc");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "s1");
    }

    #[test]
    fn test_matches_query() {
        let p = Product::new("a2", "Pink Abaya", Price::from_major(525), "abayas");
        assert!(matches_query(&p, "pink"));
        assert!(matches_query(&p, ""));
        assert!(!matches_query(&p, "black"));
    }
}

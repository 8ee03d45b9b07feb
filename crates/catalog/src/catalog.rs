//! Catalog: the ordered product collection and its rules.
//!
//! Insertion order is render order. The one invariant: an active catalog
//! never contains a record whose display name is a retired product name.

use serde::{Deserialize, Serialize};

use crate::product::{Price, Product, PromoFlags};

/// Sentinel category label selecting the whole catalog.
pub const ALL_CATEGORIES: &str = "All";

/// Retired product names that must never appear in an active catalog.
///
/// A persisted snapshot containing any of these (exact match on the display
/// name) is discarded wholesale and replaced with the default catalog.
pub const RETIRED_NAMES: [&str; 3] = [
    "Bamboo Bath Sheet",
    "Waffle Weave Hand Towel",
    "Kids Hooded Towel",
];

/// Ordered collection of product records.
///
/// Serializes as a bare JSON array, matching the persisted snapshot format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<Product>);

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if any record carries a retired display name.
    pub fn contains_retired(&self) -> bool {
        self.0
            .iter()
            .any(|p| RETIRED_NAMES.contains(&p.name.as_str()))
    }

    /// Distinct category labels in order of first appearance, prefixed with
    /// the `"All"` sentinel.
    pub fn categories(&self) -> Vec<String> {
        let mut labels = vec![ALL_CATEGORIES.to_string()];
        for product in &self.0 {
            if !labels.iter().any(|l| l == &product.category) {
                labels.push(product.category.clone());
            }
        }
        labels
    }

    /// Records matching `selection`, preserving catalog order.
    ///
    /// The `"All"` sentinel selects everything. A label not present in the
    /// catalog yields an empty subset; no validation is performed.
    pub fn filter(&self, selection: &str) -> Vec<&Product> {
        if selection == ALL_CATEGORIES {
            self.0.iter().collect()
        } else {
            self.0.iter().filter(|p| p.category == selection).collect()
        }
    }
}

/// Enforce the retired-name invariant on a candidate catalog.
///
/// Returns the candidate verbatim when it is clean, or the default catalog
/// when any record name is retired. Self-healing, not an error.
pub fn sanitize(candidate: Catalog) -> Catalog {
    if candidate.contains_retired() {
        default_catalog()
    } else {
        candidate
    }
}

/// The hardcoded default catalog (retired towels already removed).
pub fn default_catalog() -> Catalog {
    Catalog(vec![
        Product {
            id: "1".to_string(),
            name: "Ultra Soft Bath Towel".to_string(),
            price: Price::from_cents(2999),
            image: "https://images.unsplash.com/photo-1616627547584-bf28cee262db?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&q=80".to_string(),
            category: "Bath".to_string(),
            promo: PromoFlags::new_arrival(),
        },
        Product {
            id: "2".to_string(),
            name: "Premium Hand Towel Set".to_string(),
            price: Price::from_cents(2499),
            image: "https://images.unsplash.com/photo-1583845112203-29329902332e?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&q=80".to_string(),
            category: "Hand".to_string(),
            promo: PromoFlags::bestseller(),
        },
        Product {
            id: "3".to_string(),
            name: "Luxury Face Towel".to_string(),
            price: Price::from_cents(1999),
            image: "https://images.unsplash.com/photo-1616627561950-9f746e330187?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&q=80".to_string(),
            category: "Face".to_string(),
            promo: PromoFlags::none(),
        },
        Product {
            id: "4".to_string(),
            name: "Organic Cotton Beach Towel".to_string(),
            price: Price::from_cents(3999),
            image: "https://images.unsplash.com/photo-1602446256091-ec9408672d87?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&q=80".to_string(),
            category: "Beach".to_string(),
            promo: PromoFlags::new_arrival(),
        },
        Product {
            id: "5".to_string(),
            name: "Microfiber Gym Towel".to_string(),
            price: Price::from_cents(2299),
            image: "https://images.unsplash.com/photo-1605518216938-7c31b7b14ad0?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&q=80".to_string(),
            category: "Sport".to_string(),
            promo: PromoFlags::bestseller(),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: Price::from_cents(1000),
            image: String::new(),
            category: category.to_string(),
            promo: PromoFlags::none(),
        }
    }

    #[test]
    fn default_catalog_has_five_clean_records() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.contains_retired());

        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn categories_are_in_order_of_first_appearance() {
        assert_eq!(
            default_catalog().categories(),
            ["All", "Bath", "Hand", "Face", "Beach", "Sport"]
        );
    }

    #[test]
    fn categories_deduplicate_repeated_labels() {
        let catalog = Catalog::new(vec![
            product("1", "A", "Bath"),
            product("2", "B", "Sport"),
            product("3", "C", "Bath"),
        ]);
        assert_eq!(catalog.categories(), ["All", "Bath", "Sport"]);
    }

    #[test]
    fn filter_all_returns_full_catalog_in_order() {
        let catalog = default_catalog();
        let visible = catalog.filter(ALL_CATEGORIES);
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].id, "1");
        assert_eq!(visible[4].id, "5");
    }

    #[test]
    fn filter_by_label_preserves_relative_order() {
        let catalog = Catalog::new(vec![
            product("1", "A", "Bath"),
            product("2", "B", "Sport"),
            product("3", "C", "Bath"),
        ]);

        let visible = catalog.filter("Bath");
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn filter_by_absent_label_is_empty() {
        assert!(default_catalog().filter("Kitchen").is_empty());
    }

    #[test]
    fn sanitize_keeps_clean_catalogs_verbatim() {
        let clean = Catalog::new(vec![
            product("9", "Custom Towel", "Bath"),
            product("10", "Other Towel", "Beach"),
        ]);
        assert_eq!(sanitize(clean.clone()), clean);
    }

    #[test]
    fn sanitize_resets_on_any_retired_name() {
        for retired in RETIRED_NAMES {
            let tainted = Catalog::new(vec![
                product("9", "Custom Towel", "Bath"),
                product("10", retired, "Hand"),
            ]);
            assert_eq!(sanitize(tainted), default_catalog());
        }
    }

    #[test]
    fn catalog_serializes_as_bare_array() {
        let json = serde_json::to_value(default_catalog()).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 5);
        assert_eq!(json[4]["name"], "Microfiber Gym Towel");
        assert_eq!(json[4]["price"], serde_json::json!(22.99));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                "[a-z0-9]{1,8}",
                prop_oneof![
                    proptest::string::string_regex("[A-Za-z][A-Za-z ]{0,30}").unwrap(),
                    proptest::sample::select(RETIRED_NAMES.to_vec()).prop_map(str::to_string),
                ],
                proptest::sample::select(vec!["Bath", "Hand", "Face", "Beach", "Sport"]),
                0u64..100_000,
            )
                .prop_map(|(id, name, category, cents)| Product {
                    id,
                    name,
                    price: Price::from_cents(cents),
                    image: String::new(),
                    category: category.to_string(),
                    promo: PromoFlags::none(),
                })
        }

        fn arb_catalog() -> impl Strategy<Value = Catalog> {
            proptest::collection::vec(arb_product(), 0..12).prop_map(Catalog::new)
        }

        proptest! {
            /// Sanitize always yields a catalog that honors the retired-name
            /// invariant, and applying it twice changes nothing.
            #[test]
            fn sanitize_is_total_and_idempotent(catalog in arb_catalog()) {
                let once = sanitize(catalog);
                prop_assert!(!once.contains_retired());
                prop_assert_eq!(sanitize(once.clone()), once);
            }

            /// Filtering never invents records and preserves catalog order.
            #[test]
            fn filter_is_an_ordered_subset(catalog in arb_catalog(), selection in "[A-Za-z]{1,8}") {
                let expected: Vec<&Product> = catalog
                    .products()
                    .iter()
                    .filter(|p| p.category == selection)
                    .collect();
                prop_assert_eq!(catalog.filter(&selection), expected);
            }

            /// The "All" sentinel is always first in the derived list.
            #[test]
            fn categories_start_with_the_sentinel(catalog in arb_catalog()) {
                let categories = catalog.categories();
                prop_assert_eq!(&categories[0], ALL_CATEGORIES);
            }
        }
    }
}

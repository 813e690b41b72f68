use std::collections::HashMap;

use crate::model::product::Product;

/// Categories that get a section on the page, in page order. Products in any
/// other category are loaded but never shown.
pub const DISPLAY_ORDER: [&str; 7] = [
    "Girls",
    "Boys",
    "Baby",
    "Winter Wear",
    "School Wear",
    "Accessories",
    "Eid Collection",
];

/// Products bucketed by their `category` label.
///
/// Each bucket keeps the relative order the products had in the loaded list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryGroups {
    buckets: HashMap<String, Vec<Product>>,
}

impl CategoryGroups {
    pub fn get(&self, category: &str) -> Option<&[Product]> {
        self.buckets.get(category).map(Vec::as_slice)
    }

    /// Sections to render: `DISPLAY_ORDER` filtered down to the categories
    /// present in the data.
    pub fn sections(&self) -> impl Iterator<Item = (&'static str, &[Product])> + '_ {
        DISPLAY_ORDER
            .into_iter()
            .filter_map(move |category| self.get(category).map(|products| (category, products)))
    }
}

/// Partitions `products` by category in a single pass.
pub fn group_by_category(products: &[Product]) -> CategoryGroups {
    let mut buckets: HashMap<String, Vec<Product>> = HashMap::new();
    for product in products {
        buckets
            .entry(product.category.clone())
            .or_default()
            .push(product.clone());
    }
    CategoryGroups { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, category: &str) -> Product {
        Product {
            id: None,
            alt_id: None,
            title: title.to_string(),
            category: category.to_string(),
            price_bdt: 500.0,
            images: None,
            rating: None,
        }
    }

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn buckets_keep_input_order() {
        let products = vec![
            item("item0", "Boys"),
            item("item1", "Girls"),
            item("item2", "Boys"),
        ];
        let groups = group_by_category(&products);

        assert_eq!(titles(groups.get("Boys").unwrap()), ["item0", "item2"]);
        assert_eq!(titles(groups.get("Girls").unwrap()), ["item1"]);
    }

    #[test]
    fn sections_follow_display_order_not_data_order() {
        let products = vec![
            item("item0", "Boys"),
            item("item1", "Girls"),
            item("item2", "Boys"),
        ];
        let groups = group_by_category(&products);
        let order: Vec<&str> = groups.sections().map(|(category, _)| category).collect();

        assert_eq!(order, ["Girls", "Boys"]);
    }

    #[test]
    fn unknown_categories_are_grouped_but_never_displayed() {
        let products = vec![
            item("sneakers", "Shoes"),
            item("cap", "Accessories"),
            item("sandals", "Shoes"),
        ];
        let groups = group_by_category(&products);

        assert_eq!(titles(groups.get("Shoes").unwrap()), ["sneakers", "sandals"]);
        let sections: Vec<(&str, Vec<&str>)> = groups
            .sections()
            .map(|(category, products)| (category, titles(products)))
            .collect();
        assert_eq!(sections, [("Accessories", vec!["cap"])]);
    }

    #[test]
    fn every_display_category_renders_in_fixed_sequence() {
        let products: Vec<Product> = DISPLAY_ORDER
            .iter()
            .rev()
            .map(|category| item(category, category))
            .collect();
        let groups = group_by_category(&products);
        let order: Vec<&str> = groups.sections().map(|(category, _)| category).collect();

        assert_eq!(order, DISPLAY_ORDER);
    }

    #[test]
    fn empty_input_has_no_sections() {
        let groups = group_by_category(&[]);
        assert_eq!(groups, CategoryGroups::default());
        assert_eq!(groups.sections().count(), 0);
    }

    #[test]
    fn category_match_is_exact() {
        let groups = group_by_category(&[item("tee", "boys"), item("coat", "Winter wear")]);
        assert_eq!(groups.sections().count(), 0);
    }
}

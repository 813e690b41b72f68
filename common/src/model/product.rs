use std::collections::HashMap;

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// Rating shown for products the backend has not rated yet.
pub const DEFAULT_RATING: f64 = 4.5;

/// Image shown when a product carries no pictures.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400";

/// A catalog item as served by `GET /api/products`.
///
/// Only `title`, `category` and `price_bdt` are required on the wire. The
/// backend may identify a product by `id` or by a document-store style `_id`;
/// both are kept so the UI can derive a stable render key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub alt_id: Option<String>,

    pub title: String,

    pub category: String,

    /// Price in Bangladeshi taka.
    pub price_bdt: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Product {
    /// Key used to identify the product card in a rendered list.
    ///
    /// The first non-empty value among `id`, `_id` and `title` wins. Keys are
    /// not guaranteed unique: two products with the same title and no ids
    /// collide.
    pub fn display_key(&self) -> &str {
        [self.id.as_deref(), self.alt_id.as_deref()]
            .into_iter()
            .flatten()
            .find(|key| !key.is_empty())
            .unwrap_or(self.title.as_str())
    }

    /// Rating to display; a missing or zero rating falls back to `DEFAULT_RATING`.
    pub fn display_rating(&self) -> f64 {
        match self.rating {
            Some(rating) if rating != 0.0 && !rating.is_nan() => rating,
            _ => DEFAULT_RATING,
        }
    }

    /// First product image, or the placeholder when the list is missing,
    /// empty, or starts with a blank URL.
    pub fn primary_image(&self) -> &str {
        self.images
            .as_ref()
            .and_then(|images| images.first())
            .filter(|url| !url.is_empty())
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn price_label(&self) -> String {
        format_bdt(self.price_bdt)
    }
}

/// Render keys for a list of products, one per product, in order.
///
/// Each key is the product's [`Product::display_key`]; a key already used
/// earlier in the list gets a `#n` suffix (n counting from 2) so sibling cards
/// never share a key.
pub fn unique_display_keys(products: &[Product]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    products
        .iter()
        .map(|product| {
            let key = product.display_key();
            let count = seen.entry(key).or_insert(0);
            *count += 1;
            if *count == 1 {
                key.to_string()
            } else {
                format!("{}#{}", key, count)
            }
        })
        .collect()
}

/// Formats an amount as whole taka with thousands separators, e.g. `৳1,250`.
pub fn format_bdt(amount: f64) -> String {
    let whole = if amount.is_finite() {
        amount.round() as i64
    } else {
        0
    };
    format!("৳{}", whole.to_formatted_string(&Locale::en))
}

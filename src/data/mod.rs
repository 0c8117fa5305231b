//! Data models and loaders for the site's JSON records.
//!
//! The data directory holds five JSON files:
//!
//! - `products.json` — the master product catalogue
//! - `collections.json` — product groupings; the `all-picks` collection
//!   defines the editorial ordering used across category pages
//! - `comparisons.json` — head-to-head comparison articles
//! - `guides.json` — long-form guide articles with embedded product cards
//! - `categories.json` — per-category page copy (hero, meta, buying guide)
//!
//! Field names in the JSON are camelCase; the models map them onto
//! idiomatic snake_case via serde. Loading is strict for comparisons,
//! guides and categories (one malformed record fails the file), but
//! lenient for products: a record that does not deserialize is skipped
//! with a warning so one broken product cannot take down every category
//! page. Full shape validation with aggregated reporting lives in
//! [`validation`].

pub mod validation;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::config::SitePaths;
use crate::constants;
use crate::core::SiteError;

/// One product record from `products.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique id, prefixed with the category slug (e.g. `mice-razer-viper-v3-pro`).
    pub id: String,
    /// Category slug; one of [`constants::VALID_CATEGORIES`].
    pub category: String,
    /// Explicit brand name for structured data (e.g. `Razer`).
    pub brand: String,
    pub badge: String,
    pub name: String,
    pub short_name: String,
    pub specs: Vec<String>,
    pub desc: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Display price string, e.g. `£119`.
    pub price: String,
    /// Numeric price for structured data, e.g. `119.05`.
    pub price_raw: f64,
    /// Affiliate URL; must be https.
    pub affiliate: String,
    /// Site-relative category URL, e.g. `/mice/`.
    pub url: String,
    pub emoji: String,
    /// Accent colour name used by the client wall.
    pub seam: String,
    pub loadout_count: u32,
    pub tags: Vec<String>,
    pub in_stock: bool,
    pub next_day: bool,
    /// Badge background override; default colour comes from CSS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_color: Option<String>,
    /// Crossed-out RRP display string, e.g. `£159.99`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrp: Option<String>,
    /// Saving label shown next to the RRP, e.g. `Save 26%`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saving: Option<String>,
}

/// One collection record from `collections.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub label: String,
    pub emoji: String,
    pub color: String,
    /// Product ids in editorial order.
    pub base_products: Vec<String>,
    #[serde(default)]
    pub shuffle_variants: Vec<ShuffleVariant>,
}

/// A shuffle variant inside a collection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffleVariant {
    pub label: String,
    pub products: Vec<String>,
}

/// One comparison article from `comparisons.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub slug: String,
    pub title: String,
    pub meta_title: String,
    pub meta_description: String,
    pub canonical: String,
    /// ISO date, e.g. `2026-02-01`.
    pub date_published: String,
    #[serde(default)]
    pub date_modified: Option<String>,
    /// Quick-answer copy; newline-separated paragraphs.
    pub intro: String,
    /// Verdict copy; newline-separated paragraphs.
    pub verdict: String,
    pub product_a: ComparisonProduct,
    pub product_b: ComparisonProduct,
    pub spec_table: Vec<SpecRow>,
    pub sections: Vec<ContentSection>,
    #[serde(default)]
    pub related_links: Vec<RelatedLink>,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_description: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub breadcrumb_label: Option<String>,
}

/// One side of a comparison.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonProduct {
    pub name: String,
    pub badge: String,
    #[serde(default)]
    pub badge_color: Option<String>,
    pub price: String,
    #[serde(default)]
    pub desc: String,
    pub affiliate: String,
}

/// One row of a comparison spec table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecRow {
    pub label: String,
    pub a: String,
    pub b: String,
    /// `"a"` or `"b"` highlights the winning cell.
    #[serde(default)]
    pub winner: Option<String>,
}

/// A heading-plus-body prose section.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub heading: String,
    /// Newline-separated paragraphs.
    pub body: String,
}

/// A link to a related comparison page.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedLink {
    pub href: String,
    pub label: String,
}

/// One guide article from `guides.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub slug: String,
    pub title: String,
    pub meta_title: String,
    pub meta_description: String,
    pub canonical: String,
    pub date_published: String,
    #[serde(default)]
    pub date_modified: Option<String>,
    pub hero_title: String,
    pub hero_subtitle: String,
    #[serde(default)]
    pub breadcrumb_label: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    pub summary_table: Vec<SummaryRow>,
    #[serde(default)]
    pub summary_totals: Vec<SummaryTotal>,
    pub sections: Vec<GuideSection>,
    #[serde(default)]
    pub buying_guide: Option<BuyingGuide>,
    #[serde(default)]
    pub related_guides: Vec<RelatedGuide>,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_description: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
}

/// One row of a guide's summary table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    #[serde(default)]
    pub emoji: Option<String>,
    pub category: String,
    pub pick: String,
    pub price: String,
}

/// A totals line shown beneath a guide's summary table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTotal {
    pub label: String,
    pub value: String,
}

/// One section of a guide, optionally carrying product cards.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideSection {
    pub heading: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub products: Vec<GuideProduct>,
}

/// A self-contained product card inside a guide section.
///
/// Guide products are not joined against the catalogue; each guide carries
/// the card fields it needs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideProduct {
    pub badge: String,
    #[serde(default)]
    pub badge_color: Option<String>,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub price_rrp: Option<String>,
    #[serde(default)]
    pub price_saving: Option<String>,
    #[serde(default)]
    pub desc: String,
    pub affiliate: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

/// A guide's buying-guide prose block.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyingGuide {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// A link card to a related guide.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedGuide {
    pub href: String,
    pub title: String,
    pub desc: String,
    #[serde(default)]
    pub emoji: Option<String>,
}

/// Per-category page copy from `categories.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    /// Category slug; doubles as the output directory name.
    pub slug: String,
    pub emoji: String,
    pub page_title: String,
    pub meta_description: String,
    pub og_title: String,
    pub og_description: String,
    pub canonical: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub breadcrumb_label: String,
    /// Pre-written buying-guide HTML, injected raw.
    pub buying_guide_html: String,
}

/// Read and deserialize one JSON data file.
///
/// A missing file or malformed JSON is a hard error naming the file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SiteError::DataFileNotFound {
                path: path.display().to_string(),
            }
        } else {
            SiteError::IoError(e)
        }
    })?;

    let value = serde_json::from_str(&content).map_err(|e| SiteError::DataParseError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(value)
}

/// Load the product catalogue, skipping records that fail to deserialize.
///
/// Skipped records are reported with a warning naming the index and id;
/// the aggregating validator is responsible for making these failures
/// build-fatal before generation runs.
pub fn load_products(paths: &SitePaths) -> Result<Vec<Product>> {
    let path = paths.data_file(constants::PRODUCTS_FILE);
    let raw: Vec<Value> = load_json(&path)?;

    let mut products = Vec::with_capacity(raw.len());
    for (i, record) in raw.into_iter().enumerate() {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        match serde_json::from_value::<Product>(record) {
            Ok(product) => products.push(product),
            Err(e) => {
                tracing::warn!("products[{i}] ({id}) skipped: {e}");
            }
        }
    }
    Ok(products)
}

/// Load the collections file.
pub fn load_collections(paths: &SitePaths) -> Result<Vec<Collection>> {
    load_json(&paths.data_file(constants::COLLECTIONS_FILE))
}

/// Load the comparisons file.
pub fn load_comparisons(paths: &SitePaths) -> Result<Vec<Comparison>> {
    load_json(&paths.data_file(constants::COMPARISONS_FILE))
}

/// Load the guides file.
pub fn load_guides(paths: &SitePaths) -> Result<Vec<Guide>> {
    load_json(&paths.data_file(constants::GUIDES_FILE))
}

/// Load the category page copy file.
pub fn load_categories(paths: &SitePaths) -> Result<Vec<CategoryPage>> {
    load_json(&paths.data_file(constants::CATEGORIES_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_deserializes_camel_case() {
        let product: Product = serde_json::from_value(json!({
            "id": "mice-test",
            "category": "mice",
            "brand": "Test",
            "badge": "BADGE",
            "name": "Test Mouse",
            "shortName": "Test",
            "specs": ["54g"],
            "desc": "A mouse.",
            "pros": ["light"],
            "cons": ["pricey"],
            "price": "£119",
            "priceRaw": 119.05,
            "affiliate": "https://example.com/t",
            "url": "/mice/",
            "emoji": "🖱️",
            "seam": "crimson",
            "loadoutCount": 4,
            "tags": ["fps"],
            "inStock": true,
            "nextDay": false
        }))
        .unwrap();
        assert_eq!(product.short_name, "Test");
        assert!(product.badge_color.is_none());
    }

    #[test]
    fn test_guide_optional_blocks_default() {
        let guide: Guide = serde_json::from_value(json!({
            "slug": "budget-setup",
            "title": "Budget Setup",
            "metaTitle": "Budget Setup | Stack Pick",
            "metaDescription": "desc",
            "canonical": "https://stackpick.co.uk/guides/budget-setup/",
            "datePublished": "2026-02-01",
            "heroTitle": "Budget Setup",
            "heroSubtitle": "sub",
            "summaryTable": [{ "category": "Mice", "pick": "X", "price": "£20" }],
            "sections": [{ "heading": "Mice" }]
        }))
        .unwrap();
        assert!(guide.summary_totals.is_empty());
        assert!(guide.buying_guide.is_none());
        assert!(guide.sections[0].products.is_empty());
    }
}

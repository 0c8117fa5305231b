//! Category page generation.
//!
//! Reads `categories.json` (per-category page copy), `collections.json`
//! and `products.json`, and writes one `<slug>/index.html` per category.
//! Products on a category page are ordered by their position in the
//! `all-picks` collection's `baseProducts` array, preserving the editorial
//! ranking defined in the data.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::collections::HashMap;

use crate::constants::ALL_PICKS_COLLECTION;
use crate::core::SiteError;
use crate::data::{self, CategoryPage, Product};
use crate::templating::RenderContext;

use super::{cards, format_price, strip_title_suffix, SiteEnv};

/// Generate all category pages. Returns the number of pages written.
///
/// A failure on one category is reported and the remaining categories are
/// still generated; only data-level failures (unreadable files, missing
/// `all-picks` collection) abort the whole step.
pub fn generate(env: &mut SiteEnv) -> Result<usize> {
    let categories_path = env.paths.data_file(crate::constants::CATEGORIES_FILE);
    if !categories_path.exists() {
        println!("  {} categories.json not found — skipping category pages", "⚠".yellow());
        return Ok(0);
    }

    let categories = data::load_categories(&env.paths)?;
    let collections = data::load_collections(&env.paths)?;
    let products = data::load_products(&env.paths)?;

    // The all-picks collection defines the canonical product universe and
    // editorial ordering used across all category pages.
    let all_picks = collections
        .iter()
        .find(|c| c.id == ALL_PICKS_COLLECTION)
        .ok_or_else(|| SiteError::MissingRecord {
            what: format!("\"{ALL_PICKS_COLLECTION}\" collection in collections.json"),
        })?;

    let product_map: HashMap<&str, &Product> =
        products.iter().map(|p| (p.id.as_str(), p)).collect();

    for id in &all_picks.base_products {
        if !product_map.contains_key(id.as_str()) {
            tracing::warn!(
                "collections.json references \"{id}\" but no matching product in products.json"
            );
        }
    }

    let template = env.cache.get(&env.paths.template("category"))?;

    let mut passed = 0;
    let mut failed = 0;
    for category in &categories {
        match generate_category(env, &template, category, &product_map, &all_picks.base_products)
        {
            Ok(()) => {
                println!("  {} {}/index.html", "✓".green(), category.slug);
                passed += 1;
            }
            Err(e) => {
                eprintln!(
                    "  {} Failed to generate \"{}/index.html\": {e:#}",
                    "✗".red(),
                    category.slug
                );
                failed += 1;
            }
        }
    }

    if failed > 0 {
        println!("\n  Generated {passed} category page(s). Failed: {failed}.");
    } else {
        println!("\n  Generated {passed} category page(s).");
    }
    Ok(passed)
}

fn generate_category(
    env: &mut SiteEnv,
    template: &str,
    category: &CategoryPage,
    product_map: &HashMap<&str, &Product>,
    all_picks_order: &[String],
) -> Result<()> {
    // Filter to this category, in editorial order.
    let prefix = format!("{}-", category.slug);
    let ordered: Vec<&Product> = all_picks_order
        .iter()
        .filter(|id| id.starts_with(&prefix))
        .filter_map(|id| product_map.get(id.as_str()).copied())
        .collect();

    if ordered.is_empty() {
        tracing::warn!(
            "No products found for category \"{}\" — page will render empty.",
            category.slug
        );
    }

    let product_cards_html = ordered
        .iter()
        .map(|p| cards::category_card(p))
        .collect::<Vec<_>>()
        .join("\n\n");
    let schema_json = build_schema_json(env, category, &ordered);

    let mut ctx = RenderContext::new();
    // <head> placeholders
    ctx.insert("pageTitle", category.page_title.as_str());
    ctx.insert("metaDescription", category.meta_description.as_str());
    ctx.insert("ogType", "website");
    ctx.insert("ogTitle", category.og_title.as_str());
    ctx.insert("ogDescription", category.og_description.as_str());
    ctx.insert("canonical", category.canonical.as_str());
    ctx.insert("emoji", category.emoji.as_str());
    ctx.insert("schemaJSON", schema_json);
    // navigation
    ctx.insert("activePage", category.slug.as_str());
    // page content
    ctx.insert("heroTitle", category.hero_title.as_str());
    ctx.insert("heroSubtitle", category.hero_subtitle.as_str());
    ctx.insert("breadcrumbLabel", category.breadcrumb_label.as_str());
    // rendered HTML blobs — injected raw, already escaped above
    ctx.insert("productCardsHTML", product_cards_html);
    ctx.insert("buyingGuideHTML", category.buying_guide_html.as_str());

    let html = env.assemble_page(template, &ctx)?;
    env.write_output(&format!("{}/index.html", category.slug), &html)
}

/// Build schema.org ItemList + BreadcrumbList JSON-LD for a category page.
fn build_schema_json(env: &SiteEnv, category: &CategoryPage, products: &[&Product]) -> String {
    let item_list = json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": strip_title_suffix(&category.page_title, &env.config.site_name),
        "url": category.canonical,
        "numberOfItems": products.len(),
        "itemListElement": products.iter().enumerate().map(|(i, p)| json!({
            "@type": "ListItem",
            "position": i + 1,
            "item": {
                "@type": "Product",
                "name": p.name,
                "brand": { "@type": "Brand", "name": p.brand },
                "offers": {
                    "@type": "Offer",
                    "priceCurrency": "GBP",
                    "price": format_price(p.price_raw),
                    "availability": if p.in_stock {
                        "https://schema.org/InStock"
                    } else {
                        "https://schema.org/OutOfStock"
                    },
                },
            },
        })).collect::<Vec<_>>(),
    });

    let breadcrumb = json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            { "@type": "ListItem", "position": 1, "name": "Home",
              "item": format!("{}/", env.config.base_url) },
            { "@type": "ListItem", "position": 2, "name": category.breadcrumb_label,
              "item": category.canonical },
        ],
    });

    [item_list, breadcrumb]
        .iter()
        .map(|obj| {
            format!(
                "<script type=\"application/ld+json\">\n{}\n</script>",
                serde_json::to_string_pretty(obj).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

//! Data validation with aggregated reporting.
//!
//! Validates every JSON data file before the build runs, collecting all
//! problems into one [`ValidationReport`] instead of stopping at the first.
//! Checks operate on raw JSON values so a single record missing a field
//! cannot hide problems elsewhere in the same file.
//!
//! Errors make the build abort; warnings are informational unless the
//! caller opts into strict mode (where the CLI treats them as errors).

use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use crate::config::SitePaths;
use crate::constants::{
    CATEGORIES_FILE, COLLECTIONS_FILE, COMPARISONS_FILE, GUIDES_FILE, PRODUCTS_FILE,
    VALID_CATEGORIES,
};

/// Fields every product record must carry with a non-empty value.
const REQUIRED_PRODUCT_FIELDS: &[&str] = &[
    "id",
    "category",
    "brand",
    "badge",
    "name",
    "shortName",
    "specs",
    "desc",
    "pros",
    "cons",
    "price",
    "priceRaw",
    "affiliate",
    "url",
    "emoji",
    "seam",
    "loadoutCount",
    "tags",
    "inStock",
    "nextDay",
];

/// Fields every comparison record must carry with a truthy value.
const REQUIRED_COMPARISON_FIELDS: &[&str] = &[
    "slug",
    "title",
    "metaTitle",
    "metaDescription",
    "canonical",
    "datePublished",
    "intro",
    "verdict",
];

/// Fields both comparison sides must carry.
const REQUIRED_SIDE_FIELDS: &[&str] = &["name", "badge", "price", "affiliate"];

/// Fields every guide record must carry with a truthy value.
const REQUIRED_GUIDE_FIELDS: &[&str] = &[
    "slug",
    "title",
    "metaTitle",
    "metaDescription",
    "canonical",
    "datePublished",
    "heroTitle",
    "heroSubtitle",
];

/// Fields every category page record must carry with a truthy value.
const REQUIRED_CATEGORY_FIELDS: &[&str] = &[
    "slug",
    "emoji",
    "pageTitle",
    "metaDescription",
    "ogTitle",
    "ogDescription",
    "canonical",
    "heroTitle",
    "heroSubtitle",
    "breadcrumbLabel",
    "buyingGuideHtml",
];

/// Aggregated result of validating the data directory.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Problems that must abort the build.
    pub errors: Vec<String>,
    /// Informational findings; fatal only in strict mode.
    pub warnings: Vec<String>,
    /// Record counts per file, for the success summary.
    pub counts: Vec<(String, usize)>,
}

impl ValidationReport {
    /// Whether the data passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the data passes under strict rules (warnings fatal too).
    #[must_use]
    pub fn is_valid_strict(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Validate every data file, returning the aggregated report.
pub fn run_validation(paths: &SitePaths) -> ValidationReport {
    let mut report = ValidationReport::default();

    let products = load_raw(&paths.data_file(PRODUCTS_FILE), PRODUCTS_FILE, &mut report);
    let collections = load_raw(
        &paths.data_file(COLLECTIONS_FILE),
        COLLECTIONS_FILE,
        &mut report,
    );
    let comparisons = load_raw(
        &paths.data_file(COMPARISONS_FILE),
        COMPARISONS_FILE,
        &mut report,
    );
    let guides = load_raw(&paths.data_file(GUIDES_FILE), GUIDES_FILE, &mut report);

    let product_ids = match &products {
        Some(value) => validate_products(value, &mut report),
        None => HashSet::new(),
    };
    if let Some(value) = &collections {
        validate_collections(value, &product_ids, &mut report);
    }
    if let Some(value) = &comparisons {
        validate_comparisons(value, &mut report);
    }
    if let Some(value) = &guides {
        validate_guides(value, &mut report);
    }

    // categories.json is the one optional file: without it no category
    // pages are generated, which is worth flagging but not fatal.
    let categories_path = paths.data_file(CATEGORIES_FILE);
    if categories_path.exists() {
        if let Some(value) = load_raw(&categories_path, CATEGORIES_FILE, &mut report) {
            validate_categories(&value, &mut report);
        }
    } else {
        report.warning(format!(
            "{CATEGORIES_FILE} not found — no category pages will be generated"
        ));
    }

    record_count(&mut report, PRODUCTS_FILE, products.as_ref());
    record_count(&mut report, COLLECTIONS_FILE, collections.as_ref());
    record_count(&mut report, COMPARISONS_FILE, comparisons.as_ref());
    record_count(&mut report, GUIDES_FILE, guides.as_ref());

    report
}

fn load_raw(path: &Path, file: &str, report: &mut ValidationReport) -> Option<Value> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            report.error(format!("Missing file: {file}"));
            return None;
        }
        Err(e) => {
            report.error(format!("Cannot read {file}: {e}"));
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            report.error(format!("Invalid JSON in {file}: {e}"));
            None
        }
    }
}

fn record_count(report: &mut ValidationReport, file: &str, value: Option<&Value>) {
    let count = value.and_then(Value::as_array).map_or(0, Vec::len);
    report.counts.push((file.to_string(), count));
}

/// Missing for presence checks: absent, null, or the empty string.
/// `false` and `0` are present values.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

/// Falsy for the looser "truthy field" checks used by the article records.
fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().is_none_or(|f| f == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => false,
    }
}

fn is_nonempty_array(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(items)) if !items.is_empty())
}

fn str_field<'a>(record: &'a Value, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Value::as_str)
}

fn record_prefix(file_stem: &str, index: usize, record: &Value, id_field: &str) -> String {
    let id = str_field(record, id_field).unwrap_or("unknown");
    format!("{file_stem}[{index}] ({id})")
}

fn validate_products(products: &Value, report: &mut ValidationReport) -> HashSet<String> {
    let Some(items) = products.as_array() else {
        report.error("products.json must be an array");
        return HashSet::new();
    };

    let mut ids = HashSet::new();
    for (i, p) in items.iter().enumerate() {
        let prefix = record_prefix("products", i, p, "id");

        for field in REQUIRED_PRODUCT_FIELDS {
            if is_missing(p.get(*field)) {
                report.error(format!("{prefix}: missing required field \"{field}\""));
            }
        }

        if let Some(id) = str_field(p, "id") {
            if !ids.insert(id.to_string()) {
                report.error(format!("{prefix}: duplicate id \"{id}\""));
            }
        }

        if let Some(category) = str_field(p, "category") {
            if !VALID_CATEGORIES.contains(&category) {
                report.error(format!(
                    "{prefix}: invalid category \"{category}\". Must be one of: {}",
                    VALID_CATEGORIES.join(", ")
                ));
            }
        }

        if let Some(affiliate) = str_field(p, "affiliate") {
            if !affiliate.starts_with("https://") {
                report.error(format!("{prefix}: affiliate link must start with https://"));
            }
        }

        for field in ["specs", "pros", "cons"] {
            if !is_nonempty_array(p.get(field)) {
                report.error(format!("{prefix}: {field} must be a non-empty array"));
            }
        }

        match p.get("priceRaw").and_then(Value::as_f64) {
            Some(raw) if raw > 0.0 => {}
            _ => report.error(format!("{prefix}: priceRaw must be a positive number")),
        }

        if let (Some(id), Some(category)) = (str_field(p, "id"), str_field(p, "category")) {
            if !id.starts_with(&format!("{category}-")) {
                report.error(format!(
                    "{prefix}: id must start with category prefix \"{category}-\""
                ));
            }
        }
    }

    ids
}

fn validate_collections(
    collections: &Value,
    product_ids: &HashSet<String>,
    report: &mut ValidationReport,
) {
    let Some(items) = collections.as_array() else {
        report.error("collections.json must be an array");
        return;
    };

    let mut collection_ids = HashSet::new();
    for (i, c) in items.iter().enumerate() {
        let prefix = record_prefix("collections", i, c, "id");

        for field in ["id", "label", "emoji", "color"] {
            if is_missing(c.get(field)) {
                report.error(format!("{prefix}: missing \"{field}\""));
            }
        }

        if let Some(id) = str_field(c, "id") {
            if !collection_ids.insert(id.to_string()) {
                report.error(format!("{prefix}: duplicate collection id \"{id}\""));
            }
        }

        if !is_nonempty_array(c.get("baseProducts")) {
            report.error(format!("{prefix}: baseProducts must be a non-empty array"));
        } else if !product_ids.is_empty() {
            if let Some(base) = c.get("baseProducts").and_then(Value::as_array) {
                for pid in base.iter().filter_map(Value::as_str) {
                    if !product_ids.contains(pid) {
                        report.error(format!(
                            "{prefix}: baseProducts references unknown product id \"{pid}\""
                        ));
                    }
                }
            }
        }

        if let Some(variants) = c.get("shuffleVariants").and_then(Value::as_array) {
            for (vi, v) in variants.iter().enumerate() {
                if is_missing(v.get("label")) {
                    report.error(format!("{prefix} shuffleVariants[{vi}]: missing \"label\""));
                }
                if !is_nonempty_array(v.get("products")) {
                    report.error(format!(
                        "{prefix} shuffleVariants[{vi}]: products must be a non-empty array"
                    ));
                } else if !product_ids.is_empty() {
                    if let Some(products) = v.get("products").and_then(Value::as_array) {
                        for pid in products.iter().filter_map(Value::as_str) {
                            if !product_ids.contains(pid) {
                                report.error(format!(
                                    "{prefix} shuffleVariants[{vi}]: references unknown product id \"{pid}\""
                                ));
                            }
                        }
                    }
                }
            }
        }
    }
}

fn validate_comparisons(comparisons: &Value, report: &mut ValidationReport) {
    let Some(items) = comparisons.as_array() else {
        report.error("comparisons.json must be an array");
        return;
    };

    let mut slugs = HashSet::new();
    for (i, c) in items.iter().enumerate() {
        let prefix = record_prefix("comparisons", i, c, "slug");

        for field in REQUIRED_COMPARISON_FIELDS {
            if is_falsy(c.get(*field)) {
                report.error(format!("{prefix}: missing \"{field}\""));
            }
        }

        if let Some(slug) = str_field(c, "slug") {
            if !slugs.insert(slug.to_string()) {
                report.error(format!("{prefix}: duplicate slug \"{slug}\""));
            }
        }

        for side in ["productA", "productB"] {
            match c.get(side) {
                None | Some(Value::Null) => {
                    report.error(format!("{prefix}: missing \"{side}\""));
                }
                Some(product) => {
                    for field in REQUIRED_SIDE_FIELDS {
                        if is_falsy(product.get(*field)) {
                            report.error(format!("{prefix}.{side}: missing \"{field}\""));
                        }
                    }
                }
            }
        }

        if !is_nonempty_array(c.get("specTable")) {
            report.error(format!("{prefix}: specTable must be a non-empty array"));
        }
        if !is_nonempty_array(c.get("sections")) {
            report.error(format!("{prefix}: sections must be a non-empty array"));
        }
    }
}

fn validate_guides(guides: &Value, report: &mut ValidationReport) {
    let Some(items) = guides.as_array() else {
        report.error("guides.json must be an array");
        return;
    };

    let mut slugs = HashSet::new();
    for (i, g) in items.iter().enumerate() {
        let prefix = record_prefix("guides", i, g, "slug");

        for field in REQUIRED_GUIDE_FIELDS {
            if is_falsy(g.get(*field)) {
                report.error(format!("{prefix}: missing \"{field}\""));
            }
        }

        if let Some(slug) = str_field(g, "slug") {
            if !slugs.insert(slug.to_string()) {
                report.error(format!("{prefix}: duplicate slug \"{slug}\""));
            }
        }

        if !is_nonempty_array(g.get("summaryTable")) {
            report.error(format!("{prefix}: summaryTable must be a non-empty array"));
        }
        if !is_nonempty_array(g.get("sections")) {
            report.error(format!("{prefix}: sections must be a non-empty array"));
        }
    }
}

fn validate_categories(categories: &Value, report: &mut ValidationReport) {
    let Some(items) = categories.as_array() else {
        report.error("categories.json must be an array");
        return;
    };

    let mut slugs = HashSet::new();
    for (i, c) in items.iter().enumerate() {
        let prefix = record_prefix("categories", i, c, "slug");

        for field in REQUIRED_CATEGORY_FIELDS {
            if is_falsy(c.get(*field)) {
                report.error(format!("{prefix}: missing \"{field}\""));
            }
        }

        if let Some(slug) = str_field(c, "slug") {
            if !slugs.insert(slug.to_string()) {
                report.error(format!("{prefix}: duplicate slug \"{slug}\""));
            }
            if !VALID_CATEGORIES.contains(&slug) {
                report.error(format!(
                    "{prefix}: slug \"{slug}\" is not a known category. Must be one of: {}",
                    VALID_CATEGORIES.join(", ")
                ));
            }
        }
    }
}

//! Global constants used throughout the stackgen codebase.
//!
//! This module contains the fixed site vocabulary (category slugs, partial
//! names) and the page-wrapper literals used during page assembly. Defining
//! them centrally improves maintainability and makes magic strings more
//! discoverable.

/// Category slugs a product record may carry.
///
/// A product's `id` must be prefixed with its category slug followed by a
/// dash (e.g. `mice-razer-viper-v3-pro`).
pub const VALID_CATEGORIES: &[&str] = &["mice", "keyboards", "headsets", "monitors", "chairs"];

/// Partial templates rendered before the page body, in assembly order.
pub const PARTIALS_BEFORE_BODY: &[&str] = &["head", "header", "sidebar"];

/// Partial templates rendered after the page body, in assembly order.
///
/// The footer lands inside the page wrapper; the bottom nav outside it.
pub const PARTIAL_FOOTER: &str = "footer";
pub const PARTIAL_BOTTOM_NAV: &str = "bottom-nav";

/// Literal line opening the page wrapper during assembly.
pub const PAGE_WRAPPER_OPEN: &str = "  <div class=\"page-wrapper\">";

/// Literal line closing the page wrapper during assembly.
pub const PAGE_WRAPPER_CLOSE: &str = "  </div><!-- end .page-wrapper -->";

/// File extension appended to partial names when resolving them on disk.
pub const TEMPLATE_EXT: &str = "html";

/// Data files the validator expects under the data directory.
pub const PRODUCTS_FILE: &str = "products.json";
pub const COLLECTIONS_FILE: &str = "collections.json";
pub const COMPARISONS_FILE: &str = "comparisons.json";
pub const GUIDES_FILE: &str = "guides.json";
pub const CATEGORIES_FILE: &str = "categories.json";

/// The collection whose `baseProducts` ordering defines the editorial
/// ranking used across all category pages.
pub const ALL_PICKS_COLLECTION: &str = "all-picks";

/// Reserved context key bound to the element value when looping over an
/// array of scalars.
pub const LOOP_SCALAR_KEY: &str = "this";

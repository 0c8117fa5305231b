//! Shared HTML builders: product cards, pros/cons lists, paragraph blocks.
//!
//! Every user-facing field passes through [`escape_html`] here; the built
//! blobs are injected into templates raw, so this module is the escaping
//! boundary for card markup.

use crate::data::{ComparisonProduct, GuideProduct, Product};
use crate::templating::escape_html;

/// Inline style attribute for a badge colour override, or nothing for the
/// default CSS colour.
pub(crate) fn badge_style(color: Option<&str>) -> String {
    match color {
        Some(color) => format!(" style=\"background:{};\"", escape_html(color)),
        None => String::new(),
    }
}

/// Pros then cons as `<li>` lines at the given indent, joined with
/// newlines.
pub(crate) fn features_list(pros: &[String], cons: &[String], indent: &str) -> (String, String) {
    let pros_html = pros
        .iter()
        .map(|p| {
            format!("{indent}<li class=\"pro\"><span class=\"pro-icon\">✓</span> {}</li>", escape_html(p))
        })
        .collect::<Vec<_>>()
        .join("\n");
    let cons_html = cons
        .iter()
        .map(|c| {
            format!("{indent}<li class=\"con\"><span class=\"con-icon\">✕</span> {}</li>", escape_html(c))
        })
        .collect::<Vec<_>>()
        .join("\n");
    (pros_html, cons_html)
}

/// Newline-separated copy → `<p>` lines at the given indent.
///
/// Blank lines are dropped; each remaining line becomes one paragraph.
pub(crate) fn paragraphs(body: &str, indent: &str) -> String {
    body.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| format!("{indent}<p>{}</p>", escape_html(l)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build one product card for a category page.
pub(crate) fn category_card(product: &Product) -> String {
    let badge_style = badge_style(product.badge_color.as_deref());

    let rrp_block = match (&product.rrp, &product.saving) {
        (Some(rrp), saving) => format!(
            "\n              <span class=\"price-rrp-wrap\">\
             <span class=\"price-rrp-label\">RRP</span>\
             <span class=\"price-rrp\">{}</span></span>\
             <span class=\"price-saving\">{}</span>",
            escape_html(rrp),
            escape_html(saving.as_deref().unwrap_or_default()),
        ),
        (None, _) => String::new(),
    };

    let (pros_html, cons_html) = features_list(&product.pros, &product.cons, "              ");

    format!(
        "        <div class=\"product-card\">\n\
         \u{20}         <div class=\"product-image-placeholder\" aria-hidden=\"true\">{emoji}</div>\n\
         \u{20}         <div class=\"product-content\">\n\
         \u{20}           <span class=\"product-badge\"{badge_style}>{badge}</span>\n\
         \u{20}           <h3 class=\"product-title\">{name}</h3>\n\
         \u{20}           <div class=\"product-price-block\">\n\
         \u{20}             <span class=\"price-current-label\">Amazon price</span>\n\
         \u{20}             <span class=\"price-current\">{price}</span>{rrp_block}\n\
         \u{20}           </div>\n\
         \u{20}           <p class=\"product-desc\">{desc}</p>\n\
         \u{20}           <ul class=\"product-features\">\n\
         {pros_html}\n\
         {cons_html}\n\
         \u{20}           </ul>\n\
         \u{20}           <a href=\"{affiliate}\" target=\"_blank\" rel=\"noopener sponsored\" class=\"product-btn\">View on Amazon →</a>\n\
         \u{20}         </div>\n\
         \u{20}       </div>",
        emoji = escape_html(&product.emoji),
        badge = escape_html(&product.badge),
        name = escape_html(&product.name),
        price = escape_html(&product.price),
        desc = escape_html(&product.desc),
        affiliate = escape_html(&product.affiliate),
    )
}

/// Build one self-contained product card for a guide section.
pub(crate) fn guide_card(product: &GuideProduct) -> String {
    let badge_style = badge_style(product.badge_color.as_deref());

    let rrp_block = match &product.price_rrp {
        Some(rrp) => format!(
            "\n                  <span class=\"price-rrp-wrap\">\n\
             \u{20}                   <span class=\"price-rrp-label\">RRP</span>\n\
             \u{20}                   <span class=\"price-rrp\">{}</span>\n\
             \u{20}                 </span>\n\
             \u{20}                 <span class=\"price-saving\">{}</span>",
            escape_html(rrp),
            escape_html(product.price_saving.as_deref().unwrap_or_default()),
        ),
        None => String::new(),
    };

    let (pros_html, cons_html) = features_list(&product.pros, &product.cons, "              ");

    format!(
        "          <div class=\"product-card\">\n\
         \u{20}           <div class=\"product-content\">\n\
         \u{20}             <span class=\"product-badge\"{badge_style}>{badge}</span>\n\
         \u{20}             <h3 class=\"product-title\">{name}</h3>\n\
         \u{20}             <div class=\"product-price-block\">\n\
         \u{20}               <span class=\"price-current-label\">Amazon price</span>\n\
         \u{20}               <span class=\"price-current\">{price}</span>{rrp_block}\n\
         \u{20}             </div>\n\
         \u{20}             <p class=\"product-desc\">{desc}</p>\n\
         \u{20}             <ul class=\"product-features\">\n\
         {pros_html}\n\
         {cons_html}\n\
         \u{20}             </ul>\n\
         \u{20}             <a href=\"{affiliate}\" target=\"_blank\" rel=\"noopener sponsored\" class=\"product-btn\">View on Amazon →</a>\n\
         \u{20}           </div>\n\
         \u{20}         </div>",
        badge = escape_html(&product.badge),
        name = escape_html(&product.name),
        price = escape_html(&product.price),
        desc = escape_html(&product.desc),
        affiliate = escape_html(&product.affiliate),
    )
}

/// Build one buy card for a comparison page (no features list).
pub(crate) fn comparison_card(product: &ComparisonProduct) -> String {
    let badge_style = badge_style(product.badge_color.as_deref());

    format!(
        "            <div class=\"product-card\">\n\
         \u{20}             <div class=\"product-content\">\n\
         \u{20}               <span class=\"product-badge\"{badge_style}>{badge}</span>\n\
         \u{20}               <h3 class=\"product-title\">{name}</h3>\n\
         \u{20}               <div class=\"product-price-block\">\n\
         \u{20}                 <span class=\"price-current-label\">Amazon price</span>\n\
         \u{20}                 <span class=\"price-current\">{price}</span>\n\
         \u{20}               </div>\n\
         \u{20}               <p class=\"product-desc\">{desc}</p>\n\
         \u{20}               <a href=\"{affiliate}\" target=\"_blank\" rel=\"noopener sponsored\" class=\"product-btn\">View on Amazon →</a>\n\
         \u{20}             </div>\n\
         \u{20}           </div>",
        badge = escape_html(&product.badge),
        name = escape_html(&product.name),
        price = escape_html(&product.price),
        desc = escape_html(&product.desc),
        affiliate = escape_html(&product.affiliate),
    )
}

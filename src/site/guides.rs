//! Guide page generation.
//!
//! Reads `guides.json` and writes `guides/<slug>/index.html`, one per
//! record. Guide products are self-contained in the JSON — they are not
//! joined against the product catalogue.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use crate::data::{self, Guide};
use crate::templating::{escape_html, RenderContext};

use super::{cards, SiteEnv};

/// Generate all guide pages. Returns the number of pages written.
pub fn generate(env: &mut SiteEnv) -> Result<usize> {
    let guides = data::load_guides(&env.paths)?;
    let template = env.cache.get(&env.paths.template("guide"))?;

    let mut count = 0;
    for guide in &guides {
        let html = generate_guide(env, &template, guide)?;
        env.write_output(&format!("guides/{}/index.html", guide.slug), &html)?;
        println!("  {} guides/{}/index.html", "✓".green(), guide.slug);
        count += 1;
    }

    println!("\n  Generated {count} guide pages.");
    Ok(count)
}

fn generate_guide(env: &mut SiteEnv, template: &str, guide: &Guide) -> Result<String> {
    let summary_table_html = build_summary_table_html(guide);
    let summary_totals_html = build_summary_totals_html(guide);
    let sections_html = build_sections_html(guide);
    let buying_guide_html = build_buying_guide_html(guide);
    let related_guides_html = build_related_guides_html(guide);
    let schema_json = build_schema_json(env, guide);

    let mut ctx = RenderContext::new();
    // head placeholders
    ctx.insert("pageTitle", guide.meta_title.as_str());
    ctx.insert("metaDescription", guide.meta_description.as_str());
    ctx.insert("ogType", "article");
    ctx.insert("ogTitle", guide.og_title.as_deref().unwrap_or(&guide.meta_title));
    ctx.insert(
        "ogDescription",
        guide.og_description.as_deref().unwrap_or(&guide.meta_description),
    );
    ctx.insert("canonical", guide.canonical.as_str());
    ctx.insert("emoji", guide.emoji.as_deref().unwrap_or("📋"));
    ctx.insert("schemaJSON", schema_json);
    // header/sidebar active page
    ctx.insert("activePage", "guides");
    // guide template placeholders
    ctx.insert("heroTitle", guide.hero_title.as_str());
    ctx.insert("heroSubtitle", guide.hero_subtitle.as_str());
    ctx.insert(
        "breadcrumbLabel",
        guide.breadcrumb_label.as_deref().unwrap_or(&guide.title),
    );
    ctx.insert("intro", guide.intro.as_deref().unwrap_or_default());
    // rendered HTML blobs (raw — already safe HTML)
    ctx.insert("summaryTableHTML", summary_table_html);
    ctx.insert("summaryTotalsHTML", summary_totals_html);
    ctx.insert("sectionsHTML", sections_html);
    ctx.insert("buyingGuideHTML", buying_guide_html);
    ctx.insert("relatedGuidesHTML", related_guides_html);

    env.assemble_page(template, &ctx)
}

fn build_summary_table_html(guide: &Guide) -> String {
    guide
        .summary_table
        .iter()
        .map(|row| {
            format!(
                "              <tr>\n\
                 \u{20}               <td>{} {}</td>\n\
                 \u{20}               <td>{}</td>\n\
                 \u{20}               <td><strong>{}</strong></td>\n\
                 \u{20}             </tr>",
                escape_html(row.emoji.as_deref().unwrap_or_default()),
                escape_html(&row.category),
                escape_html(&row.pick),
                escape_html(&row.price)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Totals lines shown beneath the summary table; empty when no totals.
fn build_summary_totals_html(guide: &Guide) -> String {
    guide
        .summary_totals
        .iter()
        .map(|t| {
            format!(
                "        <p style=\"text-align:right;font-size:0.9rem;margin-top:0.5rem;font-weight:600;\">{}: {}</p>",
                escape_html(&t.label),
                escape_html(&t.value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_sections_html(guide: &Guide) -> String {
    guide
        .sections
        .iter()
        .map(|section| {
            let intro_p = section
                .intro
                .as_deref()
                .map(|intro| format!("        <p>{}</p>", escape_html(intro)))
                .unwrap_or_default();

            let cards_html = section
                .products
                .iter()
                .map(cards::guide_card)
                .collect::<Vec<_>>()
                .join("\n\n");

            format!(
                "      <section class=\"section\">\n\
                 \u{20}       <div class=\"section-title\">\n\
                 \u{20}         <h2>{}</h2>\n\
                 \u{20}       </div>\n\
                 {intro_p}\n\
                 \u{20}       <div class=\"product-grid\">\n\
                 {cards_html}\n\
                 \u{20}       </div>\n\
                 \u{20}     </section>",
                escape_html(&section.heading)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn build_buying_guide_html(guide: &Guide) -> String {
    let Some(buying_guide) = &guide.buying_guide else {
        return String::new();
    };

    let heading = buying_guide
        .heading
        .as_deref()
        .map(|h| format!("          <h2>{}</h2>\n", escape_html(h)))
        .unwrap_or_default();
    let paras = cards::paragraphs(buying_guide.body.as_deref().unwrap_or_default(), "          ");

    format!("{heading}{paras}")
}

fn build_related_guides_html(guide: &Guide) -> String {
    guide
        .related_guides
        .iter()
        .map(|g| {
            format!(
                "          <a href=\"{}\" class=\"category-card\">\n\
                 \u{20}           <div class=\"category-icon\">{}</div>\n\
                 \u{20}           <h3>{}</h3>\n\
                 \u{20}           <p>{}</p>\n\
                 \u{20}         </a>",
                escape_html(&g.href),
                escape_html(g.emoji.as_deref().unwrap_or("📋")),
                escape_html(&g.title),
                escape_html(&g.desc)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Article + BreadcrumbList JSON-LD for a guide page.
fn build_schema_json(env: &SiteEnv, guide: &Guide) -> String {
    let base = &env.config.base_url;
    let org = json!({ "@type": "Organization", "name": env.config.publisher, "url": base });

    let article = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": guide.title,
        "description": guide.meta_description,
        "url": guide.canonical,
        "author": org,
        "publisher": org,
        "datePublished": guide.date_published,
        "dateModified": guide.date_modified.as_deref().unwrap_or(&guide.date_published),
    });

    let breadcrumb = json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            { "@type": "ListItem", "position": 1, "name": "Home",
              "item": format!("{base}/") },
            { "@type": "ListItem", "position": 2, "name": "Guides",
              "item": format!("{base}/guides/") },
            { "@type": "ListItem", "position": 3,
              "name": guide.breadcrumb_label.as_deref().unwrap_or(&guide.title),
              "item": guide.canonical },
        ],
    });

    [article, breadcrumb]
        .iter()
        .map(|obj| {
            format!(
                "  <script type=\"application/ld+json\">\n  {}\n  </script>",
                serde_json::to_string(obj).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GuideProduct, GuideSection, SummaryRow, SummaryTotal};

    fn sample_guide() -> Guide {
        Guide {
            slug: "budget-setup".to_string(),
            title: "The £300 Budget Setup".to_string(),
            meta_title: "The £300 Budget Setup | Stack Pick".to_string(),
            meta_description: "A full desk for £300.".to_string(),
            canonical: "https://stackpick.co.uk/guides/budget-setup/".to_string(),
            date_published: "2026-02-01".to_string(),
            date_modified: Some("2026-02-10".to_string()),
            hero_title: "The £300 Budget Setup".to_string(),
            hero_subtitle: "Everything you need.".to_string(),
            breadcrumb_label: None,
            intro: Some("Intro copy.".to_string()),
            summary_table: vec![SummaryRow {
                emoji: Some("🖱️".to_string()),
                category: "Mouse".to_string(),
                pick: "Keychron M3".to_string(),
                price: "£35".to_string(),
            }],
            summary_totals: vec![SummaryTotal {
                label: "Total".to_string(),
                value: "£298".to_string(),
            }],
            sections: vec![GuideSection {
                heading: "The Mouse".to_string(),
                intro: Some("Why this one.".to_string()),
                products: vec![GuideProduct {
                    badge: "BUDGET PICK".to_string(),
                    badge_color: None,
                    name: "Keychron M3".to_string(),
                    price: "£35".to_string(),
                    price_rrp: Some("£49.99".to_string()),
                    price_saving: Some("Save 30%".to_string()),
                    desc: "Light and cheap.".to_string(),
                    affiliate: "https://example.com/m3".to_string(),
                    pros: vec!["cheap".to_string()],
                    cons: vec!["plain".to_string()],
                }],
            }],
            buying_guide: None,
            related_guides: vec![],
            og_title: None,
            og_description: None,
            emoji: None,
        }
    }

    #[test]
    fn test_summary_table_rows() {
        let html = build_summary_table_html(&sample_guide());
        assert!(html.contains("<td>🖱️ Mouse</td>"));
        assert!(html.contains("<td><strong>£35</strong></td>"));
    }

    #[test]
    fn test_summary_totals_line() {
        let html = build_summary_totals_html(&sample_guide());
        assert!(html.contains("Total: £298"));
        assert!(html.starts_with("        <p style="));
    }

    #[test]
    fn test_sections_embed_cards() {
        let html = build_sections_html(&sample_guide());
        assert!(html.contains("<h2>The Mouse</h2>"));
        assert!(html.contains("<p>Why this one.</p>"));
        assert!(html.contains("<span class=\"price-rrp\">£49.99</span>"));
        assert!(html.contains("Keychron M3"));
    }

    #[test]
    fn test_buying_guide_absent_is_empty() {
        assert_eq!(build_buying_guide_html(&sample_guide()), "");
    }

    #[test]
    fn test_buying_guide_heading_and_paragraphs() {
        let mut guide = sample_guide();
        guide.buying_guide = Some(crate::data::BuyingGuide {
            heading: Some("How to choose".to_string()),
            body: Some("Line one.\nLine two.".to_string()),
        });
        let html = build_buying_guide_html(&guide);
        assert!(html.starts_with("          <h2>How to choose</h2>\n"));
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn test_schema_uses_date_modified_when_set() {
        let config = crate::config::SiteConfig::default();
        let paths = config.resolve(std::path::Path::new("/tmp/site"));
        let env = SiteEnv {
            config,
            paths,
            renderer: crate::templating::Renderer::new(),
            cache: crate::templating::TemplateCache::new(),
        };
        let schema = build_schema_json(&env, &sample_guide());
        assert!(schema.contains("\"dateModified\":\"2026-02-10\""));
        assert!(schema.contains("\"name\":\"Guides\""));
    }
}

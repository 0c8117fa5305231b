//! Comparison page generation.
//!
//! Reads `comparisons.json` and writes `comparisons/<slug>/index.html`,
//! one per record. Unlike category generation, a failure here aborts the
//! whole step: comparison records are self-contained, so an error means
//! the data itself is broken.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use crate::data::{self, Comparison};
use crate::templating::{escape_html, RenderContext};

use super::{cards, SiteEnv};

/// Generate all comparison pages. Returns the number of pages written.
pub fn generate(env: &mut SiteEnv) -> Result<usize> {
    let comparisons = data::load_comparisons(&env.paths)?;
    let template = env.cache.get(&env.paths.template("comparison"))?;

    let mut count = 0;
    for comp in &comparisons {
        let html = generate_comparison(env, &template, comp)?;
        env.write_output(&format!("comparisons/{}/index.html", comp.slug), &html)?;
        println!("  {} comparisons/{}/index.html", "✓".green(), comp.slug);
        count += 1;
    }

    println!("\n  Generated {count} comparison pages.");
    Ok(count)
}

fn generate_comparison(env: &mut SiteEnv, template: &str, comp: &Comparison) -> Result<String> {
    let intro_html = build_intro_html(comp);
    let spec_table_html = build_spec_table_html(comp);
    let sections_html = build_sections_html(comp);
    let verdict_html = cards::paragraphs(&comp.verdict, "            ");
    let buy_cards_html = format!(
        "{}\n{}",
        cards::comparison_card(&comp.product_a),
        cards::comparison_card(&comp.product_b)
    );
    let related_links_html = build_related_links_html(comp);
    let schema_json = build_schema_json(env, comp);

    let breadcrumb_label = comp.breadcrumb_label.as_deref().unwrap_or(&comp.title);

    let mut ctx = RenderContext::new();
    // head placeholders
    ctx.insert("pageTitle", comp.meta_title.as_str());
    ctx.insert("metaDescription", comp.meta_description.as_str());
    ctx.insert("ogType", "article");
    ctx.insert("ogTitle", comp.og_title.as_deref().unwrap_or(&comp.meta_title));
    ctx.insert(
        "ogDescription",
        comp.og_description.as_deref().unwrap_or(&comp.meta_description),
    );
    ctx.insert("canonical", comp.canonical.as_str());
    ctx.insert("emoji", comp.emoji.as_deref().unwrap_or("⚖️"));
    ctx.insert("schemaJSON", schema_json);
    // header/sidebar active page
    ctx.insert("activePage", "comparisons");
    // comparison template placeholders
    ctx.insert("heroTitle", comp.hero_title.as_deref().unwrap_or(&comp.title));
    ctx.insert("heroSubtitle", comp.hero_subtitle.as_deref().unwrap_or_default());
    ctx.insert("breadcrumbLabel", breadcrumb_label);
    ctx.insert("productAName", comp.product_a.name.as_str());
    ctx.insert("productBName", comp.product_b.name.as_str());
    // rendered HTML blobs (raw — already safe HTML)
    ctx.insert("introHTML", intro_html);
    ctx.insert("specTableHTML", spec_table_html);
    ctx.insert("sectionsHTML", sections_html);
    ctx.insert("verdictHTML", verdict_html);
    ctx.insert("buyCardsHTML", buy_cards_html);
    ctx.insert("relatedLinksHTML", related_links_html);

    env.assemble_page(template, &ctx)
}

/// Quick Answer heading plus the intro copy as paragraphs.
fn build_intro_html(comp: &Comparison) -> String {
    format!(
        "          <h2>Quick Answer</h2>\n{}",
        cards::paragraphs(&comp.intro, "          ")
    )
}

fn build_spec_table_html(comp: &Comparison) -> String {
    comp.spec_table
        .iter()
        .map(|row| {
            let win_a = row.winner.as_deref() == Some("a");
            let win_b = row.winner.as_deref() == Some("b");
            let td_a = if win_a {
                format!("<td class=\"comparison-winner\">{}</td>", escape_html(&row.a))
            } else {
                format!("<td>{}</td>", escape_html(&row.a))
            };
            let td_b = if win_b {
                format!("<td class=\"comparison-winner\">{}</td>", escape_html(&row.b))
            } else {
                format!("<td>{}</td>", escape_html(&row.b))
            };
            format!(
                "                <tr>\n\
                 \u{20}                 <td>{}</td>\n\
                 \u{20}                 {td_a}\n\
                 \u{20}                 {td_b}\n\
                 \u{20}               </tr>",
                escape_html(&row.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_sections_html(comp: &Comparison) -> String {
    comp.sections
        .iter()
        .map(|section| {
            format!(
                "          <h3>{}</h3>\n{}",
                escape_html(&section.heading),
                cards::paragraphs(&section.body, "          ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn build_related_links_html(comp: &Comparison) -> String {
    if comp.related_links.is_empty() {
        return String::new();
    }
    let links = comp
        .related_links
        .iter()
        .map(|l| {
            format!(
                "          <a href=\"{}\" class=\"category-card\" style=\"text-decoration:none;\">\n\
                 \u{20}           <div class=\"category-icon\">⚖️</div>\n\
                 \u{20}           <h3>{}</h3>\n\
                 \u{20}         </a>",
                escape_html(&l.href),
                escape_html(&l.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "\n          <h2>Explore More</h2>\n          <div class=\"category-grid\" style=\"margin-top:1rem;\">\n{links}\n          </div>"
    )
}

/// Article + BreadcrumbList JSON-LD for a comparison page.
fn build_schema_json(env: &SiteEnv, comp: &Comparison) -> String {
    let base = &env.config.base_url;
    let org = json!({ "@type": "Organization", "name": env.config.publisher, "url": base });

    let article = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": comp.title,
        "description": comp.meta_description,
        "url": comp.canonical,
        "author": org,
        "publisher": org,
        "datePublished": comp.date_published,
        "dateModified": comp.date_modified.as_deref().unwrap_or(&comp.date_published),
    });

    let breadcrumb = json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            { "@type": "ListItem", "position": 1, "name": "Home",
              "item": format!("{base}/") },
            { "@type": "ListItem", "position": 2, "name": "Comparisons",
              "item": format!("{base}/comparisons/") },
            { "@type": "ListItem", "position": 3,
              "name": comp.breadcrumb_label.as_deref().unwrap_or(&comp.title),
              "item": comp.canonical },
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
    use crate::data::{ComparisonProduct, ContentSection, SpecRow};

    fn sample_comparison() -> Comparison {
        Comparison {
            slug: "viper-vs-op1w".to_string(),
            title: "Viper V3 Pro vs OP1w".to_string(),
            meta_title: "Viper V3 Pro vs OP1w | Stack Pick".to_string(),
            meta_description: "Which wireless mouse wins?".to_string(),
            canonical: "https://stackpick.co.uk/comparisons/viper-vs-op1w/".to_string(),
            date_published: "2026-02-01".to_string(),
            date_modified: None,
            intro: "Short answer.\nLonger answer.".to_string(),
            verdict: "Buy the Viper.".to_string(),
            product_a: ComparisonProduct {
                name: "Viper V3 Pro".to_string(),
                badge: "PRO".to_string(),
                badge_color: None,
                price: "£119".to_string(),
                desc: "desc a".to_string(),
                affiliate: "https://a".to_string(),
            },
            product_b: ComparisonProduct {
                name: "OP1w".to_string(),
                badge: "ALT".to_string(),
                badge_color: None,
                price: "£89".to_string(),
                desc: "desc b".to_string(),
                affiliate: "https://b".to_string(),
            },
            spec_table: vec![SpecRow {
                label: "Weight".to_string(),
                a: "54g".to_string(),
                b: "58g".to_string(),
                winner: Some("a".to_string()),
            }],
            sections: vec![ContentSection {
                heading: "Shape & feel".to_string(),
                body: "Line one.\nLine two.".to_string(),
            }],
            related_links: vec![],
            og_title: None,
            og_description: None,
            emoji: None,
            hero_title: None,
            hero_subtitle: None,
            breadcrumb_label: None,
        }
    }

    #[test]
    fn test_spec_table_marks_winner_cell() {
        let html = build_spec_table_html(&sample_comparison());
        assert!(html.contains("<td class=\"comparison-winner\">54g</td>"));
        assert!(html.contains("<td>58g</td>"));
        assert!(html.contains("<td>Weight</td>"));
    }

    #[test]
    fn test_intro_has_quick_answer_heading() {
        let html = build_intro_html(&sample_comparison());
        assert!(html.starts_with("          <h2>Quick Answer</h2>\n"));
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn test_sections_escape_heading() {
        let mut comp = sample_comparison();
        comp.sections[0].heading = "A < B".to_string();
        let html = build_sections_html(&comp);
        assert!(html.contains("<h3>A &lt; B</h3>"));
    }

    #[test]
    fn test_related_links_empty_renders_nothing() {
        assert_eq!(build_related_links_html(&sample_comparison()), "");
    }

    #[test]
    fn test_schema_date_modified_falls_back() {
        let config = crate::config::SiteConfig::default();
        let paths = config.resolve(std::path::Path::new("/tmp/site"));
        let env = SiteEnv {
            config,
            paths,
            renderer: crate::templating::Renderer::new(),
            cache: crate::templating::TemplateCache::new(),
        };
        let schema = build_schema_json(&env, &sample_comparison());
        assert!(schema.contains("\"dateModified\":\"2026-02-01\""));
        assert!(schema.contains("\"name\":\"Comparisons\""));
    }
}

//! Sitemap generation.
//!
//! Writes `sitemap.xml` at the output root. Static pages are a fixed table
//! here — they don't change; dynamic pages (comparisons, guides) are read
//! from the data files, with `lastmod` taken from `dateModified`, falling
//! back to `datePublished`, falling back to today.

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;

use crate::data;

use super::SiteEnv;

/// Static pages in priority order (high → low).
const STATIC_PAGES: &[(&str, &str, &str)] = &[
    ("/", "daily", "1.0"),
    ("/mice/", "weekly", "0.9"),
    ("/keyboards/", "weekly", "0.9"),
    ("/headsets/", "weekly", "0.9"),
    ("/monitors/", "weekly", "0.9"),
    ("/chairs/", "weekly", "0.9"),
    ("/guides/", "weekly", "0.8"),
    ("/comparisons/", "weekly", "0.7"),
    ("/search/", "weekly", "0.6"),
    ("/about/", "monthly", "0.5"),
    ("/pcs/", "monthly", "0.5"),
    ("/desks/", "monthly", "0.5"),
    ("/speakers/", "monthly", "0.5"),
    ("/extras/", "monthly", "0.5"),
];

/// Generate `sitemap.xml`. Returns the number of URLs written.
pub fn generate(env: &mut SiteEnv) -> Result<usize> {
    let comparisons = data::load_comparisons(&env.paths)?;
    let guides = data::load_guides(&env.paths)?;

    let today = Utc::now().format("%Y-%m-%d").to_string();
    let xml = build_sitemap(env, &comparisons, &guides, &today);
    env.write_output("sitemap.xml", &xml)?;

    let total = STATIC_PAGES.len() + guides.len() + comparisons.len();
    println!("  {} sitemap.xml ({total} URLs)", "✓".green());
    Ok(total)
}

fn build_sitemap(
    env: &SiteEnv,
    comparisons: &[data::Comparison],
    guides: &[data::Guide],
    today: &str,
) -> String {
    let base = &env.config.base_url;
    let mut blocks = Vec::new();

    for &(loc, changefreq, priority) in STATIC_PAGES {
        blocks.push(url_block(base, loc, changefreq, priority, today));
    }

    for guide in guides {
        let lastmod = guide
            .date_modified
            .as_deref()
            .unwrap_or(&guide.date_published);
        blocks.push(url_block(
            base,
            &format!("/guides/{}/", guide.slug),
            "monthly",
            "0.8",
            lastmod,
        ));
    }

    for comp in comparisons {
        let lastmod = comp.date_modified.as_deref().unwrap_or(&comp.date_published);
        blocks.push(url_block(
            base,
            &format!("/comparisons/{}/", comp.slug),
            "monthly",
            "0.7",
            lastmod,
        ));
    }

    let mut lines = vec![
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string(),
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">".to_string(),
    ];
    lines.extend(blocks);
    lines.push("</urlset>".to_string());
    lines.push(String::new());
    lines.join("\n")
}

fn url_block(base: &str, loc: &str, changefreq: &str, priority: &str, lastmod: &str) -> String {
    [
        "  <url>".to_string(),
        format!("    <loc>{base}{loc}</loc>"),
        format!("    <lastmod>{lastmod}</lastmod>"),
        format!("    <changefreq>{changefreq}</changefreq>"),
        format!("    <priority>{priority}</priority>"),
        "  </url>".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::data::{Comparison, ComparisonProduct, Guide, SummaryRow};

    fn test_env() -> SiteEnv {
        let config = SiteConfig::default();
        let paths = config.resolve(std::path::Path::new("/tmp/site"));
        SiteEnv {
            config,
            paths,
            renderer: crate::templating::Renderer::new(),
            cache: crate::templating::TemplateCache::new(),
        }
    }

    fn minimal_guide(slug: &str, modified: Option<&str>) -> Guide {
        Guide {
            slug: slug.to_string(),
            title: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            canonical: String::new(),
            date_published: "2026-01-15".to_string(),
            date_modified: modified.map(str::to_string),
            hero_title: String::new(),
            hero_subtitle: String::new(),
            breadcrumb_label: None,
            intro: None,
            summary_table: vec![SummaryRow {
                emoji: None,
                category: String::new(),
                pick: String::new(),
                price: String::new(),
            }],
            summary_totals: vec![],
            sections: vec![],
            buying_guide: None,
            related_guides: vec![],
            og_title: None,
            og_description: None,
            emoji: None,
        }
    }

    fn minimal_comparison(slug: &str) -> Comparison {
        let side = ComparisonProduct {
            name: String::new(),
            badge: String::new(),
            badge_color: None,
            price: String::new(),
            desc: String::new(),
            affiliate: String::new(),
        };
        Comparison {
            slug: slug.to_string(),
            title: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            canonical: String::new(),
            date_published: "2026-01-20".to_string(),
            date_modified: None,
            intro: String::new(),
            verdict: String::new(),
            product_a: side.clone(),
            product_b: side,
            spec_table: vec![],
            sections: vec![],
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
    fn test_sitemap_structure_and_ordering() {
        let env = test_env();
        let xml = build_sitemap(
            &env,
            &[minimal_comparison("a-vs-b")],
            &[minimal_guide("setup", Some("2026-02-02"))],
            "2026-08-06",
        );

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
        assert!(xml.ends_with("</urlset>\n"));
        // static pages first, then guides, then comparisons
        let home = xml.find("<loc>https://stackpick.co.uk/</loc>").unwrap();
        let guide = xml.find("<loc>https://stackpick.co.uk/guides/setup/</loc>").unwrap();
        let comp = xml
            .find("<loc>https://stackpick.co.uk/comparisons/a-vs-b/</loc>")
            .unwrap();
        assert!(home < guide && guide < comp);
    }

    #[test]
    fn test_lastmod_fallback_chain() {
        let env = test_env();
        let xml = build_sitemap(
            &env,
            &[minimal_comparison("a-vs-b")],
            &[minimal_guide("setup", Some("2026-02-02"))],
            "2026-08-06",
        );

        // static pages use today's date
        assert!(xml.contains("<lastmod>2026-08-06</lastmod>"));
        // modified guide uses its dateModified
        assert!(xml.contains("<lastmod>2026-02-02</lastmod>"));
        // unmodified comparison falls back to datePublished
        assert!(xml.contains("<lastmod>2026-01-20</lastmod>"));
    }

    #[test]
    fn test_url_block_fields() {
        let block = url_block("https://example.org", "/mice/", "weekly", "0.9", "2026-01-01");
        assert_eq!(
            block,
            "  <url>\n    <loc>https://example.org/mice/</loc>\n    <lastmod>2026-01-01</lastmod>\n    <changefreq>weekly</changefreq>\n    <priority>0.9</priority>\n  </url>"
        );
    }
}

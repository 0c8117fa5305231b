//! Shared test fixtures for integration tests.
//!
//! `TestSite` builds a complete, minimal site in a temporary directory:
//! valid data files and a working template set. Tests mutate it from
//! there to exercise failure paths.

use std::path::PathBuf;
use std::process::Output;

use tempfile::TempDir;

/// A throwaway site directory seeded with valid data and templates.
pub struct TestSite {
    _tmp: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestSite {
    /// Create a site with one product per data file and a full template set.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();

        let site = Self {
            _tmp: tmp,
            root,
        };
        site.seed_data();
        site.seed_templates();
        site
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("_data")
    }

    pub fn write_data(&self, name: &str, content: &str) {
        let dir = self.data_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(name), content).unwrap();
    }

    pub fn write_template(&self, relative: &str, content: &str) {
        let path = self.root.join("_templates").join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// Read a generated output file relative to the site root.
    pub fn read_output(&self, relative: &str) -> String {
        std::fs::read_to_string(self.root.join(relative))
            .unwrap_or_else(|e| panic!("read {relative}: {e}"))
    }

    pub fn output_exists(&self, relative: &str) -> bool {
        self.root.join(relative).exists()
    }

    /// Run the stackgen binary against this site.
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = assert_cmd::Command::cargo_bin("stackgen").expect("binary builds");
        cmd.arg("--site-dir").arg(&self.root);
        cmd.args(args);
        cmd.output().expect("run stackgen")
    }

    fn seed_data(&self) {
        self.write_data(
            "products.json",
            r#"[
  {
    "id": "mice-test-mouse",
    "category": "mice",
    "brand": "TestBrand",
    "badge": "TOP PICK",
    "name": "Test Mouse Pro",
    "shortName": "Test Mouse",
    "specs": ["54g Wireless", "8K Polling"],
    "desc": "A very good mouse.",
    "pros": ["Light", "Fast"],
    "cons": ["Pricey"],
    "price": "£119",
    "priceRaw": 119.05,
    "affiliate": "https://example.com/mouse",
    "url": "/mice/",
    "emoji": "🖱️",
    "seam": "crimson",
    "loadoutCount": 2,
    "tags": ["fps"],
    "inStock": true,
    "nextDay": true,
    "rrp": "£159.99",
    "saving": "Save 26%"
  }
]"#,
        );

        self.write_data(
            "collections.json",
            r##"[
  {
    "id": "all-picks",
    "label": "All Picks",
    "emoji": "🏴",
    "color": "#F2F0EB",
    "baseProducts": ["mice-test-mouse"]
  }
]"##,
        );

        self.write_data(
            "comparisons.json",
            r#"[
  {
    "slug": "mouse-a-vs-mouse-b",
    "title": "Mouse A vs Mouse B",
    "metaTitle": "Mouse A vs Mouse B | Stack Pick",
    "metaDescription": "Which mouse wins?",
    "canonical": "https://stackpick.co.uk/comparisons/mouse-a-vs-mouse-b/",
    "datePublished": "2026-02-01",
    "intro": "Short answer: A.",
    "verdict": "Buy A.",
    "productA": { "name": "Mouse A", "badge": "PRO", "price": "£119", "desc": "a", "affiliate": "https://example.com/a" },
    "productB": { "name": "Mouse B", "badge": "ALT", "price": "£89", "desc": "b", "affiliate": "https://example.com/b" },
    "specTable": [ { "label": "Weight", "a": "54g", "b": "58g", "winner": "a" } ],
    "sections": [ { "heading": "Feel", "body": "A feels better." } ]
  }
]"#,
        );

        self.write_data(
            "guides.json",
            r#"[
  {
    "slug": "budget-setup",
    "title": "Budget Setup",
    "metaTitle": "Budget Setup | Stack Pick",
    "metaDescription": "A desk on a budget.",
    "canonical": "https://stackpick.co.uk/guides/budget-setup/",
    "datePublished": "2026-02-01",
    "dateModified": "2026-02-10",
    "heroTitle": "The Budget Setup",
    "heroSubtitle": "All you need.",
    "summaryTable": [ { "emoji": "🖱️", "category": "Mouse", "pick": "Test Mouse", "price": "£35" } ],
    "sections": [
      {
        "heading": "The Mouse",
        "intro": "Start here.",
        "products": [
          { "badge": "BUDGET", "name": "Cheap Mouse", "price": "£35", "desc": "Cheap.", "affiliate": "https://example.com/c", "pros": ["cheap"], "cons": ["plain"] }
        ]
      }
    ]
  }
]"#,
        );

        self.write_data(
            "categories.json",
            r#"[
  {
    "slug": "mice",
    "emoji": "🖱️",
    "pageTitle": "Best Gaming Mice UK 2026 | Stack Pick",
    "metaDescription": "The best mice.",
    "ogTitle": "Best Gaming Mice UK 2026 | Stack Pick",
    "ogDescription": "Mice we rate.",
    "canonical": "https://stackpick.co.uk/mice/",
    "heroTitle": "Best Gaming Mice (UK)",
    "heroSubtitle": "Updated Feb 2026.",
    "breadcrumbLabel": "Gaming Mice",
    "buyingGuideHtml": "<h2>The Mouse Guide</h2><p>Read this first.</p>"
  }
]"#,
        );
    }

    fn seed_templates(&self) {
        self.write_template(
            "_partials/head.html",
            "<head><title>{{pageTitle}}</title>{{{schemaJSON}}}</head>",
        );
        self.write_template(
            "_partials/header.html",
            r#"<header>{{#if_active "mice" activePage}}<b>mice</b>{{/if_active}}</header>"#,
        );
        self.write_template("_partials/sidebar.html", "<aside>{{activePage}}</aside>");
        self.write_template("_partials/footer.html", "<footer>© Stack Pick</footer>");
        self.write_template("_partials/bottom-nav.html", "<nav>bottom</nav>");

        self.write_template(
            "category.html",
            "<h1>{{heroTitle}}</h1>\n{{{productCardsHTML}}}\n{{{buyingGuideHTML}}}",
        );
        self.write_template(
            "comparison.html",
            "<h1>{{heroTitle}}</h1>\n{{{introHTML}}}\n<table>{{{specTableHTML}}}</table>\n{{{sectionsHTML}}}\n{{{verdictHTML}}}\n{{{buyCardsHTML}}}{{{relatedLinksHTML}}}",
        );
        self.write_template(
            "guide.html",
            "<h1>{{heroTitle}}</h1>\n<table>{{{summaryTableHTML}}}</table>\n{{{summaryTotalsHTML}}}\n{{{sectionsHTML}}}\n{{{buyingGuideHTML}}}\n{{{relatedGuidesHTML}}}",
        );
    }
}

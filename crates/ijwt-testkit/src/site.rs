//! Sample site fixture
//!
//! A small site exercising every include feature: a three-level chain
//! (`header` → `bread` → `footer`), a comment marker, a cache-tagged element
//! and a removal-tagged element.

use std::path::Path;

/// `(relative path, content)` pairs of the sample site
pub const SAMPLE_SITE: &[(&str, &str)] = &[
    (
        "index.html",
        r#"<!DOCTYPE html><html><head><title>Sample</title></head><body><div id="ijwt_header.html"></div><main>Body</main><!--ijwt_nav.html--><p id="stamp" class="ijwt_cache">v1</p><div class="ijwt_remove">drop me</div></body></html>"#,
    ),
    (
        "partials/header.html",
        r#"<header><div id="ijwt_bread.html"></div></header>"#,
    ),
    (
        "partials/bread.html",
        r#"<span>Bread</span><div id="ijwt_footer.html"></div>"#,
    ),
    ("partials/footer.html", "Feet!"),
    ("pages/nav.html", "<nav>Nav</nav>"),
    ("static/css/global.css", "body { margin: 0 }"),
];

/// Body of the sample index once every include is resolved
pub const SAMPLE_RENDERED_BODY: &str = r#"<header><span>Bread</span>Feet!</header><main>Body</main><nav>Nav</nav><p id="stamp" class="ijwt_cache">v1</p>"#;

/// Write `files` under `root`, creating directories as needed
///
/// # Panics
///
/// Panics if any file cannot be written
pub fn write_site(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create site directory");
        }
        std::fs::write(&path, content).expect("Failed to write site file");
    }
}

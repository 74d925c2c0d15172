//! Integration tests for the full render pipeline

use ijwt_core::{
    Cache, Config, DirFetcher, Engine, FileStore, HttpFetcher, MemoryStore, Mode, Store,
};
use ijwt_testkit::{SAMPLE_RENDERED_BODY, SAMPLE_SITE, temp_dir_in_workspace, write_site};
use std::time::Duration;

fn body_of(html: &str) -> &str {
    let start = html.find("<body>").unwrap() + "<body>".len();
    let end = html.rfind("</body>").unwrap();
    &html[start..end]
}

#[tokio::test]
async fn test_render_sample_site_from_directory() {
    let site = temp_dir_in_workspace();
    write_site(site.path(), SAMPLE_SITE);

    let config = Config::default();
    let fetcher = DirFetcher::new(site.path(), config.site_base().unwrap()).unwrap();
    let engine = Engine::new(config, fetcher, MemoryStore::new()).unwrap();

    let html = engine.render_index().await.unwrap();
    assert!(html.starts_with("<!DOCTYPE html><html><head><title>Sample</title></head>"));
    assert_eq!(body_of(&html), SAMPLE_RENDERED_BODY);
}

#[tokio::test]
async fn test_resolve_url_from_directory() {
    let site = temp_dir_in_workspace();
    write_site(site.path(), SAMPLE_SITE);

    let config = Config::default();
    let fetcher = DirFetcher::new(site.path(), config.site_base().unwrap()).unwrap();
    let engine = Engine::new(config, fetcher, MemoryStore::new()).unwrap();

    assert_eq!(
        engine.url_resolver("global.css").await.unwrap().as_str(),
        "http://localhost/static/css/global.css"
    );
    assert!(engine.url_resolver("nothing.css").await.is_none());
}

#[tokio::test]
async fn test_render_over_http() {
    let mut server = mockito::Server::new_async().await;
    let index = server
        .mock("GET", "/site/pages/index.html")
        .with_status(200)
        .with_body(r#"<html><body><h1>Home</h1><div id="ijwt_footer.html"></div></body></html>"#)
        .create_async()
        .await;
    let footer = server
        .mock("GET", "/site/partials/footer.html")
        .with_status(200)
        .with_body("<footer>F</footer>")
        .create_async()
        .await;

    let mut config = Config::default();
    config.site.origin = server.url();
    config.site.path = "/site/".to_string();
    config.site.directories = vec!["pages".to_string(), "partials".to_string()];

    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let engine = Engine::new(config, fetcher, MemoryStore::new()).unwrap();

    let html = engine.render_index().await.unwrap();
    assert_eq!(
        html,
        "<html><head></head><body><h1>Home</h1><footer>F</footer></body></html>"
    );
    index.assert_async().await;
    footer.assert_async().await;
}

#[tokio::test]
async fn test_production_cache_persists_across_engines() {
    let site = temp_dir_in_workspace();
    write_site(site.path(), SAMPLE_SITE);
    let store_dir = temp_dir_in_workspace();
    let store_path = store_dir.path().join("store.json");

    let mut config = Config::default();
    config.site.mode = Mode::Production;

    {
        let fetcher = DirFetcher::new(site.path(), config.site_base().unwrap()).unwrap();
        let store = FileStore::open(&store_path).unwrap();
        let engine = Engine::new(config.clone(), fetcher, store).unwrap();
        engine.render_index().await.unwrap();
    }

    // The site changes on disk, but production mode serves the cached copy
    write_site(site.path(), &[("partials/footer.html", "New feet!")]);

    let fetcher = DirFetcher::new(site.path(), config.site_base().unwrap()).unwrap();
    let store = FileStore::open(&store_path).unwrap();
    assert_eq!(
        store.get("ijwt_footer.html").unwrap().as_deref(),
        Some("Feet!")
    );
    let engine = Engine::new(config, fetcher, store).unwrap();
    let html = engine.render_index().await.unwrap();
    assert_eq!(body_of(&html), SAMPLE_RENDERED_BODY);
}

#[tokio::test]
async fn test_cache_tag_restored_in_production() {
    let site = temp_dir_in_workspace();
    write_site(site.path(), SAMPLE_SITE);

    let mut config = Config::default();
    config.site.mode = Mode::Production;
    let store = MemoryStore::new();

    // A cached value for the `stamp` element replaces its live content
    let key = ijwt_core::hash::hash("stamp").to_string();
    Cache::new(&store, "ijwt").set(&key, "v0").unwrap();

    let fetcher = DirFetcher::new(site.path(), config.site_base().unwrap()).unwrap();
    let engine = Engine::new(config, fetcher, &store).unwrap();
    let html = engine.render_index().await.unwrap();
    assert!(html.contains(r#"<p id="stamp" class="ijwt_cache">v0</p>"#));
}

#[tokio::test]
async fn test_development_records_cache_tag() {
    let site = temp_dir_in_workspace();
    write_site(site.path(), SAMPLE_SITE);

    let config = Config::default();
    let store = MemoryStore::new();
    let fetcher = DirFetcher::new(site.path(), config.site_base().unwrap()).unwrap();
    let engine = Engine::new(config, fetcher, &store).unwrap();
    engine.render_index().await.unwrap();

    let key = format!("ijwt_{}", ijwt_core::hash::hash("stamp"));
    assert_eq!(store.get(&key).unwrap().as_deref(), Some("v1"));
    // Includes are never cached in development
    assert!(store.get("ijwt_footer.html").unwrap().is_none());
}

#[tokio::test]
async fn test_encoded_placeholder_cannot_read_outside_site() {
    let temp = temp_dir_in_workspace();
    let site = temp.path().join("site");
    write_site(
        &site,
        &[("index.html", r#"<p>top</p><div id="ijwt_..%2Fsecret.txt"></div>"#)],
    );
    std::fs::write(temp.path().join("secret.txt"), "TOP SECRET").unwrap();

    let config = Config::default();
    let fetcher = DirFetcher::new(&site, config.site_base().unwrap()).unwrap();
    let engine = Engine::new(config, fetcher, MemoryStore::new()).unwrap();

    let html = engine.render_index().await.unwrap();
    assert!(!html.contains("TOP SECRET"));
    assert!(html.contains(r#"<div id="ijwt_..%2Fsecret.txt"></div>"#));
}

//! Render pipeline
//!
//! ```text
//! render_page(page)
//!     ↓
//! development mode → clear cache
//!     ↓
//! fetch page → parse → build tree → collapse
//!     ↓
//! cache-tag pass → removal pass
//!     ↓
//! serialize
//! ```

use crate::cache::{Cache, Store};
use crate::config::{Config, Mode};
use crate::dom::Document;
use crate::error::{IjwtError, Result};
use crate::fetch::Fetch;
use crate::passes;
use crate::qualifier;
use crate::resolve::FileResolver;
use crate::scan::Scanner;
use crate::tree::{self, TreeBuilder, TreeNode};
use url::Url;

/// Include engine over an injected transport `F` and store `S`
#[derive(Debug)]
pub struct Engine<F, S> {
    config: Config,
    resolver: FileResolver<F, S>,
    scanner: Scanner,
}

impl<F: Fetch, S: Store> Engine<F, S> {
    pub fn new(config: Config, fetcher: F, store: S) -> Result<Self> {
        let resolver = FileResolver::new(fetcher, store, &config)?;
        let scanner = Scanner::new(&config.engine.prefix);
        Ok(Self {
            config,
            resolver,
            scanner,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn resolver(&self) -> &FileResolver<F, S> {
        &self.resolver
    }

    pub fn cache(&self) -> &Cache<S> {
        self.resolver.cache()
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn mode(&self) -> Mode {
        self.config.site.mode
    }

    pub fn site_base(&self) -> &Url {
        self.resolver.site_base()
    }

    pub async fn fetch_file(&self, file_name: &str) -> Option<String> {
        self.resolver.fetch(file_name).await
    }

    /// URL of the first directory holding `file_name`
    pub async fn url_resolver(&self, file_name: &str) -> Option<Url> {
        self.resolver.search(file_name).await
    }

    pub fn qualify(&self, path: &str) -> Result<String> {
        qualifier::qualify(self.resolver.site_base(), path)
    }

    pub async fn build_tree(&self, document: Document) -> Result<TreeNode> {
        TreeBuilder::new(&self.resolver, &self.scanner)
            .with_max_depth(self.config.engine.max_depth)
            .build(document)
            .await
    }

    pub fn collapse(&self, tree: TreeNode) -> Document {
        tree::collapse(tree, &self.scanner)
    }

    pub fn apply_cache_tags(&self, document: &Document) -> Result<usize> {
        passes::apply_cache_tags(document, self.cache(), self.mode())
    }

    pub fn remove_tagged(&self, document: &Document) -> usize {
        passes::remove_tagged(document, &self.config.engine.prefix)
    }

    /// Resolve every include of an already parsed document and run the
    /// post-collapse passes
    pub async fn render_document(&self, document: Document) -> Result<Document> {
        let tree = self.build_tree(document).await?;
        tracing::debug!(nodes = tree.len(), depth = tree.depth(), "tree built");

        let document = self.collapse(tree);
        self.apply_cache_tags(&document)?;
        let removed = self.remove_tagged(&document);
        tracing::debug!(removed, "removal pass done");
        Ok(document)
    }

    /// Render `page` to a complete HTML string
    pub async fn render_page(&self, page: &str) -> Result<String> {
        if !self.mode().is_production() {
            self.cache().clear()?;
        }

        let text = self
            .fetch_file(page)
            .await
            .ok_or_else(|| IjwtError::PageNotFound(page.to_string()))?;

        let document = self.render_document(Document::parse(&text)).await?;
        tracing::info!(page, "rendered");
        document.to_html()
    }

    /// Render the configured index page
    pub async fn render_index(&self) -> Result<String> {
        let index = self.config.site.index.clone();
        self.render_page(&index).await
    }
}

//! Post-collapse passes over the final document

use crate::cache::{Cache, Store};
use crate::config::Mode;
use crate::config::consts::classes;
use crate::dom::{self, Document};
use crate::error::Result;
use crate::hash::hash;

/// Restore or record the content of every `<prefix>_cache` element.
///
/// Each element is keyed by the hash of its `id`. In production mode a
/// non-empty cached value replaces the element's content; in every other
/// case the element's current content is written to the cache. Returns the
/// number of elements visited.
pub fn apply_cache_tags<S: Store>(document: &Document, cache: &Cache<S>, mode: Mode) -> Result<usize> {
    let class = format!("{}_{}", cache.prefix(), classes::CACHE);
    let elements = document.elements_with_class(&class);

    for element in &elements {
        let id = dom::attribute(element, "id").unwrap_or_default();
        let key = hash(&id).to_string();

        if mode.is_production() {
            if let Some(cached) = cache.get(&key)?.filter(|data| !data.is_empty()) {
                tracing::debug!(%id, %key, "restoring cached element");
                dom::set_inner_html(element, &cached);
                continue;
            }
        }

        tracing::debug!(%id, %key, "caching element");
        cache.set(&key, &dom::inner_html(element)?)?;
    }

    Ok(elements.len())
}

/// Detach every `<prefix>_remove` element. Returns how many were removed.
pub fn remove_tagged(document: &Document, prefix: &str) -> usize {
    let class = format!("{}_{}", prefix, classes::REMOVE);
    document
        .elements_with_class(&class)
        .iter()
        .filter(|element| dom::detach(element))
        .count()
}

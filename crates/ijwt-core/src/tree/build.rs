use super::TreeNode;
use crate::cache::Store;
use crate::dom::Document;
use crate::error::{IjwtError, Result};
use crate::fetch::Fetch;
use crate::resolve::FileResolver;
use crate::scan::Scanner;

/// Depth-first tree construction.
///
/// Fetches are issued one at a time, in document order. An unresolvable
/// placeholder produces no child; the slot it would have filled stays empty
/// and its siblings keep their own slots.
#[derive(Debug)]
pub struct TreeBuilder<'a, F, S> {
    resolver: &'a FileResolver<F, S>,
    scanner: &'a Scanner,
    max_depth: Option<usize>,
}

impl<'a, F: Fetch, S: Store> TreeBuilder<'a, F, S> {
    pub fn new(resolver: &'a FileResolver<F, S>, scanner: &'a Scanner) -> Self {
        Self {
            resolver,
            scanner,
            max_depth: None,
        }
    }

    /// Fail instead of descending more than `max_depth` levels below the root
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub async fn build(&self, document: Document) -> Result<TreeNode> {
        self.build_node(document, 0, 0).await
    }

    async fn build_node(&self, document: Document, slot: usize, depth: usize) -> Result<TreeNode> {
        let placeholders = self.scanner.scan(&document);
        tracing::debug!(depth, slot, placeholders = placeholders.len(), "building tree node");

        // Placeholders hold handles into `document`; the names are all we need
        let file_names: Vec<String> = placeholders.into_iter().map(|p| p.file_name).collect();
        let mut node = TreeNode::new(document, slot);

        for (slot, file_name) in file_names.into_iter().enumerate() {
            let Some(text) = self.resolver.fetch(&file_name).await else {
                tracing::debug!(%file_name, slot, "unresolved placeholder left in place");
                continue;
            };

            if let Some(max_depth) = self.max_depth {
                if depth + 1 > max_depth {
                    return Err(IjwtError::IncludeDepthExceeded {
                        file_name,
                        max_depth,
                    });
                }
            }

            let child = Box::pin(self.build_node(Document::parse(&text), slot, depth + 1)).await?;
            node.add(child);
        }

        Ok(node)
    }
}

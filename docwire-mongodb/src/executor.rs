//! Execution of modifier documents against a MongoDB collection.

use async_trait::async_trait;
use bson::{Bson, Document, doc};
use mongodb::Collection;
use docwire_core::{
    error::{DocwireError, DocwireResult},
    update::ModifierDocument,
};


/// Sends a selector and a modifier document to the server as one update command.
///
/// Implementations refuse empty modifier documents before any I/O, since the server
/// rejects updates that carry no operators.
#[async_trait]
pub trait ModifierExecutor: Send + Sync {
    /// Applies `modifier` to the first document matching `selector`.
    ///
    /// Returns the number of modified documents.
    async fn update_one(&self, selector: Document, modifier: ModifierDocument) -> DocwireResult<u64>;

    /// Applies `modifier` to every document matching `selector`.
    ///
    /// Returns the number of modified documents.
    async fn update_many(&self, selector: Document, modifier: ModifierDocument) -> DocwireResult<u64>;

    /// Applies `modifier` to the document whose `_id` is `id`.
    ///
    /// Returns the number of modified documents.
    async fn update_by_id(&self, id: Bson, modifier: ModifierDocument) -> DocwireResult<u64> {
        self.update_one(id_selector(id), modifier).await
    }
}

pub(crate) fn id_selector(id: Bson) -> Document {
    doc! { "_id": id }
}

pub(crate) fn require_operators(modifier: ModifierDocument) -> DocwireResult<Document> {
    if modifier.is_empty() {
        return Err(DocwireError::InvalidDocument(
            "update requires at least one modifier".to_string(),
        ));
    }

    Ok(modifier.into_document())
}

#[async_trait]
impl ModifierExecutor for Collection<Document> {
    async fn update_one(&self, selector: Document, modifier: ModifierDocument) -> DocwireResult<u64> {
        let update = require_operators(modifier)?;

        let result = Collection::update_one(self, selector, update)
            .await
            .map_err(|e| DocwireError::Backend(e.to_string()))?;

        tracing::debug!(
            collection = %self.name(),
            matched = result.matched_count,
            modified = result.modified_count,
            "Applied modifier to one document"
        );

        Ok(result.modified_count)
    }

    async fn update_many(&self, selector: Document, modifier: ModifierDocument) -> DocwireResult<u64> {
        let update = require_operators(modifier)?;

        let result = Collection::update_many(self, selector, update)
            .await
            .map_err(|e| DocwireError::Backend(e.to_string()))?;

        tracing::debug!(
            collection = %self.name(),
            matched = result.matched_count,
            modified = result.modified_count,
            "Applied modifier to many documents"
        );

        Ok(result.modified_count)
    }
}

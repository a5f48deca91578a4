use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};

use crate::error::Result;

/// One collection of documents in a document store.
///
/// Writes are single-document operations; nothing here spans two documents.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Collection name, used in log lines.
    fn name(&self) -> &str;

    async fn find_all(&self) -> Result<Vec<Document>>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Document>>;

    /// Insert a document and return its `_id`, assigning a fresh one if the
    /// document has none.
    async fn insert_one(&self, document: Document) -> Result<ObjectId>;

    /// Append `value` to the array `field` of the document with `id`.
    ///
    /// A missing field is created as a one-element array. Returns `false`
    /// if no document matched.
    async fn push(&self, id: ObjectId, field: &str, value: Bson) -> Result<bool>;

    /// Returns `true` if a document was removed.
    async fn delete_one(&self, id: ObjectId) -> Result<bool>;
}

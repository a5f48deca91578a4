use async_trait::async_trait;
use bson::{Bson, Document, doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use super::DocumentCollection;
use crate::error::{Result, RosterError};

/// A MongoDB collection of raw documents.
pub struct MongoCollection {
    inner: Collection<Document>,
}

impl MongoCollection {
    pub fn new(database: &Database, name: &str) -> Self {
        Self {
            inner: database.collection::<Document>(name),
        }
    }
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn find_all(&self) -> Result<Vec<Document>> {
        let cursor = self.inner.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Document>> {
        Ok(self.inner.find_one(doc! { "_id": id }).await?)
    }

    async fn insert_one(&self, document: Document) -> Result<ObjectId> {
        let result = self.inner.insert_one(document).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            RosterError::Store(format!(
                "{} assigned a non-ObjectId _id: {}",
                self.inner.name(),
                result.inserted_id
            ))
        })
    }

    async fn push(&self, id: ObjectId, field: &str, value: Bson) -> Result<bool> {
        let mut append = Document::new();
        append.insert(field, value);
        let result = self
            .inner
            .update_one(doc! { "_id": id }, doc! { "$push": append })
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_one(&self, id: ObjectId) -> Result<bool> {
        let result = self.inner.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

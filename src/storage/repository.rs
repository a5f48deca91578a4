use std::marker::PhantomData;
use std::sync::Arc;

use bson::{Bson, oid::ObjectId};
use serde::Serialize;

use super::DocumentCollection;
use crate::error::Result;
use crate::model::Entity;

/// Typed access to one collection.
pub struct Repository<T> {
    collection: Arc<dyn DocumentCollection>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self {
            collection,
            _entity: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<T>> {
        let documents = self.collection.find_all().await?;
        tracing::debug!(
            collection = self.collection.name(),
            count = documents.len(),
            "Listing {}s",
            T::KIND
        );
        documents
            .into_iter()
            .map(|d| bson::from_document(d).map_err(Into::into))
            .collect()
    }

    pub async fn get(&self, id: ObjectId) -> Result<Option<T>> {
        tracing::debug!(id = %id, "Looking up {}", T::KIND);
        match self.collection.find_by_id(id).await? {
            Some(document) => Ok(Some(bson::from_document(document)?)),
            None => Ok(None),
        }
    }

    pub async fn insert<N: Serialize>(&self, new: &N) -> Result<ObjectId> {
        let document = bson::to_document(new)?;
        let id = self.collection.insert_one(document).await?;
        tracing::info!(id = %id, "Created {}", T::KIND);
        Ok(id)
    }

    /// Append a string to an array field. Returns `false` if `id` matched nothing.
    pub async fn push(&self, id: ObjectId, field: &str, value: &str) -> Result<bool> {
        let matched = self
            .collection
            .push(id, field, Bson::String(value.to_string()))
            .await?;
        if !matched {
            tracing::debug!(id = %id, field, "Append matched no {}", T::KIND);
        }
        Ok(matched)
    }

    pub async fn delete(&self, id: ObjectId) -> Result<bool> {
        let deleted = self.collection.delete_one(id).await?;
        tracing::info!(id = %id, deleted, "Deleting {}", T::KIND);
        Ok(deleted)
    }
}

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};
use tokio::sync::RwLock;

use super::DocumentCollection;
use crate::error::{Result, RosterError};

/// In-process collection. Documents are kept in insertion order.
pub struct MemoryCollection {
    name: String,
    documents: RwLock<Vec<Document>>,
}

impl MemoryCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: RwLock::new(Vec::new()),
        }
    }
}

fn has_id(document: &Document, id: ObjectId) -> bool {
    document.get_object_id("_id").is_ok_and(|oid| oid == id)
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn find_all(&self) -> Result<Vec<Document>> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Document>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| has_id(d, id)).cloned())
    }

    async fn insert_one(&self, mut document: Document) -> Result<ObjectId> {
        let id = match document.get("_id") {
            Some(Bson::ObjectId(id)) => *id,
            Some(other) => {
                return Err(RosterError::Store(format!(
                    "unsupported _id in {}: {}",
                    self.name, other
                )));
            }
            None => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };

        let mut documents = self.documents.write().await;
        if documents.iter().any(|d| has_id(d, id)) {
            return Err(RosterError::Store(format!(
                "duplicate _id {} in {}",
                id, self.name
            )));
        }
        documents.push(document);
        Ok(id)
    }

    async fn push(&self, id: ObjectId, field: &str, value: Bson) -> Result<bool> {
        let mut documents = self.documents.write().await;
        let Some(document) = documents.iter_mut().find(|d| has_id(d, id)) else {
            return Ok(false);
        };

        match document.get_mut(field) {
            Some(Bson::Array(items)) => items.push(value),
            Some(_) => {
                return Err(RosterError::Store(format!(
                    "field '{}' of {} {} is not an array",
                    field, self.name, id
                )));
            }
            None => {
                document.insert(field, Bson::Array(vec![value]));
            }
        }
        Ok(true)
    }

    async fn delete_one(&self, id: ObjectId) -> Result<bool> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        if let Some(pos) = documents.iter().position(|d| has_id(d, id)) {
            documents.remove(pos);
        }
        Ok(documents.len() < before)
    }
}

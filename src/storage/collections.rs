use std::sync::Arc;

use mongodb::Client;

use super::{DocumentCollection, MemoryCollection, MongoCollection, Repository};
use crate::config::{StoreBackend, StoreSettings};
use crate::error::Result;
use crate::model::{Course, Student, Teacher};

/// The collection handles a resolver may use.
#[derive(Clone)]
pub struct Collections {
    pub students: Repository<Student>,
    pub teachers: Repository<Teacher>,
    pub courses: Repository<Course>,
}

impl Collections {
    pub fn new(
        students: Arc<dyn DocumentCollection>,
        teachers: Arc<dyn DocumentCollection>,
        courses: Arc<dyn DocumentCollection>,
    ) -> Self {
        Self {
            students: Repository::new(students),
            teachers: Repository::new(teachers),
            courses: Repository::new(courses),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryCollection::new("students")),
            Arc::new(MemoryCollection::new("teachers")),
            Arc::new(MemoryCollection::new("courses")),
        )
    }

    /// Open the collections named by the store settings.
    pub async fn open(settings: &StoreSettings) -> Result<Self> {
        let names = &settings.collections;
        match settings.backend {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory store");
                Ok(Self::new(
                    Arc::new(MemoryCollection::new(&names.students)),
                    Arc::new(MemoryCollection::new(&names.teachers)),
                    Arc::new(MemoryCollection::new(&names.courses)),
                ))
            }
            StoreBackend::Mongodb => {
                tracing::info!(database = %settings.database, "Connecting to MongoDB");
                let client = Client::with_uri_str(&settings.uri).await?;
                let database = client.database(&settings.database);
                Ok(Self::new(
                    Arc::new(MongoCollection::new(&database, &names.students)),
                    Arc::new(MongoCollection::new(&database, &names.teachers)),
                    Arc::new(MongoCollection::new(&database, &names.courses)),
                ))
            }
        }
    }
}

//! Document storage layer.
//!
//! Every entity type lives in its own collection of BSON documents keyed by
//! an `ObjectId` under `_id`. The capability a collection has to offer is
//! the [`DocumentCollection`] trait; two backends implement it:
//!
//! - [`MemoryCollection`]: process-local, the default and what tests use
//! - [`MongoCollection`]: a MongoDB collection
//!
//! ## Components
//!
//! - [`Repository`]: typed CRUD over one collection
//! - [`Collections`]: the students, teachers and courses repositories handed
//!   to the GraphQL resolvers

mod collection;
mod collections;
mod memory;
mod mongo;
mod repository;

pub use collection::DocumentCollection;
pub use collections::Collections;
pub use memory::MemoryCollection;
pub use mongo::MongoCollection;
pub use repository::Repository;

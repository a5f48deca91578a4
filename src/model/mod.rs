//! Stored document models.
//!
//! These structs mirror the documents kept in the store, with the internal
//! identifier under `_id`:
//!
//! - [`Student`]: name, email and the ids of enrolled courses
//! - [`Teacher`]: name, email and the ids of taught courses
//! - [`Course`]: title, description, owning teacher and enrolled student ids
//!
//! Each model has a `New*` counterpart without `_id`, used for inserts.

mod course;
mod student;
mod teacher;

pub use course::{Course, NewCourse};
pub use student::{NewStudent, Student};
pub use teacher::{NewTeacher, Teacher};

use bson::oid::ObjectId;

use crate::error::{Result, RosterError};

/// A stored document type that [`Repository`](crate::storage::Repository) can decode.
pub trait Entity: serde::de::DeserializeOwned + Send + Sync {
    /// Entity name used in log lines.
    const KIND: &'static str;
}

/// Parse a public id string into the internal identifier.
pub fn parse_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| RosterError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_roundtrips_hex() {
        let oid = ObjectId::new();
        assert_eq!(parse_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn test_parse_id_rejects_malformed() {
        let err = parse_id("not-an-id").unwrap_err();
        assert!(matches!(err, RosterError::InvalidId(ref s) if s == "not-an-id"));
        assert!(parse_id("").is_err());
        assert!(parse_id("0123456789abcdef0123456").is_err());
    }
}

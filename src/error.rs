use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Teacher not found")]
    TeacherNotFound,

    #[error("Student or course not found")]
    StudentOrCourseNotFound,

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Document encoding error: {0}")]
    BsonSer(#[from] bson::ser::Error),

    #[error("Document decoding error: {0}")]
    BsonDe(#[from] bson::de::Error),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(RosterError::TeacherNotFound.to_string(), "Teacher not found");
        assert_eq!(
            RosterError::StudentOrCourseNotFound.to_string(),
            "Student or course not found"
        );
    }

    #[test]
    fn test_graphql_error_keeps_message() {
        let err: async_graphql::Error = RosterError::TeacherNotFound.into();
        assert_eq!(err.message, "Teacher not found");
    }
}

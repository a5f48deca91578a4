use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,

    /// Public id of the owning teacher. Not checked after creation.
    pub teacher_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_ids: Option<Vec<String>>,
}

impl Course {
    pub const STUDENT_IDS: &'static str = "studentIds";
}

impl Entity for Course {
    const KIND: &'static str = "course";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub teacher_id: String,
    pub student_ids: Vec<String>,
}

impl NewCourse {
    pub fn new(title: String, description: String, teacher_id: String) -> Self {
        Self {
            title,
            description,
            teacher_id,
            student_ids: Vec::new(),
        }
    }

    pub fn with_id(self, id: ObjectId) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
            teacher_id: self.teacher_id,
            student_ids: Some(self.student_ids),
        }
    }
}

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses_taught: Option<Vec<String>>,
}

impl Teacher {
    pub const COURSES_TAUGHT: &'static str = "coursesTaught";
}

impl Entity for Teacher {
    const KIND: &'static str = "teacher";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
    pub courses_taught: Vec<String>,
}

impl NewTeacher {
    pub fn new(name: String, email: String) -> Self {
        Self {
            name,
            email,
            courses_taught: Vec::new(),
        }
    }

    pub fn with_id(self, id: ObjectId) -> Teacher {
        Teacher {
            id,
            name: self.name,
            email: self.email,
            courses_taught: Some(self.courses_taught),
        }
    }
}

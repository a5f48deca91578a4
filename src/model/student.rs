use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled_courses: Option<Vec<String>>,
}

impl Student {
    pub const ENROLLED_COURSES: &'static str = "enrolledCourses";
}

impl Entity for Student {
    const KIND: &'static str = "student";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub enrolled_courses: Vec<String>,
}

impl NewStudent {
    pub fn new(name: String, email: String) -> Self {
        Self {
            name,
            email,
            enrolled_courses: Vec::new(),
        }
    }

    pub fn with_id(self, id: ObjectId) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            enrolled_courses: Some(self.enrolled_courses),
        }
    }
}

use crate::model::{Course as ModelCourse, Student as ModelStudent, Teacher as ModelTeacher};
use async_graphql::{ID, SimpleObject};

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub struct Student {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub enrolled_courses: Option<Vec<String>>,
}

impl From<ModelStudent> for Student {
    fn from(s: ModelStudent) -> Self {
        Self {
            id: ID(s.id.to_hex()),
            name: s.name,
            email: s.email,
            enrolled_courses: s.enrolled_courses,
        }
    }
}

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub courses_taught: Option<Vec<String>>,
}

impl From<ModelTeacher> for Teacher {
    fn from(t: ModelTeacher) -> Self {
        Self {
            id: ID(t.id.to_hex()),
            name: t.name,
            email: t.email,
            courses_taught: t.courses_taught,
        }
    }
}

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub struct Course {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub teacher_id: String,
    pub student_ids: Option<Vec<String>>,
}

impl From<ModelCourse> for Course {
    fn from(c: ModelCourse) -> Self {
        Self {
            id: ID(c.id.to_hex()),
            title: c.title,
            description: c.description,
            teacher_id: c.teacher_id,
            student_ids: c.student_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;

    #[test]
    fn test_student_id_is_hex_of_object_id() {
        let oid = ObjectId::new();
        let student: Student = ModelStudent {
            id: oid,
            name: "Ada".into(),
            email: "ada@x.com".into(),
            enrolled_courses: Some(vec!["c1".into()]),
        }
        .into();
        assert_eq!(student.id.as_str(), oid.to_hex());
        assert_eq!(student.id.len(), 24);
        assert_eq!(student.enrolled_courses, Some(vec!["c1".to_string()]));
    }

    #[test]
    fn test_absent_lists_stay_absent() {
        let teacher: Teacher = ModelTeacher {
            id: ObjectId::new(),
            name: "T".into(),
            email: "t@x.com".into(),
            courses_taught: None,
        }
        .into();
        assert_eq!(teacher.courses_taught, None);
    }

    #[test]
    fn test_course_keeps_teacher_reference() {
        let course: Course = ModelCourse {
            id: ObjectId::new(),
            title: "C1".into(),
            description: "d".into(),
            teacher_id: "abc".into(),
            student_ids: Some(vec![]),
        }
        .into();
        assert_eq!(course.teacher_id, "abc");
        assert_eq!(course.student_ids, Some(vec![]));
    }
}

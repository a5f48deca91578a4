use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::error::RosterError;
use crate::model::{Course as ModelCourse, NewCourse, NewStudent, NewTeacher, parse_id};
use crate::model::{Student as ModelStudent, Teacher as ModelTeacher};
use crate::storage::Collections;

use super::types::*;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(collections: Collections) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(collections)
        .finish()
}

fn collections<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Collections> {
    ctx.data::<Collections>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List all students
    async fn students(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Student>> {
        let students = collections(ctx)?.students.list().await?;
        Ok(students.into_iter().map(Into::into).collect())
    }

    /// Get a single student by ID
    async fn student(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Student>> {
        let oid = parse_id(&id)?;
        Ok(collections(ctx)?.students.get(oid).await?.map(Into::into))
    }

    /// List all teachers
    async fn teachers(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Teacher>> {
        let teachers = collections(ctx)?.teachers.list().await?;
        Ok(teachers.into_iter().map(Into::into).collect())
    }

    /// Get a single teacher by ID
    async fn teacher(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Teacher>> {
        let oid = parse_id(&id)?;
        Ok(collections(ctx)?.teachers.get(oid).await?.map(Into::into))
    }

    /// List all courses
    async fn courses(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Course>> {
        let courses = collections(ctx)?.courses.list().await?;
        Ok(courses.into_iter().map(Into::into).collect())
    }

    /// Get a single course by ID
    async fn course(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Course>> {
        let oid = parse_id(&id)?;
        Ok(collections(ctx)?.courses.get(oid).await?.map(Into::into))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a student with no enrolled courses
    async fn create_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
    ) -> async_graphql::Result<Student> {
        let new = NewStudent::new(name, email);
        let id = collections(ctx)?.students.insert(&new).await?;
        Ok(new.with_id(id).into())
    }

    /// Create a teacher with no taught courses
    async fn create_teacher(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
    ) -> async_graphql::Result<Teacher> {
        let new = NewTeacher::new(name, email);
        let id = collections(ctx)?.teachers.insert(&new).await?;
        Ok(new.with_id(id).into())
    }

    /// Create a course and add it to its teacher's taught courses.
    ///
    /// The course insert and the teacher update are separate writes. If the
    /// update fails the course stays in place without being listed on the
    /// teacher.
    async fn create_course(
        &self,
        ctx: &Context<'_>,
        title: String,
        description: String,
        teacher_id: String,
    ) -> async_graphql::Result<Course> {
        let collections = collections(ctx)?;
        let teacher = collections.teachers.get(parse_id(&teacher_id)?).await?;
        let Some(teacher) = teacher else {
            return Err(RosterError::TeacherNotFound.into());
        };

        let new = NewCourse::new(title, description, teacher_id);
        let course_id = collections.courses.insert(&new).await?;

        if let Err(e) = collections
            .teachers
            .push(teacher.id, ModelTeacher::COURSES_TAUGHT, &course_id.to_hex())
            .await
        {
            tracing::warn!(
                course = %course_id,
                teacher = %teacher.id,
                error = %e,
                "Course created but not added to teacher"
            );
            return Err(e.into());
        }

        Ok(new.with_id(course_id).into())
    }

    /// Enroll a student in a course.
    ///
    /// Returns the course as read before the enrollment, so its `studentIds`
    /// does not yet contain `studentId`. Enrolling the same pair twice
    /// appends both ids twice.
    async fn enroll_student_in_course(
        &self,
        ctx: &Context<'_>,
        student_id: String,
        course_id: String,
    ) -> async_graphql::Result<Course> {
        let collections = collections(ctx)?;
        let student_oid = parse_id(&student_id)?;
        let course_oid = parse_id(&course_id)?;

        let (student, course) = tokio::try_join!(
            collections.students.get(student_oid),
            collections.courses.get(course_oid)
        )?;
        let (Some(student), Some(course)) = (student, course) else {
            return Err(RosterError::StudentOrCourseNotFound.into());
        };

        collections
            .students
            .push(student.id, ModelStudent::ENROLLED_COURSES, &course_id)
            .await?;

        if let Err(e) = collections
            .courses
            .push(course.id, ModelCourse::STUDENT_IDS, &student_id)
            .await
        {
            tracing::warn!(
                student = %student.id,
                course = %course.id,
                error = %e,
                "Student enrolled but not added to course"
            );
            return Err(e.into());
        }

        tracing::info!(student = %student.id, course = %course.id, "Enrolled student");
        Ok(course.into())
    }

    /// Delete a student. Returns whether a student was removed.
    ///
    /// Courses keep the student's id in their `studentIds`.
    async fn delete_student(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<bool> {
        let oid = parse_id(&id)?;
        Ok(collections(ctx)?.students.delete(oid).await?)
    }
}

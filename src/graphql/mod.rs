//! GraphQL schema and resolvers for students, teachers and courses.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! roster serve --port 4000
//!
//! # Execute a query from CLI
//! roster query '{ students { id name enrolledCourses } }'
//!
//! # Execute a mutation from CLI
//! roster mutate 'createTeacher(name: "A", email: "a@x.com") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `students`, `student`, `teachers`, `teacher`, `courses`, `course`
//! - **Mutations**: `createStudent`, `createTeacher`, `createCourse`,
//!   `enrollStudentInCourse`, `deleteStudent`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, RosterSchema, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server, serve_on};
pub use types::*;

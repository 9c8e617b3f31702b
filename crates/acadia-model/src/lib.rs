//! Acadia Model - typed entity records
//!
//! Plain data shapes for the records console:
//! - One record struct per entity collection, snake_case wire fields
//! - All-optional submission payloads with strip-absent serialization
//! - The `Record`/`Resource` traits binding entities to the console
//! - Filter/sort value types and presentation-boundary date helpers
//!
//! No I/O lives here; gateways and caches build on these shapes.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod dates;
pub mod entities;
pub mod kind;
pub mod resource;
pub mod value;

// Re-exports for convenience
pub use entities::{
    Admin, AdminPayload, AdminRole, AssignmentRole, Course, CourseAssignment,
    CourseAssignmentPayload, CoursePayload, Department, DepartmentPayload, Lecturer,
    LecturerPayload, Program, ProgramPayload, School, SchoolPayload, Semester, Sex, Student,
    StudentPayload,
};
pub use kind::{EntityKind, UnknownKind, ALL_KINDS};
pub use resource::{ParentSpec, Record, Resource};
pub use value::{FilterValue, SortKey};

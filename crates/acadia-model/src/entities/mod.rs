//! Concrete entity records, one module per collection.

pub mod admin;
pub mod assignment;
pub mod course;
pub mod department;
pub mod lecturer;
pub mod program;
pub mod school;
pub mod student;

pub use admin::{Admin, AdminPayload, AdminRole};
pub use assignment::{AssignmentRole, CourseAssignment, CourseAssignmentPayload, Semester};
pub use course::{Course, CoursePayload};
pub use department::{Department, DepartmentPayload};
pub use lecturer::{Lecturer, LecturerPayload, Sex};
pub use program::{Program, ProgramPayload};
pub use school::{School, SchoolPayload};
pub use student::{Student, StudentPayload};

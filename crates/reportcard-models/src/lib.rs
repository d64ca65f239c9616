//! # Report Card Models
//!
//! Domain models and DTOs for the Report Card API.
//!
//! Each module holds one entity: the stored record (with its
//! [`Record`](reportcard_store::Record) and [`PgRecord`](reportcard_store::PgRecord)
//! implementations), the view returned to clients, and the create/update DTOs.
//! Password-bearing entities keep the two apart: `UserRecord`, `TeacherRecord`
//! and `StudentRecord` are never serialized.
//!
//! - [`roles`], [`grades`], [`subjects`]: catalogue entities
//! - [`users`], [`teachers`], [`students`]: accounts linked to a role
//! - [`student_subjects`]: enrollments keyed by student, subject and period
//! - [`common`]: query parameters shared by every list endpoint

pub mod common;
pub mod grades;
pub mod roles;
pub mod student_subjects;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use common::StatusQuery;
pub use grades::{CreateGradeDto, Grade, UpdateGradeDto};
pub use roles::{CreateRoleDto, Role, UpdateRoleDto};
pub use student_subjects::{
    AcademicPeriodQuery, CompleteSubjectDto, CreateStudentSubjectDto, StudentSubject,
    UpdateStudentSubjectDto,
};
pub use students::{CreateStudentDto, EnrollmentYearQuery, Student, StudentRecord, UpdateStudentDto};
pub use subjects::{CreateSubjectDto, Subject, UpdateSubjectDto};
pub use teachers::{CreateTeacherDto, DepartmentQuery, Teacher, TeacherRecord, UpdateTeacherDto};
pub use users::{CreateUserDto, UpdateUserDto, User, UserRecord, UserWithRole};

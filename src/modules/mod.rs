pub mod grades;
pub mod references;
pub mod roles;
pub mod seeds;
pub mod student_subjects;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use self::roles::model::Role;
pub use self::users::model::User;

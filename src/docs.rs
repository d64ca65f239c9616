use utoipa::OpenApi;

use reportcard_core::{ErrorResponse, MessageResponse};
use reportcard_models::{
    CompleteSubjectDto, CreateGradeDto, CreateRoleDto, CreateStudentDto, CreateStudentSubjectDto,
    CreateSubjectDto, CreateTeacherDto, CreateUserDto, Grade, Role, Student, StudentSubject,
    Subject, Teacher, UpdateGradeDto, UpdateRoleDto, UpdateStudentDto, UpdateStudentSubjectDto,
    UpdateSubjectDto, UpdateTeacherDto, UpdateUserDto, User, UserWithRole,
};

use crate::modules::seeds::SeedResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::roles::controller::create_role,
        crate::modules::roles::controller::get_roles,
        crate::modules::roles::controller::get_role,
        crate::modules::roles::controller::update_role,
        crate::modules::roles::controller::delete_role,
        crate::modules::grades::controller::create_grade,
        crate::modules::grades::controller::get_grades,
        crate::modules::grades::controller::get_grade,
        crate::modules::grades::controller::update_grade,
        crate::modules::grades::controller::delete_grade,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::get_subject,
        crate::modules::subjects::controller::update_subject,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::get_user_with_role,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teachers_by_department,
        crate::modules::teachers::controller::get_teachers_by_subject,
        crate::modules::teachers::controller::get_teachers_by_grade,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_students_by_grade,
        crate::modules::students::controller::get_students_by_subject,
        crate::modules::students::controller::get_students_by_enrollment_year,
        crate::modules::students::controller::get_student_by_enrollment_number,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::student_subjects::controller::create_student_subject,
        crate::modules::student_subjects::controller::get_student_subjects,
        crate::modules::student_subjects::controller::get_student_subjects_by_student,
        crate::modules::student_subjects::controller::get_student_subjects_by_subject,
        crate::modules::student_subjects::controller::get_student_subjects_by_academic_period,
        crate::modules::student_subjects::controller::get_student_subject,
        crate::modules::student_subjects::controller::update_student_subject,
        crate::modules::student_subjects::controller::complete_student_subject,
        crate::modules::student_subjects::controller::delete_student_subject,
        crate::modules::seeds::controller::seed_database,
        crate::modules::seeds::controller::clear_seed_data,
    ),
    components(
        schemas(
            Role,
            CreateRoleDto,
            UpdateRoleDto,
            Grade,
            CreateGradeDto,
            UpdateGradeDto,
            Subject,
            CreateSubjectDto,
            UpdateSubjectDto,
            User,
            UserWithRole,
            CreateUserDto,
            UpdateUserDto,
            Teacher,
            CreateTeacherDto,
            UpdateTeacherDto,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            StudentSubject,
            CreateStudentSubjectDto,
            UpdateStudentSubjectDto,
            CompleteSubjectDto,
            SeedResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Roles", description = "Role management endpoints"),
        (name = "Grades", description = "Grade level management endpoints"),
        (name = "Subjects", description = "Subject catalogue endpoints"),
        (name = "Users", description = "User management endpoints"),
        (name = "Teachers", description = "Teacher management endpoints"),
        (name = "Students", description = "Student management endpoints"),
        (name = "Student Subjects", description = "Enrollment of students in subjects"),
        (name = "Seeds", description = "Sample data for development")
    ),
    info(
        title = "Report Card API",
        version = "0.1.0",
        description = "School records API built with Rust, Axum, and PostgreSQL. Records are soft-deleted and unique fields are compared case-insensitively among active records.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_entity_prefix() {
        let spec = ApiDoc::openapi();
        for path in [
            "/api/roles",
            "/api/grades/{id}",
            "/api/subjects",
            "/api/users/{id}/with-role",
            "/api/teachers/by-department",
            "/api/students/by-enrollment/{enrollment_number}",
            "/api/student-subjects/{id}/complete",
            "/api/seeds",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }
}

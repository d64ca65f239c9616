//! Baseline data for a fresh installation.
//!
//! Everything goes through the entity services, so seeded records obey the
//! same uniqueness and reference rules as records created over HTTP.

use anyhow::anyhow;
use chrono::{NaiveDate, TimeZone, Utc};
use reportcard_core::{AppError, ErrorKind};
use reportcard_models::{
    CompleteSubjectDto, CreateGradeDto, CreateRoleDto, CreateStudentDto, CreateStudentSubjectDto,
    CreateSubjectDto, CreateTeacherDto, CreateUserDto, Grade, Role,
};
use tracing::{info, instrument, warn};

use crate::state::AppState;

use super::model::SeedResponse;

const ROLES: &[(&str, &str)] = &[
    ("admin", "Administrator with full access"),
    ("teacher", "Teacher with limited access"),
    ("student", "Student with basic access"),
    ("parent", "Parent with view access to student data"),
];

const GRADES: &[&str] = &[
    "Preescolar",
    "1° Primaria",
    "2° Primaria",
    "3° Primaria",
    "4° Primaria",
    "5° Primaria",
    "6° Primaria",
    "1° Secundaria",
    "2° Secundaria",
    "3° Secundaria",
];

const SUBJECTS: &[(&str, &str, i32)] = &[
    ("Matemáticas", "Matemática básica y avanzada", 5),
    ("Lengua y Literatura", "Comprensión lectora y escritura", 4),
    ("Ciencias Naturales", "Biología, Química y Física", 4),
    ("Ciencias Sociales", "Historia y Geografía", 3),
    ("Inglés", "Idioma extranjero", 3),
    ("Educación Física", "Actividad física y deportes", 2),
    ("Arte y Música", "Expresión artística y musical", 2),
    ("Tecnología", "Informática y tecnología", 2),
    ("Formación Ética", "Valores y ciudadanía", 1),
];

struct SeedTeacher {
    name: &'static str,
    email: &'static str,
    degree: &'static str,
    department: &'static str,
    years_of_experience: i32,
    phone_number: &'static str,
    license_number: &'static str,
}

const TEACHERS: &[SeedTeacher] = &[
    SeedTeacher {
        name: "Dr. María González",
        email: "maria.gonzalez@school.edu",
        degree: "Doctorado en Matemáticas",
        department: "Departamento de Matemáticas",
        years_of_experience: 15,
        phone_number: "+1234567001",
        license_number: "TEACH-2020-001",
    },
    SeedTeacher {
        name: "Prof. Carlos Rodríguez",
        email: "carlos.rodriguez@school.edu",
        degree: "Licenciatura en Lengua y Literatura",
        department: "Departamento de Humanidades",
        years_of_experience: 12,
        phone_number: "+1234567002",
        license_number: "TEACH-2021-002",
    },
    SeedTeacher {
        name: "Dra. Ana Martínez",
        email: "ana.martinez@school.edu",
        degree: "Doctorado en Ciencias Naturales",
        department: "Departamento de Ciencias",
        years_of_experience: 18,
        phone_number: "+1234567003",
        license_number: "TEACH-2019-003",
    },
];

struct SeedStudent {
    name: &'static str,
    email: &'static str,
    enrollment_number: &'static str,
    date_of_birth: (i32, u32, u32),
    guardian_name: &'static str,
    guardian_phone: &'static str,
    guardian_email: &'static str,
    address: &'static str,
    grade: &'static str,
}

const STUDENTS: &[SeedStudent] = &[
    SeedStudent {
        name: "Juan Pérez",
        email: "juan.perez@student.edu",
        enrollment_number: "EST-2024-001",
        date_of_birth: (2010, 5, 15),
        guardian_name: "Pedro Pérez",
        guardian_phone: "+1234567101",
        guardian_email: "pedro.perez@parent.com",
        address: "Calle 123, Ciudad",
        grade: "1° Secundaria",
    },
    SeedStudent {
        name: "María López",
        email: "maria.lopez@student.edu",
        enrollment_number: "EST-2024-002",
        date_of_birth: (2011, 8, 22),
        guardian_name: "Ana López",
        guardian_phone: "+1234567102",
        guardian_email: "ana.lopez@parent.com",
        address: "Avenida 456, Ciudad",
        grade: "6° Primaria",
    },
    SeedStudent {
        name: "Carlos Fernández",
        email: "carlos.fernandez@student.edu",
        enrollment_number: "EST-2024-003",
        date_of_birth: (2009, 12, 10),
        guardian_name: "Luis Fernández",
        guardian_phone: "+1234567103",
        guardian_email: "luis.fernandez@parent.com",
        address: "Plaza 789, Ciudad",
        grade: "2° Secundaria",
    },
];

/// (enrollment number, subject name, final grade).
const ENROLLMENTS: &[(&str, &str, Option<f64>)] = &[
    ("EST-2024-001", "Matemáticas", None),
    ("EST-2024-001", "Lengua y Literatura", None),
    ("EST-2024-002", "Matemáticas", None),
    ("EST-2024-002", "Ciencias Naturales", Some(85.0)),
];

const SEED_YEAR: i32 = 2024;
const SEED_SEMESTER: i32 = 1;

/// `Ok(None)` when the record already exists.
fn skip_existing<T>(result: Result<T, AppError>, what: &str) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => {
            info!("Created {}", what);
            Ok(Some(value))
        }
        Err(err) if err.kind == ErrorKind::DuplicateKey => {
            warn!("{} already exists, skipping", what);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn required_role<'a>(roles: &'a [Role], name: &str) -> Result<&'a Role, AppError> {
    roles.iter().find(|role| role.name == name).ok_or_else(|| {
        AppError::internal(anyhow!("Required roles not found. Please seed roles first."))
    })
}

fn required_grade<'a>(grades: &'a [Grade], level: &str) -> Result<&'a Grade, AppError> {
    grades
        .iter()
        .find(|grade| grade.level == level)
        .ok_or_else(|| AppError::internal(anyhow!("Grade {} not found", level)))
}

fn date((year, month, day): (i32, u32, u32)) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::internal(anyhow!("Invalid date {}-{}-{}", year, month, day)))
}

pub struct SeedService {
    state: AppState,
}

impl SeedService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Creates the baseline records in dependency order.
    ///
    /// Duplicates are skipped, so running it twice is harmless.
    #[instrument(skip(self))]
    pub async fn seed_all(&self) -> Result<SeedResponse, AppError> {
        info!("Starting database seeding");

        self.seed_roles().await?;
        self.seed_grades().await?;
        self.seed_subjects().await?;
        self.seed_users().await?;
        self.seed_student_subjects().await?;

        info!("Database seeding completed");
        Ok(SeedResponse::new("Database seeded successfully with sample data"))
    }

    /// Soft-deletes every active record, dependents first.
    #[instrument(skip(self))]
    pub async fn clear_all(&self) -> Result<SeedResponse, AppError> {
        let state = &self.state;

        for enrollment in state.student_subjects.find_all().await? {
            state.student_subjects.remove(enrollment.id).await?;
        }
        for student in state.students.find_all().await? {
            state.students.remove(student.id).await?;
        }
        for teacher in state.teachers.find_all().await? {
            state.teachers.remove(teacher.id).await?;
        }
        for user in state.users.find_all().await? {
            state.users.remove(user.id).await?;
        }
        for subject in state.subjects.find_all_subjects().await? {
            state.subjects.remove_subject(subject.id).await?;
        }
        for grade in state.grades.find_all_grades().await? {
            state.grades.remove_grade(grade.id).await?;
        }
        for role in state.roles.find_all_roles().await? {
            state.roles.remove_role(role.id).await?;
        }

        info!("All seed data cleared");
        Ok(SeedResponse::new("All seed data cleared successfully"))
    }

    async fn seed_roles(&self) -> Result<(), AppError> {
        for &(name, description) in ROLES {
            let result = self
                .state
                .roles
                .create_role(CreateRoleDto {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    status: None,
                })
                .await;
            skip_existing(result, &format!("role {}", name))?;
        }
        Ok(())
    }

    async fn seed_grades(&self) -> Result<(), AppError> {
        for &level in GRADES {
            let result = self
                .state
                .grades
                .create_grade(CreateGradeDto {
                    level: level.to_string(),
                    description: None,
                    status: None,
                })
                .await;
            skip_existing(result, &format!("grade {}", level))?;
        }
        Ok(())
    }

    async fn seed_subjects(&self) -> Result<(), AppError> {
        for &(name, description, hours) in SUBJECTS {
            let result = self
                .state
                .subjects
                .create_subject(CreateSubjectDto {
                    subject_name: name.to_string(),
                    description: Some(description.to_string()),
                    hours_per_week: Some(hours),
                    status: None,
                })
                .await;
            skip_existing(result, &format!("subject {}", name))?;
        }
        Ok(())
    }

    async fn seed_users(&self) -> Result<(), AppError> {
        let state = &self.state;
        let roles = state.roles.find_all_roles().await?;
        let admin_role = required_role(&roles, "admin")?.id;
        let teacher_role = required_role(&roles, "teacher")?.id;
        let student_role = required_role(&roles, "student")?.id;

        let result = state
            .users
            .create(CreateUserDto {
                name: "Administrador Principal".to_string(),
                email: "admin@school.edu".to_string(),
                password: "admin123".to_string(),
                role_id: admin_role,
                status: None,
            })
            .await;
        skip_existing(result, "admin user")?;

        for teacher in TEACHERS {
            let result = state
                .teachers
                .create(CreateTeacherDto {
                    name: teacher.name.to_string(),
                    email: teacher.email.to_string(),
                    password: "teacher123".to_string(),
                    role_id: teacher_role,
                    degree: teacher.degree.to_string(),
                    department: teacher.department.to_string(),
                    years_of_experience: teacher.years_of_experience,
                    license_number: teacher.license_number.to_string(),
                    phone_number: teacher.phone_number.to_string(),
                    subject_ids: Vec::new(),
                    grade_ids: Vec::new(),
                    status: None,
                })
                .await;
            skip_existing(result, &format!("teacher {}", teacher.email))?;
        }

        let grades = state.grades.find_all_grades().await?;
        for student in STUDENTS {
            let result = state
                .students
                .create(CreateStudentDto {
                    name: student.name.to_string(),
                    email: student.email.to_string(),
                    password: "student123".to_string(),
                    role_id: student_role,
                    enrollment_number: student.enrollment_number.to_string(),
                    date_of_birth: date(student.date_of_birth)?,
                    guardian_name: student.guardian_name.to_string(),
                    guardian_phone: student.guardian_phone.to_string(),
                    guardian_email: student.guardian_email.to_string(),
                    address: student.address.to_string(),
                    grade_id: required_grade(&grades, student.grade)?.id,
                    subject_ids: Vec::new(),
                    enrollment_year: Some(SEED_YEAR),
                    status: None,
                })
                .await;
            skip_existing(result, &format!("student {}", student.email))?;
        }
        Ok(())
    }

    async fn seed_student_subjects(&self) -> Result<(), AppError> {
        let state = &self.state;
        let students = state.students.find_all().await?;
        let subjects = state.subjects.find_all_subjects().await?;

        if students.is_empty() || subjects.is_empty() {
            warn!("No students or subjects found, skipping enrollments");
            return Ok(());
        }

        let enrollment_date = Utc.with_ymd_and_hms(SEED_YEAR, 2, 1, 0, 0, 0).single();

        for &(enrollment_number, subject_name, final_grade) in ENROLLMENTS {
            let student = students
                .iter()
                .find(|s| s.enrollment_number.eq_ignore_ascii_case(enrollment_number));
            let subject = subjects
                .iter()
                .find(|s| s.subject_name.to_lowercase() == subject_name.to_lowercase());
            let (Some(student), Some(subject)) = (student, subject) else {
                warn!(enrollment_number, subject_name, "Seed student or subject missing, skipping");
                continue;
            };

            let result = state
                .student_subjects
                .create(CreateStudentSubjectDto {
                    student_id: student.id,
                    subject_id: subject.id,
                    enrollment_date,
                    academic_year: Some(SEED_YEAR),
                    semester: Some(SEED_SEMESTER),
                    final_grade: None,
                    status: None,
                })
                .await;
            let what = format!(
                "enrollment for student {} in subject {}",
                student.id, subject.id
            );

            if let (Some(enrollment), Some(final_grade)) = (skip_existing(result, &what)?, final_grade)
            {
                state
                    .student_subjects
                    .complete_subject(enrollment.id, CompleteSubjectDto { final_grade })
                    .await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use reportcard_core::password::MIN_COST;

    use super::*;

    #[tokio::test]
    async fn test_seed_all_creates_baseline() {
        let state = AppState::in_memory(MIN_COST);
        let seeder = SeedService::new(state.clone());

        let response = seeder.seed_all().await.unwrap();
        assert_eq!(response.message, "Database seeded successfully with sample data");

        assert_eq!(state.roles.find_all_roles().await.unwrap().len(), 4);
        assert_eq!(state.grades.find_all_grades().await.unwrap().len(), 10);
        assert_eq!(state.subjects.find_all_subjects().await.unwrap().len(), 9);
        assert_eq!(state.users.find_all().await.unwrap().len(), 1);
        assert_eq!(state.teachers.find_all().await.unwrap().len(), 3);

        let students = state.students.find_all().await.unwrap();
        assert_eq!(students.len(), 3);
        let secundaria = state.grades.find_one_grade(8).await.unwrap();
        assert_eq!(secundaria.level, "1° Secundaria");
        assert_eq!(students[0].grade_id, secundaria.id);

        let enrollments = state.student_subjects.find_all().await.unwrap();
        assert_eq!(enrollments.len(), 4);
        let completed: Vec<_> = enrollments
            .iter()
            .filter(|e| e.completion_date.is_some())
            .collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].final_grade, Some(85.0));
    }

    #[tokio::test]
    async fn test_seeding_twice_skips_existing_records() {
        let state = AppState::in_memory(MIN_COST);
        let seeder = SeedService::new(state.clone());

        seeder.seed_all().await.unwrap();
        seeder.seed_all().await.unwrap();

        assert_eq!(state.roles.find_all_roles_by_status(None).await.unwrap().len(), 4);
        assert_eq!(state.student_subjects.find_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_enrollments_target_seeded_students_only() {
        let state = AppState::in_memory(MIN_COST);
        let seeder = SeedService::new(state.clone());
        seeder.seed_roles().await.unwrap();
        seeder.seed_grades().await.unwrap();

        let roles = state.roles.find_all_roles().await.unwrap();
        let grades = state.grades.find_all_grades().await.unwrap();
        let walk_in = state
            .students
            .create(CreateStudentDto {
                name: "Lucía Ramos".to_string(),
                email: "lucia.ramos@student.edu".to_string(),
                password: "student123".to_string(),
                role_id: required_role(&roles, "student").unwrap().id,
                enrollment_number: "EST-2023-010".to_string(),
                date_of_birth: date((2010, 1, 20)).unwrap(),
                guardian_name: "Rosa Ramos".to_string(),
                guardian_phone: "+1234567199".to_string(),
                guardian_email: "rosa.ramos@parent.com".to_string(),
                address: "Calle 9, Ciudad".to_string(),
                grade_id: required_grade(&grades, "6° Primaria").unwrap().id,
                subject_ids: Vec::new(),
                enrollment_year: Some(2023),
                status: None,
            })
            .await
            .unwrap();

        seeder.seed_all().await.unwrap();

        let enrollments = state.student_subjects.find_all().await.unwrap();
        assert_eq!(enrollments.len(), 4);
        assert!(enrollments.iter().all(|e| e.student_id != walk_in.id));

        let juan = state
            .students
            .find_by_enrollment_number("EST-2024-001")
            .await
            .unwrap();
        let math = state
            .subjects
            .find_all_subjects()
            .await
            .unwrap()
            .into_iter()
            .find(|s| s.subject_name == "Matemáticas")
            .unwrap();
        assert!(
            enrollments
                .iter()
                .any(|e| e.student_id == juan.id && e.subject_id == math.id)
        );
    }

    #[tokio::test]
    async fn test_clear_then_seed_again() {
        let state = AppState::in_memory(MIN_COST);
        let seeder = SeedService::new(state.clone());

        seeder.seed_all().await.unwrap();
        let cleared = seeder.clear_all().await.unwrap();
        assert_eq!(cleared.message, "All seed data cleared successfully");
        assert!(state.roles.find_all_roles().await.unwrap().is_empty());
        assert!(state.students.find_all().await.unwrap().is_empty());

        seeder.seed_all().await.unwrap();
        let roles = state.roles.find_all_roles().await.unwrap();
        assert_eq!(roles.len(), 4);
        assert_eq!(roles[0].id, 5);
        assert_eq!(state.student_subjects.find_all().await.unwrap().len(), 4);
    }
}

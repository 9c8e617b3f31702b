//! Deterministic record fixtures.
//!
//! Constructors fill required fields and leave the rest unset so tests
//! override only what they assert on.

use acadia_model::{
    Admin, AssignmentRole, Course, CourseAssignment, Department, Lecturer, Program, School,
    Semester, Student,
};

/// School fixture.
#[must_use]
pub fn school(id: &str, name: &str, code: &str) -> School {
    School {
        school_id: id.to_string(),
        school_name: name.to_string(),
        school_code: code.to_string(),
        description: None,
        establishment_date: None,
        dean_id: None,
        contact_email: None,
        contact_phone: None,
        building_location: None,
        status: Some("active".to_string()),
        created_at: None,
        updated_at: None,
    }
}

/// Department fixture under a school.
#[must_use]
pub fn department(id: &str, name: &str, school_id: &str) -> Department {
    Department {
        department_id: id.to_string(),
        department_name: name.to_string(),
        department_code: name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect::<String>()
            .to_uppercase(),
        school_id: school_id.to_string(),
        head_of_department_id: None,
        description: None,
        establishment_date: None,
        contact_email: None,
        contact_phone: None,
        office_location: None,
        status: Some("active".to_string()),
        created_at: None,
        updated_at: None,
    }
}

/// Program fixture under a school.
#[must_use]
pub fn program(id: &str, name: &str, school_id: &str) -> Program {
    Program {
        program_id: id.to_string(),
        program_name: name.to_string(),
        program_code: format!("PRG-{id}"),
        school_id: school_id.to_string(),
        degree_level: Some("bachelor".to_string()),
        duration_years: Some(4),
        credit_hours: None,
        accreditation_status: None,
        coordinator_id: None,
        entry_requirements: None,
        description: None,
        status: Some("active".to_string()),
        created_at: None,
        updated_at: None,
    }
}

/// Course fixture under a program.
#[must_use]
pub fn course(id: &str, name: &str, code: &str, program_id: &str) -> Course {
    Course {
        course_id: id.to_string(),
        course_name: name.to_string(),
        course_code: code.to_string(),
        program_id: program_id.to_string(),
        course_level: Some(2.1),
        phase: Some(1),
        credit_hours: Some(3),
        semester_offered: None,
        is_elective: Some(false),
        prerequisites: None,
        description: None,
        status: Some("active".to_string()),
        syllabus_path: None,
        created_at: None,
        updated_at: None,
    }
}

/// Lecturer fixture.
#[must_use]
pub fn lecturer(id: &str, first_name: &str, last_name: &str) -> Lecturer {
    Lecturer {
        lecturer_id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email_address: format!(
            "{}.{}@example.edu",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone_number: None,
        office_address: None,
        date_of_birth: None,
        nationality: None,
        sex: None,
        department_id: None,
        title: None,
        joined_date: None,
        created_at: None,
        updated_at: None,
    }
}

/// Student fixture.
#[must_use]
pub fn student(id: &str, first_name: &str, surname: &str) -> Student {
    Student {
        student_id: id.to_string(),
        first_name: first_name.to_string(),
        surname: surname.to_string(),
        email_address: format!(
            "{}.{}@students.example.edu",
            first_name.to_lowercase(),
            surname.to_lowercase()
        ),
        nationality: None,
        national_id: None,
        place_of_birth: None,
        citizenship: None,
        permanent_address: None,
        phone_numbers: None,
        contact_address: None,
        permanent_home_address: None,
        date_of_birth: None,
        marital_status: None,
        religion: None,
        title: None,
        sex: None,
        radio_frequency_id: None,
        created_at: None,
        updated_at: None,
    }
}

/// Administrator fixture.
#[must_use]
pub fn admin(id: &str, name: &str, email: &str) -> Admin {
    Admin {
        admin_id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone_number: None,
        address: None,
        is_active: Some(true),
        role: None,
        profile_picture_url: None,
        last_login: None,
        created_at: None,
        updated_at: None,
    }
}

/// Teaching assignment fixture.
#[must_use]
pub fn assignment(id: &str, lecturer_id: &str, course_id: &str) -> CourseAssignment {
    CourseAssignment {
        assignment_id: id.to_string(),
        lecturer_id: lecturer_id.to_string(),
        course_id: course_id.to_string(),
        academic_year: "2025/2026".to_string(),
        semester: Semester::Fall,
        role: AssignmentRole::Primary,
        created_at: None,
    }
}

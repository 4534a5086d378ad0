use crate::domain::{Course, CourseCode, Credits, Faculty, FacultyId, Registry, Student, StudentId};

const STUDENTS: [(&str, &str, &str); 2] = [
    ("S001", "Alice Smith", "Computer Science"),
    ("S002", "Bob Johnson", "Mathematics"),
];

const FACULTY: [(&str, &str, &str); 2] = [
    ("F001", "Dr. Carol White", "Computer Science"),
    ("F002", "Prof. David Green", "Physics"),
];

const COURSES: [(&str, &str, f64); 3] = [
    ("CS101", "Intro to Programming", 3.0),
    ("MA201", "Calculus I", 4.0),
    ("PH101", "Intro to Physics", 3.0),
];

const ENROLLMENTS: [(&str, &str); 2] = [("S001", "CS101"), ("S002", "MA201")];

const ASSIGNMENTS: [(&str, &str); 2] = [("F001", "CS101"), ("F002", "PH101")];

impl Registry {
    /// A registry populated with the sample records a fresh installation
    /// starts from.
    ///
    /// # Panics
    ///
    /// Panics if the built-in sample records are inconsistent, which the unit
    /// tests rule out.
    #[must_use]
    pub fn seeded() -> Self {
        let mut registry = Self::new();

        for (id, name, major) in STUDENTS {
            let id = StudentId::new(id).expect("seed student IDs are non-empty");
            registry.add_student(Student::new(id, name, major));
        }
        for (id, name, department) in FACULTY {
            let id = FacultyId::new(id).expect("seed faculty IDs are non-empty");
            registry.add_faculty(Faculty::new(id, name, department));
        }
        for (code, title, credits) in COURSES {
            let code = CourseCode::new(code).expect("seed course codes are non-empty");
            let credits = Credits::new(credits).expect("seed credits are valid");
            registry.add_course(Course::new(code, title, credits));
        }
        for (student, course) in ENROLLMENTS {
            let student = StudentId::new(student).expect("seed student IDs are non-empty");
            let course = CourseCode::new(course).expect("seed course codes are non-empty");
            registry.enroll_student_in_course(&student, &course);
        }
        for (faculty, course) in ASSIGNMENTS {
            let faculty = FacultyId::new(faculty).expect("seed faculty IDs are non-empty");
            let course = CourseCode::new(course).expect("seed course codes are non-empty");
            registry.assign_faculty_to_course(&faculty, &course);
        }

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_every_record() {
        let registry = Registry::seeded();
        assert_eq!(registry.student_count(), STUDENTS.len());
        assert_eq!(registry.faculty_count(), FACULTY.len());
        assert_eq!(registry.course_count(), COURSES.len());
        assert_eq!(registry.enrollments().count(), ENROLLMENTS.len());
        assert_eq!(registry.assignments().count(), ASSIGNMENTS.len());
    }

    #[test]
    fn seed_relationships_are_wired_both_ways() {
        let registry = Registry::seeded();

        let alice = registry.get_student(&StudentId::new("S001").unwrap()).unwrap();
        assert_eq!(alice.enrolled_course_codes(), &[CourseCode::new("CS101").unwrap()]);

        let physics = registry.get_course(&CourseCode::new("PH101").unwrap()).unwrap();
        assert_eq!(
            physics.assigned_faculty_id(),
            Some(&FacultyId::new("F002").unwrap())
        );
        assert!(physics.enrolled_student_ids().is_empty());
    }
}

//! In-memory store of students, faculty and courses.
//!
//! The [`Registry`] knows nothing about the filesystem. Entity records are
//! stored without relationship lists; enrollments and teaching assignments
//! each live in a single ordered table, and the per-entity lists on
//! [`Student`], [`Faculty`] and [`Course`] are derived from those tables when
//! a snapshot is taken. Both sides of a relationship therefore always agree.

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Course, CourseCode, Credits, Faculty, FacultyId, Student, StudentId};

#[derive(Debug, Clone, PartialEq, Eq)]
struct StudentRecord {
    id: StudentId,
    name: String,
    major: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FacultyRecord {
    id: FacultyId,
    name: String,
    department: String,
}

#[derive(Debug, Clone, PartialEq)]
struct CourseRecord {
    code: CourseCode,
    title: String,
    credits: Credits,
    prerequisites: Vec<CourseCode>,
}

/// A row of the enrollment table.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Enrollment {
    student: StudentId,
    course: CourseCode,
}

/// A row of the assignment table. At most one row exists per course.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Teaching {
    course: CourseCode,
    faculty: FacultyId,
}

/// The university's records.
///
/// Collections keep insertion order. Lookups are linear scans, which is
/// plenty for the handful of records a department manages by hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    students: Vec<StudentRecord>,
    faculty: Vec<FacultyRecord>,
    courses: Vec<CourseRecord>,

    /// Source of truth for student/course membership, in enrollment order.
    enrollments: Vec<Enrollment>,

    /// Source of truth for course/faculty assignment, in assignment order.
    assignments: Vec<Teaching>,
}

/// Reasons a registry operation was rejected.
///
/// A rejected operation never changes the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A student with this ID is already registered.
    #[error("student with ID '{0}' already exists")]
    DuplicateStudent(StudentId),
    /// A faculty member with this ID is already registered.
    #[error("faculty with ID '{0}' already exists")]
    DuplicateFaculty(FacultyId),
    /// A course with this code is already registered.
    #[error("course with code '{0}' already exists")]
    DuplicateCourse(CourseCode),
    /// No student has this ID.
    #[error("student with ID '{0}' does not exist")]
    StudentNotFound(StudentId),
    /// No faculty member has this ID.
    #[error("faculty with ID '{0}' does not exist")]
    FacultyNotFound(FacultyId),
    /// No course has this code.
    #[error("course with code '{0}' does not exist")]
    CourseNotFound(CourseCode),
    /// The student is already on the course roster.
    #[error("student {student} is already enrolled in {course}")]
    AlreadyEnrolled {
        /// The student.
        student: StudentId,
        /// The course.
        course: CourseCode,
    },
    /// The student is not on the course roster.
    #[error("student {student} is not enrolled in {course}")]
    NotEnrolled {
        /// The student.
        student: StudentId,
        /// The course.
        course: CourseCode,
    },
    /// The course is already taught by this faculty member.
    #[error("faculty {faculty} is already assigned to {course}")]
    AlreadyAssigned {
        /// The faculty member.
        faculty: FacultyId,
        /// The course.
        course: CourseCode,
    },
    /// The course is not taught by this faculty member.
    #[error("faculty {faculty} is not assigned to {course}")]
    NotAssigned {
        /// The faculty member.
        faculty: FacultyId,
        /// The course.
        course: CourseCode,
    },
}

/// Result of assigning a faculty member to a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// The newly assigned faculty member.
    pub faculty: FacultyId,
    /// The course.
    pub course: CourseCode,
    /// The faculty member who taught the course before, if any.
    pub previous: Option<FacultyId>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered students.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of registered faculty members.
    #[must_use]
    pub fn faculty_count(&self) -> usize {
        self.faculty.len()
    }

    /// Number of registered courses.
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    // --- students ---------------------------------------------------------

    /// Register a student.
    ///
    /// Returns `false`, leaving the registry unchanged, if a student with the
    /// same ID already exists.
    pub fn add_student(&mut self, student: Student) -> bool {
        self.insert_student(student).is_ok()
    }

    /// Register a student, reporting why it was rejected.
    ///
    /// Relationships are owned by the registry, so any enrollments carried by
    /// `student` are ignored. Use [`Registry::enroll`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateStudent`] if the ID is taken.
    pub fn insert_student(&mut self, student: Student) -> Result<(), RegistryError> {
        if self.find_student(student.id()).is_some() {
            debug!(student = %student.id(), "rejected duplicate student");
            return Err(RegistryError::DuplicateStudent(student.id().clone()));
        }

        info!(student = %student.id(), "added student");
        self.students.push(StudentRecord {
            id: student.id().clone(),
            name: student.name().to_string(),
            major: student.major().to_string(),
        });
        Ok(())
    }

    /// Look up a student by ID.
    #[must_use]
    pub fn get_student(&self, id: &StudentId) -> Option<Student> {
        self.find_student(id).map(|record| self.student_view(record))
    }

    /// Snapshot of every student, in registration order.
    #[must_use]
    pub fn get_all_students(&self) -> Vec<Student> {
        self.students
            .iter()
            .map(|record| self.student_view(record))
            .collect()
    }

    /// Remove a student and every enrollment they hold.
    ///
    /// Returns `false` if the ID is unknown.
    pub fn remove_student(&mut self, id: &StudentId) -> bool {
        self.delete_student(id).is_ok()
    }

    /// Remove a student and every enrollment they hold.
    ///
    /// Returns the student as they were just before removal, including the
    /// courses they were dropped from.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StudentNotFound`] if the ID is unknown.
    pub fn delete_student(&mut self, id: &StudentId) -> Result<Student, RegistryError> {
        let Some(position) = self.students.iter().position(|s| &s.id == id) else {
            debug!(student = %id, "cannot remove unknown student");
            return Err(RegistryError::StudentNotFound(id.clone()));
        };

        let removed = self.student_view(&self.students[position]);
        self.enrollments.retain(|e| &e.student != id);
        self.students.remove(position);

        info!(
            student = %id,
            dropped = removed.enrolled_course_codes().len(),
            "removed student"
        );
        Ok(removed)
    }

    /// Change a student's major.
    ///
    /// Returns `false` if the ID is unknown.
    pub fn set_student_major(&mut self, id: &StudentId, major: impl Into<String>) -> bool {
        let Some(record) = self.students.iter_mut().find(|s| &s.id == id) else {
            return false;
        };
        record.major = major.into();
        info!(student = %id, major = %record.major, "changed major");
        true
    }

    // --- faculty ----------------------------------------------------------

    /// Register a faculty member.
    ///
    /// Returns `false`, leaving the registry unchanged, if the ID is taken.
    pub fn add_faculty(&mut self, faculty: Faculty) -> bool {
        self.insert_faculty(faculty).is_ok()
    }

    /// Register a faculty member, reporting why it was rejected.
    ///
    /// Any assignments carried by `faculty` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateFaculty`] if the ID is taken.
    pub fn insert_faculty(&mut self, faculty: Faculty) -> Result<(), RegistryError> {
        if self.find_faculty(faculty.id()).is_some() {
            debug!(faculty = %faculty.id(), "rejected duplicate faculty");
            return Err(RegistryError::DuplicateFaculty(faculty.id().clone()));
        }

        info!(faculty = %faculty.id(), "added faculty");
        self.faculty.push(FacultyRecord {
            id: faculty.id().clone(),
            name: faculty.name().to_string(),
            department: faculty.department().to_string(),
        });
        Ok(())
    }

    /// Look up a faculty member by ID.
    #[must_use]
    pub fn get_faculty(&self, id: &FacultyId) -> Option<Faculty> {
        self.find_faculty(id).map(|record| self.faculty_view(record))
    }

    /// Snapshot of all faculty, in registration order.
    #[must_use]
    pub fn get_all_faculty(&self) -> Vec<Faculty> {
        self.faculty
            .iter()
            .map(|record| self.faculty_view(record))
            .collect()
    }

    /// Remove a faculty member, leaving their courses unassigned.
    ///
    /// Returns `false` if the ID is unknown.
    pub fn remove_faculty(&mut self, id: &FacultyId) -> bool {
        self.delete_faculty(id).is_ok()
    }

    /// Remove a faculty member, leaving their courses unassigned.
    ///
    /// Returns the faculty member as they were just before removal.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::FacultyNotFound`] if the ID is unknown.
    pub fn delete_faculty(&mut self, id: &FacultyId) -> Result<Faculty, RegistryError> {
        let Some(position) = self.faculty.iter().position(|f| &f.id == id) else {
            debug!(faculty = %id, "cannot remove unknown faculty");
            return Err(RegistryError::FacultyNotFound(id.clone()));
        };

        let removed = self.faculty_view(&self.faculty[position]);
        self.assignments.retain(|t| &t.faculty != id);
        self.faculty.remove(position);

        info!(
            faculty = %id,
            unassigned = removed.assigned_course_codes().len(),
            "removed faculty"
        );
        Ok(removed)
    }

    /// Change a faculty member's department.
    ///
    /// Returns `false` if the ID is unknown.
    pub fn set_faculty_department(&mut self, id: &FacultyId, department: impl Into<String>) -> bool {
        let Some(record) = self.faculty.iter_mut().find(|f| &f.id == id) else {
            return false;
        };
        record.department = department.into();
        info!(faculty = %id, department = %record.department, "changed department");
        true
    }

    // --- courses ----------------------------------------------------------

    /// Register a course.
    ///
    /// Returns `false`, leaving the registry unchanged, if the code is taken.
    pub fn add_course(&mut self, course: Course) -> bool {
        self.insert_course(course).is_ok()
    }

    /// Register a course, reporting why it was rejected.
    ///
    /// Any roster or lecturer carried by `course` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCourse`] if the code is taken.
    pub fn insert_course(&mut self, course: Course) -> Result<(), RegistryError> {
        if self.find_course(course.code()).is_some() {
            debug!(course = %course.code(), "rejected duplicate course");
            return Err(RegistryError::DuplicateCourse(course.code().clone()));
        }

        info!(course = %course.code(), "added course");
        self.courses.push(CourseRecord {
            code: course.code().clone(),
            title: course.title().to_string(),
            credits: course.credits(),
            prerequisites: course.prerequisite_codes().to_vec(),
        });
        Ok(())
    }

    /// Look up a course by code.
    #[must_use]
    pub fn get_course(&self, code: &CourseCode) -> Option<Course> {
        self.find_course(code).map(|record| self.course_view(record))
    }

    /// Snapshot of every course, in registration order.
    #[must_use]
    pub fn get_all_courses(&self) -> Vec<Course> {
        self.courses
            .iter()
            .map(|record| self.course_view(record))
            .collect()
    }

    /// Remove a course, dropping its students and unassigning its lecturer.
    ///
    /// Returns `false` if the code is unknown.
    pub fn remove_course(&mut self, code: &CourseCode) -> bool {
        self.delete_course(code).is_ok()
    }

    /// Remove a course, dropping its students and unassigning its lecturer.
    ///
    /// Prerequisite lists on other courses are informational and are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CourseNotFound`] if the code is unknown.
    pub fn delete_course(&mut self, code: &CourseCode) -> Result<Course, RegistryError> {
        let Some(position) = self.courses.iter().position(|c| &c.code == code) else {
            debug!(course = %code, "cannot remove unknown course");
            return Err(RegistryError::CourseNotFound(code.clone()));
        };

        let removed = self.course_view(&self.courses[position]);
        self.enrollments.retain(|e| &e.course != code);
        self.assignments.retain(|t| &t.course != code);
        self.courses.remove(position);

        info!(
            course = %code,
            dropped = removed.enrolled_student_ids().len(),
            "removed course"
        );
        Ok(removed)
    }

    /// The students enrolled in a course, in enrollment order.
    ///
    /// Empty if the course is unknown or has nobody enrolled.
    #[must_use]
    pub fn get_course_roster(&self, code: &CourseCode) -> Vec<Student> {
        self.enrollments
            .iter()
            .filter(|e| &e.course == code)
            .filter_map(|e| self.get_student(&e.student))
            .collect()
    }

    // --- enrollment -------------------------------------------------------

    /// Enroll a student in a course.
    ///
    /// Returns `false` if either is unknown or the student is already
    /// enrolled.
    pub fn enroll_student_in_course(&mut self, student: &StudentId, course: &CourseCode) -> bool {
        self.enroll(student, course).is_ok()
    }

    /// Enroll a student in a course, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StudentNotFound`] or
    /// [`RegistryError::CourseNotFound`] if either is unknown, and
    /// [`RegistryError::AlreadyEnrolled`] if the student is on the roster.
    pub fn enroll(&mut self, student: &StudentId, course: &CourseCode) -> Result<(), RegistryError> {
        self.require_student(student)?;
        self.require_course(course)?;

        if self.is_enrolled(student, course) {
            debug!(student = %student, course = %course, "already enrolled");
            return Err(RegistryError::AlreadyEnrolled {
                student: student.clone(),
                course: course.clone(),
            });
        }

        self.enrollments.push(Enrollment {
            student: student.clone(),
            course: course.clone(),
        });
        info!(student = %student, course = %course, "enrolled student");
        Ok(())
    }

    /// Drop a student from a course.
    ///
    /// Returns `false` if either is unknown or the student is not enrolled.
    pub fn drop_student_from_course(&mut self, student: &StudentId, course: &CourseCode) -> bool {
        self.drop_enrollment(student, course).is_ok()
    }

    /// Drop a student from a course, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StudentNotFound`] or
    /// [`RegistryError::CourseNotFound`] if either is unknown, and
    /// [`RegistryError::NotEnrolled`] if the student is not on the roster.
    pub fn drop_enrollment(
        &mut self,
        student: &StudentId,
        course: &CourseCode,
    ) -> Result<(), RegistryError> {
        self.require_student(student)?;
        self.require_course(course)?;

        let Some(position) = self
            .enrollments
            .iter()
            .position(|e| &e.student == student && &e.course == course)
        else {
            debug!(student = %student, course = %course, "not enrolled");
            return Err(RegistryError::NotEnrolled {
                student: student.clone(),
                course: course.clone(),
            });
        };

        self.enrollments.remove(position);
        info!(student = %student, course = %course, "dropped student");
        Ok(())
    }

    /// Whether the student is on the course roster.
    #[must_use]
    pub fn is_enrolled(&self, student: &StudentId, course: &CourseCode) -> bool {
        self.enrollments
            .iter()
            .any(|e| &e.student == student && &e.course == course)
    }

    /// Every enrollment as `(student, course)` pairs, oldest first.
    pub fn enrollments(&self) -> impl Iterator<Item = (&StudentId, &CourseCode)> + '_ {
        self.enrollments.iter().map(|e| (&e.student, &e.course))
    }

    // --- assignment -------------------------------------------------------

    /// Assign a faculty member to teach a course.
    ///
    /// A course taught by someone else is taken away from them first.
    /// Returns `false` if either is unknown, or if the course is already
    /// taught by this faculty member.
    pub fn assign_faculty_to_course(&mut self, faculty: &FacultyId, course: &CourseCode) -> bool {
        self.assign(faculty, course).is_ok()
    }

    /// Assign a faculty member to teach a course, reporting the displaced
    /// lecturer.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::FacultyNotFound`] or
    /// [`RegistryError::CourseNotFound`] if either is unknown, and
    /// [`RegistryError::AlreadyAssigned`] if nothing would change.
    pub fn assign(
        &mut self,
        faculty: &FacultyId,
        course: &CourseCode,
    ) -> Result<Assignment, RegistryError> {
        self.require_faculty(faculty)?;
        self.require_course(course)?;

        if self.assignee(course) == Some(faculty) {
            debug!(faculty = %faculty, course = %course, "already assigned");
            return Err(RegistryError::AlreadyAssigned {
                faculty: faculty.clone(),
                course: course.clone(),
            });
        }

        let previous = self.take_assignment(course);
        self.assignments.push(Teaching {
            course: course.clone(),
            faculty: faculty.clone(),
        });

        match &previous {
            Some(previous) => info!(
                faculty = %faculty,
                course = %course,
                previous = %previous,
                "reassigned course"
            ),
            None => info!(faculty = %faculty, course = %course, "assigned course"),
        }

        Ok(Assignment {
            faculty: faculty.clone(),
            course: course.clone(),
            previous,
        })
    }

    /// Remove a faculty member from a course they teach.
    ///
    /// Returns `false` if either is unknown or the course is not taught by
    /// this faculty member.
    pub fn unassign_faculty_from_course(&mut self, faculty: &FacultyId, course: &CourseCode) -> bool {
        self.unassign(faculty, course).is_ok()
    }

    /// Remove a faculty member from a course, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::FacultyNotFound`] or
    /// [`RegistryError::CourseNotFound`] if either is unknown, and
    /// [`RegistryError::NotAssigned`] if the course has a different lecturer
    /// or none at all.
    pub fn unassign(&mut self, faculty: &FacultyId, course: &CourseCode) -> Result<(), RegistryError> {
        self.require_faculty(faculty)?;
        self.require_course(course)?;

        if self.assignee(course) != Some(faculty) {
            debug!(faculty = %faculty, course = %course, "not assigned");
            return Err(RegistryError::NotAssigned {
                faculty: faculty.clone(),
                course: course.clone(),
            });
        }

        self.take_assignment(course);
        info!(faculty = %faculty, course = %course, "unassigned course");
        Ok(())
    }

    /// The faculty member teaching a course, if any.
    #[must_use]
    pub fn assignee(&self, course: &CourseCode) -> Option<&FacultyId> {
        self.assignments
            .iter()
            .find(|t| &t.course == course)
            .map(|t| &t.faculty)
    }

    /// Every assignment as `(course, faculty)` pairs, oldest first.
    pub fn assignments(&self) -> impl Iterator<Item = (&CourseCode, &FacultyId)> + '_ {
        self.assignments.iter().map(|t| (&t.course, &t.faculty))
    }
}

impl Registry {
    fn find_student(&self, id: &StudentId) -> Option<&StudentRecord> {
        self.students.iter().find(|s| &s.id == id)
    }

    fn find_faculty(&self, id: &FacultyId) -> Option<&FacultyRecord> {
        self.faculty.iter().find(|f| &f.id == id)
    }

    fn find_course(&self, code: &CourseCode) -> Option<&CourseRecord> {
        self.courses.iter().find(|c| &c.code == code)
    }

    fn require_student(&self, id: &StudentId) -> Result<(), RegistryError> {
        self.find_student(id)
            .map(|_| ())
            .ok_or_else(|| RegistryError::StudentNotFound(id.clone()))
    }

    fn require_faculty(&self, id: &FacultyId) -> Result<(), RegistryError> {
        self.find_faculty(id)
            .map(|_| ())
            .ok_or_else(|| RegistryError::FacultyNotFound(id.clone()))
    }

    fn require_course(&self, code: &CourseCode) -> Result<(), RegistryError> {
        self.find_course(code)
            .map(|_| ())
            .ok_or_else(|| RegistryError::CourseNotFound(code.clone()))
    }

    /// Remove the assignment row for a course, returning who taught it.
    fn take_assignment(&mut self, course: &CourseCode) -> Option<FacultyId> {
        let position = self.assignments.iter().position(|t| &t.course == course)?;
        Some(self.assignments.remove(position).faculty)
    }

    fn student_view(&self, record: &StudentRecord) -> Student {
        let mut student = Student::new(record.id.clone(), &record.name, &record.major);
        student.enrolled_course_codes = self
            .enrollments
            .iter()
            .filter(|e| e.student == record.id)
            .map(|e| e.course.clone())
            .collect();
        student
    }

    fn faculty_view(&self, record: &FacultyRecord) -> Faculty {
        let mut faculty = Faculty::new(record.id.clone(), &record.name, &record.department);
        faculty.assigned_course_codes = self
            .assignments
            .iter()
            .filter(|t| t.faculty == record.id)
            .map(|t| t.course.clone())
            .collect();
        faculty
    }

    fn course_view(&self, record: &CourseRecord) -> Course {
        let mut course = Course::new(record.code.clone(), &record.title, record.credits)
            .with_prerequisites(record.prerequisites.iter().cloned());
        course.enrolled_student_ids = self
            .enrollments
            .iter()
            .filter(|e| e.course == record.code)
            .map(|e| e.student.clone())
            .collect();
        course.assigned_faculty_id = self.assignee(&record.code).cloned();
        course
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> StudentId {
        StudentId::new(s).unwrap()
    }

    fn fid(s: &str) -> FacultyId {
        FacultyId::new(s).unwrap()
    }

    fn code(s: &str) -> CourseCode {
        CourseCode::new(s).unwrap()
    }

    fn student(id: &str, name: &str) -> Student {
        Student::new(sid(id), name, "Computer Science")
    }

    fn faculty(id: &str, name: &str) -> Faculty {
        Faculty::new(fid(id), name, "Physics")
    }

    fn course(c: &str, title: &str) -> Course {
        Course::new(code(c), title, Credits::new(3.0).unwrap())
    }

    /// Two students, two faculty and two courses with no relationships.
    fn registry() -> Registry {
        let mut registry = Registry::new();
        assert!(registry.add_student(student("S001", "Alice Smith")));
        assert!(registry.add_student(student("S002", "Bob Johnson")));
        assert!(registry.add_faculty(faculty("F001", "Dr. Carol White")));
        assert!(registry.add_faculty(faculty("F002", "Prof. David Green")));
        assert!(registry.add_course(course("CS101", "Intro to Programming")));
        assert!(registry.add_course(course("MA201", "Calculus I")));
        registry
    }

    #[test]
    fn duplicate_student_is_rejected_without_side_effects() {
        let mut registry = registry();
        let before = registry.clone();

        assert!(!registry.add_student(student("S001", "Someone Else")));
        assert_eq!(registry, before);
        assert_eq!(registry.get_student(&sid("S001")).unwrap().name(), "Alice Smith");
    }

    #[test]
    fn duplicate_faculty_and_course_are_rejected() {
        let mut registry = registry();
        let before = registry.clone();

        assert_eq!(
            registry.insert_faculty(faculty("F002", "Impostor")),
            Err(RegistryError::DuplicateFaculty(fid("F002")))
        );
        assert_eq!(
            registry.insert_course(course("MA201", "Other Calculus")),
            Err(RegistryError::DuplicateCourse(code("MA201")))
        );
        assert_eq!(registry, before);
    }

    #[test]
    fn lookups_return_none_for_unknown_ids() {
        let registry = registry();
        assert!(registry.get_student(&sid("S999")).is_none());
        assert!(registry.get_faculty(&fid("F999")).is_none());
        assert!(registry.get_course(&code("XX000")).is_none());
    }

    #[test]
    fn snapshots_are_detached_from_registry() {
        let mut registry = registry();
        registry.enroll(&sid("S001"), &code("CS101")).unwrap();

        let mut students = registry.get_all_students();
        students[0].set_major("Underwater Basket Weaving");
        students.clear();

        assert_eq!(registry.student_count(), 2);
        assert_eq!(
            registry.get_student(&sid("S001")).unwrap().major(),
            "Computer Science"
        );
    }

    #[test]
    fn editing_a_faculty_value_leaves_the_registry_alone() {
        let mut registry = registry();

        let mut member = registry.get_faculty(&fid("F001")).unwrap();
        member.set_department("Chemistry");
        assert_eq!(member.department(), "Chemistry");
        assert_eq!(registry.get_faculty(&fid("F001")).unwrap().department(), "Physics");

        assert!(registry.set_faculty_department(&fid("F001"), "Chemistry"));
        assert_eq!(registry.get_faculty(&fid("F001")).unwrap(), member);
    }

    #[test]
    fn collections_keep_insertion_order() {
        let registry = registry();
        let ids: Vec<_> = registry
            .get_all_courses()
            .iter()
            .map(|c| c.code().to_string())
            .collect();
        assert_eq!(ids, ["CS101", "MA201"]);
    }

    #[test]
    fn enroll_updates_both_sides() {
        let mut registry = registry();

        assert!(registry.enroll_student_in_course(&sid("S001"), &code("CS101")));

        let student = registry.get_student(&sid("S001")).unwrap();
        let course = registry.get_course(&code("CS101")).unwrap();
        assert_eq!(student.enrolled_course_codes(), &[code("CS101")]);
        assert_eq!(course.enrolled_student_ids(), &[sid("S001")]);
    }

    #[test]
    fn re_enrolling_fails_and_does_not_duplicate() {
        let mut registry = registry();
        registry.enroll(&sid("S001"), &code("CS101")).unwrap();

        assert_eq!(
            registry.enroll(&sid("S001"), &code("CS101")),
            Err(RegistryError::AlreadyEnrolled {
                student: sid("S001"),
                course: code("CS101"),
            })
        );
        assert_eq!(
            registry
                .get_student(&sid("S001"))
                .unwrap()
                .enrolled_course_codes()
                .len(),
            1
        );
    }

    #[test]
    fn enroll_requires_both_entities() {
        let mut registry = registry();

        assert_eq!(
            registry.enroll(&sid("S999"), &code("CS101")),
            Err(RegistryError::StudentNotFound(sid("S999")))
        );
        assert_eq!(
            registry.enroll(&sid("S001"), &code("XX000")),
            Err(RegistryError::CourseNotFound(code("XX000")))
        );
        assert_eq!(registry.enrollments().count(), 0);
    }

    #[test]
    fn drop_removes_both_sides() {
        let mut registry = registry();
        registry.enroll(&sid("S001"), &code("CS101")).unwrap();

        assert!(registry.drop_student_from_course(&sid("S001"), &code("CS101")));

        assert!(
            registry
                .get_student(&sid("S001"))
                .unwrap()
                .enrolled_course_codes()
                .is_empty()
        );
        assert!(
            registry
                .get_course(&code("CS101"))
                .unwrap()
                .enrolled_student_ids()
                .is_empty()
        );
    }

    #[test]
    fn drop_fails_when_not_enrolled() {
        let mut registry = registry();

        assert_eq!(
            registry.drop_enrollment(&sid("S001"), &code("CS101")),
            Err(RegistryError::NotEnrolled {
                student: sid("S001"),
                course: code("CS101"),
            })
        );
        assert!(!registry.drop_student_from_course(&sid("S999"), &code("CS101")));
    }

    #[test]
    fn enrollment_order_is_preserved_on_both_sides() {
        let mut registry = registry();
        registry.enroll(&sid("S002"), &code("MA201")).unwrap();
        registry.enroll(&sid("S001"), &code("MA201")).unwrap();
        registry.enroll(&sid("S001"), &code("CS101")).unwrap();

        assert_eq!(
            registry.get_course(&code("MA201")).unwrap().enrolled_student_ids(),
            &[sid("S002"), sid("S001")]
        );
        assert_eq!(
            registry
                .get_student(&sid("S001"))
                .unwrap()
                .enrolled_course_codes(),
            &[code("MA201"), code("CS101")]
        );
    }

    #[test]
    fn assign_updates_both_sides() {
        let mut registry = registry();

        let assignment = registry.assign(&fid("F001"), &code("CS101")).unwrap();

        assert_eq!(assignment.previous, None);
        assert_eq!(
            registry.get_course(&code("CS101")).unwrap().assigned_faculty_id(),
            Some(&fid("F001"))
        );
        assert_eq!(
            registry.get_faculty(&fid("F001")).unwrap().assigned_course_codes(),
            &[code("CS101")]
        );
    }

    #[test]
    fn assigning_same_faculty_again_is_a_no_op() {
        let mut registry = registry();
        registry.assign(&fid("F001"), &code("CS101")).unwrap();
        let before = registry.clone();

        assert!(!registry.assign_faculty_to_course(&fid("F001"), &code("CS101")));
        assert_eq!(registry, before);
    }

    #[test]
    fn reassigning_moves_course_between_faculty() {
        let mut registry = registry();
        registry.assign(&fid("F002"), &code("CS101")).unwrap();

        let assignment = registry.assign(&fid("F001"), &code("CS101")).unwrap();

        assert_eq!(assignment.previous, Some(fid("F002")));
        assert!(
            registry
                .get_faculty(&fid("F002"))
                .unwrap()
                .assigned_course_codes()
                .is_empty()
        );
        assert_eq!(
            registry.get_faculty(&fid("F001")).unwrap().assigned_course_codes(),
            &[code("CS101")]
        );
        assert_eq!(registry.assignments().count(), 1);
    }

    #[test]
    fn assign_requires_both_entities() {
        let mut registry = registry();

        assert_eq!(
            registry.assign(&fid("F999"), &code("CS101")),
            Err(RegistryError::FacultyNotFound(fid("F999")))
        );
        assert_eq!(
            registry.assign(&fid("F001"), &code("XX000")),
            Err(RegistryError::CourseNotFound(code("XX000")))
        );
    }

    #[test]
    fn unassign_only_clears_the_current_lecturer() {
        let mut registry = registry();
        registry.assign(&fid("F001"), &code("CS101")).unwrap();

        assert_eq!(
            registry.unassign(&fid("F002"), &code("CS101")),
            Err(RegistryError::NotAssigned {
                faculty: fid("F002"),
                course: code("CS101"),
            })
        );
        assert!(!registry.unassign_faculty_from_course(&fid("F001"), &code("MA201")));

        assert!(registry.unassign_faculty_from_course(&fid("F001"), &code("CS101")));
        assert!(registry.assignee(&code("CS101")).is_none());
        assert!(
            registry
                .get_faculty(&fid("F001"))
                .unwrap()
                .assigned_course_codes()
                .is_empty()
        );
    }

    #[test]
    fn removing_student_cleans_every_roster() {
        let mut registry = registry();
        registry.enroll(&sid("S001"), &code("CS101")).unwrap();
        registry.enroll(&sid("S001"), &code("MA201")).unwrap();
        registry.enroll(&sid("S002"), &code("MA201")).unwrap();

        let removed = registry.delete_student(&sid("S001")).unwrap();

        assert_eq!(removed.enrolled_course_codes(), &[code("CS101"), code("MA201")]);
        assert!(registry.get_student(&sid("S001")).is_none());
        assert!(registry.enrollments().all(|(s, _)| s != &sid("S001")));
        assert_eq!(
            registry.get_course(&code("MA201")).unwrap().enrolled_student_ids(),
            &[sid("S002")]
        );
        assert!(!registry.remove_student(&sid("S001")));
    }

    #[test]
    fn roster_follows_student_removal() {
        let mut registry = registry();
        registry.enroll(&sid("S001"), &code("CS101")).unwrap();

        let roster: Vec<_> = registry
            .get_course_roster(&code("CS101"))
            .iter()
            .map(|s| s.id().clone())
            .collect();
        assert_eq!(roster, [sid("S001")]);

        assert!(registry.remove_student(&sid("S001")));
        assert!(registry.get_course_roster(&code("CS101")).is_empty());
    }

    #[test]
    fn roster_of_unknown_course_is_empty() {
        let registry = registry();
        assert!(registry.get_course_roster(&code("XX000")).is_empty());
    }

    #[test]
    fn removing_faculty_unassigns_their_courses() {
        let mut registry = registry();
        registry.assign(&fid("F001"), &code("CS101")).unwrap();
        registry.assign(&fid("F001"), &code("MA201")).unwrap();

        let removed = registry.delete_faculty(&fid("F001")).unwrap();

        assert_eq!(removed.assigned_course_codes(), &[code("CS101"), code("MA201")]);
        assert!(registry.assignee(&code("CS101")).is_none());
        assert!(registry.assignee(&code("MA201")).is_none());
        assert!(!registry.remove_faculty(&fid("F001")));
    }

    #[test]
    fn removing_course_cleans_students_and_faculty() {
        let mut registry = registry();
        registry.enroll(&sid("S001"), &code("CS101")).unwrap();
        registry.enroll(&sid("S001"), &code("MA201")).unwrap();
        registry.assign(&fid("F001"), &code("CS101")).unwrap();

        assert!(registry.remove_course(&code("CS101")));

        assert_eq!(
            registry
                .get_student(&sid("S001"))
                .unwrap()
                .enrolled_course_codes(),
            &[code("MA201")]
        );
        assert!(
            registry
                .get_faculty(&fid("F001"))
                .unwrap()
                .assigned_course_codes()
                .is_empty()
        );
        assert_eq!(
            registry.delete_course(&code("CS101")),
            Err(RegistryError::CourseNotFound(code("CS101")))
        );
    }

    #[test]
    fn setters_change_mutable_fields_only() {
        let mut registry = registry();

        assert!(registry.set_student_major(&sid("S002"), "Statistics"));
        assert!(registry.set_faculty_department(&fid("F002"), "Astronomy"));
        assert!(!registry.set_student_major(&sid("S999"), "Nothing"));
        assert!(!registry.set_faculty_department(&fid("F999"), "Nothing"));

        assert_eq!(registry.get_student(&sid("S002")).unwrap().major(), "Statistics");
        assert_eq!(registry.get_faculty(&fid("F002")).unwrap().department(), "Astronomy");
    }

    #[test]
    fn relationships_on_inserted_values_are_ignored() {
        let mut registry = registry();
        registry.enroll(&sid("S001"), &code("CS101")).unwrap();
        let alice = registry.get_student(&sid("S001")).unwrap();

        let mut other = Registry::new();
        other.insert_student(alice).unwrap();

        assert!(
            other
                .get_student(&sid("S001"))
                .unwrap()
                .enrolled_course_codes()
                .is_empty()
        );
    }
}

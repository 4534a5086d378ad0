//! Property tests driving the registry with random operation sequences.

use std::collections::HashSet;

use proptest::prelude::*;
use roster::{Course, CourseCode, Credits, Faculty, FacultyId, Registry, Student, StudentId};

#[derive(Debug, Clone)]
enum Op {
    AddStudent(usize),
    AddFaculty(usize),
    AddCourse(usize),
    RemoveStudent(usize),
    RemoveFaculty(usize),
    RemoveCourse(usize),
    Enroll(usize, usize),
    Drop(usize, usize),
    Assign(usize, usize),
    Unassign(usize, usize),
}

fn student_id(i: usize) -> StudentId {
    StudentId::new(format!("S{i:03}")).unwrap()
}

fn faculty_id(i: usize) -> FacultyId {
    FacultyId::new(format!("F{i:03}")).unwrap()
}

fn course_code(i: usize) -> CourseCode {
    CourseCode::new(format!("C{i:03}")).unwrap()
}

fn op() -> impl Strategy<Value = Op> {
    let s = 0..4usize;
    let f = 0..3usize;
    let c = 0..4usize;
    prop_oneof![
        s.clone().prop_map(Op::AddStudent),
        f.clone().prop_map(Op::AddFaculty),
        c.clone().prop_map(Op::AddCourse),
        s.clone().prop_map(Op::RemoveStudent),
        f.clone().prop_map(Op::RemoveFaculty),
        c.clone().prop_map(Op::RemoveCourse),
        (s.clone(), c.clone()).prop_map(|(s, c)| Op::Enroll(s, c)),
        (s, c.clone()).prop_map(|(s, c)| Op::Drop(s, c)),
        (f.clone(), c.clone()).prop_map(|(f, c)| Op::Assign(f, c)),
        (f, c).prop_map(|(f, c)| Op::Unassign(f, c)),
    ]
}

fn apply(registry: &mut Registry, op: &Op) -> bool {
    match *op {
        Op::AddStudent(s) => {
            registry.add_student(Student::new(student_id(s), format!("Student {s}"), "Major"))
        }
        Op::AddFaculty(f) => {
            registry.add_faculty(Faculty::new(faculty_id(f), format!("Faculty {f}"), "Dept"))
        }
        Op::AddCourse(c) => registry.add_course(Course::new(
            course_code(c),
            format!("Course {c}"),
            Credits::new(3.0).unwrap(),
        )),
        Op::RemoveStudent(s) => registry.remove_student(&student_id(s)),
        Op::RemoveFaculty(f) => registry.remove_faculty(&faculty_id(f)),
        Op::RemoveCourse(c) => registry.remove_course(&course_code(c)),
        Op::Enroll(s, c) => registry.enroll_student_in_course(&student_id(s), &course_code(c)),
        Op::Drop(s, c) => registry.drop_student_from_course(&student_id(s), &course_code(c)),
        Op::Assign(f, c) => registry.assign_faculty_to_course(&faculty_id(f), &course_code(c)),
        Op::Unassign(f, c) => {
            registry.unassign_faculty_from_course(&faculty_id(f), &course_code(c))
        }
    }
}

fn assert_no_duplicates<T: std::hash::Hash + Eq>(items: &[T]) {
    let unique: HashSet<_> = items.iter().collect();
    assert_eq!(unique.len(), items.len());
}

fn assert_consistent(registry: &Registry) {
    let students = registry.get_all_students();
    let faculty = registry.get_all_faculty();
    let courses = registry.get_all_courses();

    assert_no_duplicates(&students.iter().map(Student::id).collect::<Vec<_>>());
    assert_no_duplicates(&faculty.iter().map(Faculty::id).collect::<Vec<_>>());
    assert_no_duplicates(&courses.iter().map(Course::code).collect::<Vec<_>>());

    for student in &students {
        assert_no_duplicates(student.enrolled_course_codes());
        for code in student.enrolled_course_codes() {
            let course = registry.get_course(code).expect("enrolled course exists");
            assert!(course.enrolled_student_ids().contains(student.id()));
        }
    }

    for course in &courses {
        assert_no_duplicates(course.enrolled_student_ids());
        for id in course.enrolled_student_ids() {
            let student = registry.get_student(id).expect("enrolled student exists");
            assert!(student.is_enrolled_in(course.code()));
        }
        if let Some(id) = course.assigned_faculty_id() {
            let member = registry.get_faculty(id).expect("assigned faculty exists");
            assert!(member.teaches(course.code()));
        }
        assert_eq!(
            registry.get_course_roster(course.code()).len(),
            course.enrolled_student_ids().len()
        );
    }

    for member in &faculty {
        assert_no_duplicates(member.assigned_course_codes());
        for code in member.assigned_course_codes() {
            let course = registry.get_course(code).expect("assigned course exists");
            assert_eq!(course.assigned_faculty_id(), Some(member.id()));
        }
    }
}

proptest! {
    #[test]
    fn relationships_stay_symmetric(ops in prop::collection::vec(op(), 0..64)) {
        let mut registry = Registry::new();
        for op in &ops {
            apply(&mut registry, op);
            assert_consistent(&registry);
        }
    }

    #[test]
    fn rejected_operations_change_nothing(ops in prop::collection::vec(op(), 0..64)) {
        let mut registry = Registry::seeded();
        for op in &ops {
            let before = registry.clone();
            if !apply(&mut registry, op) {
                prop_assert_eq!(&before, &registry, "{:?} was rejected but changed state", op);
            }
        }
    }

    #[test]
    fn enrollment_matches_a_simple_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut registry = Registry::new();
        let mut model: HashSet<(usize, usize)> = HashSet::new();

        for op in &ops {
            let accepted = apply(&mut registry, op);
            match *op {
                Op::Enroll(s, c) if accepted => prop_assert!(model.insert((s, c))),
                Op::Drop(s, c) if accepted => prop_assert!(model.remove(&(s, c))),
                Op::RemoveStudent(s) if accepted => model.retain(|&(student, _)| student != s),
                Op::RemoveCourse(c) if accepted => model.retain(|&(_, course)| course != c),
                _ => {}
            }
        }

        for s in 0..4 {
            for c in 0..4 {
                prop_assert_eq!(
                    registry.is_enrolled(&student_id(s), &course_code(c)),
                    model.contains(&(s, c))
                );
            }
        }
    }
}

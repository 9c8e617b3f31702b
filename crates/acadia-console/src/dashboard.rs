//! Dashboard aggregation: summary statistics over the cached
//! collections. Rendering is someone else's job; this produces the
//! numbers.

use crate::Console;
use acadia_cache::Snapshot;
use acadia_model::EntityKind;
use indexmap::IndexMap;

/// Counts the dashboard tiles and charts bind.
#[derive(Debug, Clone, Default)]
pub struct DashboardSummary {
    /// Record counts per entity, in sidebar order.
    pub totals: IndexMap<EntityKind, usize>,
    /// Courses whose status is "active".
    pub active_courses: usize,
    /// Departments per school id.
    pub departments_per_school: IndexMap<String, usize>,
    /// Programs per school id.
    pub programs_per_school: IndexMap<String, usize>,
    /// Courses per program id.
    pub courses_per_program: IndexMap<String, usize>,
    /// Teaching assignments per lecturer id.
    pub assignments_per_lecturer: IndexMap<String, usize>,
    /// Collections that failed to load, with their errors.
    pub load_failures: Vec<(EntityKind, String)>,
}

fn count<E>(summary: &mut DashboardSummary, kind: EntityKind, snapshot: &Snapshot<Vec<E>>) -> usize {
    if let Some(error) = &snapshot.error {
        summary.load_failures.push((kind, error.to_string()));
    }
    let total = snapshot.data.as_deref().map_or(0, Vec::len);
    summary.totals.insert(kind, total);
    total
}

fn group_by<E, F>(rows: Option<&Vec<E>>, project: F) -> IndexMap<String, usize>
where
    F: Fn(&E) -> Option<&str>,
{
    let mut groups = IndexMap::new();
    for row in rows.into_iter().flatten() {
        if let Some(group) = project(row) {
            *groups.entry(group.to_string()).or_insert(0) += 1;
        }
    }
    groups
}

impl Console {
    /// Aggregate the dashboard numbers, fetching every collection
    /// concurrently through the shared cache.
    pub async fn dashboard(&self) -> DashboardSummary {
        let (schools, departments, programs, courses, admins, lecturers, students, assignments) = futures::join!(
            self.schools.all_records(),
            self.departments.all_records(),
            self.programs.all_records(),
            self.courses.all_records(),
            self.admins.all_records(),
            self.lecturers.all_records(),
            self.students.all_records(),
            self.assignments.all_records(),
        );

        let mut summary = DashboardSummary::default();
        count(&mut summary, EntityKind::School, &schools);
        count(&mut summary, EntityKind::Department, &departments);
        count(&mut summary, EntityKind::Program, &programs);
        count(&mut summary, EntityKind::Course, &courses);
        count(&mut summary, EntityKind::Admin, &admins);
        count(&mut summary, EntityKind::Lecturer, &lecturers);
        count(&mut summary, EntityKind::Student, &students);
        count(&mut summary, EntityKind::CourseAssignment, &assignments);

        summary.active_courses = courses
            .data
            .as_deref()
            .into_iter()
            .flatten()
            .filter(|course| course.status.as_deref() == Some("active"))
            .count();

        summary.departments_per_school =
            group_by(departments.data.as_deref(), |d| Some(d.school_id.as_str()));
        summary.programs_per_school =
            group_by(programs.data.as_deref(), |p| Some(p.school_id.as_str()));
        summary.courses_per_program =
            group_by(courses.data.as_deref(), |c| Some(c.program_id.as_str()));
        summary.assignments_per_lecturer =
            group_by(assignments.data.as_deref(), |a| Some(a.lecturer_id.as_str()));

        summary
    }
}

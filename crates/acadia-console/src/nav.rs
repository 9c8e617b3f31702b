//! Sidebar navigation metadata.

use acadia_model::EntityKind;
use std::fmt;
use std::str::FromStr;

/// A console screen the sidebar can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Summary statistics.
    #[default]
    Dashboard,
    Schools,
    Departments,
    Programs,
    Courses,
    Admins,
    Lecturers,
    Students,
    Assignments,
}

impl Screen {
    /// The entity this screen manages, `None` for the dashboard.
    #[must_use]
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Self::Dashboard => None,
            Self::Schools => Some(EntityKind::School),
            Self::Departments => Some(EntityKind::Department),
            Self::Programs => Some(EntityKind::Program),
            Self::Courses => Some(EntityKind::Course),
            Self::Admins => Some(EntityKind::Admin),
            Self::Lecturers => Some(EntityKind::Lecturer),
            Self::Students => Some(EntityKind::Student),
            Self::Assignments => Some(EntityKind::CourseAssignment),
        }
    }

    /// Sidebar label.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.kind() {
            None => "Dashboard",
            Some(kind) => kind.title(),
        }
    }

    /// Screen for an entity kind.
    #[must_use]
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::School => Self::Schools,
            EntityKind::Department => Self::Departments,
            EntityKind::Program => Self::Programs,
            EntityKind::Course => Self::Courses,
            EntityKind::Admin => Self::Admins,
            EntityKind::Lecturer => Self::Lecturers,
            EntityKind::Student => Self::Students,
            EntityKind::CourseAssignment => Self::Assignments,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Screen {
    type Err = acadia_model::UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("dashboard") {
            return Ok(Self::Dashboard);
        }
        s.parse::<EntityKind>().map(Self::for_kind)
    }
}

/// One sidebar group.
#[derive(Debug, Clone, Copy)]
pub struct NavSection {
    /// Group heading.
    pub label: &'static str,
    /// Screens under the heading.
    pub screens: &'static [Screen],
}

/// The sidebar, in display order.
pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        label: "Dashboard",
        screens: &[Screen::Dashboard],
    },
    NavSection {
        label: "Academic",
        screens: &[
            Screen::Schools,
            Screen::Departments,
            Screen::Programs,
            Screen::Courses,
        ],
    },
    NavSection {
        label: "User Management",
        screens: &[Screen::Admins, Screen::Lecturers, Screen::Students],
    },
    NavSection {
        label: "Teaching",
        screens: &[Screen::Assignments],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entity_screen_is_reachable_from_the_sidebar() {
        let listed: Vec<Screen> = NAV_SECTIONS
            .iter()
            .flat_map(|section| section.screens.iter().copied())
            .collect();
        for kind in acadia_model::ALL_KINDS {
            assert!(listed.contains(&Screen::for_kind(*kind)), "{kind} missing");
        }
    }

    #[test]
    fn screens_parse_from_entity_names() {
        assert_eq!("courses".parse::<Screen>().unwrap(), Screen::Courses);
        assert_eq!("Dashboard".parse::<Screen>().unwrap(), Screen::Dashboard);
        assert!("cafeteria".parse::<Screen>().is_err());
    }
}

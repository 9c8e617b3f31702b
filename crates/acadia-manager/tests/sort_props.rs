//! Ordering properties of the view engine.

use acadia_manager::{SortSpec, SortDirection};
use acadia_model::{Course, FilterValue};
use acadia_test_utils::fixtures;
use indexmap::IndexMap;
use proptest::prelude::*;

fn courses(levels: &[u8]) -> Vec<Course> {
    levels
        .iter()
        .enumerate()
        .map(|(index, level)| {
            let mut course = fixtures::course(
                &format!("C{index}"),
                &format!("Course {index}"),
                &format!("CO{index:03}"),
                "P1",
            );
            course.course_level = Some(f64::from(*level));
            course
        })
        .collect()
}

fn visible_sorted(rows: &[Course], direction: SortDirection) -> Vec<Course> {
    let spec = SortSpec {
        field: "course_level",
        direction,
    };
    acadia_manager::view::visible(rows, "", &IndexMap::new(), Some(&spec))
}

proptest! {
    #[test]
    fn sort_is_stable_for_equal_keys(levels in proptest::collection::vec(0u8..4, 0..32)) {
        let rows = courses(&levels);
        let sorted = visible_sorted(&rows, SortDirection::Ascending);

        // Same multiset of rows.
        prop_assert_eq!(sorted.len(), rows.len());

        // Non-decreasing levels.
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].course_level <= pair[1].course_level);
        }

        // Equal keys keep their original (cache) order: the ids were
        // assigned in input order, so within one level they must be
        // strictly increasing.
        for pair in sorted.windows(2) {
            if pair[0].course_level == pair[1].course_level {
                let a: usize = pair[0].course_id[1..].parse().unwrap();
                let b: usize = pair[1].course_id[1..].parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn descending_is_the_reverse_order_of_keys(levels in proptest::collection::vec(0u8..4, 0..32)) {
        let rows = courses(&levels);
        let ascending = visible_sorted(&rows, SortDirection::Ascending);
        let descending = visible_sorted(&rows, SortDirection::Descending);

        let up: Vec<_> = ascending.iter().filter_map(|c| c.course_level).collect();
        let mut down: Vec<_> = descending.iter().filter_map(|c| c.course_level).collect();
        down.reverse();
        prop_assert_eq!(up, down);
    }

    #[test]
    fn filters_never_invent_rows(levels in proptest::collection::vec(0u8..4, 0..32)) {
        let rows = courses(&levels);
        let mut filters = IndexMap::new();
        filters.insert("course_level", FilterValue::Number(2.0));
        let filtered = acadia_manager::view::visible(&rows, "", &filters, None);
        prop_assert!(filtered.len() <= rows.len());
        prop_assert!(filtered.iter().all(|c| c.course_level == Some(2.0)));
    }
}

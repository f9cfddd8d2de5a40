//! Row model: core rows, then the global filter, then the active sort.

use crate::{AlumniRecord, SortState, matches_global_filter};

/// A row that survived filtering, keyed by its position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub index: usize,
    pub record: &'a AlumniRecord,
}

/// Every record paired with its input position.
pub fn core_rows(records: &[AlumniRecord]) -> Vec<VisibleRow<'_>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| VisibleRow { index, record })
        .collect()
}

/// Keeps the rows matching `query` in at least one column.
pub fn filtered_rows<'a>(rows: Vec<VisibleRow<'a>>, query: &str) -> Vec<VisibleRow<'a>> {
    if query.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| matches_global_filter(row.record, query))
        .collect()
}

/// Orders rows by the active sort entry; input order breaks ties.
pub fn sorted_rows<'a>(mut rows: Vec<VisibleRow<'a>>, sort: &SortState) -> Vec<VisibleRow<'a>> {
    if let Some(entry) = sort.active() {
        rows.sort_by(|a, b| {
            entry
                .compare(a.record, b.record)
                .then_with(|| a.index.cmp(&b.index))
        });
    }
    rows
}

/// The rows to render for this frame.
pub fn visible_rows<'a>(
    records: &'a [AlumniRecord],
    query: &str,
    sort: &SortState,
) -> Vec<VisibleRow<'a>> {
    sorted_rows(filtered_rows(core_rows(records), query), sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColumnId;

    fn record(name: &str, class: &str, linkedin: &str) -> AlumniRecord {
        AlumniRecord {
            name: name.to_owned(),
            class: class.to_owned(),
            linkedin: linkedin.to_owned(),
            ..Default::default()
        }
    }

    fn names<'a>(rows: &[VisibleRow<'a>]) -> Vec<&'a str> {
        rows.iter().map(|row| row.record.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_keeps_input_order() {
        let records = vec![
            record("Zed", "2018", ""),
            record("Amy", "2021", ""),
            record("Kim", "2019", ""),
        ];
        let rows = visible_rows(&records, "", &SortState::new());
        assert_eq!(names(&rows), ["Zed", "Amy", "Kim"]);
        assert_eq!(
            rows.iter().map(|row| row.index).collect::<Vec<_>>(),
            [0, 1, 2]
        );
    }

    #[test]
    fn test_filter_keeps_exactly_matching_records() {
        let records = vec![
            record("Alice", "2020", ""),
            record("Bob", "2019", "https://linkedin.com/bob"),
            record("Carol", "2019", ""),
        ];

        let rows = visible_rows(&records, "2019", &SortState::new());
        assert_eq!(names(&rows), ["Bob", "Carol"]);

        let rows = visible_rows(&records, "bob", &SortState::new());
        assert_eq!(names(&rows), ["Bob"]);
        assert_eq!(rows[0].index, 1);

        let rows = visible_rows(&records, "nobody", &SortState::new());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_sort_cycle_on_name() {
        let records = vec![record("Zed", "", ""), record("Amy", "", "")];
        let mut sort = SortState::new();

        sort.toggle(ColumnId::Name);
        assert_eq!(names(&visible_rows(&records, "", &sort)), ["Amy", "Zed"]);

        sort.toggle(ColumnId::Name);
        assert_eq!(names(&visible_rows(&records, "", &sort)), ["Zed", "Amy"]);

        sort.toggle(ColumnId::Name);
        assert_eq!(names(&visible_rows(&records, "", &sort)), ["Zed", "Amy"]);
    }

    #[test]
    fn test_descending_reverses_ascending_for_distinct_names() {
        let records = vec![
            record("Mia", "", ""),
            record("Ben", "", ""),
            record("Zoe", "", ""),
            record("ava", "", ""),
        ];
        let mut sort = SortState::new();

        sort.toggle(ColumnId::Name);
        let ascending = names(&visible_rows(&records, "", &sort));
        assert_eq!(ascending, ["ava", "Ben", "Mia", "Zoe"]);

        sort.toggle(ColumnId::Name);
        let mut descending = names(&visible_rows(&records, "", &sort));
        descending.reverse();
        assert_eq!(descending, ascending);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let records = vec![
            record("Sam", "2001", ""),
            record("Amy", "", ""),
            record("sam", "2002", ""),
        ];
        let mut sort = SortState::new();

        sort.toggle(ColumnId::Name);
        let rows = visible_rows(&records, "", &sort);
        assert_eq!(
            rows.iter().map(|row| row.index).collect::<Vec<_>>(),
            [1, 0, 2]
        );

        sort.toggle(ColumnId::Name);
        let rows = visible_rows(&records, "", &sort);
        assert_eq!(
            rows.iter().map(|row| row.index).collect::<Vec<_>>(),
            [0, 2, 1]
        );
    }

    #[test]
    fn test_filter_applies_before_sort() {
        let records = vec![
            record("Zed", "2019", ""),
            record("Bob", "2020", ""),
            record("Amy", "2019", ""),
        ];
        let mut sort = SortState::new();
        sort.toggle(ColumnId::Name);

        let rows = visible_rows(&records, "2019", &sort);
        assert_eq!(names(&rows), ["Amy", "Zed"]);
    }
}

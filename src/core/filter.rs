use std::collections::BTreeSet;

use super::models::Student;

pub const NO_MATCHES: &str = "No students match the current filters.";
pub const EMPTY_ROSTER: &str = "There are no students in the list.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    pub search_query: String,
    pub class_filter: String,
}

impl RosterFilter {
    pub fn is_filtering(&self) -> bool {
        !self.search_query.is_empty() || !self.class_filter.is_empty()
    }

    pub fn clear(&mut self) {
        self.search_query.clear();
        self.class_filter.clear();
    }

    pub fn matches(&self, student: &Student) -> bool {
        name_matches_search(&student.name, &self.search_query)
            && (self.class_filter.is_empty() || student.class == self.class_filter)
    }

    /// Visible students in store order.
    pub fn apply<'a>(&self, students: &'a [Student]) -> Vec<&'a Student> {
        students.iter().filter(|student| self.matches(student)).collect()
    }
}

pub fn name_matches_search(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Distinct class labels, sorted, for the class selector.
pub fn unique_classes(students: &[Student]) -> Vec<String> {
    students
        .iter()
        .map(|student| student.class.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// What to tell the user above the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSummary {
    /// No filter is active and the roster has records.
    Unfiltered,
    /// No filter is active and the roster is empty.
    EmptyRoster,
    /// A filter is active but nothing matched.
    NoMatches,
    Found { count: usize, search_query: String, class_filter: String },
}

impl FilterSummary {
    pub fn describe(filter: &RosterFilter, visible: usize, total: usize) -> Self {
        if !filter.is_filtering() {
            return if total == 0 { FilterSummary::EmptyRoster } else { FilterSummary::Unfiltered };
        }
        if visible == 0 {
            return FilterSummary::NoMatches;
        }
        FilterSummary::Found {
            count: visible,
            search_query: filter.search_query.clone(),
            class_filter: filter.class_filter.clone(),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            FilterSummary::Unfiltered => None,
            FilterSummary::EmptyRoster => Some(EMPTY_ROSTER.to_string()),
            FilterSummary::NoMatches => Some(NO_MATCHES.to_string()),
            FilterSummary::Found { count, search_query, class_filter } => {
                let noun = if *count == 1 { "student" } else { "students" };
                let mut message = format!("Found {} {}", count, noun);
                if !search_query.is_empty() {
                    message.push_str(&format!(" whose name contains \"{}\"", search_query));
                }
                if !class_filter.is_empty() {
                    message.push_str(&format!(" in class {}", class_filter));
                }
                message.push('.');
                Some(message)
            }
        }
    }

    /// Message for an empty table or card list.
    pub fn empty_message(&self) -> &'static str {
        match self {
            FilterSummary::NoMatches | FilterSummary::Found { .. } => NO_MATCHES,
            FilterSummary::Unfiltered | FilterSummary::EmptyRoster => EMPTY_ROSTER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sample_roster;

    fn filter(query: &str, class: &str) -> RosterFilter {
        RosterFilter { search_query: query.to_string(), class_filter: class.to_string() }
    }

    fn names(students: &[&Student]) -> Vec<String> {
        students.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let students = vec![
            Student::new(1, "Anh", "10A1", 16),
            Student::new(2, "Lan", "11A2", 17),
            Student::new(3, "HOANG", "10A1", 16),
            Student::new(4, "Minh", "10A1", 16),
        ];

        for query in ["an", "AN", "An"] {
            assert_eq!(names(&filter(query, "").apply(&students)), vec!["Anh", "Lan", "HOANG"]);
        }
    }

    #[test]
    fn class_filter_is_exact() {
        let students = vec![
            Student::new(1, "Anh", "10A1", 16),
            Student::new(2, "Lan", "11A2", 17),
            Student::new(3, "Hoang", "10A10", 16),
        ];

        assert_eq!(names(&filter("an", "10A1").apply(&students)), vec!["Anh"]);
        assert!(filter("", "10a1").apply(&students).is_empty());
    }

    #[test]
    fn search_matches_non_ascii_names() {
        let students = sample_roster();
        let visible = filter("văn", "").apply(&students);
        assert_eq!(visible.len(), 4);
        let visible = filter("ĐẶNG", "").apply(&students);
        assert_eq!(names(&visible), vec!["Đặng Văn G"]);
    }

    #[test]
    fn empty_store_yields_empty_result() {
        assert!(filter("an", "10A1").apply(&[]).is_empty());
    }

    #[test]
    fn unique_classes_are_sorted_and_distinct() {
        assert_eq!(unique_classes(&sample_roster()), vec!["10A1", "11A2", "12A3"]);
        assert!(unique_classes(&[]).is_empty());
    }

    #[test]
    fn summary_messages() {
        let f = filter("an", "10A1");
        assert_eq!(
            FilterSummary::describe(&f, 2, 8).message().unwrap(),
            "Found 2 students whose name contains \"an\" in class 10A1."
        );
        assert_eq!(
            FilterSummary::describe(&filter("", "11A2"), 1, 8).message().unwrap(),
            "Found 1 student in class 11A2."
        );
        assert_eq!(FilterSummary::describe(&f, 0, 8), FilterSummary::NoMatches);
        assert_eq!(FilterSummary::describe(&RosterFilter::default(), 0, 0).message().unwrap(), EMPTY_ROSTER);
        assert_eq!(FilterSummary::describe(&RosterFilter::default(), 8, 8).message(), None);
    }

    #[test]
    fn clear_resets_both_inputs() {
        let mut f = filter("an", "10A1");
        assert!(f.is_filtering());
        f.clear();
        assert!(!f.is_filtering());
        assert_eq!(f, RosterFilter::default());
    }
}

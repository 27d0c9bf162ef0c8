use crate::domain::Park;

/// Concatenates per-source results in the order the sources were queried.
pub fn aggregate(source_results: Vec<Vec<Park>>) -> Vec<Park> {
    source_results.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldStatus;

    fn park(name: &str, source: &str) -> Park {
        Park::new(name, "", source, FieldStatus::Unknown)
    }

    #[test]
    fn keeps_source_order_then_document_order() {
        let parks = aggregate(vec![
            vec![park("B", "league"), park("A", "league")],
            vec![],
            vec![park("Ocee Park", "ocee")],
        ]);

        let names: Vec<&str> = parks.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "Ocee Park"]);
    }

    #[test]
    fn does_not_merge_same_names() {
        let parks = aggregate(vec![vec![park("Park", "one")], vec![park("Park", "two")]]);
        assert_eq!(parks.len(), 2);
    }

    #[test]
    fn empty_sources_leave_nothing() {
        assert!(aggregate(vec![vec![], vec![]]).is_empty());
    }
}

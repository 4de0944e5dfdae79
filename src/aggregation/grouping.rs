//! First-seen-order grouping of records by a categorical key.

use crate::models::Record;

/// Records sharing one key value.
#[derive(Debug, Clone)]
pub struct Group<'a> {
    /// The key value shared by every record in the group.
    pub key: String,
    /// The records in source order.
    pub records: Vec<&'a Record>,
}

/// Groups records by the value `key` extracts, in first-seen key order.
///
/// Groups are never empty: a key only appears once a record carries it.
///
/// # Examples
///
/// ```
/// use hr_dashboard::aggregation::group_by;
/// use hr_dashboard::models::Dataset;
/// use chrono::NaiveDate;
///
/// let dataset = Dataset::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), vec![]);
/// let groups = group_by(&dataset, |r| r.department.as_str());
/// assert!(groups.is_empty());
/// ```
pub fn group_by<'a, I, F>(records: I, key: F) -> Vec<Group<'a>>
where
    I: IntoIterator<Item = &'a Record>,
    F: Fn(&Record) -> &str,
{
    let mut groups: Vec<Group<'a>> = Vec::new();

    for record in records {
        let value = key(record);
        match groups.iter_mut().find(|g| g.key == value) {
            Some(group) => group.records.push(record),
            None => groups.push(Group {
                key: value.to_string(),
                records: vec![record],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::test_support::record;

    #[test]
    fn test_group_by_keeps_first_seen_order() {
        let records = vec![
            record("a", "Sales", "Indeed"),
            record("b", "IT/IS", "LinkedIn"),
            record("c", "Sales", "LinkedIn"),
        ];

        let groups = group_by(&records, |r| r.department.as_str());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "Sales");
        assert_eq!(groups[1].key, "IT/IS");
        let names: Vec<&str> = groups[0].records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_group_by_empty_input() {
        let records: Vec<Record> = vec![];
        assert!(group_by(&records, |r| r.sex.as_str()).is_empty());
    }
}

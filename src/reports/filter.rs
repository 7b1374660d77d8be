//! Period filter
//!
//! Selects the records whose loan timestamp falls in a year, or in one month
//! of that year. Output keeps storage order.

use crate::models::{PeriodSelector, Record};

/// Select records loaned within `selector`
///
/// Records with an unreadable loan timestamp never match.
pub fn filter_by_period<'a>(records: &'a [Record], selector: &PeriodSelector) -> Vec<&'a Record> {
    let matches: Vec<&Record> = records
        .iter()
        .filter(|record| match record.loaned_at() {
            Some(loaned_at) => selector.contains(&loaned_at),
            None => {
                tracing::debug!(
                    subject_id = %record.subject_id,
                    raw = %record.loan_timestamp,
                    "skipping record with unreadable loan timestamp"
                );
                false
            }
        })
        .collect();

    tracing::debug!(
        period = %selector,
        total = records.len(),
        matched = matches.len(),
        "filtered records by period"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthSelection;
    use chrono::Datelike;

    /// 25 records across January, March and June 2024, plus noise from 2023
    fn spread_records() -> Vec<Record> {
        let mut records = Vec::new();
        for i in 0..25u32 {
            let month = [1, 3, 6][(i % 3) as usize];
            let day = i % 28 + 1;
            records.push(Record::new(
                format!("2024-{:02}-{:02}T10:00", month, day),
                format!("S{:03}", i),
                format!("Student {}", i),
                "Laptop",
            ));
        }
        records.push(Record::new("2023-03-15T10:00", "OLD", "Old", "Laptop"));
        records
    }

    #[test]
    fn test_single_month_returns_subset_in_insertion_order() {
        let records = spread_records();
        let march = filter_by_period(&records, &PeriodSelector::monthly(2024, 3));

        let expected: Vec<&Record> = records
            .iter()
            .filter(|r| r.loan_timestamp.starts_with("2024-03"))
            .collect();
        assert_eq!(march, expected);
        assert_eq!(march.len(), 8);
        for record in march {
            let at = record.loaned_at().unwrap();
            assert_eq!((at.year(), at.month()), (2024, 3));
        }
    }

    #[test]
    fn test_all_months_applies_only_year() {
        let records = spread_records();
        let year = filter_by_period(&records, &PeriodSelector::whole_year(2024));
        assert_eq!(year.len(), 25);
        assert!(year.iter().all(|r| r.loaned_at().unwrap().year() == 2024));
    }

    #[test]
    fn test_every_month_selector_is_sound() {
        let records = spread_records();
        for month in 1..=12 {
            let selector = PeriodSelector {
                year: 2024,
                month: MonthSelection::Month(month),
            };
            for record in filter_by_period(&records, &selector) {
                let at = record.loaned_at().unwrap();
                assert_eq!(at.year(), 2024);
                assert_eq!(at.month(), month);
            }
        }
    }

    #[test]
    fn test_unparsable_timestamp_never_matches() {
        let records = vec![
            Record::new("not a date", "1", "A", "X"),
            Record::new("2024-03-01", "2", "B", "Y"),
        ];
        let matched = filter_by_period(&records, &PeriodSelector::whole_year(2024));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].subject_id, "2");
    }

    #[test]
    fn test_empty_result_is_valid() {
        let records = spread_records();
        assert!(filter_by_period(&records, &PeriodSelector::monthly(2030, 1)).is_empty());
    }
}

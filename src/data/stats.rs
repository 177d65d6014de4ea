use std::collections::BTreeMap;

use super::model::{AnimeCatalog, AnimeRecord};

// ---------------------------------------------------------------------------
// Aggregations for the Statistics page
// ---------------------------------------------------------------------------
//
// All three operations read the full catalog, never the filtered subset.
// Records missing the grouped field contribute nothing; an empty catalog
// yields empty results.

/// One group of the type-distribution proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeShare {
    pub label: String,
    pub count: usize,
    /// Share of records with a non-missing type, in percent.
    pub percent: f64,
}

/// One bar of the average-rating-by-year chart.
#[derive(Debug, Clone, PartialEq)]
pub struct YearRating {
    pub year: i32,
    /// Unrounded arithmetic mean; round only when formatting labels.
    pub mean: f64,
}

/// Count records per watch status, most frequent first.
/// Ties keep the order the statuses were first encountered in.
pub fn watch_status_distribution(catalog: &AnimeCatalog) -> Vec<(String, usize)> {
    let mut counts = count_by(catalog, |rec| rec.watch_status.as_deref());
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Count records per type and derive each group's share of the non-missing
/// total. Ordering mirrors [`watch_status_distribution`].
pub fn type_distribution(catalog: &AnimeCatalog) -> Vec<TypeShare> {
    let mut counts = count_by(catalog, |rec| rec.kind.as_deref());
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    counts
        .into_iter()
        .map(|(label, count)| TypeShare {
            label,
            count,
            percent: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// Mean rating per release year, ascending by year.
///
/// Records without a year or without a rating are excluded; a year whose
/// records all lack ratings is omitted rather than reported as 0.0. If the
/// source schema had no year or rating column at all the aggregation is
/// skipped and the result is empty.
pub fn average_rating_by_year(catalog: &AnimeCatalog) -> Vec<YearRating> {
    if !catalog.has_release_year || !catalog.has_rating {
        return Vec::new();
    }

    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for rec in &catalog.records {
        if let (Some(year), Some(rating)) = (rec.release_year, rec.rating) {
            let entry = sums.entry(year).or_insert((0.0, 0));
            entry.0 += rating;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(year, (sum, n))| YearRating {
            year,
            mean: sum / n as f64,
        })
        .collect()
}

/// Group records by a text field, counting per distinct value in
/// first-encountered order. Records where the field is missing are skipped.
fn count_by<'a, F>(catalog: &'a AnimeCatalog, field: F) -> Vec<(String, usize)>
where
    F: Fn(&'a AnimeRecord) -> Option<&'a str>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for rec in &catalog.records {
        let Some(value) = field(rec) else {
            continue;
        };
        match counts.iter_mut().find(|(label, _)| label == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::AnimeRecord;

    fn record_with_status(status: Option<&str>) -> AnimeRecord {
        AnimeRecord {
            title: "x".to_string(),
            watch_status: status.map(str::to_string),
            ..Default::default()
        }
    }

    fn record_with_rating(year: Option<i32>, rating: Option<f64>) -> AnimeRecord {
        AnimeRecord {
            title: "x".to_string(),
            release_year: year,
            rating,
            ..Default::default()
        }
    }

    #[test]
    fn status_distribution_counts_descending() {
        let catalog = AnimeCatalog::from_records(vec![
            record_with_status(Some("Completed")),
            record_with_status(Some("Completed")),
            record_with_status(Some("Watching")),
        ]);
        assert_eq!(
            watch_status_distribution(&catalog),
            vec![("Completed".to_string(), 2), ("Watching".to_string(), 1)]
        );
    }

    #[test]
    fn status_counts_sum_to_non_missing_total() {
        let catalog = AnimeCatalog::from_records(vec![
            record_with_status(Some("Completed")),
            record_with_status(None),
            record_with_status(Some("Dropped")),
            record_with_status(Some("Completed")),
        ]);
        let total: usize = watch_status_distribution(&catalog)
            .iter()
            .map(|(_, n)| n)
            .sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn status_ties_keep_first_encountered_order() {
        let catalog = AnimeCatalog::from_records(vec![
            record_with_status(Some("Watching")),
            record_with_status(Some("Completed")),
            record_with_status(Some("Completed")),
            record_with_status(Some("Watching")),
        ]);
        assert_eq!(
            watch_status_distribution(&catalog),
            vec![("Watching".to_string(), 2), ("Completed".to_string(), 2)]
        );
    }

    #[test]
    fn type_distribution_percentages_use_non_missing_total() {
        let mut records = vec![
            AnimeRecord {
                title: "a".to_string(),
                kind: Some("TV".to_string()),
                ..Default::default()
            };
            3
        ];
        records.push(AnimeRecord {
            title: "b".to_string(),
            kind: Some("Movie".to_string()),
            ..Default::default()
        });
        records.push(AnimeRecord {
            title: "c".to_string(),
            kind: None,
            ..Default::default()
        });

        let shares = type_distribution(&AnimeCatalog::from_records(records));
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].label, "TV");
        assert_eq!(shares[0].count, 3);
        assert!((shares[0].percent - 75.0).abs() < 1e-9);
        assert!((shares[1].percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn rating_by_year_ignores_missing_ratings() {
        let catalog = AnimeCatalog::from_records(vec![
            record_with_rating(Some(2020), Some(8.0)),
            record_with_rating(Some(2020), Some(6.0)),
            record_with_rating(Some(2021), None),
        ]);
        let result = average_rating_by_year(&catalog);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].year, 2020);
        assert!((result[0].mean - 7.0).abs() < 1e-9);
    }

    #[test]
    fn rating_by_year_sorted_ascending() {
        let catalog = AnimeCatalog::from_records(vec![
            record_with_rating(Some(2021), Some(7.0)),
            record_with_rating(Some(1998), Some(9.0)),
            record_with_rating(Some(2010), Some(8.0)),
        ]);
        let years: Vec<i32> = average_rating_by_year(&catalog)
            .iter()
            .map(|yr| yr.year)
            .collect();
        assert_eq!(years, vec![1998, 2010, 2021]);
    }

    #[test]
    fn rating_by_year_skipped_when_columns_absent() {
        let catalog = AnimeCatalog::from_records(vec![record_with_rating(
            Some(2020),
            Some(8.0),
        )])
        .with_columns(true, false);
        assert!(average_rating_by_year(&catalog).is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_aggregates() {
        let catalog = AnimeCatalog::from_records(Vec::new());
        assert!(watch_status_distribution(&catalog).is_empty());
        assert!(type_distribution(&catalog).is_empty());
        assert!(average_rating_by_year(&catalog).is_empty());
    }
}

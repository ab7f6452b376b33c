//! Recency ranking of merged headlines.

use chrono::{DateTime, Utc};

use crate::sources::{parse_date, Article};

/// Rank headlines most-recent-first and keep the top `limit`.
///
/// Records with an absent or empty `last_updated`, or one that fails to
/// parse, are dropped. The sort is stable: records with exactly equal
/// timestamps keep their input order. Returns fewer than `limit` records
/// without complaint when fewer exist.
pub fn rank(records: Vec<Article>, limit: usize) -> Vec<Article> {
    let mut dated: Vec<(DateTime<Utc>, Article)> = records
        .into_iter()
        .filter_map(|article| {
            let raw = article.last_updated.as_deref()?;
            if raw.is_empty() {
                return None;
            }
            let parsed = parse_date(raw)?;
            Some((parsed, article))
        })
        .collect();

    dated.sort_by(|left, right| right.0.cmp(&left.0));
    dated.truncate(limit);
    dated.into_iter().map(|(_, article)| article).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, last_updated: Option<&str>) -> Article {
        Article {
            title: Some(title.to_string()),
            url: format!("https://news.example.com/{}", title),
            last_updated: last_updated.map(|s| s.to_string()),
            user: None,
        }
    }

    #[test]
    fn test_sorts_most_recent_first() {
        let records = vec![
            article("older", Some("Wed, 13 Mar 2024 08:00:00 GMT")),
            article("newest", Some("Fri, 15 Mar 2024 10:30:00 GMT")),
            article("middle", Some("Thu, 14 Mar 2024 23:59:59 GMT")),
        ];

        let ranked = rank(records, 10);
        let titles: Vec<_> = ranked.iter().map(|a| a.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["newest", "middle", "older"]);
    }

    #[test]
    fn test_mixed_formats_rank_together() {
        let records = vec![
            article("iso-date", Some("2024-03-14")),
            article("rfc3339", Some("2024-03-15T10:30:00Z")),
            article("rfc2822", Some("Thu, 14 Mar 2024 12:00:00 GMT")),
        ];

        let ranked = rank(records, 10);
        let titles: Vec<_> = ranked.iter().map(|a| a.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["rfc3339", "rfc2822", "iso-date"]);
    }

    #[test]
    fn test_absent_and_empty_timestamps_excluded() {
        let records = vec![
            article("dated", Some("Fri, 15 Mar 2024 10:30:00 GMT")),
            article("absent", None),
            article("empty", Some("")),
        ];

        let ranked = rank(records, 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].title.as_deref(), Some("dated"));
    }

    #[test]
    fn test_unparsable_timestamp_excluded() {
        let records = vec![
            article("dated", Some("Fri, 15 Mar 2024 10:30:00 GMT")),
            article("garbage", Some("three days ago")),
        ];

        let ranked = rank(records, 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].title.as_deref(), Some("dated"));
    }

    #[test]
    fn test_truncates_to_limit() {
        let records: Vec<_> = (1..=15)
            .map(|day| {
                article(
                    &format!("day-{:02}", day),
                    Some(&format!("2024-03-{:02}T12:00:00Z", day)),
                )
            })
            .collect();

        let ranked = rank(records, 10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].title.as_deref(), Some("day-15"));
        assert_eq!(ranked[9].title.as_deref(), Some("day-06"));
    }

    #[test]
    fn test_short_input_returned_whole() {
        let records = vec![article("only", Some("2024-03-15T10:30:00Z"))];
        assert_eq!(rank(records, 10).len(), 1);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let records = vec![
            article("first", Some("2024-03-15")),
            article("second", Some("2024-03-15")),
            article("third", Some("2024-03-15")),
        ];

        let ranked = rank(records, 10);
        let titles: Vec<_> = ranked.iter().map(|a| a.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(Vec::new(), 10).is_empty());
    }
}

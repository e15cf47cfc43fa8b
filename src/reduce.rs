use crate::models::{Attempt, FailureRecord};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Collapse one source's attempts to at most one failure record per problem.
///
/// A problem with any passing attempt contributes nothing; otherwise its most
/// recent attempt is kept. A missing timestamp counts as the oldest possible,
/// and on an exact tie the first-seen attempt wins.
pub fn reduce_attempts(attempts: Vec<Attempt>) -> Vec<FailureRecord> {
    struct Group {
        passed: bool,
        latest: Attempt,
    }

    let mut groups: BTreeMap<String, Group> = BTreeMap::new();
    for attempt in attempts {
        match groups.get_mut(&attempt.problem_id) {
            Some(group) => {
                group.passed |= attempt.passed;
                if timestamp_key(attempt.timestamp) > timestamp_key(group.latest.timestamp) {
                    group.latest = attempt;
                }
            }
            None => {
                groups.insert(
                    attempt.problem_id.clone(),
                    Group {
                        passed: attempt.passed,
                        latest: attempt,
                    },
                );
            }
        }
    }

    groups
        .into_values()
        .filter(|group| !group.passed)
        .map(|group| FailureRecord::from(group.latest))
        .collect()
}

/// Merge per-source reductions: newest first, missing timestamps last,
/// truncated to `limit`.
pub fn merge_failures(sources: Vec<Vec<FailureRecord>>, limit: usize) -> Vec<FailureRecord> {
    let mut merged: Vec<FailureRecord> = sources.into_iter().flatten().collect();
    merged.sort_by_key(|record| Reverse(timestamp_key(record.timestamp)));
    merged.truncate(limit);
    merged
}

fn timestamp_key(timestamp: Option<i64>) -> i64 {
    timestamp.unwrap_or(i64::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(problem_id: &str, passed: bool, timestamp: Option<i64>) -> Attempt {
        Attempt {
            problem_id: problem_id.to_string(),
            problem_name: format!("problem {problem_id}"),
            passed,
            timestamp,
            status_text: if passed { "Accepted" } else { "Wrong Answer" }.to_string(),
            url: format!("http://cplusoj.com/p/{problem_id}"),
            submit_time_label: "2026-01-01 12:00:00".to_string(),
        }
    }

    #[test]
    fn reduce_empty_is_empty() {
        assert!(reduce_attempts(Vec::new()).is_empty());
    }

    #[test]
    fn passed_problem_contributes_nothing() {
        let attempts = vec![
            attempt("P1", false, Some(100)),
            attempt("P1", true, Some(50)),
            attempt("P2", false, Some(70)),
        ];
        let reduced = reduce_attempts(attempts);
        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].problem_id, "P2");
    }

    #[test]
    fn keeps_the_most_recent_failing_attempt() {
        let attempts = vec![
            attempt("P1", false, Some(100)),
            attempt("P1", false, Some(300)),
            attempt("P1", false, Some(200)),
        ];
        let reduced = reduce_attempts(attempts);
        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].timestamp, Some(300));
    }

    #[test]
    fn one_record_per_problem() {
        let attempts = vec![
            attempt("P1", false, Some(1)),
            attempt("P1", false, Some(2)),
            attempt("P2", false, Some(3)),
            attempt("P2", false, Some(4)),
        ];
        let reduced = reduce_attempts(attempts);
        let mut ids: Vec<&str> = reduced.iter().map(|r| r.problem_id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["P1", "P2"]);
    }

    #[test]
    fn missing_timestamp_is_oldest() {
        let attempts = vec![attempt("P1", false, None), attempt("P1", false, Some(10))];
        let reduced = reduce_attempts(attempts);
        assert_eq!(reduced[0].timestamp, Some(10));

        let attempts = vec![attempt("P2", false, Some(10)), attempt("P2", false, None)];
        let reduced = reduce_attempts(attempts);
        assert_eq!(reduced[0].timestamp, Some(10));
    }

    #[test]
    fn tie_keeps_first_seen() {
        let mut first = attempt("P1", false, Some(10));
        first.status_text = "Time Limit Exceeded".to_string();
        let attempts = vec![first, attempt("P1", false, Some(10))];
        let reduced = reduce_attempts(attempts);
        assert_eq!(reduced[0].status_text, "Time Limit Exceeded");
    }

    #[test]
    fn merge_sorts_newest_first_and_truncates() {
        let sources = vec![
            vec![
                attempt("P1", false, Some(100)).into(),
                attempt("P2", false, None).into(),
            ],
            vec![
                attempt("P3", false, Some(300)).into(),
                attempt("P4", false, Some(200)).into(),
            ],
        ];
        let merged = merge_failures(sources, 3);
        let ids: Vec<&str> = merged.iter().map(|r| r.problem_id.as_str()).collect();
        assert_eq!(ids, vec!["P3", "P4", "P1"]);
    }

    #[test]
    fn merge_of_nothing_is_empty() {
        assert!(merge_failures(Vec::new(), 5).is_empty());
        assert!(merge_failures(vec![Vec::new(), Vec::new()], 5).is_empty());
    }
}

//! Tolerant extraction of judge pages into plain records.
//!
//! The judge renders server-side HTML; the pieces we need sit in a handful
//! of stable class names (`col--problem-name`, `col--status__text`,
//! `record-status--icon`, `col--correction`). Scanning for those with
//! regexes keeps the extraction resilient to attribute order and markup
//! noise without pulling in a DOM library. Malformed rows are skipped,
//! never fatal.

use crate::models::{Attempt, ProblemDot};
use chrono::{Local, NaiveDateTime, TimeZone};
use regex::Regex;

/// Parse the submission rows of a record page into attempts, in document
/// order. Rows missing a problem link or status cell are dropped.
pub fn parse_record_rows(html: &str) -> Vec<Attempt> {
    let row_start = Regex::new(r"<tr[^>]*\bdata-rid").unwrap();
    let problem_link = Regex::new(
        r#"(?s)<td[^>]*class="[^"]*col--problem-name[^"]*"[^>]*>.*?<a[^>]*href="([^"]+)"[^>]*>(.*?)</a>"#,
    )
    .unwrap();
    let problem_id = Regex::new(r"(?s)<b>([^<]+)</b>").unwrap();
    let status_block =
        Regex::new(r#"(?s)<span[^>]*class="[^"]*col--status__text[^"]*"[^>]*>(.*?)</td>"#).unwrap();
    let status_icon = Regex::new(r#"class="([^"]*record-status--icon[^"]*)""#).unwrap();
    let time_span =
        Regex::new(r#"(?s)<span([^>]*class="[^"]*\btime\b[^"]*"[^>]*)>(.*?)</span>"#).unwrap();
    let attr_timestamp = Regex::new(r#"data-timestamp="(\d+)""#).unwrap();
    let attr_tooltip = Regex::new(r#"data-tooltip="([^"]*)""#).unwrap();

    let starts: Vec<usize> = row_start.find_iter(html).map(|m| m.start()).collect();
    let mut attempts = Vec::new();

    for (index, &start) in starts.iter().enumerate() {
        let end = starts.get(index + 1).copied().unwrap_or(html.len());
        let row = &html[start..end];

        let Some(link) = problem_link.captures(row) else {
            continue;
        };
        let Some(id) = problem_id.captures(&link[2]) else {
            continue;
        };
        let Some(status) = status_block.captures(row) else {
            continue;
        };

        let problem_id_text = id[1].trim().to_string();
        let anchor_inner = link[2].replacen(&id[0], "", 1);
        let status_text = clean_text(&status[1]);
        let icon_passed = status_icon.captures_iter(row).any(|icon| {
            icon[1].split_whitespace().any(|class| class == "pass")
        });

        let mut timestamp = None;
        let mut submit_time_label = String::new();
        if let Some(time) = time_span.captures(row) {
            submit_time_label = attr_tooltip
                .captures(&time[1])
                .map(|c| c[1].trim().to_string())
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| clean_text(&time[2]));
            timestamp = attr_timestamp
                .captures(&time[1])
                .and_then(|c| c[1].parse::<i64>().ok())
                .map(|seconds| seconds * 1000)
                .or_else(|| parse_label_timestamp(&submit_time_label));
        }
        if submit_time_label.is_empty() {
            submit_time_label = "unknown".to_string();
        }

        attempts.push(Attempt {
            passed: icon_passed && status_text.contains("Accepted"),
            problem_id: problem_id_text,
            problem_name: clean_text(&anchor_inner),
            timestamp,
            status_text,
            url: link[1].to_string(),
            submit_time_label,
        });
    }

    attempts
}

/// Parse the correction-status cells of a contest problems page into dots,
/// in document order.
pub fn parse_contest_dots(html: &str) -> Vec<ProblemDot> {
    let td_block = Regex::new(r#"(?s)<td[^>]*class="([^"]*)"[^>]*>(.*?)</td>"#).unwrap();
    let text_block =
        Regex::new(r#"(?s)<span[^>]*class="[^"]*record-status--text[^"]*"[^>]*>(.*)"#).unwrap();
    let span_text = Regex::new(r"(?s)<span[^>]*>([^<]*)</span>").unwrap();

    let mut dots = Vec::new();
    for cell in td_block.captures_iter(html) {
        let classes: Vec<&str> = cell[1].split_whitespace().collect();
        if !classes.contains(&"col--status") || !classes.contains(&"col--correction") {
            continue;
        }

        let body = cell.get(2).map(|m| m.as_str()).unwrap_or_default();
        let content = text_block
            .captures(body)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .unwrap_or(body);
        let text = clean_text(content);
        let score = span_text
            .captures_iter(content)
            .filter_map(|c| {
                let value = c[1].trim();
                (!value.is_empty()).then(|| value.to_string())
            })
            .next();
        let status = match &score {
            Some(score) => normalize_whitespace(&text.replacen(score.as_str(), "", 1)),
            None => text,
        };

        dots.push(ProblemDot {
            passed: classes.contains(&"pass"),
            score: score.unwrap_or_else(|| "0".to_string()),
            status,
        });
    }

    dots
}

fn parse_label_timestamp(label: &str) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(label, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(label, "%Y/%m/%d %H:%M:%S"))
        .ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|time| time.timestamp_millis())
}

fn clean_text(fragment: &str) -> String {
    let without_tags = Regex::new(r"<[^>]+>").unwrap().replace_all(fragment, " ");
    normalize_whitespace(&without_tags)
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

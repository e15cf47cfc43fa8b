use crate::errors::FetchError;
use crate::models::{Attempt, FailureRecord, ProblemDot, RemoteEvent};
use crate::parse;
use crate::reduce;
use reqwest::Client;
use tokio::sync::mpsc;
use tracing::warn;

/// Fetch the authoritative fixed-event list (a JSON array of
/// `{name, date, remark?}`). Transport and parse failures surface to the
/// caller; the countdown still renders custom events without them.
pub async fn fetch_fixed_events(client: &Client, url: &str) -> Result<Vec<RemoteEvent>, FetchError> {
    let response = client.get(url).send().await.map_err(FetchError::transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::bad_status(status));
    }
    let body = response.text().await.map_err(FetchError::transport)?;
    serde_json::from_str(&body).map_err(|err| FetchError::parse(format!("fixed event list: {err}")))
}

/// Fetch and parse one identity's submission history on one partition.
pub async fn fetch_attempts(
    client: &Client,
    domain: &str,
    user: &str,
) -> Result<Vec<Attempt>, FetchError> {
    let response = client
        .get(format!("{domain}/record"))
        .query(&[("uidOrName", user)])
        .send()
        .await
        .map_err(FetchError::transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::bad_status(status));
    }
    let body = response.text().await.map_err(FetchError::transport)?;
    Ok(parse::parse_record_rows(&body))
}

/// Fetch and parse the correction-status dots of one contest.
pub async fn fetch_contest_dots(client: &Client, link: &str) -> Result<Vec<ProblemDot>, FetchError> {
    let response = client
        .get(format!("{}/problems", link.trim_end_matches('/')))
        .send()
        .await
        .map_err(FetchError::transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::bad_status(status));
    }
    let body = response.text().await.map_err(FetchError::transport)?;
    Ok(parse::parse_contest_dots(&body))
}

/// Fan out one record fetch per (identity, partition) pair, reduce each
/// source independently, then merge newest-first and truncate to `limit`.
///
/// The aggregate joins on a count of completed pairs, not on an
/// all-or-nothing future: a failed pair logs a warning and contributes an
/// empty source, so it can never stall or poison the merge. Zero pairs
/// resolve immediately with no request issued.
pub async fn crawl_failures(
    client: &Client,
    domains: &[String],
    users: &[String],
    limit: usize,
) -> Vec<FailureRecord> {
    let pairs: Vec<(String, String)> = domains
        .iter()
        .flat_map(|domain| users.iter().map(move |user| (domain.clone(), user.clone())))
        .collect();
    let total = pairs.len();
    if total == 0 {
        return Vec::new();
    }

    let (tx, mut rx) = mpsc::channel::<Vec<FailureRecord>>(total);
    for (domain, user) in pairs {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let reduced = match fetch_attempts(&client, &domain, &user).await {
                Ok(attempts) => reduce::reduce_attempts(attempts),
                Err(err) => {
                    warn!("record fetch for {user} on {domain} failed: {err}");
                    Vec::new()
                }
            };
            let _ = tx.send(reduced).await;
        });
    }
    drop(tx);

    let mut sources = Vec::with_capacity(total);
    let mut finished = 0;
    while let Some(reduced) = rx.recv().await {
        sources.push(reduced);
        finished += 1;
        if finished == total {
            break;
        }
    }

    reduce::merge_failures(sources, limit)
}

use crate::countdown::{classify_date, merge_events};
use crate::errors::AppError;
use crate::fetch;
use crate::models::{
    AddEventRequest, ContestStatusEntry, ContestStatusRequest, ContestStatusResponse,
    CountdownEntry, CountdownResponse, Event, FailedQuery, FailureRecord, RemoteEvent,
    ResetResponse,
};
use crate::state::AppState;
use crate::storage::{persist_data, FAILED_CACHE_LIMIT};
use crate::ui::render_index;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;
use chrono::{Local, NaiveDate};
use std::collections::HashSet;
use tracing::warn;
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.config.domains.join(", ")))
}

pub async fn get_countdown(
    State(state): State<AppState>,
) -> Result<Json<CountdownResponse>, AppError> {
    let today = Local::now().date_naive();

    // A broken fixed-event source degrades the payload with a message;
    // custom events still render.
    let (fixed, fixed_error) = match state.config.events_url.as_deref() {
        Some(url) => match fetch::fetch_fixed_events(&state.client, url).await {
            Ok(remote) => (fixed_events(remote), None),
            Err(err) => {
                warn!("fixed event fetch failed: {err}");
                (Vec::new(), Some(err.to_string()))
            }
        },
        None => (Vec::new(), None),
    };

    let custom = state.data.lock().await.custom_events.clone();
    let events = merge_events(fixed, custom)
        .into_iter()
        .map(|event| {
            let countdown = classify_date(&event.date, today);
            CountdownEntry {
                id: event.id,
                name: event.name,
                date: event.date,
                remark: event.remark,
                is_fixed: event.is_fixed,
                days_remaining: countdown.days_remaining,
                is_past: countdown.is_past,
                tier: countdown.tier,
            }
        })
        .collect();

    Ok(Json(CountdownResponse { events, fixed_error }))
}

pub async fn add_event(
    State(state): State<AppState>,
    Json(payload): Json<AddEventRequest>,
) -> Result<Json<Vec<Event>>, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("event name must not be empty"));
    }
    let date = payload.date.trim();
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(AppError::bad_request("event date must be YYYY-MM-DD"));
    }

    let event = Event {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        date: date.to_string(),
        remark: payload
            .remark
            .map(|remark| remark.trim().to_string())
            .filter(|remark| !remark.is_empty()),
        is_fixed: false,
    };

    let mut data = state.data.lock().await;
    data.custom_events.push(event);
    persist_data(&state.config.data_path, &data).await?;
    Ok(Json(data.custom_events.clone()))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Event>>, AppError> {
    let mut data = state.data.lock().await;
    let position = data
        .custom_events
        .iter()
        .position(|event| event.id == id)
        .ok_or_else(|| AppError::not_found(format!("no custom event with id {id}")))?;
    data.custom_events.remove(position);
    persist_data(&state.config.data_path, &data).await?;
    Ok(Json(data.custom_events.clone()))
}

pub async fn get_failed(
    State(state): State<AppState>,
    Query(query): Query<FailedQuery>,
) -> Result<Json<Vec<FailureRecord>>, AppError> {
    let limit = query.limit.unwrap_or(5).clamp(1, FAILED_CACHE_LIMIT);
    let mut records = fetch::crawl_failures(
        &state.client,
        &state.config.domains,
        &state.config.users,
        FAILED_CACHE_LIMIT,
    )
    .await;

    {
        let mut data = state.data.lock().await;
        data.failed_cache = records.clone();
        persist_data(&state.config.data_path, &data).await?;
    }

    records.truncate(limit);
    Ok(Json(records))
}

pub async fn get_failed_cached(
    State(state): State<AppState>,
) -> Result<Json<Vec<FailureRecord>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(data.failed_cache.clone()))
}

pub async fn contests_status(
    State(state): State<AppState>,
    Json(payload): Json<ContestStatusRequest>,
) -> Json<ContestStatusResponse> {
    let mut contests = Vec::with_capacity(payload.links.len());
    let mut seen = HashSet::new();

    for link in payload.links {
        let link = link.trim().trim_end_matches('/').to_string();
        if link.is_empty() || !seen.insert(link.clone()) {
            continue;
        }

        if let Some(dots) = state.contest_cache.lock().await.get(&link).cloned() {
            contests.push(ContestStatusEntry {
                link,
                dots,
                error: None,
            });
            continue;
        }

        match fetch::fetch_contest_dots(&state.client, &link).await {
            Ok(dots) => {
                state
                    .contest_cache
                    .lock()
                    .await
                    .insert(link.clone(), dots.clone());
                contests.push(ContestStatusEntry {
                    link,
                    dots,
                    error: None,
                });
            }
            Err(err) => {
                warn!("contest status fetch for {link} failed: {err}");
                contests.push(ContestStatusEntry {
                    link,
                    dots: Vec::new(),
                    error: Some(err.to_string()),
                });
            }
        }
    }

    Json(ContestStatusResponse { contests })
}

pub async fn contests_reset(State(state): State<AppState>) -> Json<ResetResponse> {
    let mut cache = state.contest_cache.lock().await;
    let cleared = cache.len();
    cache.clear();
    Json(ResetResponse { cleared })
}

fn fixed_events(remote: Vec<RemoteEvent>) -> Vec<Event> {
    remote
        .into_iter()
        .enumerate()
        .map(|(index, event)| Event {
            id: format!("fixed-{index}"),
            name: event.name,
            date: event.date,
            remark: event.remark,
            is_fixed: true,
        })
        .collect()
}

use chrono::{Duration, Local};
use once_cell::sync::Lazy;
use oj_companion::models::{CountdownResponse, Event, FailureRecord};
use reqwest::Client;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tokio::time::sleep;

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "oj_companion_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + std::time::Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/failed/cached")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(std::time::Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    // No fixed-event source, no crawl identities: every endpoint must still
    // answer, degenerating to its empty shape.
    let child = Command::new(env!("CARGO_BIN_EXE_oj_companion"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("EVENTS_URL", "")
        .env("OJ_USERS", "")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn countdown(client: &Client, base_url: &str) -> CountdownResponse {
    client
        .get(format!("{base_url}/api/countdown"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_event_lifecycle_add_classify_delete() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let in_three_days = (Local::now().date_naive() + Duration::days(3)).to_string();
    let added: Vec<Event> = client
        .post(format!("{}/api/events", server.base_url))
        .json(&serde_json::json!({
            "name": "mock contest",
            "date": in_three_days,
            "remark": "bring snacks"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let event = added
        .iter()
        .find(|event| event.name == "mock contest")
        .expect("added event missing");
    assert!(!event.is_fixed);

    let payload = countdown(&client, &server.base_url).await;
    assert!(payload.fixed_error.is_none());
    let entry = payload
        .events
        .iter()
        .find(|entry| entry.id == event.id)
        .expect("countdown entry missing");
    assert_eq!(entry.days_remaining, 3);
    assert!(!entry.is_past);
    assert_eq!(serde_json::to_value(entry.tier).unwrap(), "urgent");
    assert_eq!(entry.remark.as_deref(), Some("bring snacks"));

    let response = client
        .delete(format!("{}/api/events/{}", server.base_url, event.id))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let payload = countdown(&client, &server.base_url).await;
    assert!(payload.events.iter().all(|entry| entry.id != event.id));
}

#[tokio::test]
async fn http_past_event_is_ended_and_clamped() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let yesterday = (Local::now().date_naive() - Duration::days(1)).to_string();
    let added: Vec<Event> = client
        .post(format!("{}/api/events", server.base_url))
        .json(&serde_json::json!({ "name": "yesterday", "date": yesterday }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let event = added.iter().find(|event| event.name == "yesterday").unwrap();

    let payload = countdown(&client, &server.base_url).await;
    let entry = payload
        .events
        .iter()
        .find(|entry| entry.id == event.id)
        .unwrap();
    assert_eq!(entry.days_remaining, 0);
    assert!(entry.is_past);
    assert_eq!(serde_json::to_value(entry.tier).unwrap(), "ended");

    client
        .delete(format!("{}/api/events/{}", server.base_url, event.id))
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn http_add_event_rejects_bad_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/events", server.base_url))
        .json(&serde_json::json!({ "name": "bad date", "date": "03/15/2026" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = client
        .post(format!("{}/api/events", server.base_url))
        .json(&serde_json::json!({ "name": "  ", "date": "2026-03-15" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn http_delete_unknown_event_is_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/api/events/no-such-id", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn http_failed_crawl_without_identities_is_empty() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let records: Vec<FailureRecord> = client
        .get(format!("{}/api/failed", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(records.is_empty());

    let cached: Vec<FailureRecord> = client
        .get(format!("{}/api/failed/cached", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(cached.is_empty());
}

#[tokio::test]
async fn http_contest_status_with_no_links_and_reset() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/contests/status", server.base_url))
        .json(&serde_json::json!({ "links": [] }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["contests"].as_array().unwrap().len(), 0);

    let response = client
        .post(format!("{}/api/contests/reset", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn http_index_serves_dashboard() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body = client
        .get(&server.base_url)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("OJ Companion"));
    assert!(body.contains("countdown-list"));
}

//! Integration tests for the todo list HTTP surface.
//!
//! Every test drives the full router (session middleware included) with
//! `oneshot` requests, carrying the session cookie between requests the way
//! a browser would.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use session_todos::adapters::http::{
    build_router, CookieSigner, SessionCookie, SessionState, TodoHandlers,
};
use session_todos::adapters::{InMemorySessionStore, TitleRules};
use session_todos::domain::foundation::SessionId;
use session_todos::ports::{SessionRecord, SessionStore, SessionStoreError};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with_store(store: Arc<dyn SessionStore>, seed: bool) -> Router {
    let cookie = SessionCookie {
        name: "todos-session-id".to_string(),
        max_age: Duration::from_secs(3600),
        secure: false,
    };
    let signer = CookieSigner::new(SecretString::new("integration-secret".to_string()));
    let sessions = SessionState::new(store, signer, cookie).with_demo_data(seed);

    build_router(
        TodoHandlers::new(Arc::new(TitleRules::new())),
        sessions,
        Duration::from_secs(5),
    )
}

fn app() -> Router {
    app_with_store(Arc::new(InMemorySessionStore::new()), false)
}

struct Reply {
    status: StatusCode,
    location: Option<String>,
    body: Value,
}

/// A browser stand-in that remembers its session cookie.
struct Browser {
    app: Router,
    cookie: Option<String>,
}

impl Browser {
    fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    async fn get(&mut self, uri: &str) -> Reply {
        self.send("GET", uri, None).await
    }

    async fn post(&mut self, uri: &str) -> Reply {
        self.post_json(uri, json!({})).await
    }

    async fn post_title(&mut self, uri: &str, title: &str) -> Reply {
        self.post_json(uri, json!({ "title": title })).await
    }

    async fn post_json(&mut self, uri: &str, body: Value) -> Reply {
        self.post_raw(uri, "application/json", &body.to_string()).await
    }

    async fn post_raw(&mut self, uri: &str, content_type: &str, body: &str) -> Reply {
        self.send("POST", uri, Some((content_type, body.to_string()))).await
    }

    async fn send(&mut self, method: &str, uri: &str, body: Option<(&str, String)>) -> Reply {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some((content_type, body)) => builder
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        Reply {
            status,
            location,
            body,
        }
    }
}

fn titles(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect()
}

fn flash_messages(body: &Value) -> Vec<String> {
    body["flash"]
        .as_array()
        .unwrap()
        .iter()
        .map(|flash| flash["message"].as_str().unwrap().to_string())
        .collect()
}

/// Store whose backend is always down.
struct UnavailableStore;

#[async_trait]
impl SessionStore for UnavailableStore {
    async fn load(&self, _id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("down".to_string()))
    }

    async fn save(
        &self,
        _id: &SessionId,
        _record: &SessionRecord,
        _ttl: Duration,
    ) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("down".to_string()))
    }
}

// =============================================================================
// Lists
// =============================================================================

#[tokio::test]
async fn root_redirects_to_lists() {
    let mut browser = Browser::new(app());
    let reply = browser.get("/").await;

    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some("/lists"));
}

#[tokio::test]
async fn new_session_has_no_lists() {
    let mut browser = Browser::new(app());
    let reply = browser.get("/lists").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!({ "todo_lists": [], "flash": [] }));
    assert!(browser.cookie.is_some());
}

#[tokio::test]
async fn created_list_is_trimmed_listed_and_flashed_once() {
    let mut browser = Browser::new(app());

    let reply = browser.post_title("/lists", "  Work Todos  ").await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some("/lists"));

    let reply = browser.get("/lists").await;
    assert_eq!(titles(&reply.body["todo_lists"]), vec!["Work Todos"]);
    assert_eq!(reply.body["todo_lists"][0]["id"], 1);
    assert_eq!(
        flash_messages(&reply.body),
        vec!["The todo list has been created."]
    );

    let reply = browser.get("/lists").await;
    assert!(flash_messages(&reply.body).is_empty());
}

#[tokio::test]
async fn invalid_list_titles_are_rejected_without_mutation() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "Work").await;

    let reply = browser.post_title("/lists", "Work").await;
    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(reply.body["code"], "VALIDATION_FAILED");
    assert_eq!(reply.body["errors"], json!(["List title must be unique."]));
    assert_eq!(reply.body["title"], "Work");

    let reply = browser.post_title("/lists", "   ").await;
    assert_eq!(reply.body["errors"], json!(["The list title is required."]));

    let reply = browser.post_title("/lists", &"x".repeat(101)).await;
    assert_eq!(
        reply.body["errors"],
        json!(["List title must be between 1 and 100 characters."])
    );

    let reply = browser.get("/lists").await;
    assert_eq!(titles(&reply.body["todo_lists"]), vec!["Work"]);
    assert_eq!(
        flash_messages(&reply.body),
        vec!["The todo list has been created."]
    );
}

#[tokio::test]
async fn urlencoded_form_creates_list() {
    let mut browser = Browser::new(app());

    let reply = browser
        .post_raw("/lists", "application/x-www-form-urlencoded", "title=Work")
        .await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);

    let reply = browser.get("/lists").await;
    assert_eq!(titles(&reply.body["todo_lists"]), vec!["Work"]);
}

#[tokio::test]
async fn unreadable_bodies_get_json_errors_and_change_nothing() {
    let mut browser = Browser::new(app());

    let reply = browser.post_raw("/lists", "text/plain", "title=Work").await;
    assert_eq!(reply.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(reply.body["code"], "INVALID_REQUEST");

    let reply = browser.post_raw("/lists", "application/json", "{not json").await;
    assert!(reply.status.is_client_error());
    assert_eq!(reply.body["code"], "INVALID_REQUEST");

    let reply = browser.get("/lists").await;
    assert!(titles(&reply.body["todo_lists"]).is_empty());
}

#[tokio::test]
async fn rename_list_updates_title_and_redirects_to_list() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "Work").await;

    let reply = browser.post_title("/lists/1/edit", "Office").await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some("/lists/1"));

    let reply = browser.get("/lists/1").await;
    assert_eq!(reply.body["todo_list"]["title"], "Office");
    assert!(flash_messages(&reply.body).contains(&"Todo list updated.".to_string()));
}

#[tokio::test]
async fn rename_to_current_title_is_not_unique() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "Work").await;

    let reply = browser.post_title("/lists/1/edit", "Work").await;
    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(reply.body["errors"], json!(["List title must be unique."]));
}

#[tokio::test]
async fn deleted_list_is_gone_and_its_id_is_not_reused() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "One").await;
    browser.post_title("/lists", "Two").await;

    let reply = browser.post("/lists/2/destroy").await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some("/lists"));
    assert_eq!(browser.get("/lists/2").await.status, StatusCode::NOT_FOUND);

    browser.post_title("/lists", "Three").await;
    let reply = browser.get("/lists").await;
    let ids: Vec<_> = reply.body["todo_lists"]
        .as_array()
        .unwrap()
        .iter()
        .map(|list| list["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(flash_messages(&reply.body).contains(&"Todo list deleted.".to_string()));
}

#[tokio::test]
async fn unknown_or_malformed_list_ids_are_not_found() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "Work").await;

    for uri in ["/lists/2", "/lists/abc", "/lists/-1", "/lists/99999999999"] {
        let reply = browser.get(uri).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(
            reply.body,
            json!({ "code": "NOT_FOUND", "message": "Not found." })
        );
    }

    assert_eq!(browser.post("/lists/7/complete_all").await.status, StatusCode::NOT_FOUND);
    assert_eq!(browser.post_title("/lists/7/todos", "x").await.status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Todos
// =============================================================================

#[tokio::test]
async fn todos_are_shown_undone_first_then_by_title() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "Work Todos").await;
    browser.post_title("/lists/1/todos", "Get coffee").await;
    browser.post_title("/lists/1/todos", "Chat with co-workers").await;
    browser.post_title("/lists/1/todos", "Duck out of meeting").await;

    let reply = browser.post("/lists/1/todos/1/toggle").await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some("/lists/1"));
    browser.post("/lists/1/todos/2/toggle").await;

    let reply = browser.get("/lists/1").await;
    assert_eq!(
        titles(&reply.body["todos"]),
        vec!["Duck out of meeting", "Chat with co-workers", "Get coffee"]
    );
    assert_eq!(reply.body["todo_list"]["is_done"], false);
    assert!(flash_messages(&reply.body).contains(&"Get coffee marked done.".to_string()));
}

#[tokio::test]
async fn toggling_twice_marks_not_done() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "Work").await;
    browser.post_title("/lists/1/todos", "Get coffee").await;

    browser.post("/lists/1/todos/1/toggle").await;
    let reply = browser.get("/lists/1").await;
    assert_eq!(reply.body["todos"][0]["done"], true);
    assert_eq!(reply.body["todo_list"]["is_done"], true);

    browser.post("/lists/1/todos/1/toggle").await;
    let reply = browser.get("/lists/1").await;
    assert_eq!(reply.body["todos"][0]["done"], false);
    assert_eq!(
        flash_messages(&reply.body),
        vec!["Get coffee marked as NOT done."]
    );
}

#[tokio::test]
async fn invalid_todo_title_is_rejected() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "Work").await;

    let reply = browser.post_title("/lists/1/todos", "").await;
    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(reply.body["errors"], json!(["The todo title is required."]));

    let reply = browser.get("/lists/1").await;
    assert_eq!(reply.body["todos"], json!([]));
}

#[tokio::test]
async fn duplicate_todo_titles_are_allowed() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "Work").await;
    browser.post_title("/lists/1/todos", "Get coffee").await;

    let reply = browser.post_title("/lists/1/todos", "Get coffee").await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);

    let reply = browser.get("/lists/1").await;
    assert_eq!(titles(&reply.body["todos"]).len(), 2);
}

#[tokio::test]
async fn deleting_a_todo_removes_only_that_todo() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "Work").await;
    browser.post_title("/lists/1/todos", "one").await;
    browser.post_title("/lists/1/todos", "two").await;

    let reply = browser.post("/lists/1/todos/1/destroy").await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);

    let reply = browser.get("/lists/1").await;
    assert_eq!(titles(&reply.body["todos"]), vec!["two"]);
    assert!(flash_messages(&reply.body).contains(&"The todo has been deleted.".to_string()));

    let reply = browser.post("/lists/1/todos/1/destroy").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn complete_all_moves_list_after_unfinished_lists() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "Alpha").await;
    browser.post_title("/lists", "Beta").await;
    browser.post_title("/lists/1/todos", "task").await;

    let reply = browser.post("/lists/1/complete_all").await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some("/lists/1"));

    let reply = browser.get("/lists").await;
    assert_eq!(titles(&reply.body["todo_lists"]), vec!["Beta", "Alpha"]);
    assert_eq!(reply.body["todo_lists"][1]["is_done"], true);
    assert!(flash_messages(&reply.body)
        .contains(&"All todos have been marked as done.".to_string()));
}

#[tokio::test]
async fn complete_all_on_empty_list_leaves_it_not_done() {
    let mut browser = Browser::new(app());
    browser.post_title("/lists", "Empty").await;

    browser.post("/lists/1/complete_all").await;

    let reply = browser.get("/lists/1").await;
    assert_eq!(reply.body["todo_list"]["is_done"], false);
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn sessions_are_isolated_between_browsers() {
    let app = app();
    let mut alice = Browser::new(app.clone());
    let mut bob = Browser::new(app);

    alice.post_title("/lists", "Alice's list").await;

    let reply = bob.get("/lists").await;
    assert_eq!(reply.body["todo_lists"], json!([]));

    let reply = alice.get("/lists").await;
    assert_eq!(titles(&reply.body["todo_lists"]), vec!["Alice's list"]);
}

#[tokio::test]
async fn seeded_sessions_show_demo_lists_in_sorted_order() {
    let mut browser = Browser::new(app_with_store(Arc::new(InMemorySessionStore::new()), true));

    let reply = browser.get("/lists").await;
    assert_eq!(
        titles(&reply.body["todo_lists"]),
        vec!["Additional Todos", "social todos", "Work Todos", "Home Todos"]
    );

    let reply = browser.get("/lists/1").await;
    assert_eq!(
        titles(&reply.body["todos"]),
        vec!["Duck out of meeting", "Chat with co-workers", "Get coffee"]
    );
}

#[tokio::test]
async fn unavailable_store_is_a_server_error() {
    let mut browser = Browser::new(app_with_store(Arc::new(UnavailableStore), false));

    let reply = browser.get("/lists").await;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.body["code"], "SESSION_STORE_ERROR");
}

//! HttpCmsClient against an in-process CMS stub

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Form, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use skyadmin_api::{CmsApi, ClientConfig, ContentForm, HttpCmsClient};
use skyadmin_core::{ContentMode, Error, ListQuery};

const SESSION_COOKIE: &str = "SESSION=abc123";

#[derive(Default)]
struct Recorded {
    forms: Mutex<Vec<(String, HashMap<String, String>)>>,
}

type Shared = Arc<Recorded>;

fn logged_in(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|c| c.contains(SESSION_COOKIE))
}

async fn auth(headers: HeaderMap) -> String {
    logged_in(&headers).to_string()
}

async fn login_post(Form(form): Form<HashMap<String, String>>) -> impl IntoResponse {
    if form.get("password").map(String::as_str) == Some("secret") {
        (
            [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/"))],
            Redirect::to("/"),
        )
            .into_response()
    } else {
        Redirect::to("/login?loginError=%E8%AA%8D%E8%A8%BC%E3%82%A8%E3%83%A9%E3%83%BC").into_response()
    }
}

async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, "SESSION=; Path=/; Max-Age=0".to_string())],
        Redirect::to("/login"),
    )
}

async fn get_session(
    headers: HeaderMap,
    Query(q): Query<HashMap<String, String>>,
) -> String {
    if !logged_in(&headers) {
        return String::new();
    }
    match q.get("attribute").map(String::as_str) {
        Some("name") => "admin\n".to_string(),
        Some("admin") => "1".to_string(),
        _ => String::new(),
    }
}

async fn get_list(Query(q): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "loginName": "admin",
        "screenName": format!("{}|{}|{}", q["mode"], q["sort"], q["page"]),
        "registerMessage": "",
        "sortOutput": "<option value=\"id\" selected>ID</option>",
        "pagerOutput": "",
        "results": [{"id": "1", "title": "Top", "url": "index"}]
    }))
}

async fn get_content() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "screenName": "Template",
        "title": "Base",
        "eleResults": [{"content": "1"}, {"id": "5", "title": "Header", "code": "#000"}],
        "publishflgKeep": "1"
    }))
}

async fn url_matches(Query(q): Query<HashMap<String, String>>) -> String {
    (q.get("url").map(String::as_str) == Some("taken") && q["myId"] != "9").to_string()
}

async fn record_post(
    State(state): State<Shared>,
    Form(form): Form<HashMap<String, String>>,
) -> Redirect {
    if let Ok(mut forms) = state.forms.lock() {
        forms.push(("post".to_string(), form));
    }
    Redirect::to("/")
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn spawn_cms() -> (HttpCmsClient, Shared) {
    let state: Shared = Arc::default();
    let api = Router::new()
        .route("/auth", get(auth))
        .route("/login_post", post(login_post))
        .route("/logout", get(logout))
        .route("/get-session", get(get_session))
        .route("/getlist", get(get_list))
        .route("/getcontent", get(get_content))
        .route("/urlmatches", get(url_matches))
        .route("/update_post", post(record_post))
        .route("/setting_post", post(record_post))
        .route("/getuser", get(broken))
        .with_state(state.clone());
    let app = Router::new().nest("/webadmin", api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = HttpCmsClient::new(&ClientConfig {
        base_url: format!("http://{addr}/webadmin"),
        timeout: Some(std::time::Duration::from_secs(5)),
    })
    .unwrap();
    (client, state)
}

#[tokio::test]
async fn test_login_rejected_reason_is_decoded() {
    let (client, _) = spawn_cms().await;
    let err = client.login("admin", "wrong").await.unwrap_err();
    match err {
        Error::LoginRejected { reason } => assert_eq!(reason, "認証エラー"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!client.check_auth().await.unwrap());
}

#[tokio::test]
async fn test_login_session_and_logout() {
    let (client, _) = spawn_cms().await;
    assert!(!client.check_auth().await.unwrap());

    client.login("admin", "secret").await.unwrap();
    assert!(client.check_auth().await.unwrap());
    assert_eq!(client.session_attribute("name").await.unwrap(), "admin");
    assert_eq!(client.session_attribute("admin").await.unwrap(), "1");

    client.logout().await.unwrap();
    assert!(!client.check_auth().await.unwrap());
}

#[tokio::test]
async fn test_get_list_sends_query() {
    let (client, _) = spawn_cms().await;
    let query = ListQuery::new(ContentMode::Element)
        .with_sort("title desc")
        .with_page(2);
    let page = client.get_list(&query).await.unwrap();
    assert_eq!(page.screen_name, "element|title desc|2");
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].title, "Top");
}

#[tokio::test]
async fn test_get_content_with_sentinel() {
    let (client, _) = spawn_cms().await;
    let detail = client.get_content(ContentMode::Template, "3").await.unwrap();
    assert_eq!(detail.ele_results.len(), 2);
    assert!(detail.ele_results[0].is_content());
    assert!(detail.is_published());
}

#[tokio::test]
async fn test_url_matches_excludes_own_id() {
    let (client, _) = spawn_cms().await;
    assert!(client.url_matches("taken", "").await.unwrap());
    assert!(!client.url_matches("taken", "9").await.unwrap());
    assert!(!client.url_matches("free", "").await.unwrap());
}

#[tokio::test]
async fn test_save_content_posts_form_fields() {
    let (client, state) = spawn_cms().await;
    let form = ContentForm {
        mode: ContentMode::Template,
        title: "Base".into(),
        content: "###content###,###element(5)###".into(),
        published: true,
        ..Default::default()
    };
    client.save_content(&form).await.unwrap();
    client.save_settings("header=#000000*").await.unwrap();

    let forms = state.forms.lock().unwrap();
    assert_eq!(forms.len(), 2);
    let saved = &forms[0].1;
    assert_eq!(saved["type"], "template");
    assert_eq!(saved["content"], "###content###,###element(5)###");
    assert_eq!(saved["published"], "1");
    assert_eq!(saved["id"], "");
    assert_eq!(forms[1].1["elements-color-value"], "header=#000000*");
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let (client, _) = spawn_cms().await;
    let err = client.get_user("1").await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    assert!(err.is_recoverable());
}

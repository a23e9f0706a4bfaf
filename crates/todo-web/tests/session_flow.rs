//! End-to-end flows through the router with real session cookies.

use axum::http::{
    header::{COOKIE, LOCATION, SET_COOKIE},
    HeaderValue, StatusCode,
};
use axum_test::TestServer;
use todo_web::{create_router, AppState, SessionId, WebConfig};

struct Browser {
    server: TestServer,
    state: AppState,
    cookie: HeaderValue,
}

impl Browser {
    async fn open(state: AppState) -> Self {
        let server = TestServer::new(create_router(state.clone())).unwrap();
        let response = server.get("/lists").await;
        let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
        let pair = set_cookie.split(';').next().unwrap().to_string();
        Self {
            server,
            state,
            cookie: HeaderValue::from_str(&pair).unwrap(),
        }
    }

    fn session_id(&self) -> SessionId {
        let pair = self.cookie.to_str().unwrap();
        let (_, id) = pair.split_once('=').unwrap();
        SessionId::from_string(id)
    }

    async fn get(&self, path: &str) -> axum_test::TestResponse {
        self.server
            .get(path)
            .add_header(COOKIE, self.cookie.clone())
            .await
    }

    async fn post(&self, path: &str, form: &[(&str, &str)]) -> axum_test::TestResponse {
        self.server
            .post(path)
            .add_header(COOKIE, self.cookie.clone())
            .form(&form)
            .await
    }
}

#[tokio::test]
async fn test_list_and_todo_lifecycle() {
    let browser = Browser::open(AppState::new(WebConfig::default())).await;

    let response = browser.post("/lists", &[("list_name", "Work")]).await;
    response.assert_status(StatusCode::SEE_OTHER);

    let response = browser.post("/lists/0/todos", &[("todo", " Buy milk ")]).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/lists/0");

    let data = browser.state.sessions.snapshot(&browser.session_id()).await.unwrap();
    let list = &data.lists.lists()[0];
    assert_eq!(list.name, "Work");
    assert_eq!(list.todos.len(), 1);
    assert_eq!(list.todos[0].name, "Buy milk");
    assert!(!list.todos[0].completed);

    browser
        .post("/lists/0/todos/0", &[("completed", "true")])
        .await
        .assert_status(StatusCode::SEE_OTHER);
    let page = browser.get("/lists/0").await;
    page.assert_status_ok();
    let html = page.text();
    assert!(html.contains("The todo has been updated."));
    assert!(html.contains("<section id=\"todos\" class=\"complete\">"));

    browser
        .post("/lists/0/todos/0/destroy", &[])
        .await
        .assert_status(StatusCode::SEE_OTHER);
    let data = browser.state.sessions.snapshot(&browser.session_id()).await.unwrap();
    assert!(data.lists.lists()[0].todos.is_empty());
    assert!(!data.lists.lists()[0].is_complete());
}

#[tokio::test]
async fn test_deleting_a_list_shifts_later_lists() {
    let browser = Browser::open(AppState::new(WebConfig::default())).await;

    browser.post("/lists", &[("list_name", "A")]).await;
    browser.post("/lists", &[("list_name", "B")]).await;

    let response = browser.post("/lists/0/destroy", &[]).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/lists");

    let page = browser.get("/lists/0").await;
    page.assert_status_ok();
    assert!(page.text().contains("<h2>B</h2>"));

    browser.get("/lists/1").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rename_and_complete_all() {
    let browser = Browser::open(AppState::new(WebConfig::default())).await;

    browser.post("/lists", &[("list_name", "Work")]).await;
    browser.post("/lists/0/todos", &[("todo", "a")]).await;
    browser.post("/lists/0/todos", &[("todo", "b")]).await;

    let response = browser.post("/lists/0", &[("list_name", "Home")]).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/lists/0");

    let response = browser.post("/lists/0", &[("list_name", "Home")]).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("The list name must be unique."));

    browser
        .post("/lists/0/complete_all", &[])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let page = browser.get("/lists").await;
    let html = page.text();
    assert!(html.contains("<li class=\"complete\"><a href=\"/lists/0\"><h3>Home</h3><p>0 / 2</p>"));
}

#[tokio::test]
async fn test_invalid_todo_keeps_input() {
    let browser = Browser::open(AppState::new(WebConfig::default())).await;
    browser.post("/lists", &[("list_name", "Work")]).await;

    let long = "x".repeat(101);
    let response = browser.post("/lists/0/todos", &[("todo", long.as_str())]).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let html = response.text();
    assert!(html.contains("The todo name must be between 1 and 100 characters."));
    assert!(html.contains(&format!("value=\"{}\"", long)));
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let state = AppState::new(WebConfig::default());
    let first = Browser::open(state.clone()).await;
    let second = Browser::open(state).await;

    first.post("/lists", &[("list_name", "Private")]).await;

    assert!(first.get("/lists").await.text().contains("Private"));
    let second_page = second.get("/lists").await.text();
    assert!(!second_page.contains("Private"));
    assert!(second_page.contains("You have no lists yet."));
}

#[tokio::test]
async fn test_out_of_range_todo_is_not_found() {
    let browser = Browser::open(AppState::new(WebConfig::default())).await;
    browser.post("/lists", &[("list_name", "Work")]).await;

    browser
        .post("/lists/0/todos/0", &[("completed", "true")])
        .await
        .assert_status(StatusCode::NOT_FOUND);
    browser
        .post("/lists/9/complete_all", &[])
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

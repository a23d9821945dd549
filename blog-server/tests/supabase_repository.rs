use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use blog_server::data::{PostRepository, SupabasePostRepository};
use blog_server::domain::{DomainError, NewPost};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const API_KEY: &str = "anon-key";

/// One request as the fake REST endpoint saw it.
#[derive(Debug, Clone)]
struct Seen {
    method: String,
    query: HashMap<String, String>,
    apikey: Option<String>,
    authorization: Option<String>,
    prefer: Option<String>,
    body: Option<Value>,
}

#[derive(Default)]
struct FakeRestApi {
    seen: Mutex<Vec<Seen>>,
    reject_with: Option<(u16, Value)>,
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn posts_endpoint(
    req: HttpRequest,
    body: web::Bytes,
    api: web::Data<Arc<FakeRestApi>>,
) -> HttpResponse {
    let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default();

    api.seen.lock().unwrap().push(Seen {
        method: req.method().to_string(),
        query,
        apikey: header(&req, "apikey"),
        authorization: header(&req, "authorization"),
        prefer: header(&req, "prefer"),
        body: serde_json::from_slice(&body).ok(),
    });

    if let Some((status, body)) = &api.reject_with {
        let status = actix_web::http::StatusCode::from_u16(*status).unwrap();
        return HttpResponse::build(status).json(body);
    }

    // Timestamps in the format the hosted API returns, with microseconds
    if req.method() == actix_web::http::Method::POST {
        HttpResponse::Created().json(json!([
            { "id": 3, "title": "A", "content": "B", "created_at": "2024-05-01T10:00:02.654321+00:00" }
        ]))
    } else {
        HttpResponse::Ok().json(json!([
            { "id": 2, "title": "second", "content": null, "created_at": "2024-05-01T10:00:01.123456+00:00" },
            { "id": 1, "title": null, "content": "first", "created_at": "2024-05-01T10:00:00+00:00" }
        ]))
    }
}

fn spawn_fake_api(api: Arc<FakeRestApi>) -> String {
    let data = web::Data::new(api);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/rest/v1/posts", web::route().to(posts_endpoint))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind fake rest api");

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());

    format!("http://{}/", addr)
}

fn repository(base_url: &str) -> SupabasePostRepository {
    SupabasePostRepository::new(reqwest::Client::new(), base_url, API_KEY)
}

#[actix_rt::test]
async fn list_sends_ordering_and_credentials() {
    let api = Arc::new(FakeRestApi::default());
    let repo = repository(&spawn_fake_api(api.clone()));

    let posts = repo.list().await.unwrap();

    let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(posts[0].title.as_deref(), Some("second"));
    assert!(posts[0].content.is_none());
    assert!(posts[1].title.is_none());
    assert_eq!(
        posts[0].created_at.timestamp_subsec_micros(),
        123_456,
        "fractional seconds are kept"
    );

    let seen = api.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    let list = &seen[0];
    assert_eq!(list.method, "GET");
    assert_eq!(list.query.get("select").map(String::as_str), Some("*"));
    assert_eq!(
        list.query.get("order").map(String::as_str),
        Some("created_at.desc,id.desc")
    );
    assert_eq!(list.apikey.as_deref(), Some(API_KEY));
    assert_eq!(
        list.authorization.as_deref(),
        Some(format!("Bearer {API_KEY}").as_str())
    );
}

#[actix_rt::test]
async fn create_asks_for_the_inserted_row() {
    let api = Arc::new(FakeRestApi::default());
    let repo = repository(&spawn_fake_api(api.clone()));

    let created = repo.create(NewPost::new("A", "B")).await.unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].id, 3);
    assert_eq!(created[0].title.as_deref(), Some("A"));

    let seen = api.seen.lock().unwrap().clone();
    let insert = &seen[0];
    assert_eq!(insert.method, "POST");
    assert_eq!(insert.prefer.as_deref(), Some("return=representation"));
    assert_eq!(insert.apikey.as_deref(), Some(API_KEY));
    assert_eq!(
        insert.body,
        Some(json!([{ "title": "A", "content": "B" }]))
    );
}

#[actix_rt::test]
async fn missing_fields_are_sent_as_null() {
    let api = Arc::new(FakeRestApi::default());
    let repo = repository(&spawn_fake_api(api.clone()));

    repo.create(NewPost::default()).await.unwrap();

    let seen = api.seen.lock().unwrap().clone();
    assert_eq!(
        seen[0].body,
        Some(json!([{ "title": null, "content": null }]))
    );
}

#[actix_rt::test]
async fn rejected_request_becomes_storage_error() {
    let api = Arc::new(FakeRestApi {
        reject_with: Some((
            401,
            json!({ "code": "42501", "message": "new row violates row-level security policy" }),
        )),
        ..Default::default()
    });
    let repo = repository(&spawn_fake_api(api));

    let err = repo.create(NewPost::new("A", "B")).await.unwrap_err();
    match err {
        DomainError::Storage(message) => {
            assert_eq!(message, "new row violates row-level security policy")
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = repo.list().await.unwrap_err();
    assert!(matches!(err, DomainError::Storage(_)));
}

#[tokio::test]
async fn unreachable_api_becomes_storage_error() {
    let repo = repository("http://127.0.0.1:9");

    let err = repo.list().await.unwrap_err();
    assert!(matches!(err, DomainError::Storage(_)));
}

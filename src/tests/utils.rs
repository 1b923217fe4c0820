use crate::db::connection::{init_db, seed_db, Database};
use crate::router::App;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

const SEED_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/sql/seed.sql");

/// A fresh file-backed database with the production schema and no rows.
pub fn init_empty_db() -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = NEXT_DB.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("casa_test_{nanos}_{n}.sqlite"));

    let db = Database::new(path.to_string_lossy());
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

/// A fresh database loaded with the demo content.
pub fn init_test_db() -> Database {
    let db = init_empty_db();
    seed_db(&db, SEED_PATH).unwrap_or_else(|e| panic!("Seeding failed: {e}"));
    db
}

pub fn test_app() -> App {
    App::new(init_test_db(), crate::config::Config::default())
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(path: &str, form: &str, htmx: bool) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

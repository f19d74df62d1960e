use crate::{database, protocol::Notice, protocol::NoticeQuery, DbPool};
use actix_web::{body::MessageBody, dev::ServiceResponse, http::header, test};
use diesel::{r2d2::ConnectionManager, SqliteConnection};

/// Single-connection pool over a fresh in-memory database.
pub fn test_pool() -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_customizer(Box::new(database::SqlitePragmas))
        .build(manager)
        .expect("test pool");
    {
        let mut conn = pool.get().expect("test connection");
        database::run_migrations(&mut conn).expect("migrations");
    }
    pool
}

pub fn seeded_pool() -> DbPool {
    let pool = test_pool();
    {
        let mut conn = pool.get().expect("test connection");
        database::seed::seed_doctors(&mut conn).expect("seed");
    }
    pool
}

pub fn doctor_id(pool: &DbPool, specialty: &str) -> i32 {
    let mut conn = pool.get().expect("test connection");
    database::lookup::first_doctor_by_specialty(&mut conn, specialty)
        .expect("lookup")
        .expect("seeded doctor")
        .id
}

macro_rules! test_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data(actix_web::web::Data::new(crate::config::Config::default()))
                .configure(crate::routes),
        )
        .await
    };
}
pub(crate) use test_app;

/// Redirect target path and the notice encoded in its query, if any.
pub fn location<B>(resp: &ServiceResponse<B>) -> (String, Option<Notice>) {
    let location = resp
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("ascii location");
    match location.split_once('?') {
        Some((path, query)) => {
            let query: NoticeQuery = serde_urlencoded::from_str(query).expect("notice query");
            (path.to_string(), query.into_notice())
        }
        None => (location.to_string(), None),
    }
}

pub async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

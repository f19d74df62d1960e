use crate::{error::ServiceError, pages, protocol::Reply, DbPool};
use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(menu);
}

crate::route_funcs! {
    (home, get, "/"),
    (menu, get, "/menu"),
}

async fn home_impl(_pool: web::Data<DbPool>) -> Result<Reply, ServiceError> {
    Ok(Reply::Page(pages::home()))
}

async fn menu_impl(_pool: web::Data<DbPool>) -> Result<Reply, ServiceError> {
    Ok(Reply::Page(pages::menu()))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{body_text, test_app, test_pool};
    use actix_web::{http::StatusCode, test};

    #[actix_web::test]
    async fn static_pages_render() {
        let pool = test_pool();
        let app = test_app!(pool);

        for (uri, marker) in [("/", "href=\"/login\""), ("/menu", "href=\"/schedule\"")] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(
                resp.headers().get("content-type").unwrap(),
                "text/html; charset=utf-8"
            );
            assert!(body_text(resp).await.contains(marker));
        }
    }
}

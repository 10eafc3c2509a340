use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::site_store::state::{revision, SiteStore};

pub async fn process(store: web::Data<SiteStore>) -> impl Responder {
    match store.read() {
        Ok(Some(bytes)) => HttpResponse::Ok()
            .content_type("application/json; charset=utf-8")
            .insert_header((header::ETAG, format!("\"{}\"", revision(&bytes))))
            .insert_header((header::CACHE_CONTROL, "no-cache"))
            .body(bytes),
        Ok(None) => HttpResponse::NotFound().body("site data not found"),
        Err(e) => {
            error!("could not read {}: {}", store.path.display(), e);
            HttpResponse::ServiceUnavailable().body(format!("Error reading site data: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = SiteStore::new(dir.path().join("site-data"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .route("/site-data", web::get().to(process)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/site-data").to_request()).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn serves_json_with_etag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site-data");
        std::fs::write(&path, "{\"companyName\":\"PinSai\"}").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(SiteStore::new(path)))
                .route("/site-data", web::get().to(process)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/site-data").to_request()).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );
        let etag = resp.headers().get(header::ETAG).unwrap().to_str().unwrap().to_string();
        assert_eq!(etag, format!("\"{}\"", revision(b"{\"companyName\":\"PinSai\"}")));
    }
}

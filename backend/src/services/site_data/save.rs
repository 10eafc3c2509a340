use actix_web::{web, HttpResponse, Responder};
use common::normalize::normalize_str;
use common::requests::SaveSiteDataResponse;
use common::save::to_export_json;
use log::{error, info};

use crate::site_store::state::SiteStore;

pub async fn process(body: web::Bytes, store: web::Data<SiteStore>) -> impl Responder {
    let text = match std::str::from_utf8(&body) {
        Ok(text) => text,
        Err(_) => return HttpResponse::BadRequest().body("Error: body is not valid UTF-8"),
    };

    let contents = match normalize_str(text).and_then(|doc| to_export_json(&doc)) {
        Ok(contents) => contents,
        Err(e) => return HttpResponse::BadRequest().body(format!("Error: {}", e)),
    };

    match store.write(&contents).await {
        Ok(revision) => {
            info!("site data saved to {} ({})", store.path.display(), revision);
            HttpResponse::Ok().json(SaveSiteDataResponse { revision })
        }
        Err(e) => {
            error!("could not write {}: {}", store.path.display(), e);
            HttpResponse::ServiceUnavailable().body(format!("Error saving site data: {}", e))
        }
    }
}

mod config;
mod services;
mod site_store;

use crate::config::ServerConfig;
use crate::site_store::state::SiteStore;
use actix_files::Files;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Base path of the embedded admin panel.
const ADMIN_PATH: &str = "/admin";

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req
        .path()
        .trim_start_matches(ADMIN_PATH)
        .trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    if !config.site_root.is_dir() {
        warn!(
            "site root {} does not exist; only the admin panel will be served",
            config.site_root.display()
        );
    }

    if config.open_browser {
        let admin_url = format!("{}{}/", url, ADMIN_PATH);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&admin_url);
        });
    }

    let store = SiteStore::new(config.data_file.clone());
    let site_root = config.site_root.clone();

    info!("Server running at {}", url);
    info!("Site data file: {}", config.data_file.display());

    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(store.clone()))
            .configure(services::site_data::configure_routes)
            .route(ADMIN_PATH, web::get().to(serve_embedded))
            .route(&format!("{}/{{tail:.*}}", ADMIN_PATH), web::get().to(serve_embedded))
            .service(Files::new("/", site_root.clone()).index_file("index.html"))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

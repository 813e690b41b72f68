//! Serves the compiled storefront (`frontend/dist`, embedded at build time)
//! and opens it in the default browser. The product API is a separate
//! service; see `BACKEND_URL` in the frontend.

mod assets;
mod config;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use std::io;
use std::thread;
use std::time::Duration;

use crate::config::HostConfig;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    assets::embedded_response(&STATIC_DIR, req.path())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = config.url();

    if STATIC_DIR.get_file("index.html").is_none() {
        warn!("No storefront bundle embedded; build the frontend with trunk and rebuild the host.");
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, e);
            }
        });
    }

    info!("Storefront running at {}", url);

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

//! Serving the compiled storefront bundle from an embedded directory.
//!
//! Paths are looked up relative to the bundle root. `/` maps to `index.html`,
//! and any path without a matching file also gets `index.html` so that
//! client-side routes survive a page reload. The page itself is never cached;
//! trunk fingerprints the other assets, so those may be.

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::HttpResponse;
use include_dir::{Dir, File};
use mime_guess::{from_path, Mime};

const INDEX: &str = "index.html";

/// A file chosen from the bundle for a request path.
struct Asset<'a> {
    file: &'a File<'a>,
    mime: Mime,
    is_page: bool,
}

fn resolve<'a>(dir: &'a Dir<'a>, request_path: &str) -> Option<Asset<'a>> {
    let path = match request_path.trim_start_matches('/') {
        "" => INDEX,
        path => path,
    };

    let (path, file) = match dir.get_file(path) {
        Some(file) => (path, file),
        None => (INDEX, dir.get_file(INDEX)?),
    };

    Some(Asset {
        file,
        mime: from_path(path).first_or_octet_stream(),
        is_page: path == INDEX,
    })
}

pub fn embedded_response(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let Some(asset) = resolve(dir, request_path) else {
        return HttpResponse::NotFound().body("Not Found");
    };

    let mut resp = HttpResponse::Ok();
    resp.content_type(asset.mime.as_ref());
    if asset.is_page {
        resp.insert_header(CacheControl(vec![CacheDirective::NoCache]));
    }
    resp.body(asset.file.contents().to_vec())
}

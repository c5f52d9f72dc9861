//! Static document server.
//!
//! Three fixed routes and nothing else: the index page, the presentation
//! page, and files under `static/`. It shares no state with the bridge.

use std::fs::File;
use std::io::Read;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};

use anyhow::{anyhow, Result};
use tiny_http::{Header, Request, Response, ResponseBox, Server};
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;

pub const INDEX_DOCUMENT: &str = "templates/index.html";
pub const PRESENTATION_PATH: &str = "/presentation.html";
pub const PRESENTATION_DOCUMENT: &str = "presentation.html";
pub const STATIC_PREFIX: &str = "/static/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Presentation,
    /// Path relative to the `static/` directory; empty for the directory itself.
    Static(PathBuf),
    NotFound,
}

impl Route {
    /// Map a request target (path plus optional query) to a route. The
    /// static path is percent-decoded before it is checked.
    pub fn resolve(target: &str) -> Route {
        let path = target.split(['?', '#']).next().unwrap_or("");

        if path == "/" {
            return Route::Index;
        }
        if path == PRESENTATION_PATH {
            return Route::Presentation;
        }
        if let Some(rest) = path.strip_prefix(STATIC_PREFIX) {
            let Ok(decoded) = urlencoding::decode(rest) else {
                return Route::NotFound;
            };
            let relative = PathBuf::from(decoded.as_ref());
            // Only plain segments after decoding: no `..`, no absolute or
            // prefixed paths.
            if relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)))
            {
                return Route::Static(relative);
            }
        }
        Route::NotFound
    }

    /// File backing this route under `root`, if the route serves one.
    pub fn file(&self, root: &Path) -> Option<PathBuf> {
        match self {
            Route::Index => Some(root.join(INDEX_DOCUMENT)),
            Route::Presentation => Some(root.join(PRESENTATION_DOCUMENT)),
            Route::Static(relative) => {
                let path = root.join("static").join(relative);
                if path.is_dir() {
                    Some(path.join("index.html"))
                } else {
                    Some(path)
                }
            }
            Route::NotFound => None,
        }
    }
}

pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

pub struct DocumentServer {
    server: Server,
    root: PathBuf,
}

impl DocumentServer {
    /// Bind the listener. Failing to bind is the only fatal error.
    pub fn bind(config: &ServerConfig) -> Result<Self> {
        let addr = config.addr();
        let server = Server::http(&addr).map_err(|e| {
            error!(addr = %addr, error = %e, "failed to bind document server");
            anyhow!("Failed to bind {}: {}", addr, e)
        })?;
        info!(addr = %addr, root = %config.root.display(), "document server listening");
        Ok(Self {
            server,
            root: config.root.clone(),
        })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until [`DocumentServer::unblock`] is called.
    pub fn serve(&self) {
        for request in self.server.incoming_requests() {
            self.handle(request);
        }
        debug!("document server stopped");
    }

    pub fn unblock(&self) {
        self.server.unblock();
    }

    fn handle(&self, request: Request) {
        let route = Route::resolve(request.url());
        debug!(method = %request.method(), url = %request.url(), ?route, "request");

        let found = route
            .file(&self.root)
            .filter(|path| path.is_file())
            .and_then(|path| File::open(&path).ok().map(|file| (path, file)));

        let (status, response) = match found {
            Some((path, file)) => (
                200,
                with_content_type(Response::from_file(file), content_type(&path)).boxed(),
            ),
            None => (404, not_found()),
        };

        if let Err(e) = request.respond(response) {
            warn!(error = %e, status, "failed to write response");
        }
    }
}

fn not_found() -> ResponseBox {
    with_content_type(
        Response::from_string("404 page not found\n").with_status_code(404),
        "text/plain; charset=utf-8",
    )
    .boxed()
}

fn with_content_type<R: Read>(response: Response<R>, value: &str) -> Response<R> {
    match Header::from_bytes(&b"Content-Type"[..], value.as_bytes()) {
        Ok(h) => response.with_header(h),
        Err(()) => {
            error!(value, "invalid Content-Type header");
            response
        }
    }
}

/// Static asset delivery with SPA fallback routing.
///
/// Serves built site assets from the configured directory. Any GET path
/// without a matching file gets the entry document (`index.html`) with a 200
/// status, so the client-side router can handle the route.
use crate::handlers::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::io::ErrorKind;
use std::path::{Component, Path};
use std::sync::Arc;

/// Content type by file extension; unknown extensions are served as opaque
/// bytes.
fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "html" => "text/html",
        "js" => "text/javascript",
        "css" => "text/css",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Fallback handler: resolve the request path inside the static directory.
pub async fn serve_spa(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let rel = uri.path().trim_start_matches('/');
    let rel_path = Path::new(rel);

    // Never let a request path climb out of the static directory.
    if rel_path
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return (StatusCode::BAD_REQUEST, "Invalid path").into_response();
    }

    let root = Path::new(&state.config.static_dir);
    let file_path = if rel.is_empty() {
        root.join("index.html")
    } else {
        root.join(rel_path)
    };

    match tokio::fs::read(&file_path).await {
        Ok(content) => (
            [(header::CONTENT_TYPE, content_type_for(&file_path))],
            content,
        )
            .into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            // SPA routing: serve the entry document and let the client-side
            // router handle the path.
            match tokio::fs::read(root.join("index.html")).await {
                Ok(content) => ([(header::CONTENT_TYPE, "text/html")], content).into_response(),
                Err(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Critical Error: index.html not found.",
                )
                    .into_response(),
            }
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", file_path.display(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response()
        }
    }
}

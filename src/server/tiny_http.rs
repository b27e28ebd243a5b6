//! tiny_http server adapter
//!
//! Handles routing, body parsing, CORS and response conversion for tiny_http.

use std::io::Cursor;

use log::{debug, info, warn};
use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{self, ApiError, ListClientsQuery, SubmittedClient};
use crate::core::ports::ClientStore;

const CORS_HEADERS: &[(&str, &str)] = &[
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET,HEAD,PUT,PATCH,POST,DELETE"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// A routed response before it is turned into a tiny_http response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    /// HTTP status code
    pub status: u16,
    /// JSON body (empty for 204)
    pub body: String,
}

impl ApiReply {
    /// Parse the body as JSON
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Serve the API on `addr` until the process exits
pub fn serve(store: &dyn ClientStore, addr: &str) -> anyhow::Result<()> {
    let server =
        Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))?;
    info!("event=serve module=server status=listening addr={addr}");

    for mut request in server.incoming_requests() {
        let response = handle_api_request(store, &mut request);
        if let Err(e) = request.respond(response) {
            warn!("event=respond module=server status=error error={e}");
        }
    }

    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle one tiny_http request
pub fn handle_api_request(store: &dyn ClientStore, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().clone();
    let url = request.url().to_string();

    let mut body = String::new();
    let reply = match request.as_reader().read_to_string(&mut body) {
        Ok(_) => dispatch(store, &method, &url, &body),
        Err(e) => error_reply(&ApiError::bad_request(
            "Invalid body provided.",
            format!("Failed to read request body: {e}"),
        )),
    };

    debug!("{method} {url} -> {}", reply.status);
    into_response(reply)
}

/// Route a request to its handler
///
/// Supports both `/api/v1/...` and unprefixed paths.
pub fn dispatch(store: &dyn ClientStore, method: &Method, url: &str, body: &str) -> ApiReply {
    // HEAD answers like GET, minus the body
    if *method == Method::Head {
        let reply = dispatch(store, &Method::Get, url, body);
        return ApiReply {
            status: reply.status,
            body: String::new(),
        };
    }

    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);
    let api_path = if api_path.is_empty() { "/" } else { api_path };

    match (method, api_path) {
        (&Method::Options, _) => ApiReply {
            status: 204,
            body: String::new(),
        },

        (&Method::Get, "/") => success_reply(&api::index()),

        // GET /clients?status=...
        (&Method::Get, "/clients") => {
            handle_result(api::list_clients(store, &ListClientsQuery::parse(query)))
        },

        // PUT /clients - reconcile the full record set
        (&Method::Put, "/clients") => match parse_json_body::<Vec<SubmittedClient>>(body) {
            Ok(records) => handle_result(api::update_clients(store, &records)),
            Err(e) => error_reply(&e),
        },

        // GET /clients/{id}
        _ if *method == Method::Get && api_path.starts_with("/clients/") => {
            let id = api_path.strip_prefix("/clients/").unwrap_or("");
            if id.contains('/') {
                not_found_reply(method, api_path)
            } else {
                handle_result(api::get_client(store, id))
            }
        },

        _ => not_found_reply(method, api_path),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Parse a JSON request body
fn parse_json_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body)
        .map_err(|e| ApiError::bad_request("Invalid body provided.", format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> ApiReply {
    match result {
        Ok(data) => success_reply(&data),
        Err(e) => error_reply(&e),
    }
}

fn success_reply<T: Serialize>(data: &T) -> ApiReply {
    json_reply(data, 200)
}

fn error_reply(error: &ApiError) -> ApiReply {
    json_reply(&error.body(), error.status_code())
}

fn not_found_reply(method: &Method, path: &str) -> ApiReply {
    error_reply(&ApiError::not_found(format!(
        "API endpoint not found: {method} {path}"
    )))
}

fn json_reply<T: Serialize>(data: &T, status: u16) -> ApiReply {
    match serde_json::to_string(data) {
        Ok(body) => ApiReply { status, body },
        Err(e) => ApiReply {
            status: 500,
            body: serde_json::json!({
                "message": "Internal error.",
                "long_message": e.to_string(),
            })
            .to_string(),
        },
    }
}

fn into_response(reply: ApiReply) -> Response<Cursor<Vec<u8>>> {
    let mut response =
        Response::from_data(reply.body.into_bytes()).with_status_code(StatusCode(reply.status));
    if reply.status != 204 {
        if let Ok(header) = Header::from_bytes("Content-Type", "application/json") {
            response.add_header(header);
        }
    }
    for (name, value) in CORS_HEADERS {
        if let Ok(header) = Header::from_bytes(*name, *value) {
            response.add_header(header);
        }
    }
    response
}

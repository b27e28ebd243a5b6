//! Tests for HTTP routing
//!
//! Drives `dispatch` directly so no socket is needed.

use shiptivity::adapters::sqlite::SqliteClientStore;
use shiptivity::core::models::Status;
use shiptivity::server::dispatch;
use tiny_http::Method;

use crate::common::{client, memory_store};

fn store() -> SqliteClientStore {
    memory_store(&[
        client(1, Status::Backlog, 1),
        client(2, Status::Backlog, 2),
        client(3, Status::InProgress, 1),
    ])
}

#[test]
fn test_index() {
    let reply = dispatch(&store(), &Method::Get, "/api/v1/", "");
    assert_eq!(reply.status, 200);
    assert_eq!(
        reply.json().unwrap()["message"],
        "SHIPTIVITY API. Read documentation to see API docs"
    );
}

#[test]
fn test_list_clients_is_bare_array() {
    let reply = dispatch(&store(), &Method::Get, "/api/v1/clients", "");
    assert_eq!(reply.status, 200);
    let json = reply.json().unwrap();
    let clients = json.as_array().unwrap();
    assert_eq!(clients.len(), 3);
    assert_eq!(clients[0]["id"], 1);
    assert_eq!(clients[0]["status"], "backlog");
}

#[test]
fn test_list_clients_filtered() {
    let reply = dispatch(&store(), &Method::Get, "/api/v1/clients?status=in-progress", "");
    assert_eq!(reply.status, 200);
    let json = reply.json().unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], 3);
}

#[test]
fn test_list_clients_unknown_status() {
    let reply = dispatch(&store(), &Method::Get, "/api/v1/clients?status=unknown", "");
    assert_eq!(reply.status, 400);
    let json = reply.json().unwrap();
    assert_eq!(json["message"], "Invalid status provided.");
    assert_eq!(
        json["long_message"],
        "Status can only be one of the following: [backlog | in-progress | complete]."
    );
}

#[test]
fn test_get_client() {
    let reply = dispatch(&store(), &Method::Get, "/api/v1/clients/2", "");
    assert_eq!(reply.status, 200);
    let json = reply.json().unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["priority"], 2);
}

#[test]
fn test_get_nonexistent_client() {
    let reply = dispatch(&store(), &Method::Get, "/api/v1/clients/999", "");
    assert_eq!(reply.status, 400);
    assert_eq!(
        reply.json().unwrap()["long_message"],
        "Cannot find client with that id."
    );
}

#[test]
fn test_unprefixed_paths_are_accepted() {
    let reply = dispatch(&store(), &Method::Get, "/clients/1", "");
    assert_eq!(reply.status, 200);
}

#[test]
fn test_put_clients_is_idempotent() {
    let store = store();
    let body = r#"[
        {"id":1,"status":"in-progress","priority":2},
        {"id":2,"status":"backlog","priority":1},
        {"id":3,"status":"in-progress","priority":1}
    ]"#;

    let first = dispatch(&store, &Method::Put, "/api/v1/clients", body);
    let second = dispatch(&store, &Method::Put, "/api/v1/clients", body);

    assert_eq!(first.status, 200);
    assert_eq!(second.status, 200);
    assert_eq!(first.json().unwrap(), second.json().unwrap());

    let moved = &first.json().unwrap()[0];
    assert_eq!(moved["status"], "in-progress");
    assert_eq!(moved["priority"], 2);
}

#[test]
fn test_put_clients_invalid_json() {
    let reply = dispatch(&store(), &Method::Put, "/api/v1/clients", "{not json");
    assert_eq!(reply.status, 400);
    assert_eq!(reply.json().unwrap()["message"], "Invalid body provided.");
}

#[test]
fn test_options_preflight() {
    let reply = dispatch(&store(), &Method::Options, "/api/v1/clients", "");
    assert_eq!(reply.status, 204);
    assert!(reply.body.is_empty());
}

#[test]
fn test_head_answers_like_get() {
    let store = store();

    let reply = dispatch(&store, &Method::Head, "/api/v1/clients?status=backlog", "");
    assert_eq!(reply.status, 200);
    assert!(reply.body.is_empty());

    let reply = dispatch(&store, &Method::Head, "/api/v1/clients/abc", "");
    assert_eq!(reply.status, 400);
    assert!(reply.body.is_empty());

    let reply = dispatch(&store, &Method::Head, "/api/v1/nowhere", "");
    assert_eq!(reply.status, 404);
}

#[test]
fn test_list_clients_encoded_status() {
    let reply = dispatch(&store(), &Method::Get, "/api/v1/clients?status=in%2Dprogress", "");
    assert_eq!(reply.status, 200);
    assert_eq!(reply.json().unwrap()[0]["id"], 3);
}

#[test]
fn test_unknown_route() {
    let reply = dispatch(&store(), &Method::Delete, "/api/v1/clients/1", "");
    assert_eq!(reply.status, 404);
    assert_eq!(reply.json().unwrap()["message"], "Not found.");

    let reply = dispatch(&store(), &Method::Get, "/api/v1/clients/1/extra", "");
    assert_eq!(reply.status, 404);
}

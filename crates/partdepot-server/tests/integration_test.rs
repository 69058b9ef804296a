//! End-to-end tests over real TCP connections.
//!
//! Each test spawns a server on an ephemeral port backed by an in-memory
//! database, then drives it exactly the way a client does: connect, send
//! one JSON object, read one JSON object, connection closed by the server.

use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::thread;

use serde_json::{json, Value};

use partdepot_server::server::Server;
use partdepot_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Spawns a fresh server on 127.0.0.1:0 and returns its bound address.
fn spawn_server() -> SocketAddr {
    let state = AppState::in_memory().expect("failed to create in-memory AppState");
    let server = Server::bind("127.0.0.1:0", state).expect("failed to bind test server");
    let addr = server.local_addr().expect("no local addr");
    thread::spawn(move || server.run());
    addr
}

/// One full round trip with raw bytes; returns the parsed response.
fn send_raw(addr: SocketAddr, payload: &[u8]) -> Value {
    let mut stream = TcpStream::connect(addr).expect("connect failed");
    stream.write_all(payload).expect("write failed");
    stream.shutdown(Shutdown::Write).expect("shutdown failed");
    let mut buf = String::new();
    stream.read_to_string(&mut buf).expect("read failed");
    serde_json::from_str(&buf).expect("response was not valid JSON")
}

/// One full round trip with a JSON request.
fn send(addr: SocketAddr, request: &Value) -> Value {
    send_raw(addr, request.to_string().as_bytes())
}

fn add_item(addr: SocketAddr, product: &str, quantity: i64, location: &str, supplier: &str) {
    let response = send(
        addr,
        &json!({
            "action": "add_item",
            "product_name": product,
            "quantity": quantity,
            "location": location,
            "supplier_name": supplier,
        }),
    );
    assert_eq!(response["status"], "success", "add_item failed: {response}");
}

fn get_items(addr: SocketAddr) -> Vec<Value> {
    let response = send(addr, &json!({ "action": "get_items" }));
    assert_eq!(response["status"], "success", "get_items failed: {response}");
    response["items"].as_array().expect("no items array").clone()
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn add_then_get_round_trip() {
    let addr = spawn_server();
    add_item(addr, "Filter X", 5, "A1", "Acme");

    let items = get_items(addr);
    assert_eq!(items.len(), 1);
    // Fixed five-column order is part of the wire contract.
    assert_eq!(items[0], json!([1, "Filter X", 5, "A1", "Acme"]));
}

#[test]
fn mutations_answer_with_a_bare_success() {
    let addr = spawn_server();
    let response = send(
        addr,
        &json!({
            "action": "add_item",
            "product_name": "Filter X",
            "quantity": 5,
            "location": "A1",
            "supplier_name": "Acme",
        }),
    );
    assert_eq!(response, json!({ "status": "success" }));
}

#[test]
fn update_item_rewrites_the_stock_line() {
    let addr = spawn_server();
    add_item(addr, "Filter X", 5, "A1", "Acme");

    let response = send(
        addr,
        &json!({
            "action": "update_item",
            "inventory_id": 1,
            "product_name": "Filter Y",
            "quantity": 8,
            "location": "B2",
            "supplier_name": "Brakeco",
        }),
    );
    assert_eq!(response["status"], "success");

    let items = get_items(addr);
    assert_eq!(items, vec![json!([1, "Filter Y", 8, "B2", "Brakeco"])]);
}

#[test]
fn update_of_missing_id_still_succeeds() {
    let addr = spawn_server();
    let response = send(
        addr,
        &json!({
            "action": "update_item",
            "inventory_id": 999,
            "product_name": "Ghost",
            "quantity": 1,
            "location": "A1",
            "supplier_name": "Acme",
        }),
    );
    assert_eq!(response["status"], "success");
    assert!(get_items(addr).is_empty());
}

#[test]
fn delete_item_removes_the_line() {
    let addr = spawn_server();
    add_item(addr, "Filter X", 5, "A1", "Acme");
    add_item(addr, "Bolt M8", 10, "A2", "Fastex");

    let response = send(addr, &json!({ "action": "delete_item", "inventory_id": 1 }));
    assert_eq!(response["status"], "success");

    let items = get_items(addr);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0][0], 2);
}

#[test]
fn search_filters_by_product_substring() {
    let addr = spawn_server();
    add_item(addr, "Hex Bolt M8", 10, "A1", "Fastex");
    add_item(addr, "BOLT M10", 4, "A2", "Fastex");
    add_item(addr, "Oil Filter", 5, "B1", "Acme");

    let response = send(addr, &json!({ "action": "search_item", "search_query": "bolt" }));
    assert_eq!(response["status"], "success");
    let items = response["items"].as_array().unwrap();
    // Default SQLite collation: ASCII case-insensitive.
    assert_eq!(items.len(), 2);
}

#[test]
fn negative_quantity_passes_the_server_untouched() {
    let addr = spawn_server();
    add_item(addr, "Filter X", -3, "A1", "Acme");
    let items = get_items(addr);
    assert_eq!(items[0][2], -3);
}

// ---------------------------------------------------------------------------
// Error paths -- the server answers and closes, it never hangs or dies
// ---------------------------------------------------------------------------

#[test]
fn unknown_action_is_reported_verbatim() {
    let addr = spawn_server();
    let response = send(addr, &json!({ "action": "explode" }));
    assert_eq!(
        response,
        json!({ "status": "error", "message": "Invalid action" })
    );
}

#[test]
fn missing_action_is_reported_verbatim() {
    let addr = spawn_server();
    let response = send(addr, &json!({ "product_name": "Filter X" }));
    assert_eq!(
        response,
        json!({ "status": "error", "message": "Invalid action" })
    );
}

#[test]
fn malformed_json_gets_an_error_response() {
    let addr = spawn_server();
    let response = send_raw(addr, b"this is not json");
    assert_eq!(response["status"], "error");
}

#[test]
fn missing_required_field_gets_an_error_response() {
    let addr = spawn_server();
    // add_item without quantity.
    let response = send(
        addr,
        &json!({
            "action": "add_item",
            "product_name": "Filter X",
            "location": "A1",
            "supplier_name": "Acme",
        }),
    );
    assert_eq!(response["status"], "error");
    assert!(response["message"].as_str().unwrap().contains("quantity"));
}

#[test]
fn oversized_request_is_rejected() {
    let addr = spawn_server();
    // An unterminated JSON string that fills the 4096-byte buffer exactly,
    // so the server rejects it without leaving unread bytes behind.
    let payload = format!("{{\"action\":\"{}", "a".repeat(4085));
    assert_eq!(payload.len(), 4096);
    let response = send_raw(addr, payload.as_bytes());
    assert_eq!(response["status"], "error");
    assert!(response["message"].as_str().unwrap().contains("exceeds"));
}

#[test]
fn server_survives_a_bad_request() {
    let addr = spawn_server();
    let _ = send_raw(addr, b"%%%%");
    // The next, well-formed request on a fresh connection still works.
    add_item(addr, "Filter X", 5, "A1", "Acme");
    assert_eq!(get_items(addr).len(), 1);
}

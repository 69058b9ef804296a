//! Per-connection request handling.
//!
//! Reads one JSON object, dispatches on its `action`, writes one JSON
//! response, and lets the connection drop. Every failure funnels into an
//! error response; a bad request never takes the server down and never
//! leaves the peer hanging without an answer.

use std::net::TcpStream;

use partdepot_proto::{read_message, write_message, Request, Response};
use partdepot_store::{InventoryDb, InventoryId};

use crate::error::RequestError;
use crate::state::AppState;

/// Serves one connection end to end.
pub fn handle_connection(mut stream: TcpStream, state: &AppState) {
    let peer = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());

    let response = match serve(&mut stream, state) {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(%peer, error = %err, "request failed");
            Response::error(err.to_string())
        }
    };

    if let Err(err) = write_message(&mut stream, &response) {
        tracing::warn!(%peer, error = %err, "failed to write response");
    }
    // Dropping the stream closes the connection.
}

/// Reads and executes one request, producing the response for the success
/// path.
fn serve(stream: &mut TcpStream, state: &AppState) -> Result<Response, RequestError> {
    let value = read_message(stream)?;
    let request = Request::from_value(value)?;
    tracing::info!(action = request.action(), "handling request");

    // A poisoned lock only means another connection thread panicked while
    // holding it; the store itself is still usable.
    let db = state
        .db
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    dispatch(&db, request)
}

/// Executes one decoded request against the store.
pub fn dispatch(db: &InventoryDb, request: Request) -> Result<Response, RequestError> {
    match request {
        Request::AddItem(req) => {
            db.add_item(
                &req.product_name,
                req.quantity,
                &req.location,
                &req.supplier_name,
            )?;
            Ok(Response::success())
        }
        Request::GetItems => Ok(Response::with_items(db.list_items()?)),
        Request::UpdateItem(req) => {
            db.update_item(
                InventoryId(req.inventory_id),
                &req.product_name,
                req.quantity,
                &req.location,
                &req.supplier_name,
            )?;
            Ok(Response::success())
        }
        Request::DeleteItem(req) => {
            db.delete_item(InventoryId(req.inventory_id))?;
            Ok(Response::success())
        }
        Request::SearchItem(req) => Ok(Response::with_items(db.search_items(&req.search_query)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partdepot_proto::{AddItem, SearchItem};

    fn db() -> InventoryDb {
        InventoryDb::in_memory().expect("failed to open in-memory database")
    }

    #[test]
    fn add_then_get_round_trips_through_dispatch() {
        let db = db();
        let response = dispatch(
            &db,
            Request::AddItem(AddItem {
                product_name: "Filter X".to_string(),
                quantity: 5,
                location: "A1".to_string(),
                supplier_name: "Acme".to_string(),
            }),
        )
        .unwrap();
        assert!(matches!(response, Response::Success { items: None }));

        match dispatch(&db, Request::GetItems).unwrap() {
            Response::Success { items: Some(items) } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].product_name, "Filter X");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn search_dispatch_returns_items() {
        let db = db();
        dispatch(
            &db,
            Request::AddItem(AddItem {
                product_name: "Hex Bolt".to_string(),
                quantity: 10,
                location: "A1".to_string(),
                supplier_name: "Fastex".to_string(),
            }),
        )
        .unwrap();

        match dispatch(
            &db,
            Request::SearchItem(SearchItem {
                search_query: "bolt".to_string(),
            }),
        )
        .unwrap()
        {
            Response::Success { items: Some(items) } => assert_eq!(items.len(), 1),
            other => panic!("unexpected response: {other:?}"),
        }
    }
}

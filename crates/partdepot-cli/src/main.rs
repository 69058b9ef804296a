//! Parts inventory client CLI.
//!
//! Provides the `partdepot` binary with one subcommand per server action.
//! Each invocation performs a single blocking round trip: connect, send one
//! JSON request, read one JSON response, print the result, exit.
//!
//! Field validation happens here, before any socket is opened; the server
//! stores whatever the wire delivers. Transport failures and server-side
//! errors print identically, as one error line.

use std::net::{Shutdown, TcpStream};
use std::process;

use clap::{Parser, Subcommand};

use partdepot_proto::{
    read_message, write_message, AddItem, DeleteItem, ItemRow, ProtocolError, Request, Response,
    SearchItem, UpdateItem,
};

/// Parts inventory client.
#[derive(Parser)]
#[command(name = "partdepot", about = "Parts inventory client")]
struct Cli {
    /// Server address.
    #[arg(long, default_value = "127.0.0.1:5252")]
    addr: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands, one per server action.
#[derive(Subcommand)]
enum Commands {
    /// Record a new stock line.
    Add {
        /// Part name.
        product_name: String,
        /// Units in stock.
        quantity: i64,
        /// Storage location name.
        location: String,
        /// Supplier name.
        supplier_name: String,
    },
    /// List every stock line.
    List,
    /// Rewrite an existing stock line.
    Update {
        /// Id of the stock line to rewrite.
        inventory_id: i64,
        /// Part name.
        product_name: String,
        /// Units in stock.
        quantity: i64,
        /// Storage location name.
        location: String,
        /// Supplier name.
        supplier_name: String,
    },
    /// Delete a stock line by id.
    Delete {
        /// Id of the stock line to delete.
        inventory_id: i64,
    },
    /// Find stock lines whose part name contains a substring.
    Search {
        /// Substring to look for (ASCII case-insensitive).
        query: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let request = match build_request(cli.command) {
        Ok(request) => request,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            process::exit(1);
        }
    };

    process::exit(run(&cli.addr, &request));
}

/// Validates fields and assembles the wire request.
///
/// Required string fields must be non-empty; `quantity` and `inventory_id`
/// are already typed by clap. Validation failures never reach the network.
fn build_request(command: Commands) -> Result<Request, String> {
    match command {
        Commands::Add {
            product_name,
            quantity,
            location,
            supplier_name,
        } => {
            require_non_empty(&[
                ("product name", &product_name),
                ("location", &location),
                ("supplier name", &supplier_name),
            ])?;
            Ok(Request::AddItem(AddItem {
                product_name,
                quantity,
                location,
                supplier_name,
            }))
        }
        Commands::List => Ok(Request::GetItems),
        Commands::Update {
            inventory_id,
            product_name,
            quantity,
            location,
            supplier_name,
        } => {
            require_non_empty(&[
                ("product name", &product_name),
                ("location", &location),
                ("supplier name", &supplier_name),
            ])?;
            Ok(Request::UpdateItem(UpdateItem {
                inventory_id,
                product_name,
                quantity,
                location,
                supplier_name,
            }))
        }
        Commands::Delete { inventory_id } => {
            Ok(Request::DeleteItem(DeleteItem { inventory_id }))
        }
        Commands::Search { query } => {
            require_non_empty(&[("search query", &query)])?;
            Ok(Request::SearchItem(SearchItem {
                search_query: query,
            }))
        }
    }
}

fn require_non_empty(fields: &[(&str, &str)]) -> Result<(), String> {
    for (label, value) in fields {
        if value.trim().is_empty() {
            return Err(format!("{} must not be empty", label));
        }
    }
    Ok(())
}

/// Executes one round trip and prints the outcome.
///
/// Returns the process exit code: 0 on success, 1 on any error, whether it
/// came back from the server or never left the machine.
fn run(addr: &str, request: &Request) -> i32 {
    match round_trip(addr, request) {
        Ok(Response::Success { items }) => {
            match items {
                Some(items) => print_table(&items),
                None => println!("ok"),
            }
            0
        }
        Ok(Response::Error { message }) => {
            eprintln!("Error: {}", message);
            1
        }
        Err(err) => {
            // Transport failures surface the same way server errors do.
            eprintln!("Error: {}", err);
            1
        }
    }
}

/// Connect, send one request, read one response.
fn round_trip(addr: &str, request: &Request) -> Result<Response, ProtocolError> {
    let mut stream = TcpStream::connect(addr)?;
    write_message(&mut stream, &request.to_value()?)?;
    stream.shutdown(Shutdown::Write)?;
    let value = read_message(&mut stream)?;
    Ok(serde_json::from_value(value)?)
}

/// Renders the five-column result set.
fn print_table(items: &[ItemRow]) {
    if items.is_empty() {
        println!("no items");
        return;
    }
    println!(
        "{:<8} {:<28} {:>8}  {:<14} {:<20}",
        "id", "product", "qty", "location", "supplier"
    );
    for item in items {
        println!(
            "{:<8} {:<28} {:>8}  {:<14} {:<20}",
            item.inventory_id,
            item.product_name,
            item.quantity,
            item.location_name,
            item.supplier_name
        );
    }
}

//! Listener and accept loop: one OS thread per connection, unpooled.
//!
//! Threads are spawned per accepted connection and never joined; each one
//! serves a single request and exits. There is no read deadline, so a peer
//! that connects and sends nothing holds its thread until it disconnects.

use std::io;
use std::net::{SocketAddr, TcpListener, ToSocketAddrs};
use std::thread;

use crate::handler::handle_connection;
use crate::state::AppState;

/// A bound, not-yet-running inventory server.
pub struct Server {
    listener: TcpListener,
    state: AppState,
}

impl Server {
    /// Binds the listening socket.
    pub fn bind(addr: impl ToSocketAddrs, state: AppState) -> io::Result<Self> {
        let listener = TcpListener::bind(addr)?;
        Ok(Server { listener, state })
    }

    /// The address actually bound (useful when binding port 0).
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections until the listener fails fatally.
    ///
    /// Per-connection accept errors are logged and the loop continues.
    pub fn run(self) {
        for conn in self.listener.incoming() {
            match conn {
                Ok(stream) => {
                    let state = self.state.clone();
                    thread::spawn(move || handle_connection(stream, &state));
                }
                Err(err) => tracing::warn!(error = %err, "failed to accept connection"),
            }
        }
    }
}

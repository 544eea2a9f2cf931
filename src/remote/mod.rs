//! Client side of remote logging.
//!
//! A worker builds one `Dispatcher` at startup and passes it to everything
//! that reports computations. The `Transport` trait is the seam between the
//! dispatch policy and the wire.
pub mod dispatcher;
pub mod error;
pub mod transport;

pub use dispatcher::{Dispatch, Dispatcher, DispatcherConfig};
pub use transport::Transport;

#[cfg(test)]
pub mod testing;

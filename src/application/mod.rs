//! Application layer.
//!
//! Intent handlers and the dispatcher that routes requests to them.

mod dispatcher;
pub mod handlers;

pub use dispatcher::Dispatcher;

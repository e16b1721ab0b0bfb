//! Signal bot that answers spell lookups from the Spell API.

pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod presentation;
pub mod reply;

pub use dispatcher::Dispatcher;
pub use presentation::Reply;
pub use reply::ReplySink;

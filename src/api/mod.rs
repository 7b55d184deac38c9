//! Command layer for Serena AI Med
//!
//! User actions arrive as command lines and are routed to handlers that
//! operate on an explicit [`Session`].

pub mod handlers;
pub mod routes;
pub mod session;

pub use routes::{configure, CommandRouter};
pub use session::{ActivityLine, Session};

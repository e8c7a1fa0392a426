//! Session domain module.
//!
//! A session is the durable marker that an operator completed the login
//! screen. It carries no credentials.

mod model;

pub use model::Session;

//! Session domain: the stored token pair, the authenticated user, and the
//! storage abstraction the request gateway is built on.

pub mod model;
pub mod store;

pub use model::{AuthSession, User};
pub use store::SessionStore;

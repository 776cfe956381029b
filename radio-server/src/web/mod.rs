//! Web layer for the radio directory.
//!
//! Provides the `/api` HTTP endpoints consumed by the player front end.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;

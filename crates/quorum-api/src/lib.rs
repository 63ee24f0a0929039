pub mod error;
pub mod questions;
pub mod records;
pub mod replies;
pub mod routes;
pub mod state;
pub mod users;

#[cfg(test)]
mod test_support;

pub use error::ApiError;
pub use routes::router;
pub use state::{AppState, AppStateInner};

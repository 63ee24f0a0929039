pub mod api;
pub mod models;
pub mod tree;

pub use models::{Follow, Like, Question, Reply, User};

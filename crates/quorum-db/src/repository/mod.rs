//! One repository per table. Repositories borrow the [`crate::Database`] and
//! call into each other for relationship traversal, so following a link such
//! as a question's author always issues a fresh query. Walking a list that
//! way costs one query per element.

mod follows;
mod likes;
mod questions;
mod replies;
mod users;

pub use follows::FollowRepository;
pub use likes::LikeRepository;
pub use questions::QuestionRepository;
pub use replies::ReplyRepository;
pub use users::UserRepository;

pub mod comment;
pub mod comments;
pub mod designs;
pub mod place;
pub mod posts;
pub mod ranking;
pub mod search;
pub mod tree;

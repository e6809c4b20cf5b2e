//! Wire DTOs for the post store's JSON envelopes and records.
//!
//! The store uses PascalCase column names on reads and camelCase fields on
//! writes; both are kept here so domain types stay free of wire naming.

use serde::{Deserialize, Serialize};

/// The `{success, data?, message?}` envelope wrapping every response.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One row from `getPostList`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PostRecord {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub affiliation: String,
    pub title: String,
    pub content: String,
    pub timestamp: String,
}

/// One row from `getComments`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CommentRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "PostID")]
    pub post_id: String,
    pub commenter_name: String,
    pub affiliation: String,
    pub comment_content: String,
    pub timestamp: String,
}

/// One row from `getInterestRanking`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RankingRecord {
    pub interest: String,
    pub count: u32,
}

/// POST body for `savePost`.
#[derive(Debug, Serialize)]
pub(crate) struct SavePostBody {
    pub action: &'static str,
    pub name: String,
    pub affiliation: String,
    /// Comma-joined interest list; the store keeps it as one cell.
    pub interests: String,
    #[serde(rename = "postType")]
    pub post_type: String,
    pub title: String,
    pub content: String,
}

/// POST body for `saveComment`.
#[derive(Debug, Serialize)]
pub(crate) struct SaveCommentBody {
    pub action: &'static str,
    #[serde(rename = "postId")]
    pub post_id: String,
    #[serde(rename = "commenterName")]
    pub commenter_name: String,
    pub affiliation: String,
    #[serde(rename = "commentContent")]
    pub comment_content: String,
}

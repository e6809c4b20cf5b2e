//! Read-side domain records for the post board, comments, and ranking.

use serde::{Deserialize, Serialize};

/// A card on the comment board. `content` is the free text only; any
/// embedded ornament metadata has been stripped by the data access layer.
///
/// `affiliation` stays a raw string here: board rows predating the current
/// survey may carry free-form labels, and the board only displays them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub name: String,
    pub affiliation: String,
    pub title: String,
    pub content: String,
    pub timestamp: String,
}

/// A comment left on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub commenter_name: String,
    pub affiliation: String,
    pub content: String,
    pub timestamp: String,
}

/// One raw interest tally from the store's ranking query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingItem {
    pub interest: String,
    pub count: u32,
}

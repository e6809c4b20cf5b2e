//! Comment reads and writes (`getComments` / `saveComment`).

use holly_core::Comment;
use serde::Serialize;

use crate::dto::{CommentRecord, Envelope, SaveCommentBody};
use crate::error::ApiError;
use crate::http;
use crate::SheetClient;

/// Result of a comment write. The store may attach a human-readable
/// message even on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl SheetClient {
    /// Fetch all comments for one card.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the endpoint returns
    /// a non-success status, or the envelope reports failure.
    pub async fn fetch_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        let data = serde_json::json!({ "postId": post_id }).to_string();
        let url = self.action_url("getComments", Some(&data));
        let records: Vec<CommentRecord> =
            http::expect_data(self.http.get(&url).send().await?).await?;

        Ok(records
            .into_iter()
            .map(|record| Comment {
                id: record.id,
                post_id: record.post_id,
                commenter_name: record.commenter_name,
                affiliation: record.affiliation,
                content: record.comment_content,
                timestamp: record.timestamp,
            })
            .collect())
    }

    /// Write one comment on a card. A single attempt, no retry.
    ///
    /// A `{"success": false}` envelope is returned as a failed
    /// [`CommentOutcome`] rather than an error, because the store uses it
    /// for user-facing rejections (e.g. a deleted card).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] only on transport or status failures.
    pub async fn save_comment(
        &self,
        post_id: &str,
        commenter_name: &str,
        affiliation: &str,
        content: &str,
    ) -> Result<CommentOutcome, ApiError> {
        let body = SaveCommentBody {
            action: "saveComment",
            post_id: post_id.to_string(),
            commenter_name: commenter_name.to_string(),
            affiliation: affiliation.to_string(),
            comment_content: content.to_string(),
        };

        let resp = self.http.post(&self.base_url).json(&body).send().await?;
        let envelope: Envelope<serde_json::Value> = http::read_envelope(resp).await?;
        Ok(CommentOutcome {
            success: envelope.success,
            message: envelope.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "success": true,
        "data": [
            {
                "ID": "10",
                "PostID": "3",
                "CommenterName": "수아",
                "Affiliation": "2학년",
                "CommentContent": "응원할게요!",
                "Timestamp": "2024-12-19T02:00:00.000Z"
            }
        ]
    }"#;

    #[test]
    fn comment_records_map_to_domain() {
        let envelope: Envelope<Vec<CommentRecord>> = serde_json::from_str(FIXTURE).unwrap();
        assert!(envelope.success);

        let mut data = envelope.data.unwrap();
        let record = data.remove(0);
        assert_eq!(record.post_id, "3");
        assert_eq!(record.commenter_name, "수아");
        assert_eq!(record.comment_content, "응원할게요!");
    }
}

//! Post list reads and ornament writes (`getPostList` / `savePost`).

use holly_core::codec::{self, Decoded, OrnamentMetadata};
use holly_core::{Affiliation, OrnamentDesign, PlacedOrnament, PostSummary, Provenance, UserData};

use crate::dto::{PostRecord, SavePostBody};
use crate::error::ApiError;
use crate::http;
use crate::SheetClient;

impl SheetClient {
    /// Fetch every placed ornament on the shared tree.
    ///
    /// Posts without the metadata separator are plain cards and are skipped
    /// silently; posts with a separator but malformed or incomplete metadata,
    /// or an affiliation outside the known labels, are dropped with a warning
    /// while the rest of the response is still used.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the endpoint returns
    /// a non-success status, or the envelope reports failure.
    pub async fn fetch_ornaments(&self) -> Result<Vec<PlacedOrnament>, ApiError> {
        Ok(ornaments_from_records(self.post_list().await?))
    }

    /// Fetch the card list for the comment board, with any embedded
    /// ornament metadata stripped from the content.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the endpoint returns
    /// a non-success status, or the envelope reports failure.
    pub async fn fetch_posts(&self) -> Result<Vec<PostSummary>, ApiError> {
        Ok(posts_from_records(self.post_list().await?))
    }

    /// Write one ornament: the user's card plus placement metadata encoded
    /// into the content field. A single attempt, no retry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] when the survey input is missing
    /// affiliation or theme, and the usual transport/envelope errors
    /// otherwise.
    pub async fn save_ornament(
        &self,
        user: &UserData,
        design: &OrnamentDesign,
        panel_index: u8,
        slot_index: u8,
        x: f64,
        y: f64,
    ) -> Result<(), ApiError> {
        let affiliation = user
            .affiliation
            .ok_or_else(|| ApiError::InvalidInput("affiliation is not set".into()))?;
        let theme = user
            .theme
            .ok_or_else(|| ApiError::InvalidInput("theme is not set".into()))?;

        let metadata = OrnamentMetadata {
            design: design.clone(),
            panel_index,
            slot_index: Some(slot_index),
            x,
            y,
        };
        let content = codec::encode(&user.content, &metadata)
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

        let body = SavePostBody {
            action: "savePost",
            name: user.name.clone(),
            affiliation: affiliation.as_str().to_string(),
            interests: user.interests.join(", "),
            post_type: theme.as_str().to_string(),
            title: user.title.clone(),
            content,
        };

        let resp = self.http.post(&self.base_url).json(&body).send().await?;
        let _: serde_json::Value = http::expect_data(resp).await?;
        Ok(())
    }

    async fn post_list(&self) -> Result<Vec<PostRecord>, ApiError> {
        let url = self.action_url("getPostList", None);
        http::expect_data(self.http.get(&url).send().await?).await
    }
}

/// Adapt raw post records into placed ornaments, dropping records that do
/// not carry valid placement metadata.
fn ornaments_from_records(records: Vec<PostRecord>) -> Vec<PlacedOrnament> {
    let mut ornaments = Vec::new();
    for record in records {
        let (message, metadata) = match codec::decode(&record.content) {
            Ok(Decoded::Plain { .. }) => continue,
            Ok(Decoded::Ornament { message, metadata }) => (message, metadata),
            Err(error) => {
                tracing::warn!(post_id = %record.id, %error, "dropping post with malformed ornament metadata");
                continue;
            }
        };
        let Some(affiliation) = Affiliation::from_label(&record.affiliation) else {
            tracing::warn!(
                post_id = %record.id,
                affiliation = %record.affiliation,
                "dropping ornament with unknown affiliation"
            );
            continue;
        };
        ornaments.push(PlacedOrnament {
            id: record.id,
            user_name: record.name,
            affiliation,
            design: metadata.design,
            panel_index: metadata.panel_index,
            slot_index: metadata.slot_index,
            x: metadata.x,
            y: metadata.y,
            message,
            provenance: Provenance::Confirmed,
        });
    }
    ornaments
}

/// Adapt raw post records into board cards with metadata stripped.
fn posts_from_records(records: Vec<PostRecord>) -> Vec<PostSummary> {
    records
        .into_iter()
        .map(|record| {
            let content = codec::strip_metadata(&record.content).to_string();
            PostSummary {
                id: record.id,
                name: record.name,
                affiliation: record.affiliation,
                title: record.title,
                content,
                timestamp: record.timestamp,
            }
        })
        .collect()
}

//! Interest ranking reads (`getInterestRanking`).

use holly_core::RankingItem;

use crate::dto::RankingRecord;
use crate::error::ApiError;
use crate::http;
use crate::SheetClient;

impl SheetClient {
    /// Fetch raw interest tallies, optionally filtered to one affiliation.
    /// An empty filter means all rooms.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the endpoint returns
    /// a non-success status, or the envelope reports failure.
    pub async fn fetch_ranking(&self, affiliation: &str) -> Result<Vec<RankingItem>, ApiError> {
        let data = serde_json::json!({ "affiliation": affiliation }).to_string();
        let url = self.action_url("getInterestRanking", Some(&data));
        let records: Vec<RankingRecord> =
            http::expect_data(self.http.get(&url).send().await?).await?;

        Ok(records
            .into_iter()
            .map(|record| RankingItem {
                interest: record.interest,
                count: record.count,
            })
            .collect())
    }
}

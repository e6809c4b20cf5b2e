//! `holly ranking`: aggregated interest ranking.

use std::fmt::Write as _;

use serde::Serialize;

use holly_api::SheetClient;
use holly_config::HollyConfig;
use holly_core::ranking::{self, RankedCategory};

use crate::cli::{GlobalFlags, RankingArgs};
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub affiliation: String,
    pub categories: Vec<RankedCategory>,
}

impl Render for RankingResponse {
    fn table(&self) -> String {
        let mut out = String::new();
        let scope = if self.affiliation.is_empty() {
            "전체"
        } else {
            &self.affiliation
        };
        let _ = writeln!(out, "관심 분야 랭킹 ({scope})");
        for (rank, category) in self.categories.iter().enumerate() {
            let _ = writeln!(out, "{}. {} — {}", rank + 1, category.category, category.count);
            if !category.details.is_empty() {
                let _ = writeln!(out, "   ({})", category.details.join(", "));
            }
        }
        out.truncate(out.trim_end().len());
        out
    }
}

/// Handle `holly ranking`.
pub async fn handle(
    args: &RankingArgs,
    client: &SheetClient,
    config: &HollyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let affiliation = args.affiliation.clone().unwrap_or_default();
    let items = client.fetch_ranking(&affiliation).await?;
    let mut categories = ranking::aggregate(&items);
    categories.truncate(flags.effective_limit(config.general.default_limit));

    output::output(
        &RankingResponse {
            affiliation,
            categories,
        },
        flags.format,
    )
}

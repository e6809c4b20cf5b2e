//! `holly posts`: the card list on the comment board.

use std::fmt::Write as _;

use serde::Serialize;

use holly_api::SheetClient;
use holly_config::HollyConfig;
use holly_core::PostSummary;

use crate::cli::GlobalFlags;
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub total: usize,
    pub posts: Vec<PostSummary>,
}

impl Render for PostsResponse {
    fn table(&self) -> String {
        if self.posts.is_empty() {
            return "아직 작성된 카드가 없습니다.".to_string();
        }
        let mut out = String::new();
        let _ = writeln!(out, "{} cards (showing {})", self.total, self.posts.len());
        for post in &self.posts {
            let _ = writeln!(
                out,
                "#{} {} ({}) — {}",
                post.id, post.name, post.affiliation, post.title
            );
        }
        out.truncate(out.trim_end().len());
        out
    }
}

/// Handle `holly posts`.
pub async fn handle(
    client: &SheetClient,
    config: &HollyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut posts = client.fetch_posts().await?;
    let total = posts.len();
    posts.truncate(flags.effective_limit(config.general.default_limit));

    output::output(&PostsResponse { total, posts }, flags.format)
}

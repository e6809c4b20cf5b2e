//! `holly comments`: comments on one card.

use std::fmt::Write as _;

use serde::Serialize;

use holly_api::SheetClient;
use holly_config::HollyConfig;
use holly_core::Comment;

use crate::cli::{CommentsArgs, GlobalFlags};
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub post_id: String,
    pub total: usize,
    pub comments: Vec<Comment>,
}

impl Render for CommentsResponse {
    fn table(&self) -> String {
        if self.comments.is_empty() {
            return format!("카드 #{}에는 아직 댓글이 없습니다.", self.post_id);
        }
        let mut out = String::new();
        let _ = writeln!(
            out,
            "카드 #{} 댓글 {}개 (showing {})",
            self.post_id,
            self.total,
            self.comments.len()
        );
        for comment in &self.comments {
            let _ = writeln!(
                out,
                "{} ({}): {}",
                comment.commenter_name, comment.affiliation, comment.content
            );
        }
        out.truncate(out.trim_end().len());
        out
    }
}

/// Handle `holly comments`.
pub async fn handle(
    args: &CommentsArgs,
    client: &SheetClient,
    config: &HollyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut comments = client.fetch_comments(&args.post_id).await?;
    let total = comments.len();
    comments.truncate(flags.effective_limit(config.general.default_limit));

    output::output(
        &CommentsResponse {
            post_id: args.post_id.clone(),
            total,
            comments,
        },
        flags.format,
    )
}

//! `holly comment`: write a comment on a card.

use anyhow::{bail, Context};
use serde::Serialize;

use holly_api::SheetClient;
use holly_core::Affiliation;

use crate::cli::{CommentArgs, GlobalFlags};
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub post_id: String,
    pub message: Option<String>,
}

impl Render for CommentResponse {
    fn table(&self) -> String {
        match &self.message {
            Some(message) => format!("카드 #{}에 댓글을 남겼습니다. ({message})", self.post_id),
            None => format!("카드 #{}에 댓글을 남겼습니다.", self.post_id),
        }
    }
}

/// Handle `holly comment`.
pub async fn handle(
    args: &CommentArgs,
    client: &SheetClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        bail!("닉네임을 입력해주세요.");
    }
    if args.message.trim().is_empty() {
        bail!("댓글 내용을 입력해주세요.");
    }
    let affiliation: Affiliation = args.affiliation.parse()?;

    let outcome = client
        .save_comment(&args.post_id, args.name.trim(), affiliation.as_str(), args.message.trim())
        .await
        .context("comment write failed")?;

    if !outcome.success {
        bail!(
            "댓글 등록에 실패했습니다: {}",
            outcome.message.unwrap_or_else(|| "unknown error".to_string())
        );
    }

    output::output(
        &CommentResponse {
            post_id: args.post_id.clone(),
            message: outcome.message,
        },
        flags.format,
    )
}

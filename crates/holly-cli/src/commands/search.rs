//! `holly search`: exact-name lookup across every room.

use serde::Serialize;

use holly_api::SheetClient;
use holly_core::Affiliation;
use holly_scene::TreeScene;

use crate::cli::{GlobalFlags, SearchArgs};
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub term: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit: Option<SearchHitView>,
}

#[derive(Debug, Serialize)]
pub struct SearchHitView {
    pub user_name: String,
    pub room: Affiliation,
    pub panel_index: u8,
    pub rotation_degrees: i32,
}

impl Render for SearchResponse {
    fn table(&self) -> String {
        self.hit.as_ref().map_or_else(
            || format!("해당 이름의 오너먼트를 찾을 수 없습니다: {}", self.term),
            |hit| {
                format!(
                    "{}님의 오너먼트를 찾았습니다! room {}, panel {}, rotation {}°",
                    hit.user_name, hit.room, hit.panel_index, hit.rotation_degrees,
                )
            },
        )
    }
}

/// Handle `holly search`.
pub async fn handle(
    args: &SearchArgs,
    client: SheetClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut scene = TreeScene::new(client);
    scene.refresh().await;

    let hit = scene.board().search(&args.term).map(|hit| SearchHitView {
        user_name: hit.user_name,
        room: hit.affiliation,
        panel_index: hit.panel_index,
        rotation_degrees: hit.rotation_degrees,
    });

    output::output(
        &SearchResponse {
            term: args.term.clone(),
            found: hit.is_some(),
            hit,
        },
        flags.format,
    )
}

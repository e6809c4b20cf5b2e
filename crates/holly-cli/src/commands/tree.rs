//! `holly tree`: render one room of the shared tree.

use std::fmt::Write as _;

use anyhow::bail;
use serde::Serialize;

use holly_api::SheetClient;
use holly_config::HollyConfig;
use holly_core::{Affiliation, PlacedOrnament};
use holly_scene::TreeScene;

use crate::cli::{GlobalFlags, TreeArgs};
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct TreeResponse {
    pub room: Affiliation,
    pub total: usize,
    pub panels: Vec<PanelView>,
}

#[derive(Debug, Serialize)]
pub struct PanelView {
    pub panel_index: u8,
    pub ornaments: Vec<PlacedOrnament>,
}

impl Render for TreeResponse {
    fn table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} Tree — {} ornaments", self.room, self.total);
        if self.panels.is_empty() {
            let _ = write!(out, "(아직 걸린 오너먼트가 없어요)");
            return out;
        }
        for panel in &self.panels {
            let _ = writeln!(out, "panel {:>2}:", panel.panel_index);
            for o in &panel.ornaments {
                let _ = writeln!(
                    out,
                    "  {} [{}] slot {} — {}",
                    o.user_name,
                    o.design.id,
                    o.slot_index.map_or_else(|| "-".to_string(), |s| s.to_string()),
                    o.message,
                );
            }
        }
        out.truncate(out.trim_end().len());
        out
    }
}

/// Resolve the viewed room from the flag or the configured default, then
/// check it against the browsable room tabs.
fn resolve_room(requested: Option<&str>, configured: &str) -> anyhow::Result<Affiliation> {
    let label = match (requested, configured) {
        (Some(label), _) => label,
        (None, "") => bail!("no room given (pass --room or set general.default_room)"),
        (None, configured) => configured,
    };
    let room: Affiliation = label.parse()?;
    if !Affiliation::ROOM_TABS.contains(&room) {
        bail!("{room} 트리는 탭으로 제공되지 않습니다");
    }
    Ok(room)
}

/// Handle `holly tree`.
pub async fn handle(
    args: &TreeArgs,
    client: SheetClient,
    config: &HollyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let room = resolve_room(args.room.as_deref(), &config.general.default_room)?;
    let limit = flags.effective_limit(config.general.default_limit);

    let mut scene = TreeScene::new(client);
    scene.refresh().await;

    let total = scene.board().visible(room).count();
    let mut panels: Vec<PanelView> = Vec::new();
    for ornament in scene.board().visible(room).take(limit) {
        match panels
            .iter_mut()
            .find(|p| p.panel_index == ornament.panel_index)
        {
            Some(panel) => panel.ornaments.push(ornament.clone()),
            None => panels.push(PanelView {
                panel_index: ornament.panel_index,
                ornaments: vec![ornament.clone()],
            }),
        }
    }
    panels.sort_by_key(|p| p.panel_index);

    output::output(&TreeResponse { room, total, panels }, flags.format)
}

//! `holly place`: survey -> sealed card -> customized ornament -> tree.

use std::fmt::Write as _;
use std::time::Duration;

use anyhow::{anyhow, Context};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use holly_api::SheetClient;
use holly_core::{catalog, PlacedOrnament, Session, SessionEvent, Theme};
use holly_scene::TreeScene;

use crate::cli::{GlobalFlags, PlaceArgs};
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    pub ornament: PlacedOrnament,
    pub rotation_degrees: i32,
}

impl Render for PlaceResponse {
    fn table(&self) -> String {
        let mut out = String::new();
        let o = &self.ornament;
        let _ = writeln!(out, "오너먼트가 성공적으로 달렸어요!");
        let _ = writeln!(
            out,
            "{} 트리, panel {} / slot {}",
            o.affiliation,
            o.panel_index,
            o.slot_index.map_or_else(|| "-".to_string(), |s| s.to_string()),
        );
        let _ = write!(out, "front view rotation: {}°", self.rotation_degrees);
        out
    }
}

/// Handle `holly place`.
pub async fn handle(
    args: &PlaceArgs,
    client: SheetClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Survey pages, driven through the session machine so the same
    // validation gates apply as in the interactive flow.
    let mut session = Session::new().apply(SessionEvent::Start)?;
    session.user.name = args.name.clone();
    session.user.affiliation = Some(args.affiliation.parse()?);
    session.user.theme = Some(args.theme.parse::<Theme>()?);
    for interest in &args.interests {
        session.user.toggle_interest(interest)?;
    }
    let mut session = session.apply(SessionEvent::SubmitCommon)?;

    session.user.title = args.title.clone();
    session.user.content = args.message.clone();
    let session = session.apply(SessionEvent::SubmitCard)?;

    // The envelope sealing animation, as a progress bar.
    seal_envelope(flags.quiet).await;
    let session = session.apply(SessionEvent::Sealed)?;

    let theme = session.user.theme.ok_or_else(|| anyhow!("theme missing"))?;
    let design = catalog::pattern(theme.color(), &args.pattern)
        .ok_or_else(|| anyhow!("unknown pattern id: {}", args.pattern))?
        .to_design();
    let mut session = session.apply(SessionEvent::ConfirmDesign(design.clone()))?;

    // Load the shared tree, then commit.
    let mut scene = TreeScene::new(client);
    scene.refresh().await;
    let placement = scene
        .place(&session.user, &design, args.slot)
        .await
        .context("placement failed, nothing was hung; try again or pick another slot")?;
    session = session.apply(SessionEvent::Placed)?;
    debug_assert!(session.has_placed);

    output::output(
        &PlaceResponse {
            ornament: placement.ornament,
            rotation_degrees: placement.rotation_degrees,
        },
        flags.format,
    )
}

/// The scripted envelope animation: paper slides in, the envelope closes,
/// the card flies to the tree. Purely cosmetic; skipped under `--quiet`.
async fn seal_envelope(quiet: bool) {
    if quiet {
        return;
    }
    let bar = ProgressBar::new(3);
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    for message in ["편지를 접는 중...", "봉투에 담는 중...", "트리로 보내는 중..."] {
        bar.set_message(message);
        tokio::time::sleep(Duration::from_millis(800)).await;
        bar.inc(1);
    }
    bar.finish_with_message("봉투가 닫혔어요");
}

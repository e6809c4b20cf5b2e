//! `holly designs`: list the ornament catalog without touching the network.

use std::fmt::Write as _;

use serde::Serialize;

use holly_core::{catalog, Theme};

use crate::cli::{DesignsArgs, GlobalFlags};
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct DesignsResponse {
    pub palettes: Vec<PaletteView>,
}

#[derive(Debug, Serialize)]
pub struct PaletteView {
    pub theme: Theme,
    pub label: &'static str,
    pub accent: &'static str,
    pub patterns: Vec<&'static str>,
}

impl Render for DesignsResponse {
    fn table(&self) -> String {
        let mut out = String::new();
        for palette in &self.palettes {
            let _ = writeln!(out, "{} ({}, {})", palette.theme, palette.label, palette.accent);
            let _ = writeln!(out, "  {}", palette.patterns.join(", "));
        }
        out.truncate(out.trim_end().len());
        out
    }
}

/// Handle `holly designs`. Fully offline; runs before any client setup.
pub fn handle(args: &DesignsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let themes: Vec<Theme> = match &args.theme {
        Some(label) => vec![label.parse()?],
        None => Theme::ALL.to_vec(),
    };

    let palettes = themes
        .into_iter()
        .map(|theme| {
            let palette = catalog::palette(theme.color());
            PaletteView {
                theme,
                label: palette.label,
                accent: palette.accent,
                patterns: palette.patterns.iter().map(|p| p.id).collect(),
            }
        })
        .collect();

    output::output(&DesignsResponse { palettes }, flags.format)
}

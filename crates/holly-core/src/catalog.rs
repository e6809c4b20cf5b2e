//! Static ornament catalog: three theme palettes with six patterns each.

use crate::enums::OrnamentColor;
use crate::ornament::OrnamentDesign;

/// One catalog pattern: an id plus cap and shape asset URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSpec {
    pub id: &'static str,
    pub cap: &'static str,
    pub shape: &'static str,
}

impl PatternSpec {
    /// Convert into an owned [`OrnamentDesign`] for placement.
    #[must_use]
    pub fn to_design(&self) -> OrnamentDesign {
        OrnamentDesign {
            id: self.id.to_string(),
            cap: self.cap.to_string(),
            shape: self.shape.to_string(),
        }
    }
}

/// A theme palette: display label, accent color, and its patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color: OrnamentColor,
    pub label: &'static str,
    pub accent: &'static str,
    pub patterns: &'static [PatternSpec; 6],
}

const YELLOW_PATTERNS: [PatternSpec; 6] = [
    PatternSpec {
        id: "plain",
        cap: "https://i.imgur.com/bQ7Rfza.png",
        shape: "https://i.imgur.com/zKtjAX7.png",
    },
    PatternSpec {
        id: "dot",
        cap: "https://i.imgur.com/BCSPZE1.png",
        shape: "https://i.imgur.com/hD4oE1b.png",
    },
    PatternSpec {
        id: "star",
        cap: "https://i.imgur.com/TdV7sJm.png",
        shape: "https://i.imgur.com/bHbSqx3.png",
    },
    PatternSpec {
        id: "snow",
        cap: "https://i.imgur.com/pWkO6qb.png",
        shape: "https://i.imgur.com/SjnAzAJ.png",
    },
    PatternSpec {
        id: "stripe1",
        cap: "https://i.imgur.com/AdlhJN0.png",
        shape: "https://i.imgur.com/6uiU5YA.png",
    },
    PatternSpec {
        id: "stripe2",
        cap: "https://i.imgur.com/LwpNDIR.png",
        shape: "https://i.imgur.com/ujYQOfU.png",
    },
];

const RED_PATTERNS: [PatternSpec; 6] = [
    PatternSpec {
        id: "plain",
        cap: "https://i.imgur.com/hkHu9Eb.png",
        shape: "https://i.imgur.com/VPnVPam.png",
    },
    PatternSpec {
        id: "dot",
        cap: "https://i.imgur.com/HnPoieL.png",
        shape: "https://i.imgur.com/Un0xHIP.png",
    },
    PatternSpec {
        id: "star",
        cap: "https://i.imgur.com/xfCzHIu.png",
        shape: "https://i.imgur.com/qQkixfI.png",
    },
    PatternSpec {
        id: "snow",
        cap: "https://i.imgur.com/3meCnRR.png",
        shape: "https://i.imgur.com/JWSjR9n.png",
    },
    PatternSpec {
        id: "stripe1",
        cap: "https://i.imgur.com/8OJgTRS.png",
        shape: "https://i.imgur.com/TZx9lSj.png",
    },
    PatternSpec {
        id: "stripe2",
        cap: "https://i.imgur.com/6G4J6xV.png",
        shape: "https://i.imgur.com/9AT23K3.png",
    },
];

const GREEN_PATTERNS: [PatternSpec; 6] = [
    PatternSpec {
        id: "plain",
        cap: "https://i.imgur.com/q6d9qMg.png",
        shape: "https://i.imgur.com/57dM8PS.png",
    },
    PatternSpec {
        id: "dot",
        cap: "https://i.imgur.com/0m62Uic.png",
        shape: "https://i.imgur.com/BQOqZMO.png",
    },
    PatternSpec {
        id: "star",
        cap: "https://i.imgur.com/LBTty3f.png",
        shape: "https://i.imgur.com/b8aUxEk.png",
    },
    PatternSpec {
        id: "snow",
        cap: "https://i.imgur.com/VAqncS6.png",
        shape: "https://i.imgur.com/vgtcsuV.png",
    },
    PatternSpec {
        id: "stripe1",
        cap: "https://i.imgur.com/H0MDosO.png",
        shape: "https://i.imgur.com/di8bXGL.png",
    },
    PatternSpec {
        id: "stripe2",
        cap: "https://i.imgur.com/wJOtZWG.png",
        shape: "https://i.imgur.com/DIU5tmp.png",
    },
];

const YELLOW: Palette = Palette {
    color: OrnamentColor::Yellow,
    label: "추억",
    accent: "#f5b400",
    patterns: &YELLOW_PATTERNS,
};

const RED: Palette = Palette {
    color: OrnamentColor::Red,
    label: "고민",
    accent: "#c63926",
    patterns: &RED_PATTERNS,
};

const GREEN: Palette = Palette {
    color: OrnamentColor::Green,
    label: "다짐",
    accent: "#0f7d8c",
    patterns: &GREEN_PATTERNS,
};

/// The palette for a color.
#[must_use]
pub const fn palette(color: OrnamentColor) -> &'static Palette {
    match color {
        OrnamentColor::Yellow => &YELLOW,
        OrnamentColor::Red => &RED,
        OrnamentColor::Green => &GREEN,
    }
}

/// Look up a pattern by id within a color's palette.
#[must_use]
pub fn pattern(color: OrnamentColor, id: &str) -> Option<&'static PatternSpec> {
    palette(color).patterns.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::Theme;

    #[test]
    fn every_palette_has_six_patterns() {
        for color in [OrnamentColor::Yellow, OrnamentColor::Red, OrnamentColor::Green] {
            let palette = palette(color);
            assert_eq!(palette.patterns.len(), 6);
            assert_eq!(palette.patterns[0].id, "plain");
        }
    }

    #[test]
    fn pattern_lookup_by_id() {
        let spec = pattern(OrnamentColor::Red, "snow").unwrap();
        assert_eq!(spec.cap, "https://i.imgur.com/3meCnRR.png");
        assert!(pattern(OrnamentColor::Red, "plaid").is_none());
    }

    #[test]
    fn theme_palette_labels() {
        assert_eq!(palette(Theme::YearMemory.color()).label, "추억");
        assert_eq!(palette(Theme::CurrentWorry.color()).label, "고민");
        assert_eq!(palette(Theme::FutureResolve.color()).label, "다짐");
    }

    #[test]
    fn to_design_copies_assets() {
        let design = pattern(OrnamentColor::Yellow, "dot").unwrap().to_design();
        assert_eq!(design.id, "dot");
        assert_eq!(design.shape, "https://i.imgur.com/hD4oE1b.png");
    }
}

use crate::types::config::Theme;
use crate::types::scoring::{tier_for, Score, FULL_SCALE};
use serde::Serialize;

/// Outer-to-inner fill ratio of the ring.
pub const CUTOUT: &str = "80%";
/// Half-circle sweep, in degrees.
pub const SWEEP_DEGREES: u32 = 180;
/// Rotation that makes the arc read left-to-right.
pub const ROTATION_DEGREES: u32 = 270;

/// Declarative chart configuration in the shape the charting library
/// consumes. Field names serialize to the library's camelCase keys.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: [Score; 2],
    pub background_color: [String; 2],
    pub border_width: u32,
    pub circumference: u32,
    pub rotation: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub cutout: &'static str,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub tooltip: Tooltip,
    pub legend: Legend,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tooltip {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub display: bool,
}

/// Builds the gauge configuration for a score. The fill segments are
/// `[score, 100 - score]` with no clamping; a score above 100 yields a
/// negative complement and a degenerate (but accepted) configuration.
pub fn gauge_spec(score: Score, theme: &Theme) -> ChartSpec {
    let tier = tier_for(score);
    ChartSpec {
        chart_type: "doughnut",
        data: ChartData {
            datasets: vec![Dataset {
                data: [score, FULL_SCALE - score],
                background_color: [
                    theme.color_for(tier).to_string(),
                    theme.track.clone(),
                ],
                border_width: 0,
                circumference: SWEEP_DEGREES,
                rotation: ROTATION_DEGREES,
            }],
        },
        options: ChartOptions {
            cutout: CUTOUT,
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                tooltip: Tooltip { enabled: false },
                legend: Legend { display: false },
            },
        },
    }
}

pub mod html;
pub mod json;

use crate::chart;
use crate::error::{GaugeError, Result};
use crate::surface::DrawingSurface;
use crate::types::config::Theme;
use crate::types::scoring::{tier_for, Score};
use tracing::info;

/// Binds a score gauge to the addressed element of a surface by attaching
/// the chart instantiation fragment. Fails when the element is missing;
/// binding the same element twice is accepted here and left to the
/// charting library to reject at load time.
pub fn bind_gauge(
    surface: &mut dyn DrawingSurface,
    target: &str,
    score: Score,
    theme: &Theme,
) -> Result<()> {
    if !surface.has_element(target) {
        return Err(GaugeError::SurfaceNotFound(
            target.to_string(),
            surface.location(),
        ));
    }

    let spec = chart::gauge_spec(score, theme);
    let fragment = html::embed_fragment(target, &spec)?;
    surface.attach_fragment(&fragment);
    info!(element = target, score, tier = tier_for(score).as_str(), "gauge bound");
    Ok(())
}

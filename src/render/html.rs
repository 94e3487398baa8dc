use crate::chart::ChartSpec;
use crate::error::Result;
use chrono::Utc;

/// Builds the instantiation fragment attached to the hosting document.
/// The page is expected to have loaded the charting library already; the
/// fragment only hands it the drawing context and the configuration.
pub fn embed_fragment(target: &str, spec: &ChartSpec) -> Result<String> {
    let config = serde_json::to_string(spec)?;
    let stamp = Utc::now().to_rfc3339();
    Ok(format!(
        "\n<!-- score gauge generated {stamp} -->\n\
         <script>\n\
         new Chart(document.getElementById('{target}').getContext('2d'), {config});\n\
         </script>\n"
    ))
}

use crate::chart::ChartSpec;

pub fn to_json(spec: &ChartSpec) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::gauge_spec;
    use crate::types::config::Theme;

    #[test]
    fn json_spec_carries_segments_and_interaction_flags() {
        let spec = gauge_spec(64.0, &Theme::default());
        let rendered = to_json(&spec).expect("spec should serialize");
        assert!(rendered.contains("\"type\": \"doughnut\""));
        assert!(rendered.contains("64.0"));
        assert!(rendered.contains("36.0"));
        assert!(rendered.contains("\"enabled\": false"));
        assert!(rendered.contains("\"display\": false"));
    }
}

use serde::{Deserialize, Serialize};

/// Tunables for arc shape, styling, and camera framing.
///
/// Deserializable so hosts can ship it as part of their own settings; every
/// field defaults to the stock presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Peak height added at each arc's midpoint (meters).
    #[serde(default = "default_height_offset_m")]
    pub height_offset_m: f64,
    /// Target spacing between arc samples along the surface (meters).
    #[serde(default = "default_sample_spacing_m")]
    pub sample_spacing_m: f64,
    /// Flight-path polyline width (pixels).
    #[serde(default = "default_path_width")]
    pub path_width: f64,
    /// Half-extent of the pick volume around airport markers (meters).
    #[serde(default = "default_marker_pick_radius_m")]
    pub marker_pick_radius_m: f64,
    /// Radius of the sphere framed around a queried airport (meters).
    #[serde(default = "default_airport_frame_radius_m")]
    pub airport_frame_radius_m: f64,
    /// Camera distance from the framed volume (meters).
    #[serde(default = "default_camera_range_m")]
    pub camera_range_m: f64,
    /// Fly-to duration (seconds).
    #[serde(default = "default_camera_duration_s")]
    pub camera_duration_s: f64,
    /// Camera pitch; -90 is a straight-down view.
    #[serde(default = "default_camera_pitch_deg")]
    pub camera_pitch_deg: f64,
}

fn default_height_offset_m() -> f64 {
    1_000.0
}

fn default_sample_spacing_m() -> f64 {
    10_000.0
}

fn default_path_width() -> f64 {
    12.0
}

fn default_marker_pick_radius_m() -> f64 {
    10_000.0
}

fn default_airport_frame_radius_m() -> f64 {
    30_000.0
}

fn default_camera_range_m() -> f64 {
    2_000_000.0
}

fn default_camera_duration_s() -> f64 {
    3.0
}

fn default_camera_pitch_deg() -> f64 {
    -90.0
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            height_offset_m: default_height_offset_m(),
            sample_spacing_m: default_sample_spacing_m(),
            path_width: default_path_width(),
            marker_pick_radius_m: default_marker_pick_radius_m(),
            airport_frame_radius_m: default_airport_frame_radius_m(),
            camera_range_m: default_camera_range_m(),
            camera_duration_s: default_camera_duration_s(),
            camera_pitch_deg: default_camera_pitch_deg(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TrackerConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_defaults() {
        let parsed: TrackerConfig = serde_json::from_str("{}").expect("parsed");
        assert_eq!(parsed, TrackerConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let parsed: TrackerConfig =
            serde_json::from_str(r#"{"height_offset_m": 2500.0}"#).expect("parsed");
        assert_eq!(parsed.height_offset_m, 2_500.0);
        assert_eq!(parsed.sample_spacing_m, 10_000.0);
        assert_eq!(parsed.camera_range_m, 2_000_000.0);
    }
}

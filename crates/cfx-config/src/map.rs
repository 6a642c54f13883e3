//! Map view settings.

use serde::{Deserialize, Serialize};

const fn default_center_latitude() -> f64 {
    28.6139
}

const fn default_center_longitude() -> f64 {
    77.2090
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    /// Map centre used when no device location is available.
    #[serde(default = "default_center_latitude")]
    pub center_latitude: f64,

    #[serde(default = "default_center_longitude")]
    pub center_longitude: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_latitude: default_center_latitude(),
            center_longitude: default_center_longitude(),
        }
    }
}

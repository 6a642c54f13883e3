use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Geotag {
    pub latitude: f64,
    pub longitude: f64,
}

impl Geotag {
    /// Build a geotag, rejecting coordinates outside the WGS84 ranges.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if latitude is outside `[-90, 90]` or
    /// longitude outside `[-180, 180]`, or either is not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::Validation(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::Validation(format!(
                "longitude {longitude} is outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        let tag = Geotag::new(28.6139, 77.2090).unwrap();
        assert!((tag.latitude - 28.6139).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Geotag::new(91.0, 0.0).is_err());
        assert!(Geotag::new(0.0, -180.5).is_err());
        assert!(Geotag::new(f64::NAN, 0.0).is_err());
    }
}

//! Distance and position value objects

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A non-negative, finite distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Kilometers(f64);

impl Kilometers {
    /// Create a validated distance.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is negative, NaN or infinite.
    pub fn new(km: f64) -> Result<Self, DomainError> {
        if !km.is_finite() {
            return Err(DomainError::validation(format!(
                "Distance must be a finite number, got {}",
                km
            )));
        }
        if km < 0.0 {
            return Err(DomainError::validation(format!(
                "Distance cannot be negative, got {}",
                km
            )));
        }
        Ok(Self(km))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Kilometers {
    type Error = DomainError;

    fn try_from(km: f64) -> Result<Self, Self::Error> {
        Self::new(km)
    }
}

impl From<Kilometers> for f64 {
    fn from(km: Kilometers) -> f64 {
        km.0
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km", self.0)
    }
}

/// A WGS84 position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive_distances() {
        assert_eq!(Kilometers::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Kilometers::new(12.3).unwrap().value(), 12.3);
    }

    #[test]
    fn rejects_negative_distance() {
        let err = Kilometers::new(-1.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn rejects_nan_and_infinity() {
        assert!(Kilometers::new(f64::NAN).is_err());
        assert!(Kilometers::new(f64::INFINITY).is_err());
    }

    #[test]
    fn negative_distance_fails_deserialization() {
        assert!(serde_json::from_str::<Kilometers>("-3.5").is_err());
    }

    #[test]
    fn displays_one_decimal() {
        assert_eq!(Kilometers::new(4.2).unwrap().to_string(), "4.2 km");
        assert_eq!(Kilometers::new(15.0).unwrap().to_string(), "15.0 km");
    }
}

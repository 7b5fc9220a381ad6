use lathe_core::Result;
use lathe_math::Point2;
use serde::{Deserialize, Serialize};

use super::{Circle, HalfCircle, Profile, RippleHeart, Spikes};

/// Serializable description of a built-in profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileKind {
    HalfCircle { radius: f64 },
    Circle { center: Point2, radius: f64 },
    Spikes { radius: f64, frequency: i32 },
    RippleHeart,
}

impl ProfileKind {
    /// Instantiate the profile, validating its parameters.
    pub fn to_profile(&self) -> Result<Box<dyn Profile>> {
        Ok(match *self {
            Self::HalfCircle { radius } => Box::new(HalfCircle::new(radius)),
            Self::Circle { center, radius } => Box::new(Circle::new(center, radius)),
            Self::Spikes { radius, frequency } => Box::new(Spikes::new(radius, frequency)?),
            Self::RippleHeart => Box::new(RippleHeart::new()),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HalfCircle { .. } => "half_circle",
            Self::Circle { .. } => "circle",
            Self::Spikes { .. } => "spikes",
            Self::RippleHeart => "ripple_heart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_json() {
        let kind: ProfileKind =
            serde_json::from_str(r#"{"kind": "spikes", "radius": 0.3, "frequency": 12}"#).unwrap();
        assert_eq!(
            kind,
            ProfileKind::Spikes {
                radius: 0.3,
                frequency: 12
            }
        );
        assert_eq!(kind.name(), "spikes");

        let heart: ProfileKind = serde_json::from_str(r#"{"kind": "ripple_heart"}"#).unwrap();
        assert_eq!(heart, ProfileKind::RippleHeart);

        let torus: ProfileKind =
            serde_json::from_str(r#"{"kind": "circle", "center": [0.21, 0.0], "radius": 0.09}"#)
                .unwrap();
        assert_eq!(torus.name(), "circle");
    }

    #[test]
    fn test_to_profile_evaluates() {
        let kind = ProfileKind::HalfCircle { radius: 2.0 };
        let profile = kind.to_profile().unwrap();
        assert!((profile.point_at(0.5) - Point2::new(2.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_to_profile_rejects_zero_frequency() {
        let kind = ProfileKind::Spikes {
            radius: 1.0,
            frequency: 0,
        };
        let err = kind.to_profile().err().unwrap();
        assert!(err.is_invalid_parameter());
    }
}

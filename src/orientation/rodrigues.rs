use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::{EPSILON_ZERO, RODRIGUES_INFINITY};

/// Rodrigues-Frank vector stored as a unit axis plus the magnitude tan(ω/2).
///
/// A 180° rotation has an infinite magnitude. Keeping the axis separate means such
/// values stay representable without NaN components.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rodrigues {
    pub axis: Vector3<f64>,
    pub magnitude: f64,
}

impl Rodrigues {
    pub fn new(axis: Vector3<f64>, magnitude: f64) -> Self {
        Rodrigues { axis, magnitude }
    }

    /// The identity rotation with the canonical (0, 0, 1) axis.
    pub fn identity() -> Self {
        Rodrigues {
            axis: Vector3::z(),
            magnitude: 0.0,
        }
    }

    /// Build from a 3-component vector axis·tan(ω/2).
    pub fn from_vector(v: Vector3<f64>) -> Self {
        let magnitude = v.norm();
        if magnitude < EPSILON_ZERO {
            return Rodrigues::identity();
        }
        Rodrigues {
            axis: v / magnitude,
            magnitude,
        }
    }

    /// 3-component form. Infinite magnitudes are replaced by the finite stand-in used by
    /// the symmetry tables so the composition formula stays well defined.
    pub fn vector(&self) -> Vector3<f64> {
        let magnitude = if self.magnitude.is_finite() {
            self.magnitude
        } else {
            RODRIGUES_INFINITY
        };
        self.axis * magnitude
    }

    pub fn is_infinite(&self) -> bool {
        !self.magnitude.is_finite()
    }

    /// Rotation angle ω in radians.
    pub fn angle(&self) -> f64 {
        2.0 * self.magnitude.atan()
    }

    pub fn squared_magnitude(&self) -> f64 {
        self.magnitude * self.magnitude
    }
}

use std::f64::consts::{PI, TAU};

use nalgebra::{Quaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::EPSILON_ZERO;
use crate::orientation::{euler_to_quaternion, positive_hemisphere};
use crate::symmetries::SymmetryGroup;

/// Minimum-angle rotation between two orientations of the same class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Misorientation {
    /// Radians in [0, π].
    pub angle: f64,
    /// Unit axis, (0, 0, 1) for a zero rotation.
    pub axis: Vector3<f64>,
}

impl Misorientation {
    pub fn zero() -> Self {
        Misorientation {
            angle: 0.0,
            axis: Vector3::z(),
        }
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }
}

struct Candidate {
    quaternion: Quaternion<f64>,
    angle: f64,
    axis: Vector3<f64>,
}

// qr = q1 ⊗ q2⁻¹, candidates s_i ⊗ qr; the first strictly smaller angle wins.
fn best_candidate(group: &SymmetryGroup, q1: &Quaternion<f64>, q2: &Quaternion<f64>) -> Candidate {
    let qr = q1 * q2.conjugate();
    let mut best = Candidate {
        quaternion: qr,
        angle: f64::MAX,
        axis: Vector3::z(),
    };

    for s in group.quaternions() {
        let qc = s * qr;
        let w = qc.w.clamp(-1.0, 1.0);
        let mut angle = 2.0 * w.acos();
        let mut axis = qc.imag();
        if angle > PI {
            angle = TAU - angle;
            axis = -axis;
        }
        if angle < best.angle {
            best = Candidate {
                quaternion: qc,
                angle,
                axis,
            };
        }
    }
    best
}

/// Disorientation of `q1` relative to `q2`, both unit quaternions of `group`'s class.
pub fn misorientation(
    group: &SymmetryGroup,
    q1: &Quaternion<f64>,
    q2: &Quaternion<f64>,
) -> Misorientation {
    let best = best_candidate(group, q1, q2);
    let len = best.axis.norm();
    if len < EPSILON_ZERO || best.angle == 0.0 {
        return Misorientation::zero();
    }
    Misorientation {
        angle: best.angle.min(PI),
        axis: best.axis / len,
    }
}

/// The symmetric equivalent of q1 ⊗ q2⁻¹ realizing the disorientation, with w >= 0.
pub fn misorientation_quaternion(
    group: &SymmetryGroup,
    q1: &Quaternion<f64>,
    q2: &Quaternion<f64>,
) -> Quaternion<f64> {
    positive_hemisphere(best_candidate(group, q1, q2).quaternion)
}

/// Convenience wrapper for Bunge Euler angles in radians.
pub fn misorientation_from_eulers(
    group: &SymmetryGroup,
    euler1: &Vector3<f64>,
    euler2: &Vector3<f64>,
) -> Misorientation {
    misorientation(
        group,
        &euler_to_quaternion(euler1),
        &euler_to_quaternion(euler2),
    )
}

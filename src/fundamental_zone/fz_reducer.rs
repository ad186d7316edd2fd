use nalgebra::{Quaternion, Vector3};

use crate::config::FZ_DENOMINATOR_TOLERANCE;
use crate::orientation::{positive_hemisphere, quaternion_to_rodrigues, Rodrigues};
use crate::symmetries::SymmetryGroup;

/// Compose a Rodrigues vector with a symmetry operator: r' = (r + s - r×s) / (1 - r·s).
/// A vanishing denominator yields an infinite magnitude along the numerator direction.
fn compose_rodrigues(r: &Vector3<f64>, s: &Vector3<f64>, fallback_axis: &Vector3<f64>) -> Rodrigues {
    let numerator = r + s - r.cross(s);
    let denominator = 1.0 - r.dot(s);
    if denominator.abs() < FZ_DENOMINATOR_TOLERANCE {
        let len = numerator.norm();
        let axis = if len > 0.0 {
            numerator / len
        } else {
            *fallback_axis
        };
        return Rodrigues::new(axis, f64::INFINITY);
    }
    Rodrigues::from_vector(numerator / denominator)
}

/// Symmetric equivalent of `rod` with the smallest magnitude. Ties keep the lowest operator
/// index, so a value already in the fundamental zone comes back unchanged.
pub fn fz_rodrigues(group: &SymmetryGroup, rod: &Rodrigues) -> Rodrigues {
    let r = rod.vector();
    let mut best = *rod;
    let mut best_sq = f64::INFINITY;
    let mut found = false;

    for s in group.rodrigues_vectors() {
        let candidate = compose_rodrigues(&r, s, &rod.axis);
        let sq = candidate.squared_magnitude();
        if !found || sq < best_sq {
            best = candidate;
            best_sq = sq;
            found = true;
        }
    }
    best
}

/// ODF entry point: reduce an orientation quaternion to its fundamental-zone Rodrigues vector.
pub fn odf_fz_rodrigues(group: &SymmetryGroup, q: &Quaternion<f64>) -> Rodrigues {
    fz_rodrigues(group, &quaternion_to_rodrigues(q))
}

/// MDF entry point: reduce a misorientation given as angle and axis.
pub fn mdf_fz_rodrigues(group: &SymmetryGroup, angle: f64, axis: &Vector3<f64>) -> Rodrigues {
    let rod = if angle == 0.0 || axis.norm() == 0.0 {
        Rodrigues::identity()
    } else {
        Rodrigues::new(axis.normalize(), (0.5 * angle).tan())
    };
    fz_rodrigues(group, &rod)
}

/// Symmetric equivalent of `q2` closest to the reference `q1`, sign-corrected to w >= 0.
pub fn nearest_quaternion(
    group: &SymmetryGroup,
    q1: &Quaternion<f64>,
    q2: &Quaternion<f64>,
) -> Quaternion<f64> {
    let mut best = *q2;
    let mut best_distance = f64::INFINITY;
    for s in group.quaternions() {
        let qc = positive_hemisphere(s * q2);
        let distance = 1.0 - qc.coords.dot(&q1.coords);
        if distance < best_distance {
            best_distance = distance;
            best = qc;
        }
    }
    best
}

/// Symmetric equivalent of `qr` with the largest |w|, i.e. the smallest rotation angle.
pub fn quaternion_nearest_origin(group: &SymmetryGroup, qr: &Quaternion<f64>) -> Quaternion<f64> {
    let mut best = *qr;
    let mut best_w2 = f64::NEG_INFINITY;
    for s in group.quaternions() {
        let qc = s * qr;
        let w2 = qc.w * qc.w;
        if w2 > best_w2 {
            best_w2 = w2;
            best = qc;
        }
    }
    positive_hemisphere(best)
}

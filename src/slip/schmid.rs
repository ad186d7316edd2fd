use nalgebra::{Quaternion, Vector3};
use serde::Serialize;

use super::slip_systems::{default_slip_systems, SlipSystem};
use crate::config::EPSILON_ZERO;
use crate::orientation::quaternion_to_matrix;
use crate::symmetries::{CrystalClass, SymmetryGroup};

/// Schmid factor of the most highly stressed slip system for one loading direction.
///
/// `phi` is the angle between the load and the slip plane normal, `lambda` the angle
/// between the load and the slip direction, both in radians. `slip_system` is `None`
/// when no system carries a positive resolved shear stress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SchmidFactor {
    pub factor: f64,
    pub slip_system: Option<usize>,
    pub phi: f64,
    pub lambda: f64,
}

impl SchmidFactor {
    fn from_cosines(slip_system: usize, cos_phi: f64, cos_lambda: f64) -> Self {
        SchmidFactor {
            factor: cos_phi * cos_lambda,
            slip_system: Some(slip_system),
            phi: cos_phi.acos(),
            lambda: cos_lambda.acos(),
        }
    }
}

/// |cos| of the angle between two vectors, 0 when either has zero length.
pub fn abs_cos(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let norms = a.norm() * b.norm();
    if norms < EPSILON_ZERO {
        return 0.0;
    }
    (a.dot(b) / norms).abs().min(1.0)
}

/// Sample-frame loading direction expressed in the crystal frame of orientation `q`.
pub fn sample_to_crystal(q: &Quaternion<f64>, sample_load: &Vector3<f64>) -> Vector3<f64> {
    quaternion_to_matrix(q) * sample_load
}

/// Maximum Schmid factor over the default slip systems of `class`.
///
/// `crystal_load` is in crystal coordinates. The first system reaching the maximum wins.
/// Classes without default slip systems give a zero factor.
pub fn schmid_factor(class: CrystalClass, crystal_load: &Vector3<f64>) -> SchmidFactor {
    best_of(default_slip_systems(class), crystal_load)
}

/// Maximum Schmid factor over an explicit list of slip systems.
pub fn best_of(systems: &[SlipSystem], crystal_load: &Vector3<f64>) -> SchmidFactor {
    let mut best = SchmidFactor::default();
    for (i, system) in systems.iter().enumerate() {
        let cos_phi = abs_cos(crystal_load, &system.plane_normal());
        let cos_lambda = abs_cos(crystal_load, &system.slip_direction());
        if cos_phi * cos_lambda > best.factor {
            best = SchmidFactor::from_cosines(i, cos_phi, cos_lambda);
        }
    }
    best
}

/// Maximum Schmid factor over the symmetric variants of one user-given slip system.
///
/// Each operator of `group` maps the plane and direction to a variant. Variants whose
/// plane normal points into the lower hemisphere are duplicates and are skipped. The
/// reported `slip_system` is the index of the winning operator.
pub fn schmid_factor_for_system(
    group: &SymmetryGroup,
    crystal_load: &Vector3<f64>,
    plane: &Vector3<f64>,
    direction: &Vector3<f64>,
) -> SchmidFactor {
    let mut best = SchmidFactor::default();
    for (i, m) in group.matrices().iter().enumerate() {
        let slip_plane = m * plane;
        if slip_plane.z < 0.0 {
            continue;
        }
        let slip_direction = m * direction;
        let cos_phi = abs_cos(crystal_load, &slip_plane);
        let cos_lambda = abs_cos(crystal_load, &slip_direction);
        if cos_phi * cos_lambda > best.factor {
            best = SchmidFactor::from_cosines(i, cos_phi, cos_lambda);
        }
    }
    best
}

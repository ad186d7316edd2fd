use std::f64::consts::FRAC_PI_2;

use nalgebra::{Quaternion, Vector3};

use crate::interfaces::Rgb;
use crate::orientation::{euler_to_quaternion, quaternion_to_matrix};
use crate::symmetries::{SymmetryGroup, UnitTriangle};

impl UnitTriangle {
    /// Upper polar bound χmax at azimuth `eta`, both in radians.
    pub fn chi_max(&self, eta: f64) -> f64 {
        match *self {
            UnitTriangle::Azimuthal { chi_max, .. } => chi_max.to_radians(),
            UnitTriangle::Cubic { .. } => {
                // the {111} great circle, mirrored about η = 45°
                let eta = if eta.to_degrees() > 45.0 {
                    FRAC_PI_2 - eta
                } else {
                    eta
                };
                let t = eta.tan();
                (1.0 / (2.0 + t * t)).sqrt().clamp(-1.0, 1.0).acos()
            }
        }
    }

    /// Azimuth window in degrees.
    pub fn eta_range(&self) -> (f64, f64) {
        match *self {
            UnitTriangle::Azimuthal {
                eta_min, eta_max, ..
            } => (eta_min, eta_max),
            UnitTriangle::Cubic { eta_max } => (0.0, eta_max),
        }
    }

    /// Whether a pole at (η, χ) in radians lies inside the triangle.
    pub fn contains(&self, eta: f64, chi: f64) -> bool {
        let (eta_min, eta_max) = self.eta_range();
        let eta_deg = eta.to_degrees();
        eta_deg >= eta_min && eta_deg <= eta_max && chi >= 0.0 && chi <= self.chi_max(eta)
    }

    /// Color of a pole at (η, χ) in radians. Corners of the triangle map to red, green
    /// and blue, and the brightest channel is always saturated.
    pub fn color(&self, eta: f64, chi: f64) -> Rgb {
        let (eta_min, eta_max) = self.eta_range();
        let polar = (chi / self.chi_max(eta)).clamp(0.0, 1.0);
        let azimuthal = ((eta.to_degrees() - eta_min).abs() / (eta_max - eta_min)).clamp(0.0, 1.0);

        let mut rgb = [
            (1.0 - polar).sqrt(),
            ((1.0 - azimuthal) * polar).sqrt(),
            (azimuthal * polar).sqrt(),
        ];
        let max = rgb.iter().cloned().fold(0.0, f64::max);
        if max > 0.0 {
            rgb.iter_mut().for_each(|c| *c /= max);
        }
        [
            (rgb[0] * 255.0) as u8,
            (rgb[1] * 255.0) as u8,
            (rgb[2] * 255.0) as u8,
        ]
    }
}

/// Pole (η, χ) in radians of the sample direction `ref_dir` seen from the crystal frame of
/// orientation `q`, moved into the unit triangle of the class.
///
/// Symmetry operators are tried in order and the first one landing inside the triangle
/// wins. When none does, the pole of the last operator tried is returned.
pub fn ipf_pole(group: &SymmetryGroup, q: &Quaternion<f64>, ref_dir: &Vector3<f64>) -> (f64, f64) {
    let triangle = group.unit_triangle();
    let mut eta = 0.0;
    let mut chi = 0.0;

    for s in group.quaternions() {
        let g = quaternion_to_matrix(&(s * q));
        let mut p = (g * ref_dir).normalize();
        if p.z < 0.0 {
            if !group.has_inversion() {
                continue;
            }
            p = -p;
        }
        chi = p.z.clamp(-1.0, 1.0).acos();
        eta = p.y.atan2(p.x);
        if triangle.contains(eta, chi) {
            break;
        }
    }
    (eta, chi)
}

/// IPF color of a quaternion for a sample reference direction.
pub fn ipf_color_quaternion(
    group: &SymmetryGroup,
    q: &Quaternion<f64>,
    ref_dir: &Vector3<f64>,
) -> Rgb {
    let (eta, chi) = ipf_pole(group, q, ref_dir);
    group.unit_triangle().color(eta, chi)
}

/// IPF color of Bunge Euler angles in radians for a sample reference direction.
pub fn generate_ipf_color(group: &SymmetryGroup, euler: &Vector3<f64>, ref_dir: &Vector3<f64>) -> Rgb {
    ipf_color_quaternion(group, &euler_to_quaternion(euler), ref_dir)
}

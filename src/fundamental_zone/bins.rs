use nalgebra::{Quaternion, Vector3};
use rand::Rng;

use crate::fundamental_zone::fz_reducer::{fz_rodrigues, mdf_fz_rodrigues, odf_fz_rodrigues};
use crate::orientation::{
    euler_to_quaternion, homochoric_to_quaternion, quaternion_to_euler, quaternion_to_rodrigues,
    rodrigues_to_homochoric, rodrigues_to_quaternion, Rodrigues,
};
use crate::symmetries::{FzGeometry, SymmetryGroup};

/// Flat bin index of a homochoric coordinate, axis 0 varying fastest.
/// Coordinates outside the box are clamped into the edge bins.
pub fn bin_index(coord: &Vector3<f64>, geometry: &FzGeometry) -> usize {
    let mut idx = [0usize; 3];
    for k in 0..3 {
        let raw = ((coord[k] + geometry.extent[k]) / geometry.bin_step[k]).floor();
        let last = geometry.bin_count[k].saturating_sub(1) as f64;
        // NaN saturates to 0 through the cast
        idx[k] = raw.clamp(0.0, last) as usize;
    }
    let [b0, b1, _] = geometry.bin_count;
    idx[2] * b0 * b1 + idx[1] * b0 + idx[0]
}

/// Per-axis indices of a flat bin index.
pub fn bin_to_indices(bin: usize, geometry: &FzGeometry) -> [usize; 3] {
    let [b0, b1, _] = geometry.bin_count;
    [bin % b0, (bin / b0) % b1, bin / (b0 * b1)]
}

/// ODF bin of an orientation quaternion.
pub fn odf_bin(group: &SymmetryGroup, q: &Quaternion<f64>) -> usize {
    let rod = odf_fz_rodrigues(group, q);
    bin_index(&rodrigues_to_homochoric(&rod), group.fz_geometry())
}

/// ODF bin of Bunge Euler angles in radians.
pub fn odf_bin_euler(group: &SymmetryGroup, euler: &Vector3<f64>) -> usize {
    odf_bin(group, &euler_to_quaternion(euler))
}

/// MDF bin of a misorientation angle/axis pair.
pub fn mdf_bin(group: &SymmetryGroup, angle: f64, axis: &Vector3<f64>) -> usize {
    let rod = mdf_fz_rodrigues(group, angle, axis);
    bin_index(&rodrigues_to_homochoric(&rod), group.fz_geometry())
}

/// Draws uniformly distributed homochoric coordinates inside a bin.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    geometry: &'a FzGeometry,
}

impl<'a> Sampler<'a> {
    pub fn new(geometry: &'a FzGeometry) -> Self {
        Sampler { geometry }
    }

    pub fn sample<R: Rng + ?Sized>(&self, bin: usize, rng: &mut R) -> Vector3<f64> {
        sample_homochoric(bin, self.geometry, rng)
    }
}

/// step·(index + u) - extent with u in [0, 1) per axis.
pub fn sample_homochoric<R: Rng + ?Sized>(
    bin: usize,
    geometry: &FzGeometry,
    rng: &mut R,
) -> Vector3<f64> {
    let idx = bin_to_indices(bin, geometry);
    let mut h = Vector3::zeros();
    for k in 0..3 {
        let u: f64 = rng.gen();
        h[k] = geometry.bin_step[k] * (idx[k] as f64 + u) - geometry.extent[k];
    }
    h
}

/// Random orientation inside an ODF bin, reduced to the fundamental zone.
pub fn determine_euler_angles<R: Rng + ?Sized>(
    group: &SymmetryGroup,
    bin: usize,
    rng: &mut R,
) -> Vector3<f64> {
    let h = sample_homochoric(bin, group.fz_geometry(), rng);
    let rod = fz_rodrigues(group, &quaternion_to_rodrigues(&homochoric_to_quaternion(&h)));
    quaternion_to_euler(&rodrigues_to_quaternion(&rod))
}

/// Random orientation from a uniformly chosen ODF bin.
pub fn determine_random_euler_angles<R: Rng + ?Sized>(
    group: &SymmetryGroup,
    rng: &mut R,
) -> Vector3<f64> {
    let bin = rng.gen_range(0..group.fz_geometry().total_bins());
    determine_euler_angles(group, bin, rng)
}

/// Random misorientation inside an MDF bin as a fundamental-zone Rodrigues vector.
pub fn determine_rodrigues_vector<R: Rng + ?Sized>(
    group: &SymmetryGroup,
    bin: usize,
    rng: &mut R,
) -> Rodrigues {
    let h = sample_homochoric(bin, group.fz_geometry(), rng);
    fz_rodrigues(group, &quaternion_to_rodrigues(&homochoric_to_quaternion(&h)))
}

/// Apply a randomly chosen symmetry operator to an orientation.
pub fn randomize_euler_angles<R: Rng + ?Sized>(
    group: &SymmetryGroup,
    euler: &Vector3<f64>,
    rng: &mut R,
) -> Vector3<f64> {
    let i = rng.gen_range(0..group.num_sym_ops());
    let q = group.sym_op_quaternion(i) * euler_to_quaternion(euler);
    quaternion_to_euler(&q)
}

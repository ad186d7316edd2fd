// Fundamental zone module: Reduction to the symmetry-unique representative and ODF/MDF binning
// Bins live in homochoric space, one box per crystal class described by FzGeometry

// ======================== MODULE DECLARATIONS ========================
pub mod bins;
pub mod fz_reducer;

// Test modules
mod _tests_fz_reducer;
mod _tests_bins;

// ======================== REDUCTION ========================
pub use fz_reducer::{
    fz_rodrigues,                   // fn(group: &SymmetryGroup, rod: &Rodrigues) -> Rodrigues - smallest-magnitude equivalent
    odf_fz_rodrigues,               // fn(group, q: &Quaternion<f64>) -> Rodrigues - orientation to FZ Rodrigues
    mdf_fz_rodrigues,               // fn(group, angle: f64, axis: &Vector3<f64>) -> Rodrigues - misorientation to FZ Rodrigues
    nearest_quaternion,             // fn(group, q1, q2) -> Quaternion<f64> - equivalent of q2 closest to q1
    quaternion_nearest_origin,      // fn(group, qr) -> Quaternion<f64> - equivalent with the smallest angle, w >= 0
};

// ======================== BINNING & SAMPLING ========================
pub use bins::{
    bin_index,                      // fn(coord: &Vector3<f64>, geometry: &FzGeometry) -> usize - clamped flat index
    bin_to_indices,                 // fn(bin: usize, geometry: &FzGeometry) -> [usize; 3] - inverse flattening
    odf_bin,                        // fn(group, q: &Quaternion<f64>) -> usize - ODF bin of an orientation
    odf_bin_euler,                  // fn(group, euler: &Vector3<f64>) -> usize - ODF bin of Euler angles
    mdf_bin,                        // fn(group, angle: f64, axis: &Vector3<f64>) -> usize - MDF bin of a misorientation
    Sampler,                        // struct - uniform homochoric sampling inside a bin
    sample_homochoric,              // fn(bin, geometry, rng: &mut impl Rng) -> Vector3<f64>
    determine_euler_angles,         // fn(group, bin, rng) -> Vector3<f64> - random FZ orientation inside a bin
    determine_random_euler_angles,  // fn(group, rng) -> Vector3<f64> - random FZ orientation
    determine_rodrigues_vector,     // fn(group, bin, rng) -> Rodrigues - random FZ misorientation inside a bin
    randomize_euler_angles,         // fn(group, euler, rng) -> Vector3<f64> - apply a random symmetry operator
};
// Sampler impl methods:
//   new(geometry: &FzGeometry) -> Self                             - borrows the bin geometry
//   sample(&self, bin: usize, rng: &mut R) -> Vector3<f64>         - one homochoric coordinate

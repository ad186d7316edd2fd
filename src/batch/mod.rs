// Batch module: Element-wise drivers over caller-owned flat buffers
// Inputs are read-only slices and every element writes only its own output slot, so the
// drivers run unchanged in sequential or parallel mode

// ======================== MODULE DECLARATIONS ========================
pub mod drivers;

// Test modules
mod _tests_drivers;

// ======================== ELEMENT INPUTS ========================
pub use drivers::PhaseArrays; // struct - per-element phase ids, per-ensemble structure ids, optional mask
// PhaseArrays impl methods:
//   new(phases: &[i32], crystal_structures: &[u32]) -> Self        - unmasked element inputs
//   with_mask(self, mask: &[bool]) -> Self                          - only true elements are processed
//   len(&self) -> usize                                             - element count

// ======================== DRIVERS ========================
pub use drivers::{
    generate_ipf_colors,            // fn(eulers: &[f32], arrays, ref_dir: &Vector3<f64>, out: &mut [u8], mode) -> Result<(), Error>
    generate_rodrigues_colors,      // fn(eulers: &[f32], arrays, out: &mut [u8], mode) -> Result<(), Error>
    generate_misorientation_colors, // fn(quats: &[f32], arrays, reference: &Quaternion<f64>, out: &mut [u8], mode) -> Result<(), Error>
    compute_odf_bins,               // fn(eulers: &[f32], arrays, out: &mut [usize], mode) -> Result<(), Error>
    compute_schmid_factors,         // fn(quats: &[f32], arrays, sample_load: &Vector3<f64>, out: &mut [SchmidFactor], mode) -> Result<(), Error>
    compute_face_misorientations,   // fn(face_labels, feature_phases, avg_quats, crystal_structures, out: &mut [f32], mode) -> Result<(), Error>
};

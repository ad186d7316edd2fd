// Coloring module: Deterministic per-orientation colors
// IPF colors from the unit triangle, Rodrigues colors from the fundamental zone box,
// Schuh colors from the cubic disorientation and the pole figure palette

// ======================== MODULE DECLARATIONS ========================
pub mod color_table;
pub mod ipf_color;
pub mod misorientation_color;
pub mod rodrigues_color;

// Test modules
mod _tests_ipf_color;

// ======================== IPF ========================
pub use ipf_color::{
    generate_ipf_color,             // fn(group: &SymmetryGroup, euler: &Vector3<f64>, ref_dir: &Vector3<f64>) -> Rgb
    ipf_color_quaternion,           // fn(group, q: &Quaternion<f64>, ref_dir) -> Rgb
    ipf_pole,                       // fn(group, q, ref_dir) -> (f64, f64) - (η, χ) moved into the unit triangle
};
// UnitTriangle impl methods:
//   chi_max(&self, eta: f64) -> f64                                - polar bound at an azimuth, radians
//   eta_range(&self) -> (f64, f64)                                 - azimuth window, degrees
//   contains(&self, eta: f64, chi: f64) -> bool                    - membership test, radians
//   color(&self, eta: f64, chi: f64) -> Rgb                        - triangle color of a pole

// ======================== RODRIGUES ========================
pub use rodrigues_color::{
    rodrigues_color,                // fn(scale: RodriguesScale, fz: &FzGeometry, r: &Vector3<f64>) -> Rgb
    rodrigues_color_quaternion,     // fn(group, q: &Quaternion<f64>) -> Rgb - reduce then color
    generate_rodrigues_color,       // fn(group, euler: &Vector3<f64>) -> Rgb
};

// ======================== MISORIENTATION (SCHUH) ========================
pub use misorientation_color::{
    generate_misorientation_color,        // fn(group, q, reference: &Quaternion<f64>) -> Rgb - black outside m-3m
    generate_misorientation_color_euler,  // fn(group, euler, reference: &Vector3<f64>) -> Rgb
    hsv_to_rgb,                           // fn(h: f64, s: f64, v: f64) -> [f64; 3]
};

// ======================== PALETTE ========================
pub use color_table::ColorTable; // struct - blue to red intensity ramp
// ColorTable impl methods:
//   generate(n: usize) -> Self                                     - n evenly spaced ramp colors
//   color(&self, index: usize) -> Rgb                              - saturating index lookup
//   lookup(&self, value: f64, min: f64, max: f64) -> Rgb           - value placed on the ramp

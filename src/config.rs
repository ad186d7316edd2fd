// Constants

// Tolerances
pub const SYMMETRY_TABLE_TOLERANCE: f64 = 1e-5; // For validating operator tables at construction
pub const FZ_DENOMINATOR_TOLERANCE: f64 = 1e-12; // Rodrigues composition denominator treated as zero
pub const EPSILON_ZERO: f64 = 1e-12; // Zero-length axis / zero rotation detection

// Encodings
pub const RODRIGUES_INFINITY: f64 = 1e10; // Stand-in magnitude for 180 degree Rodrigues vectors
pub const LAMBERT_EDGE_EPSILON: f64 = 1e-4; // Pull-back from the Lambert square edge

// Pole figure defaults
pub const DEFAULT_IMAGE_DIM: usize = 226;
pub const DEFAULT_LAMBERT_DIM: usize = 64;
pub const DEFAULT_NUM_COLORS: usize = 32;

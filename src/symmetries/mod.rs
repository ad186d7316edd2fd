// Symmetries module: Crystal classes and their symmetry operator tables
// This module provides the immutable per-class data every orientation kernel is parameterized by

// ======================== MODULE DECLARATIONS ========================
pub mod crystal_class;
pub mod symmetry_group;
pub mod symmetry_tables;


// ======================== CRYSTAL CLASSES ========================
pub use crystal_class::CrystalClass; // enum - the eleven Laue classes, discriminant = crystal structure id
// CrystalClass impl methods:
//   from_id(id: u32) -> Result<Self, Error>                       - resolves a crystal structure id
//   id(self) -> u32                                                - numeric crystal structure id
//   key(self) -> &'static str                                      - kebab-case name used by the CLI
//   group(self) -> &'static SymmetryGroup                          - lazily built shared symmetry group
//   ALL: [CrystalClass; 11]                                        - every class in id order

// ======================== SYMMETRY GROUPS ========================
pub use symmetry_group::{
    SymmetryGroup,                  // struct - index-aligned quaternion / Rodrigues / matrix operators plus metadata
    FzGeometry,                     // struct - homochoric half-extent, bin count and bin step per axis
    validate_operators,             // fn(quaternions: &[Quaternion<f64>]) -> Result<(), Error> - table invariants
};
// SymmetryGroup impl methods:
//   new(class: CrystalClass) -> Result<Self, Error>               - builds and validates a group
//   from_quaternions(class, quaternions) -> Result<Self, Error>   - custom operator table, class metadata
//   with_inversion(self, has_inversion: bool) -> Self              - overrides the centrosymmetric flag
//   num_sym_ops(&self) -> usize                                    - operator count N
//   sym_op_quaternion(&self, i: usize) -> Quaternion<f64>          - operator i as quaternion
//   sym_op_rodrigues(&self, i: usize) -> Vector3<f64>              - operator i as Rodrigues vector
//   sym_op_matrix(&self, i: usize) -> Matrix3<f64>                 - operator i as rotation matrix
//   has_inversion(&self) -> bool                                   - centrosymmetric flag
//   fz_geometry(&self) -> &FzGeometry                              - ODF/MDF bin geometry
//   name(&self) -> &'static str                                    - display name, e.g. "Cubic m-3m"
//   unit_triangle(&self) -> UnitTriangle                           - IPF triangle bounds
//   rodrigues_scale(&self) -> RodriguesScale                       - Rodrigues color channel policy
//   pole_families(&self) -> &'static [PoleFamily; 3]               - pole figure direction families

// ======================== PER-CLASS DESCRIPTORS ========================
pub use symmetry_tables::{
    UnitTriangle,                   // enum - IPF fundamental triangle (azimuthal window or cubic)
    RodriguesScale,                 // enum - plain or double-divide Rodrigues color rescale
    PoleFamily,                     // struct - labelled canonical directions of one pole figure
};

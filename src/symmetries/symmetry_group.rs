use std::sync::OnceLock;

use anyhow::Error;
use log::debug;
use nalgebra::{Matrix3, Quaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{EPSILON_ZERO, RODRIGUES_INFINITY, SYMMETRY_TABLE_TOLERANCE};
use crate::orientation::quaternion_to_matrix;
use crate::symmetries::crystal_class::CrystalClass;
use crate::symmetries::symmetry_tables::{
    class_tables, ClassTables, PoleFamily, RodriguesScale, UnitTriangle,
};

/// ODF/MDF bin geometry in homochoric space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FzGeometry {
    /// Half-extent per axis.
    pub extent: [f64; 3],
    pub bin_count: [usize; 3],
    pub bin_step: [f64; 3],
}

impl FzGeometry {
    /// Geometry for the given per-axis angular half-widths and step divisors.
    pub fn from_angles(angles: [f64; 3], divisors: [f64; 3]) -> Self {
        let mut extent = [0.0; 3];
        let mut bin_step = [0.0; 3];
        let mut bin_count = [0usize; 3];
        for k in 0..3 {
            extent[k] = (0.75 * (angles[k] - angles[k].sin())).cbrt();
            bin_step[k] = extent[k] / divisors[k];
            bin_count[k] = (2.0 * extent[k] / bin_step[k]).round() as usize;
        }
        FzGeometry {
            extent,
            bin_count,
            bin_step,
        }
    }

    pub fn total_bins(&self) -> usize {
        self.bin_count.iter().product()
    }
}

/// Immutable symmetry operators of one crystal class in three index-aligned forms.
///
/// Only the quaternion table is authored; the Rodrigues vectors and matrices are
/// derived from it so operator `i` is the same rotation in every representation.
#[derive(Debug, Clone)]
pub struct SymmetryGroup {
    class: CrystalClass,
    name: &'static str,
    has_inversion: bool,
    quaternions: Vec<Quaternion<f64>>,
    rodrigues: Vec<Vector3<f64>>,
    matrices: Vec<Matrix3<f64>>,
    fz: FzGeometry,
    triangle: UnitTriangle,
    rodrigues_scale: RodriguesScale,
    pole_families: &'static [PoleFamily; 3],
}

impl SymmetryGroup {
    /// Build and validate the group of a class.
    pub fn new(class: CrystalClass) -> Result<Self, Error> {
        Self::from_tables(class, class_tables(class))
    }

    /// Build a group of `class` around a caller-supplied operator table. The class still
    /// provides the name, bin geometry and coloring metadata.
    pub fn from_quaternions(
        class: CrystalClass,
        quaternions: Vec<Quaternion<f64>>,
    ) -> Result<Self, Error> {
        Self::assemble(class, class_tables(class), quaternions)
    }

    pub(crate) fn from_tables(class: CrystalClass, tables: &ClassTables) -> Result<Self, Error> {
        let quaternions = tables
            .quaternions
            .iter()
            .map(|q| Quaternion::new(q[0], q[1], q[2], q[3]))
            .collect();
        Self::assemble(class, tables, quaternions)
    }

    fn assemble(
        class: CrystalClass,
        tables: &ClassTables,
        quaternions: Vec<Quaternion<f64>>,
    ) -> Result<Self, Error> {
        validate_operators(&quaternions)?;

        let rodrigues = quaternions.iter().map(operator_rodrigues).collect();
        let matrices = quaternions.iter().map(quaternion_to_matrix).collect();

        debug!(
            "Built symmetry group '{}' with {} operators",
            tables.name,
            quaternions.len()
        );

        Ok(SymmetryGroup {
            class,
            name: tables.name,
            has_inversion: tables.has_inversion,
            quaternions,
            rodrigues,
            matrices,
            fz: FzGeometry::from_angles(tables.fz_angles, tables.fz_divisors),
            triangle: tables.triangle,
            rodrigues_scale: tables.rodrigues_scale,
            pole_families: tables.pole_families,
        })
    }

    /// Override the centrosymmetric flag, e.g. for a proper point group without
    /// Friedel symmetry. IPF coloring then skips poles in the lower hemisphere instead
    /// of inverting them.
    pub fn with_inversion(mut self, has_inversion: bool) -> Self {
        self.has_inversion = has_inversion;
        self
    }

    pub fn class(&self) -> CrystalClass {
        self.class
    }

    pub fn num_sym_ops(&self) -> usize {
        self.quaternions.len()
    }

    /// Operator `i` as a quaternion. Panics if `i >= num_sym_ops()`.
    pub fn sym_op_quaternion(&self, i: usize) -> Quaternion<f64> {
        self.quaternions[i]
    }

    /// Operator `i` as a Rodrigues vector; half turns carry the finite infinity stand-in.
    pub fn sym_op_rodrigues(&self, i: usize) -> Vector3<f64> {
        self.rodrigues[i]
    }

    pub fn sym_op_matrix(&self, i: usize) -> Matrix3<f64> {
        self.matrices[i]
    }

    pub fn quaternions(&self) -> &[Quaternion<f64>] {
        &self.quaternions
    }

    pub fn rodrigues_vectors(&self) -> &[Vector3<f64>] {
        &self.rodrigues
    }

    pub fn matrices(&self) -> &[Matrix3<f64>] {
        &self.matrices
    }

    pub fn has_inversion(&self) -> bool {
        self.has_inversion
    }

    pub fn fz_geometry(&self) -> &FzGeometry {
        &self.fz
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn unit_triangle(&self) -> UnitTriangle {
        self.triangle
    }

    pub fn rodrigues_scale(&self) -> RodriguesScale {
        self.rodrigues_scale
    }

    pub fn pole_families(&self) -> &'static [PoleFamily; 3] {
        self.pole_families
    }
}

/// Check the structural invariants of an operator table: operator 0 is the identity,
/// every quaternion is unit norm and every derived matrix is a proper rotation.
pub fn validate_operators(quaternions: &[Quaternion<f64>]) -> Result<(), Error> {
    let first = quaternions
        .first()
        .ok_or_else(|| Error::msg("Symmetry table is empty."))?;
    if (first.w - 1.0).abs() > SYMMETRY_TABLE_TOLERANCE
        || first.imag().norm() > SYMMETRY_TABLE_TOLERANCE
    {
        return Err(Error::msg("Symmetry operator 0 is not the identity."));
    }

    for (i, q) in quaternions.iter().enumerate() {
        if (q.norm() - 1.0).abs() > SYMMETRY_TABLE_TOLERANCE {
            return Err(Error::msg(format!(
                "Symmetry operator {} is not a unit quaternion (norm {}).",
                i,
                q.norm()
            )));
        }
        let m = quaternion_to_matrix(q);
        let orthogonality = (m * m.transpose() - Matrix3::identity()).abs().max();
        if orthogonality > SYMMETRY_TABLE_TOLERANCE
            || (m.determinant() - 1.0).abs() > SYMMETRY_TABLE_TOLERANCE
        {
            return Err(Error::msg(format!(
                "Symmetry operator {} does not map to a proper rotation matrix.",
                i
            )));
        }
    }
    Ok(())
}

fn operator_rodrigues(q: &Quaternion<f64>) -> Vector3<f64> {
    let v = q.imag();
    if q.w.abs() < EPSILON_ZERO {
        v.normalize() * RODRIGUES_INFINITY
    } else {
        v / q.w
    }
}

impl CrystalClass {
    /// Shared, lazily built symmetry group of this class.
    pub fn group(self) -> &'static SymmetryGroup {
        static GROUPS: OnceLock<Vec<SymmetryGroup>> = OnceLock::new();
        let groups = GROUPS.get_or_init(|| {
            CrystalClass::ALL
                .iter()
                .map(|&class| {
                    SymmetryGroup::new(class).unwrap_or_else(|e| {
                        panic!("Built-in symmetry table for {} is malformed: {}", class, e)
                    })
                })
                .collect()
        });
        &groups[self as usize]
    }
}

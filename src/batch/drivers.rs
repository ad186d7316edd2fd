use anyhow::Error;
use log::debug;
use nalgebra::{Quaternion, Vector3};

use crate::coloring::{generate_ipf_color, generate_misorientation_color, generate_rodrigues_color};
use crate::fundamental_zone::odf_bin_euler;
use crate::misorientation::misorientation;
use crate::parallel::{fill_chunks, fill_indexed, ParallelMode};
use crate::slip::{sample_to_crystal, schmid_factor, SchmidFactor};
use crate::symmetries::{CrystalClass, SymmetryGroup};

/// Per-element phase data shared by the element drivers.
///
/// `phases[i]` indexes `crystal_structures`, which holds one crystal structure id per
/// ensemble. Elements whose mask entry is false, whose phase is out of range or whose
/// structure id is unknown are skipped and their output slots are left untouched.
#[derive(Debug, Clone, Copy)]
pub struct PhaseArrays<'a> {
    pub phases: &'a [i32],
    pub crystal_structures: &'a [u32],
    pub mask: Option<&'a [bool]>,
}

impl<'a> PhaseArrays<'a> {
    pub fn new(phases: &'a [i32], crystal_structures: &'a [u32]) -> Self {
        PhaseArrays {
            phases,
            crystal_structures,
            mask: None,
        }
    }

    pub fn with_mask(mut self, mask: &'a [bool]) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    fn check(&self) -> Result<(), Error> {
        if let Some(mask) = self.mask {
            if mask.len() != self.phases.len() {
                return Err(Error::msg(format!(
                    "Mask has {} entries but there are {} elements.",
                    mask.len(),
                    self.phases.len()
                )));
            }
        }
        Ok(())
    }

    fn resolve(&self) -> EnsembleGroups {
        EnsembleGroups::new(self.crystal_structures)
    }

    fn is_masked_out(&self, i: usize) -> bool {
        self.mask.map_or(false, |mask| !mask[i])
    }
}

// Symmetry group of every ensemble, None for unknown structure ids.
struct EnsembleGroups {
    groups: Vec<Option<&'static SymmetryGroup>>,
}

impl EnsembleGroups {
    fn new(crystal_structures: &[u32]) -> Self {
        let groups: Vec<_> = crystal_structures
            .iter()
            .map(|id| CrystalClass::from_id(*id).ok().map(CrystalClass::group))
            .collect();
        let unknown = groups.iter().filter(|g| g.is_none()).count();
        if unknown > 0 {
            debug!("{} of {} ensembles have no known crystal structure", unknown, groups.len());
        }
        EnsembleGroups { groups }
    }

    fn for_phase(&self, phase: i32) -> Option<&'static SymmetryGroup> {
        usize::try_from(phase)
            .ok()
            .and_then(|p| self.groups.get(p).copied().flatten())
    }
}

fn check_len(name: &str, actual: usize, expected: usize) -> Result<(), Error> {
    if actual != expected {
        return Err(Error::msg(format!(
            "{} has length {} but {} was expected.",
            name, actual, expected
        )));
    }
    Ok(())
}

fn euler_at(eulers: &[f32], i: usize) -> Vector3<f64> {
    Vector3::new(
        eulers[3 * i] as f64,
        eulers[3 * i + 1] as f64,
        eulers[3 * i + 2] as f64,
    )
}

// Stored as (x, y, z, w).
fn quaternion_at(quats: &[f32], i: usize) -> Quaternion<f64> {
    Quaternion::new(
        quats[4 * i + 3] as f64,
        quats[4 * i] as f64,
        quats[4 * i + 1] as f64,
        quats[4 * i + 2] as f64,
    )
}

/// IPF colors of Bunge Euler angles (radians, 3 per element) into `out` (RGB, 3 per element).
pub fn generate_ipf_colors(
    eulers: &[f32],
    arrays: &PhaseArrays,
    ref_dir: &Vector3<f64>,
    out: &mut [u8],
    mode: ParallelMode,
) -> Result<(), Error> {
    let n = arrays.len();
    check_len("Euler angle array", eulers.len(), 3 * n)?;
    check_len("IPF color output", out.len(), 3 * n)?;
    arrays.check()?;
    if ref_dir.norm() == 0.0 {
        return Err(Error::msg("IPF reference direction must be non-zero."));
    }

    let groups = arrays.resolve();
    debug!("Generating IPF colors for {} elements", n);
    fill_chunks(mode, out, 3, |i, rgb| {
        if arrays.is_masked_out(i) {
            return;
        }
        if let Some(group) = groups.for_phase(arrays.phases[i]) {
            rgb.copy_from_slice(&generate_ipf_color(group, &euler_at(eulers, i), ref_dir));
        }
    });
    Ok(())
}

/// Rodrigues colors of Bunge Euler angles into `out` (RGB, 3 per element).
pub fn generate_rodrigues_colors(
    eulers: &[f32],
    arrays: &PhaseArrays,
    out: &mut [u8],
    mode: ParallelMode,
) -> Result<(), Error> {
    let n = arrays.len();
    check_len("Euler angle array", eulers.len(), 3 * n)?;
    check_len("Rodrigues color output", out.len(), 3 * n)?;
    arrays.check()?;

    let groups = arrays.resolve();
    debug!("Generating Rodrigues colors for {} elements", n);
    fill_chunks(mode, out, 3, |i, rgb| {
        if arrays.is_masked_out(i) {
            return;
        }
        if let Some(group) = groups.for_phase(arrays.phases[i]) {
            rgb.copy_from_slice(&generate_rodrigues_color(group, &euler_at(eulers, i)));
        }
    });
    Ok(())
}

/// Schuh colors of quaternions (x, y, z, w per element) relative to `reference`, into `out`
/// (RGB, 3 per element).
pub fn generate_misorientation_colors(
    quats: &[f32],
    arrays: &PhaseArrays,
    reference: &Quaternion<f64>,
    out: &mut [u8],
    mode: ParallelMode,
) -> Result<(), Error> {
    let n = arrays.len();
    check_len("Quaternion array", quats.len(), 4 * n)?;
    check_len("Misorientation color output", out.len(), 3 * n)?;
    arrays.check()?;

    let groups = arrays.resolve();
    debug!("Generating misorientation colors for {} elements", n);
    fill_chunks(mode, out, 3, |i, rgb| {
        if arrays.is_masked_out(i) {
            return;
        }
        if let Some(group) = groups.for_phase(arrays.phases[i]) {
            let color = generate_misorientation_color(group, &quaternion_at(quats, i), reference);
            rgb.copy_from_slice(&color);
        }
    });
    Ok(())
}

/// ODF bin of each element's Euler angles into `out`.
pub fn compute_odf_bins(
    eulers: &[f32],
    arrays: &PhaseArrays,
    out: &mut [usize],
    mode: ParallelMode,
) -> Result<(), Error> {
    let n = arrays.len();
    check_len("Euler angle array", eulers.len(), 3 * n)?;
    check_len("ODF bin output", out.len(), n)?;
    arrays.check()?;

    let groups = arrays.resolve();
    fill_indexed(mode, out, |i, bin| {
        if arrays.is_masked_out(i) {
            return;
        }
        if let Some(group) = groups.for_phase(arrays.phases[i]) {
            *bin = odf_bin_euler(group, &euler_at(eulers, i));
        }
    });
    Ok(())
}

/// Schmid factor of each orientation (x, y, z, w per element) under a sample-frame load,
/// over the default slip systems of its class.
pub fn compute_schmid_factors(
    quats: &[f32],
    arrays: &PhaseArrays,
    sample_load: &Vector3<f64>,
    out: &mut [SchmidFactor],
    mode: ParallelMode,
) -> Result<(), Error> {
    let n = arrays.len();
    check_len("Quaternion array", quats.len(), 4 * n)?;
    check_len("Schmid factor output", out.len(), n)?;
    arrays.check()?;
    let load = sample_load
        .try_normalize(0.0)
        .ok_or_else(|| Error::msg("Loading direction must be non-zero."))?;

    let groups = arrays.resolve();
    debug!("Computing Schmid factors for {} elements", n);
    fill_indexed(mode, out, |i, sf| {
        if arrays.is_masked_out(i) {
            return;
        }
        if let Some(group) = groups.for_phase(arrays.phases[i]) {
            *sf = schmid_factor(group.class(), &sample_to_crystal(&quaternion_at(quats, i), &load));
        }
    });
    Ok(())
}

/// Misorientation across each face between the two features it separates.
///
/// `face_labels` holds two feature ids per face. Features index `feature_phases` and
/// `avg_quats` (x, y, z, w per feature). The output holds (nx, ny, nz, angle) per face with
/// the angle in radians. Faces touching a feature id below 1, or separating features of
/// different crystal classes, are skipped.
pub fn compute_face_misorientations(
    face_labels: &[i32],
    feature_phases: &[i32],
    avg_quats: &[f32],
    crystal_structures: &[u32],
    out: &mut [f32],
    mode: ParallelMode,
) -> Result<(), Error> {
    if face_labels.len() % 2 != 0 {
        return Err(Error::msg("Face label array must hold two entries per face."));
    }
    let faces = face_labels.len() / 2;
    let features = feature_phases.len();
    check_len("Average quaternion array", avg_quats.len(), 4 * features)?;
    check_len("Face misorientation output", out.len(), 4 * faces)?;

    let groups = EnsembleGroups::new(crystal_structures);
    let feature_index = |label: i32| -> Option<usize> {
        usize::try_from(label)
            .ok()
            .filter(|f| *f > 0 && *f < features)
    };

    debug!("Computing misorientations for {} faces", faces);
    fill_chunks(mode, out, 4, |i, slot| {
        let (Some(f1), Some(f2)) = (
            feature_index(face_labels[2 * i]),
            feature_index(face_labels[2 * i + 1]),
        ) else {
            return;
        };
        let (Some(g1), Some(g2)) = (
            groups.for_phase(feature_phases[f1]),
            groups.for_phase(feature_phases[f2]),
        ) else {
            return;
        };
        if g1.class() != g2.class() {
            return;
        }
        let m = misorientation(g1, &quaternion_at(avg_quats, f1), &quaternion_at(avg_quats, f2));
        slot.copy_from_slice(&[
            m.axis.x as f32,
            m.axis.y as f32,
            m.axis.z as f32,
            m.angle as f32,
        ]);
    });
    Ok(())
}

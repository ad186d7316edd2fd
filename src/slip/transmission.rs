use anyhow::Error;
use nalgebra::{Quaternion, Vector3};

use super::schmid::abs_cos;
use super::slip_systems::{require_slip_systems, SlipSystem};
use crate::orientation::quaternion_to_matrix;
use crate::symmetries::CrystalClass;

// Unit plane normal and slip direction of every system, in the sample frame.
struct SampleFrameSystems {
    systems: Vec<(Vector3<f64>, Vector3<f64>)>,
}

impl SampleFrameSystems {
    fn new(systems: &[SlipSystem], q: &Quaternion<f64>) -> Self {
        let gt = quaternion_to_matrix(q).transpose();
        SampleFrameSystems {
            systems: systems
                .iter()
                .map(|s| (gt * s.plane_normal(), gt * s.slip_direction()))
                .collect(),
        }
    }

    // First system with the largest Schmid factor, 0 if none is loaded.
    fn most_stressed(&self, load: &Vector3<f64>) -> usize {
        let mut best = 0;
        let mut max_schmid = 0.0;
        for (i, (n, d)) in self.systems.iter().enumerate() {
            let schmid = abs_cos(load, n) * abs_cos(load, d);
            if schmid > max_schmid {
                max_schmid = schmid;
                best = i;
            }
        }
        best
    }

    fn plane_alignment(&self, n: &Vector3<f64>) -> f64 {
        self.systems.iter().map(|(n2, _)| abs_cos(n, n2)).sum()
    }

    fn direction_alignment(&self, d: &Vector3<f64>) -> f64 {
        self.systems.iter().map(|(_, d2)| abs_cos(d, d2)).sum()
    }
}

fn prepare(
    class: CrystalClass,
    q1: &Quaternion<f64>,
    q2: &Quaternion<f64>,
    load: &Vector3<f64>,
) -> Result<(SampleFrameSystems, SampleFrameSystems, Vector3<f64>), Error> {
    let systems = require_slip_systems(class)?;
    let load = load
        .try_normalize(0.0)
        .ok_or_else(|| Error::msg("Loading direction must be non-zero."))?;
    Ok((
        SampleFrameSystems::new(systems, q1),
        SampleFrameSystems::new(systems, q2),
        load,
    ))
}

// Sweeps the systems of grain 1 in order. With `max_sf` only systems raising the running
// maximum Schmid factor are evaluated and the last of them gives the result. Otherwise
// the largest value over all systems is returned.
fn sweep<F>(grain1: &SampleFrameSystems, load: &Vector3<f64>, max_sf: bool, metric: F) -> f64
where
    F: Fn(f64, f64, &Vector3<f64>, &Vector3<f64>) -> f64,
{
    let mut result = 0.0;
    let mut max_schmid = 0.0;
    for (n1, d1) in &grain1.systems {
        let cos_plane = abs_cos(load, n1);
        let schmid = cos_plane * abs_cos(load, d1);
        if max_sf {
            if schmid <= max_schmid {
                continue;
            }
            max_schmid = schmid;
            result = metric(schmid, cos_plane, n1, d1);
        } else {
            result = f64::max(result, metric(schmid, cos_plane, n1, d1));
        }
    }
    result
}

/// Luster-Morris m' between the most highly stressed systems of two grains.
///
/// `q1`, `q2` are the grain orientations and `load` the sample-frame loading direction.
/// m' = |cos(n1, n2)| |cos(d1, d2)| with n the plane normals and d the slip directions.
pub fn m_prime(
    class: CrystalClass,
    q1: &Quaternion<f64>,
    q2: &Quaternion<f64>,
    load: &Vector3<f64>,
) -> Result<f64, Error> {
    let (grain1, grain2, load) = prepare(class, q1, q2, load)?;
    let (n1, d1) = grain1.systems[grain1.most_stressed(&load)];
    let (n2, d2) = grain2.systems[grain2.most_stressed(&load)];
    Ok(abs_cos(&n1, &n2) * abs_cos(&d1, &d2))
}

/// Fracture initiation parameter F1.
///
/// For a system of grain 1 with Schmid factor m and plane normal n1,
/// F1 = m |cos(load, n1)| Σ_j |cos(n1, n2_j)| summed over every system j of grain 2.
pub fn f1(
    class: CrystalClass,
    q1: &Quaternion<f64>,
    q2: &Quaternion<f64>,
    load: &Vector3<f64>,
    max_sf: bool,
) -> Result<f64, Error> {
    let (grain1, grain2, load) = prepare(class, q1, q2, load)?;
    Ok(sweep(&grain1, &load, max_sf, |schmid, cos_plane, n1, _| {
        schmid * cos_plane * grain2.plane_alignment(n1)
    }))
}

/// F1 weighted by the slip direction alignment Σ_j |cos(d1, d2_j)|.
pub fn f1spt(
    class: CrystalClass,
    q1: &Quaternion<f64>,
    q2: &Quaternion<f64>,
    load: &Vector3<f64>,
    max_sf: bool,
) -> Result<f64, Error> {
    let (grain1, grain2, load) = prepare(class, q1, q2, load)?;
    Ok(sweep(&grain1, &load, max_sf, |schmid, cos_plane, n1, d1| {
        schmid * cos_plane * grain2.plane_alignment(n1) * grain2.direction_alignment(d1)
    }))
}

/// F7 = |cos(load, n1)|² Σ_j |cos(n1, n2_j)|.
pub fn f7(
    class: CrystalClass,
    q1: &Quaternion<f64>,
    q2: &Quaternion<f64>,
    load: &Vector3<f64>,
    max_sf: bool,
) -> Result<f64, Error> {
    let (grain1, grain2, load) = prepare(class, q1, q2, load)?;
    Ok(sweep(&grain1, &load, max_sf, |_, cos_plane, n1, _| {
        cos_plane * cos_plane * grain2.plane_alignment(n1)
    }))
}

use anyhow::Error;
use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::coloring::ColorTable;
use crate::config::{DEFAULT_IMAGE_DIM, DEFAULT_LAMBERT_DIM, DEFAULT_NUM_COLORS};
use crate::interfaces::WHITE_RGBA;
use crate::orientation::euler_to_matrix;
use crate::parallel::{fill_chunks, fold_reduce, map_indexed, ParallelMode};
use crate::pole_figures::lambert_projection::{stereographic_to_sphere, ModifiedLambertProjection};
use crate::symmetries::SymmetryGroup;

const SPHERE_RADIUS: f64 = 1.0;

/// Pole figure rendering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoleFigureConfig {
    /// Side length of the square output images in pixels.
    pub image_dim: usize,
    /// Bins per side of each Lambert square.
    pub lambert_dim: usize,
    /// Palette size.
    pub num_colors: usize,
    /// Optional label overrides, in family order. Missing entries use the class labels.
    pub labels: Vec<String>,
}

impl Default for PoleFigureConfig {
    fn default() -> Self {
        PoleFigureConfig {
            image_dim: DEFAULT_IMAGE_DIM,
            lambert_dim: DEFAULT_LAMBERT_DIM,
            num_colors: DEFAULT_NUM_COLORS,
            labels: Vec::new(),
        }
    }
}

impl PoleFigureConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.image_dim == 0 {
            return Err(Error::msg("Pole figure image dimension must be positive."));
        }
        if self.lambert_dim == 0 {
            return Err(Error::msg("Lambert square dimension must be positive."));
        }
        if self.num_colors < 2 {
            return Err(Error::msg("Pole figure palette needs at least two colors."));
        }
        if self.labels.len() > 3 {
            return Err(Error::msg(format!(
                "At most 3 pole figure labels can be given, got {}.",
                self.labels.len()
            )));
        }
        Ok(())
    }
}

/// One rendered pole figure: `dim`² RGBA pixels, row major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoleFigure {
    pub label: String,
    pub dim: usize,
    pub rgba: Vec<u8>,
}

/// Sample-frame poles of every family member for each orientation, one point cloud per
/// family. Each direction d contributes gᵀ·d and its antipode.
pub fn generate_sphere_coords(
    group: &SymmetryGroup,
    eulers: &[Vector3<f64>],
    mode: ParallelMode,
) -> Vec<Vec<Vector3<f64>>> {
    group
        .pole_families()
        .iter()
        .map(|family| {
            let per_orientation = map_indexed(mode, eulers.len(), |i| {
                let gt = euler_to_matrix(&eulers[i]).transpose();
                family
                    .directions
                    .iter()
                    .flat_map(|d| {
                        let p = gt * Vector3::new(d[0], d[1], d[2]);
                        [p, -p]
                    })
                    .collect::<Vec<_>>()
            });
            per_orientation.into_iter().flatten().collect()
        })
        .collect()
}

/// MRD intensity image of one point cloud. Points are accumulated into partition-local
/// projections which are then summed.
pub fn generate_intensity_map(
    points: &[Vector3<f64>],
    config: &PoleFigureConfig,
    mode: ParallelMode,
) -> Vec<f64> {
    let lambert_dim = config.lambert_dim;
    let mut projection = fold_reduce(
        mode,
        points,
        || ModifiedLambertProjection::new(lambert_dim, SPHERE_RADIUS),
        |mut local, xyz| {
            local.add_point(xyz);
            local
        },
        |a, b| a.merge(b),
    );
    projection.normalize_to_mrd();
    projection.stereographic_projection(config.image_dim, mode)
}

/// Paint an intensity image: white outside the unit disk, palette colors inside.
pub fn intensity_to_rgba(
    intensity: &[f64],
    dim: usize,
    min: f64,
    max: f64,
    table: &ColorTable,
    mode: ParallelMode,
) -> Vec<u8> {
    let mut rgba = vec![0u8; dim * dim * 4];
    fill_chunks(mode, &mut rgba, 4, |index, pixel| {
        if stereographic_to_sphere(index % dim, index / dim, dim).is_none() {
            pixel.copy_from_slice(&WHITE_RGBA);
        } else {
            let [r, g, b] = table.lookup(intensity[index], min, max);
            pixel.copy_from_slice(&[r, g, b, 255]);
        }
    });
    rgba
}

/// Render the three pole figures of the group's class. All figures share one intensity
/// scale, taken over every pixel of every figure.
pub fn generate_pole_figures(
    group: &SymmetryGroup,
    eulers: &[Vector3<f64>],
    config: &PoleFigureConfig,
    mode: ParallelMode,
) -> Result<Vec<PoleFigure>, Error> {
    config.validate()?;
    debug!(
        "Generating {} pole figures for {} orientations ({}px, lambert {})",
        group.name(),
        eulers.len(),
        config.image_dim,
        config.lambert_dim
    );

    let clouds = generate_sphere_coords(group, eulers, mode);
    let intensities: Vec<Vec<f64>> = clouds
        .iter()
        .map(|points| generate_intensity_map(points, config, mode))
        .collect();

    let (min, max) = intensities
        .iter()
        .flatten()
        .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    debug!("Pole figure intensity range [{}, {}]", min, max);

    let table = ColorTable::generate(config.num_colors);
    let figures = group
        .pole_families()
        .iter()
        .zip(intensities.iter())
        .enumerate()
        .map(|(i, (family, intensity))| PoleFigure {
            label: config
                .labels
                .get(i)
                .cloned()
                .unwrap_or_else(|| family.label.to_string()),
            dim: config.image_dim,
            rgba: intensity_to_rgba(intensity, config.image_dim, min, max, &table, mode),
        })
        .collect();
    Ok(figures)
}

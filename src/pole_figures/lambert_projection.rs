use std::f64::consts::PI;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::LAMBERT_EDGE_EPSILON;
use crate::interfaces::Hemisphere;
use crate::parallel::{fill_indexed, ParallelMode};

const HALF_SQRT_PI: f64 = 0.886_226_925_452_758; // √π / 2
const TWO_OVER_SQRT_PI: f64 = 1.128_379_167_095_512_6; // 2 / √π

/// Equal-area projection of the unit sphere onto two squares, one per hemisphere.
///
/// Each square has the area of a half sphere, so a bin covers the same solid angle
/// everywhere. Points are splatted bilinearly onto the four nearest bins; neighbours falling
/// off an edge wrap onto the mirrored row or column, which is where the adjacent part of
/// the hemisphere boundary lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedLambertProjection {
    dimension: usize,
    sphere_radius: f64,
    step_size: f64,
    max_coord: f64,
    north: Vec<f64>,
    south: Vec<f64>,
}

impl ModifiedLambertProjection {
    /// Empty squares of `dimension`² bins for a sphere of `sphere_radius`.
    pub fn new(dimension: usize, sphere_radius: f64) -> Self {
        let half_sphere_area = 2.0 * PI * sphere_radius * sphere_radius;
        let square_edge = half_sphere_area.sqrt();
        let bins = dimension * dimension;
        ModifiedLambertProjection {
            dimension,
            sphere_radius,
            step_size: square_edge / dimension.max(1) as f64,
            max_coord: square_edge / 2.0,
            north: vec![0.0; bins],
            south: vec![0.0; bins],
        }
    }

    /// Project every point with unit weight.
    pub fn from_points(dimension: usize, sphere_radius: f64, points: &[Vector3<f64>]) -> Self {
        let mut projection = Self::new(dimension, sphere_radius);
        for xyz in points {
            projection.add_point(xyz);
        }
        projection
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn max_coord(&self) -> f64 {
        self.max_coord
    }

    pub fn square(&self, hemisphere: Hemisphere) -> &[f64] {
        match hemisphere {
            Hemisphere::North => &self.north,
            Hemisphere::South => &self.south,
        }
    }

    fn square_mut(&mut self, hemisphere: Hemisphere) -> &mut [f64] {
        match hemisphere {
            Hemisphere::North => &mut self.north,
            Hemisphere::South => &mut self.south,
        }
    }

    /// Square coordinate of a sphere point and the hemisphere it belongs to.
    /// z = 0 counts as north. The poles map to the square center.
    pub fn square_coord(&self, xyz: &Vector3<f64>) -> (Hemisphere, [f64; 2]) {
        let (hemisphere, adjust) = if xyz.z >= 0.0 {
            (Hemisphere::North, -1.0)
        } else {
            (Hemisphere::South, 1.0)
        };
        if xyz.x == 0.0 && xyz.y == 0.0 {
            return (hemisphere, [0.0, 0.0]);
        }

        let r = self.sphere_radius;
        let radial = (2.0 * r * (r + xyz.z * adjust)).max(0.0).sqrt();
        let mut coord = if xyz.x.abs() >= xyz.y.abs() {
            let sign = xyz.x.signum();
            [
                sign * radial * HALF_SQRT_PI,
                sign * radial * TWO_OVER_SQRT_PI * (xyz.y / xyz.x).atan(),
            ]
        } else {
            let sign = xyz.y.signum();
            [
                sign * radial * TWO_OVER_SQRT_PI * (xyz.x / xyz.y).atan(),
                sign * radial * HALF_SQRT_PI,
            ]
        };
        for c in coord.iter_mut() {
            if *c >= self.max_coord {
                *c = self.max_coord - LAMBERT_EDGE_EPSILON;
            }
        }
        (hemisphere, coord)
    }

    /// Flat index of the bin containing a square coordinate, clamped to the square.
    pub fn square_index(&self, coord: &[f64; 2]) -> usize {
        let last = self.dimension.saturating_sub(1) as f64;
        let x = ((coord[0] + self.max_coord) / self.step_size).floor().clamp(0.0, last) as usize;
        let y = ((coord[1] + self.max_coord) / self.step_size).floor().clamp(0.0, last) as usize;
        y * self.dimension + x
    }

    // The four bins around a coordinate, relative to bin centers, with their bilinear weights.
    fn interpolation_stencil(&self, coord: &[f64; 2]) -> ([usize; 4], [f64; 4]) {
        let dim = self.dimension as i64;
        let half = self.dimension as f64 / 2.0 * self.step_size;

        let mut mod_x = (coord[0] + half) / self.step_size;
        let mut mod_y = (coord[1] + half) / self.step_size;
        let abin = mod_x.trunc() as i64;
        let bbin = mod_y.trunc() as i64;
        mod_x -= abin as f64 + 0.5;
        mod_y -= bbin as f64 + 0.5;
        let a_sign: i64 = if mod_x < 0.0 { -1 } else { 1 };
        let b_sign: i64 = if mod_y < 0.0 { -1 } else { 1 };

        let outside = |v: i64| v < 0 || v > dim - 1;

        let (a1, b1) = (abin, bbin);

        let (mut a2, mut b2) = (abin + a_sign, bbin);
        if outside(a2) {
            a2 -= a_sign * dim;
            b2 = dim - b2 - 1;
        }

        let (mut a3, mut b3) = (abin, bbin + b_sign);
        if outside(b3) {
            a3 = dim - a3 - 1;
            b3 -= b_sign * dim;
        }

        let (mut a4, mut b4) = (abin + a_sign, bbin + b_sign);
        match (outside(a4), outside(b4)) {
            (true, false) => {
                a4 -= a_sign * dim;
                b4 = dim - b4 - 1;
            }
            (false, true) => {
                a4 = dim - a4 - 1;
                b4 -= b_sign * dim;
            }
            (true, true) => {
                a4 -= a_sign * dim;
                b4 -= b_sign * dim;
            }
            (false, false) => {}
        }

        let index = |a: i64, b: i64| -> usize {
            let a = a.clamp(0, dim - 1) as usize;
            let b = b.clamp(0, dim - 1) as usize;
            b * self.dimension + a
        };

        let (mx, my) = (mod_x.abs(), mod_y.abs());
        (
            [index(a1, b1), index(a2, b2), index(a3, b3), index(a4, b4)],
            [
                (1.0 - mx) * (1.0 - my),
                mx * (1.0 - my),
                (1.0 - mx) * my,
                mx * my,
            ],
        )
    }

    /// Splat `value` onto the four bins around `coord`.
    pub fn add_interpolated_value(&mut self, hemisphere: Hemisphere, coord: &[f64; 2], value: f64) {
        if self.dimension == 0 {
            return;
        }
        let (indices, weights) = self.interpolation_stencil(coord);
        let square = self.square_mut(hemisphere);
        for (i, w) in indices.iter().zip(weights.iter()) {
            square[*i] += value * w;
        }
    }

    /// Project one sphere point with unit weight.
    pub fn add_point(&mut self, xyz: &Vector3<f64>) {
        let (hemisphere, coord) = self.square_coord(xyz);
        self.add_interpolated_value(hemisphere, &coord, 1.0);
    }

    /// Bilinear read-back at `coord`.
    pub fn interpolated_value(&self, hemisphere: Hemisphere, coord: &[f64; 2]) -> f64 {
        if self.dimension == 0 {
            return 0.0;
        }
        let (indices, weights) = self.interpolation_stencil(coord);
        let square = self.square(hemisphere);
        indices
            .iter()
            .zip(weights.iter())
            .map(|(i, w)| square[*i] * w)
            .sum()
    }

    /// Bin-wise sum of two projections of the same dimension.
    pub fn merge(mut self, other: Self) -> Self {
        for (a, b) in self.north.iter_mut().zip(other.north.iter()) {
            *a += b;
        }
        for (a, b) in self.south.iter_mut().zip(other.south.iter()) {
            *a += b;
        }
        self
    }

    /// Scale each hemisphere so its bins sum to one. Empty hemispheres stay zero.
    pub fn normalize_squares(&mut self) {
        for square in [&mut self.north, &mut self.south] {
            let total: f64 = square.iter().sum();
            if total > 0.0 {
                square.iter_mut().for_each(|v| *v /= total);
            }
        }
    }

    /// Normalize to multiples of a random distribution: a uniform density reads 1 in every bin.
    pub fn normalize_to_mrd(&mut self) {
        self.normalize_squares();
        let bins = (self.dimension * self.dimension) as f64;
        self.north.iter_mut().for_each(|v| *v *= bins);
        self.south.iter_mut().for_each(|v| *v *= bins);
    }

    /// Resample onto a `dim`² stereographic image. Pixels outside the unit disk are zero,
    /// inside pixels average the values at the point and its antipode.
    pub fn stereographic_projection(&self, dim: usize, mode: ParallelMode) -> Vec<f64> {
        let mut intensity = vec![0.0; dim * dim];
        fill_indexed(mode, &mut intensity, |index, value| {
            if let Some(xyz) = stereographic_to_sphere(index % dim, index / dim, dim) {
                let mut sum = 0.0;
                for point in [xyz, -xyz] {
                    let (hemisphere, coord) = self.square_coord(&point);
                    sum += self.interpolated_value(hemisphere, &coord);
                }
                *value = sum * 0.5;
            }
        });
        intensity
    }
}

/// Unit-sphere point under pixel (x, y) of a `dim`² stereographic image, or None outside
/// the unit disk.
pub fn stereographic_to_sphere(x: usize, y: usize, dim: usize) -> Option<Vector3<f64>> {
    let half = (dim / 2) as f64;
    let res = 2.0 / dim as f64;
    let xs = (x as f64 - half) * res + res * 0.5;
    let ys = (y as f64 - half) * res + res * 0.5;
    let r2 = xs * xs + ys * ys;
    if r2 > 1.0 {
        return None;
    }
    let z = -(r2 - 1.0) / (r2 + 1.0);
    Some(Vector3::new(xs * (1.0 + z), ys * (1.0 + z), z))
}

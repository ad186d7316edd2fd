// Pole figures module: Lambert equal-area accumulation and stereographic pole figure images

// ======================== MODULE DECLARATIONS ========================
pub mod lambert_projection;
pub mod pole_figure;

// Test modules
mod _tests_lambert_projection;

// ======================== LAMBERT PROJECTION ========================
pub use lambert_projection::{
    ModifiedLambertProjection,      // struct - north/south equal-area squares
    stereographic_to_sphere,        // fn(x: usize, y: usize, dim: usize) -> Option<Vector3<f64>> - pixel to sphere point
};
// ModifiedLambertProjection impl methods:
//   new(dimension: usize, sphere_radius: f64) -> Self              - empty squares
//   from_points(dimension, sphere_radius, points) -> Self          - unit-weight projection of a point cloud
//   square_coord(&self, xyz: &Vector3<f64>) -> (Hemisphere, [f64; 2]) - equal-area square coordinate
//   square_index(&self, coord: &[f64; 2]) -> usize                 - clamped bin index
//   add_interpolated_value(&mut self, hemisphere, coord, value)    - bilinear splat with edge wrap
//   add_point(&mut self, xyz: &Vector3<f64>)                       - splat one sphere point
//   interpolated_value(&self, hemisphere, coord) -> f64            - bilinear read-back
//   merge(self, other: Self) -> Self                               - bin-wise sum
//   normalize_squares(&mut self) / normalize_to_mrd(&mut self)     - per-hemisphere normalization
//   stereographic_projection(&self, dim, mode) -> Vec<f64>         - resample to a stereographic image

// ======================== POLE FIGURES ========================
pub use pole_figure::{
    PoleFigureConfig,               // struct - image/lambert dimensions, palette size, label overrides
    PoleFigure,                     // struct - label plus dim² RGBA pixels
    generate_sphere_coords,         // fn(group, eulers: &[Vector3<f64>], mode) -> Vec<Vec<Vector3<f64>>> - poles per family
    generate_intensity_map,         // fn(points, config, mode) -> Vec<f64> - MRD stereographic intensity
    intensity_to_rgba,              // fn(intensity, dim, min, max, table, mode) -> Vec<u8> - palette painting
    generate_pole_figures,          // fn(group, eulers, config, mode) -> Result<Vec<PoleFigure>, Error>
};
// PoleFigureConfig impl methods:
//   default() -> Self                                              - 226 px images, 64 bin squares, 32 colors
//   validate(&self) -> Result<(), Error>                           - rejects empty dimensions and palettes

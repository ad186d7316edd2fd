use serde::{Deserialize, Serialize};

use crate::interfaces::{Rgb, BLACK};

// blue, cyan, green, yellow, red
const RAMP_STOPS: [[f64; 3]; 5] = [
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
];

/// Intensity palette used to paint pole figures, low values blue and high values red.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTable {
    colors: Vec<Rgb>,
}

impl ColorTable {
    /// Sample the ramp at `n` evenly spaced points. A single entry is pure blue.
    pub fn generate(n: usize) -> Self {
        let colors = (0..n)
            .map(|i| {
                let t = if n > 1 {
                    i as f64 / (n - 1) as f64
                } else {
                    0.0
                };
                ramp(t)
            })
            .collect();
        ColorTable { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color at `index`, saturating at the last entry.
    pub fn color(&self, index: usize) -> Rgb {
        match self.colors.last() {
            Some(last) => *self.colors.get(index).unwrap_or(last),
            None => BLACK,
        }
    }

    /// Color of `value` linearly placed between `min` and `max`.
    pub fn lookup(&self, value: f64, min: f64, max: f64) -> Rgb {
        if self.colors.is_empty() {
            return BLACK;
        }
        let range = max - min;
        let t = if range > 0.0 { (value - min) / range } else { 0.0 };
        let index = (t.clamp(0.0, 1.0) * (self.colors.len() - 1) as f64) as usize;
        self.color(index)
    }
}

fn ramp(t: f64) -> Rgb {
    let segments = (RAMP_STOPS.len() - 1) as f64;
    let x = t.clamp(0.0, 1.0) * segments;
    let i = (x.floor() as usize).min(RAMP_STOPS.len() - 2);
    let f = x - i as f64;
    let (a, b) = (RAMP_STOPS[i], RAMP_STOPS[i + 1]);
    let mix = |k: usize| ((a[k] + (b[k] - a[k]) * f) * 255.0).round().clamp(0.0, 255.0) as u8;
    [mix(0), mix(1), mix(2)]
}

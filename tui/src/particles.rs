//! Particle Backdrop
//!
//! A slowly tumbling cloud of points rendered behind the hero section.
//! Points are scattered uniformly in a unit cube; every frame the cloud is
//! rotated by low-frequency sine drift on two axes plus a fixed roll, then
//! projected orthographically onto the character grid. Depth picks both
//! the glyph and the fade level, so nearer points read brighter.
//!
//! The field is decorative: it draws under everything else and never
//! reacts to input.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::Palette;

/// Fixed roll applied on top of the drifting axes.
const ROLL: f32 = std::f32::consts::FRAC_PI_4;

/// Glyphs from farthest to nearest.
const GLYPHS: [char; 3] = ['·', '•', '●'];

/// Default point count for a hero-sized field.
pub const DEFAULT_COUNT: usize = 160;

pub struct ParticleField {
    points: Vec<[f32; 3]>,
    elapsed: Duration,
}

impl ParticleField {
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, &mut rand::thread_rng())
    }

    /// Deterministic field for tests.
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self::with_rng(count, &mut StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, rng: &mut impl Rng) -> Self {
        let points = (0..count)
            .map(|_| {
                [
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                ]
            })
            .collect();
        Self {
            points,
            elapsed: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.elapsed += delta;
    }

    /// Draw the field into `area`. Only touched cells are painted, so the
    /// layer stays transparent between points.
    pub fn render(&self, buf: &mut Buffer, area: Rect, palette: &Palette) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let t = self.elapsed.as_secs_f32();
        let pitch = (t / 10.0).sin();
        let yaw = (t / 15.0).sin();

        let half_w = area.width as f32 / 2.0;
        let half_h = area.height as f32 / 2.0;

        for point in &self.points {
            let [x, y, z] = rotate(*point, pitch, yaw, ROLL);

            // Orthographic projection; rows are roughly twice as tall as
            // columns, so y is compressed to keep the cloud round
            let col = (half_w + x * half_w * 0.9).round();
            let row = (half_h + y * half_h * 0.9 * 0.85).round();
            if col < 0.0 || row < 0.0 {
                continue;
            }
            let (col, row) = (col as u16, row as u16);
            if col >= area.width || row >= area.height {
                continue;
            }

            // z in [-1, 1], nearer is larger
            let depth = ((z + 1.0) / 2.0).clamp(0.0, 1.0);
            let glyph = GLYPHS[(depth * (GLYPHS.len() - 1) as f32).round() as usize];
            let opacity = 0.25 + depth * 0.6;
            let style = Style::new().fg(palette.faded(palette.accent, opacity));
            buf.set_string(area.x + col, area.y + row, glyph.to_string(), style);
        }
    }
}

/// Rotate a point around x (pitch), y (yaw) and z (roll), in that order.
fn rotate([x, y, z]: [f32; 3], pitch: f32, yaw: f32, roll: f32) -> [f32; 3] {
    let (sp, cp) = pitch.sin_cos();
    let (y, z) = (y * cp - z * sp, y * sp + z * cp);

    let (sy, cy) = yaw.sin_cos();
    let (x, z) = (x * cy + z * sy, -x * sy + z * cy);

    let (sr, cr) = roll.sin_cos();
    let (x, y) = (x * cr - y * sr, x * sr + y * cr);

    [x, y, z]
}

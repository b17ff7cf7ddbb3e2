//! Random placement and timing for the decorative particle field.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

/// Number of particles in the background field.
pub const PARTICLE_COUNT: usize = 50;

/// Position and animation timing for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleStyle {
    /// Horizontal position, percent of the viewport in `[0, 100)`.
    pub left_pct: f64,
    /// Vertical position, percent of the viewport in `[0, 100)`.
    pub top_pct: f64,
    /// Pulse animation delay in seconds, `[0, 2)`.
    pub delay_s: f64,
    /// Pulse animation duration in seconds, `[2, 5)`.
    pub duration_s: f64,
}

impl ParticleStyle {
    /// Inline style declaration for the particle element.
    pub fn inline_style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s;",
            self.left_pct, self.top_pct, self.delay_s, self.duration_s
        )
    }
}

/// Scatter `count` particles using `rand`, a source of values in `[0, 1)`.
///
/// Draws four values per particle in order: left, top, delay, duration.
/// Cosmetic only; there is no seeding or reproducibility requirement, so the
/// caller decides the source (`js_sys::Math::random` in the browser, a fixed
/// closure in tests).
pub fn scatter(count: usize, mut rand: impl FnMut() -> f64) -> Vec<ParticleStyle> {
    (0..count)
        .map(|_| ParticleStyle {
            left_pct: rand() * 100.0,
            top_pct: rand() * 100.0,
            delay_s: rand() * 2.0,
            duration_s: 2.0 + rand() * 3.0,
        })
        .collect()
}

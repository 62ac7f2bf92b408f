/// Animation utilities for the label color pulse.
use crate::core::types::Color;

#[derive(Debug, Clone)]
pub struct Animation {
    elapsed: f64,
    duration: f64,
    active: bool,
}

impl Animation {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            duration: 200.0,
            active: false,
        }
    }

    pub fn start(&mut self, duration_ms: f64) {
        self.elapsed = 0.0;
        self.duration = duration_ms;
        self.active = true;
    }

    pub fn update(&mut self, dt_ms: f64) {
        if self.active {
            self.elapsed += dt_ms;
            if self.elapsed >= self.duration {
                self.elapsed = self.duration;
                self.active = false;
            }
        }
    }

    /// Returns eased progress (0.0..=1.0) with ease-in-out cubic.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        Self::ease_in_out(t)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ease-in-out cubic: accelerates into the midpoint, decelerates out.
    fn ease_in_out(t: f64) -> f64 {
        if t < 0.5 {
            4.0 * t * t * t
        } else {
            let inv = -2.0 * t + 2.0;
            1.0 - inv * inv * inv / 2.0
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear interpolation between two values.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linear interpolation between two colors, per channel.
pub fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    Color {
        r: lerp(a.r, b.r, t),
        g: lerp(a.g, b.g, t),
        b: lerp(a.b, b.b, t),
        a: lerp(a.a, b.a, t),
    }
}

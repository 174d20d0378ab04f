use crate::config::CloudConfig;

/// Points along an outward elliptical Archimedean spiral, one per attempt.
///
/// Attempt `i` sits at angle `i * angle_step` and radius
/// `base_radius + i * radius_step`; the vertical component is scaled by
/// `vertical_scale`. The iterator ends after `max_attempts` points.
#[derive(Debug, Clone)]
pub(crate) struct Spiral {
    center_x: f64,
    center_y: f64,
    angle_step: f64,
    base_radius: f64,
    radius_step: f64,
    vertical_scale: f64,
    attempt: usize,
    max_attempts: usize,
}

impl Spiral {
    pub(crate) fn new(center_x: f64, center_y: f64, config: &CloudConfig) -> Self {
        Self {
            center_x,
            center_y,
            angle_step: config.spiral_angle_step,
            base_radius: config.spiral_base_radius,
            radius_step: config.spiral_radius_step,
            vertical_scale: config.spiral_vertical_scale,
            attempt: 0,
            max_attempts: config.max_attempts,
        }
    }
}

impl Iterator for Spiral {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.attempt >= self.max_attempts {
            return None;
        }
        let step = self.attempt as f64;
        let angle = step * self.angle_step;
        let radius = self.base_radius + step * self.radius_step;
        self.attempt += 1;
        Some((
            self.center_x + angle.cos() * radius,
            self.center_y + angle.sin() * radius * self.vertical_scale,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.max_attempts.saturating_sub(self.attempt);
        (left, Some(left))
    }
}

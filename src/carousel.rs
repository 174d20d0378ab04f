//! Rotation state for a ring of cards spun by drag or wheel input.
//!
//! The rotation accumulator is never wrapped, so a snap adds the shortest
//! signed delta to it and later drags keep composing from there.

use crate::config::CarouselConfig;

/// Signed delta in `[-180, 180)` that turns `current` onto `target`.
pub fn shortest_rotation(current: f64, target: f64) -> f64 {
    let delta = target - current % 360.0;
    (delta + 180.0).rem_euclid(360.0) - 180.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start_x: f64,
    start_rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// The card was brought to the front and flipped.
    Flipped { index: usize, rotation: f64 },
    /// The already-flipped card was turned back; rotation is unlocked.
    Unflipped { index: usize },
}

#[derive(Debug, Clone)]
pub struct Carousel {
    card_count: usize,
    rotation: f64,
    drag: Option<Drag>,
    flipped: Option<usize>,
    config: CarouselConfig,
}

impl Carousel {
    pub fn new(card_count: usize) -> Self {
        Self::with_config(card_count, CarouselConfig::default())
    }

    pub fn with_config(card_count: usize, config: CarouselConfig) -> Self {
        Self {
            card_count,
            rotation: 0.0,
            drag: None,
            flipped: None,
            config,
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn flipped(&self) -> Option<usize> {
        self.flipped
    }

    /// Rotation input is ignored while a card is flipped.
    pub fn is_locked(&self) -> bool {
        self.flipped.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn card_angle(&self) -> f64 {
        if self.card_count == 0 {
            return 0.0;
        }
        360.0 / self.card_count as f64
    }

    /// Angle of a card on the ring, before the carousel rotation applies.
    pub fn card_resting_angle(&self, index: usize) -> f64 {
        self.card_angle() * index as f64
    }

    /// `(x, z)` offset of a card on the ring, in the ring's own frame.
    pub fn card_position(&self, index: usize) -> (f64, f64) {
        let radians = self.card_resting_angle(index).to_radians();
        (
            radians.sin() * self.config.radius,
            radians.cos() * self.config.radius,
        )
    }

    pub fn begin_drag(&mut self, x: f64) {
        if self.is_locked() {
            return;
        }
        self.drag = Some(Drag {
            start_x: x,
            start_rotation: self.rotation,
        });
    }

    pub fn drag_to(&mut self, x: f64) {
        if self.is_locked() {
            return;
        }
        if let Some(drag) = self.drag {
            self.rotation = drag.start_rotation + (x - drag.start_x) * self.config.drag_sensitivity;
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn wheel(&mut self, delta_y: f64) {
        if self.is_locked() {
            return;
        }
        self.rotation += delta_y * self.config.wheel_sensitivity;
    }

    /// Toggles the card at `index`. Selecting a new card snaps it to the
    /// front along the shorter direction and locks rotation. Returns `None`
    /// for an index outside the ring.
    pub fn select(&mut self, index: usize) -> Option<Selection> {
        if index >= self.card_count {
            return None;
        }
        if self.flipped == Some(index) {
            self.flipped = None;
            tracing::debug!(index, "card unflipped");
            return Some(Selection::Unflipped { index });
        }

        let target = -self.card_resting_angle(index);
        let delta = shortest_rotation(self.rotation, target);
        self.rotation += delta;
        self.flipped = Some(index);
        self.drag = None;
        tracing::debug!(index, delta, rotation = self.rotation, "card snapped to front");
        Some(Selection::Flipped {
            index,
            rotation: self.rotation,
        })
    }
}

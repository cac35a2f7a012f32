//! Zero-length spring attaching one item's center to an anchor point.
//!
//! Motion is integrated in closed form, so a step of any length lands on the
//! exact trajectory of the damped oscillator: no drift, and a critically
//! damped spring never overshoots regardless of frame timing.

use crate::config::SpringParams;
use crate::error::LayoutError;
use crate::geometry::{Point, Size};
use crate::item::{ItemAttributes, ItemIndex};

/// A damped spring pulling an item toward its anchor.
#[derive(Clone, Debug)]
pub struct SpringModel {
    index: ItemIndex,
    anchor: Point,
    current: Point,
    velocity: Point,
    damping: f64,
    frequency: f64,
    angular_freq: f64,
}

impl SpringModel {
    /// Create a spring at rest on `anchor`.
    pub fn new(index: ItemIndex, anchor: Point, params: SpringParams) -> Result<Self, LayoutError> {
        params.validate()?;
        Ok(SpringModel {
            index,
            anchor,
            current: anchor,
            velocity: Point::ORIGIN,
            damping: params.damping,
            frequency: params.frequency,
            angular_freq: 2.0 * core::f64::consts::PI * params.frequency,
        })
    }

    /// Advance the simulation by `dt` seconds. Non-positive or non-finite
    /// `dt` is ignored.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let x0 = self.current - self.anchor;
        let v0 = self.velocity;
        let w = self.angular_freq;
        let zeta = self.damping;

        let (offset, velocity) = if zeta >= 1.0 {
            let exp_term = libm::exp(-w * dt);
            let c2 = v0 + x0.scale(w);
            let x = (x0 + c2.scale(dt)).scale(exp_term);
            let v = (v0 - c2.scale(w * dt)).scale(exp_term);
            (x, v)
        } else {
            let wd = w * libm::sqrt(1.0 - zeta * zeta);
            let exp_term = libm::exp(-zeta * w * dt);
            let (sin_term, cos_term) = (libm::sin(wd * dt), libm::cos(wd * dt));

            let a = x0;
            let b = (v0 + x0.scale(zeta * w)).scale(1.0 / wd);
            let x = (a.scale(cos_term) + b.scale(sin_term)).scale(exp_term);

            let v_cos = b.scale(wd) - a.scale(zeta * w);
            let v_sin = a.scale(wd) + b.scale(zeta * w);
            let v = (v_cos.scale(cos_term) - v_sin.scale(sin_term)).scale(exp_term);
            (x, v)
        };

        self.current = self.anchor + offset;
        self.velocity = velocity;
    }

    /// Move the anchor. The item follows on subsequent steps.
    pub fn set_target(&mut self, anchor: Point) { self.anchor = anchor; }

    /// Move the item, keeping its velocity. The anchor stays put.
    pub fn displace(&mut self, position: Point) { self.current = position; }

    pub fn position(&self) -> Point { self.current }
    pub fn anchor(&self) -> Point { self.anchor }
    pub fn velocity(&self) -> Point { self.velocity }
    pub fn index(&self) -> ItemIndex { self.index }
    pub fn damping(&self) -> f64 { self.damping }
    pub fn frequency(&self) -> f64 { self.frequency }

    /// Attachment length. Items sit exactly on their anchor at rest.
    pub fn rest_length(&self) -> f64 { 0.0 }

    pub fn is_settled(&self, eps_pos: f64, eps_vel: f64) -> bool {
        (self.current - self.anchor).length_sq() < eps_pos * eps_pos
            && self.velocity.length_sq() < eps_vel * eps_vel
    }

    pub fn snap_to_anchor(&mut self) {
        self.current = self.anchor;
        self.velocity = Point::ORIGIN;
    }

    pub fn attributes(&self, size: Size) -> ItemAttributes {
        ItemAttributes { index: self.index, center: self.current, size }
    }
}

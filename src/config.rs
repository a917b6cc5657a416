//! Simulation configuration
//!
//! All tunable constants of the simulation live here. The config is
//! immutable once handed to a simulator; a cosmetic widget must never
//! crash its host page, so malformed values are corrected silently
//! instead of being rejected.

use serde::{Deserialize, Serialize};

/// Default gravity, as a fraction of the surface's smaller dimension per
/// step². Moon gravity (1.62 m/s²) scaled to a 60 Hz step rate.
pub const DEFAULT_GRAVITY: f32 = 0.0004125;
/// Default hexagon rotation per step (radians)
pub const DEFAULT_ANGULAR_SPEED: f32 = 0.006;
/// Default velocity retention on bounce (1.0 = perfectly elastic)
pub const DEFAULT_RESTITUTION: f32 = 1.0;
/// Default per-step velocity multiplier (1.0 = frictionless)
pub const DEFAULT_FRICTION: f32 = 1.0;
/// Default ball radius as a fraction of the hexagon circumradius
pub const DEFAULT_BALL_RADIUS_RATIO: f32 = 0.1;
/// Default hexagon circumradius as a fraction of min(width, height)
pub const DEFAULT_HEX_RADIUS_RATIO: f32 = 0.375;
/// Default launch speed per axis, as a fraction of min(width, height) per step
pub const DEFAULT_LAUNCH_SPEED: f32 = 0.005;

const DEFAULT_HEXAGON_COLOR: &str = "#4d6bfe";
const DEFAULT_BALL_COLOR: &str = "#ff8c42";

/// Physics and appearance options for one simulator
///
/// Every field has a documented default, so a partial (or empty) JSON
/// object deserializes to a complete config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration per step, relative to min(width, height)
    pub gravity: f32,
    /// Hexagon rotation per step (radians)
    pub angular_speed: f32,
    /// Fraction of velocity retained on bounce
    pub restitution: f32,
    /// Per-step velocity multiplier applied to both axes
    pub friction: f32,
    /// Ball radius relative to the hexagon circumradius
    pub ball_radius_ratio: f32,
    /// Hexagon circumradius relative to min(width, height)
    pub hex_radius_ratio: f32,
    /// Initial speed per axis relative to min(width, height); the sign of
    /// each axis is chosen at random on spawn
    pub launch_speed: f32,
    /// Hexagon outline color (CSS color string)
    pub hexagon_color: String,
    /// Ball fill color (CSS color string)
    pub ball_color: String,
    /// Background fill; `None` clears to transparent
    pub background_color: Option<String>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            angular_speed: DEFAULT_ANGULAR_SPEED,
            restitution: DEFAULT_RESTITUTION,
            friction: DEFAULT_FRICTION,
            ball_radius_ratio: DEFAULT_BALL_RADIUS_RATIO,
            hex_radius_ratio: DEFAULT_HEX_RADIUS_RATIO,
            launch_speed: DEFAULT_LAUNCH_SPEED,
            hexagon_color: DEFAULT_HEXAGON_COLOR.to_string(),
            ball_color: DEFAULT_BALL_COLOR.to_string(),
            background_color: None,
        }
    }
}

impl PhysicsConfig {
    /// Correct out-of-range numeric options to their defaults
    ///
    /// Ratios must stay in (0, 1) so derived radii remain positive and
    /// smaller than the surface. Restitution and friction are clamped to
    /// their valid ranges; NaN/infinite values fall back to defaults.
    pub fn sanitize(mut self) -> Self {
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            self.gravity = DEFAULT_GRAVITY;
        }
        if !self.angular_speed.is_finite() {
            self.angular_speed = DEFAULT_ANGULAR_SPEED;
        }
        self.restitution = if self.restitution.is_finite() {
            self.restitution.clamp(0.0, 1.0)
        } else {
            DEFAULT_RESTITUTION
        };
        self.friction = if self.friction.is_finite() && self.friction > 0.0 {
            self.friction.min(1.0)
        } else {
            DEFAULT_FRICTION
        };
        if !ratio_valid(self.ball_radius_ratio) {
            self.ball_radius_ratio = DEFAULT_BALL_RADIUS_RATIO;
        }
        if !ratio_valid(self.hex_radius_ratio) {
            self.hex_radius_ratio = DEFAULT_HEX_RADIUS_RATIO;
        }
        if !self.launch_speed.is_finite() || self.launch_speed <= 0.0 {
            self.launch_speed = DEFAULT_LAUNCH_SPEED;
        }
        self
    }

    /// Parse a config from JSON, falling back to defaults on any error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Self>(json) {
            Ok(config) => config.sanitize(),
            Err(err) => {
                log::warn!("Invalid config JSON ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// Serialize the effective config for read-back
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[inline]
fn ratio_valid(ratio: f32) -> bool {
    ratio.is_finite() && ratio > 0.0 && ratio < 1.0
}

//! Gamestate.rs
//!
//! This module defines the session constants of the sandbox. They are
//! fixed when the app starts and never change while it runs.

use anyhow::ensure;
use bevy::prelude::*;

use crate::objects::traits::collisions::Position;

/// Width of the play area, in pixels
pub const WIDTH: f32 = 800.0;
/// Height of the play area, in pixels
pub const HEIGHT: f32 = 600.0;
/// Width of the telemetry column drawn right of the play area
pub const STAT_WIDTH: f32 = 200.0;
pub const STAT_MARGIN_LEFT: f32 = 20.0;

pub const PLANET_MASS: f32 = 200.0;
pub const PLANET_SIZE: f32 = 50.0; //planet radius
pub const SHIP_MASS: f32 = 5.0;
pub const OBJ_SIZE: f32 = 5.0; //ship marker radius, drawing only
pub const G: f32 = 5.0;
/// Divisor turning the drag length in pixels into velocity per step
pub const VEL_SCALE: f32 = 50.0;
pub const FPS: f64 = 60.0;

/// PlayArea struct
///
/// The rectangle ships live in. Edges belong to the area: a ship at
/// `x == 0` or `x == width` is still inside.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn contains(&self, point: &Position) -> bool {
        !(point.x < 0.0 || point.x > self.width || point.y < 0.0 || point.y > self.height)
    }

    /// Center of the area, truncated to whole pixels.
    pub fn center(&self) -> Position {
        Position::new((self.width / 2.0).trunc(), (self.height / 2.0).trunc())
    }
}

/// SandboxConfig struct: Resource
///
/// Every tunable of the session in one place
/// - area = play area bounds
/// - stat_width / stat_margin_left = telemetry column layout
/// - planet_* = the attractor, placed at the area center
/// - ship_mass / ship_radius = launched ships (radius only draws)
/// - gravity = G
/// - vel_scale = launch drag divisor
/// - frame_rate = physics steps per second
/// - parallel_threshold = live ship count at which stepping fans out on rayon
/// - planet_texture = optional image asset drawn instead of the planet disc
#[derive(Resource, Debug, Clone)]
pub struct SandboxConfig {
    pub area: PlayArea,
    pub stat_width: f32,
    pub stat_margin_left: f32,
    pub planet_name: String,
    pub planet_mass: f32,
    pub planet_radius: f32,
    pub planet_texture: Option<String>,
    pub ship_mass: f32,
    pub ship_radius: f32,
    pub gravity: f32,
    pub vel_scale: f32,
    pub frame_rate: f64,
    pub parallel_threshold: usize,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        SandboxConfig {
            area: PlayArea {
                width: WIDTH,
                height: HEIGHT,
            },
            stat_width: STAT_WIDTH,
            stat_margin_left: STAT_MARGIN_LEFT,
            planet_name: String::from("Earth"),
            planet_mass: PLANET_MASS,
            planet_radius: PLANET_SIZE,
            planet_texture: None,
            ship_mass: SHIP_MASS,
            ship_radius: OBJ_SIZE,
            gravity: G,
            vel_scale: VEL_SCALE,
            frame_rate: FPS,
            parallel_threshold: 512,
        }
    }
}

impl SandboxConfig {
    /// Checks the invariants the physics relies on and hands the config back.
    pub fn validated(self) -> anyhow::Result<Self> {
        ensure!(
            self.area.width > 0.0 && self.area.height > 0.0,
            "play area must have a positive size, got {}x{}",
            self.area.width,
            self.area.height
        );
        ensure!(self.stat_width >= 0.0, "stat column width cannot be negative");
        ensure!(self.planet_mass > 0.0, "planet mass must be positive");
        ensure!(self.planet_radius > 0.0, "planet radius must be positive");
        ensure!(self.ship_mass > 0.0, "ship mass must be positive");
        ensure!(self.ship_radius > 0.0, "ship marker radius must be positive");
        ensure!(self.vel_scale > 0.0, "velocity scale must be positive");
        ensure!(self.frame_rate > 0.0, "frame rate must be positive");
        Ok(self)
    }

    /// Full window size: play area plus the telemetry column.
    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.area.width + self.stat_width, self.area.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlayArea {
        PlayArea {
            width: WIDTH,
            height: HEIGHT,
        }
    }

    #[test]
    fn edges_belong_to_the_area() {
        let a = area();
        assert!(a.contains(&Position::new(0.0, 0.0)));
        assert!(a.contains(&Position::new(WIDTH, HEIGHT)));
        assert!(a.contains(&Position::new(0.0, HEIGHT)));
    }

    #[test]
    fn outside_each_edge_is_rejected() {
        let a = area();
        assert!(!a.contains(&Position::new(-1.0, 10.0)));
        assert!(!a.contains(&Position::new(WIDTH + 1.0, 10.0)));
        assert!(!a.contains(&Position::new(10.0, -1.0)));
        assert!(!a.contains(&Position::new(10.0, HEIGHT + 1.0)));
    }

    #[test]
    fn center_truncates() {
        let odd = PlayArea {
            width: 801.0,
            height: 599.0,
        };
        assert_eq!(odd.center(), Position::new(400.0, 299.0));
        assert_eq!(area().center(), Position::new(400.0, 300.0));
    }

    #[test]
    fn default_config_is_valid() {
        let config = SandboxConfig::default().validated().unwrap();
        assert_eq!(config.window_size(), Vec2::new(1000.0, 600.0));
    }

    #[test]
    fn bad_config_is_rejected() {
        let mut config = SandboxConfig::default();
        config.vel_scale = 0.0;
        assert!(config.validated().is_err());

        let mut config = SandboxConfig::default();
        config.planet_radius = -3.0;
        let err = config.validated().unwrap_err();
        assert!(err.to_string().contains("planet radius"));

        let mut config = SandboxConfig::default();
        config.area.height = 0.0;
        assert!(config.validated().is_err());
    }
}

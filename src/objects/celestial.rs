//! celestial.rs
//!
//! The single fixed attractor at the center of the scene.

use crate::objects::traits::collisions::{CollisionDetection, Position, Shapes};

/// CelestialBody struct
///
/// Pure data: where the planet sits, how heavy it is and how far its
/// surface reaches. Nothing mutates it after construction, every ship
/// reads the same values during a step.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    position: Position,
    mass: f32,
    radius: f32,
}

impl CelestialBody {
    pub fn new(x: f32, y: f32, mass: f32, radius: f32) -> Self {
        assert!(mass > 0.0 && radius > 0.0);

        CelestialBody {
            position: Position::new(x, y),
            mass,
            radius,
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl CollisionDetection for CelestialBody {
    fn get_position(&self) -> Position {
        self.position
    }

    fn get_hitbox(&self) -> Shapes {
        Shapes::Circle(self.radius)
    }
}

use crate::objects::celestial::CelestialBody;
use crate::objects::forces::{angle_to, distance, gravitational_force};
use crate::objects::traits::collisions::{CollisionDetection, Position, Shapes};
use std::fmt;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Velocity {
    pub vx: f32, //pixels per step, y grows down
    pub vy: f32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ID(pub u32);

impl fmt::Display for ID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Movable struct
///
/// A launched ship. Its mass never changes after construction; position
/// and velocity only ever change inside `advance`.
#[derive(Debug, Clone)]
pub struct Movable {
    id: ID,
    pub position: Position,
    pub velocity: Velocity,
    mass: f32,
}

impl Movable {
    //floor for the force distance, a ship sitting exactly on the planet
    //center would otherwise divide by zero
    const MIN_DISTANCE: f32 = 1.0e-3;

    pub fn new(id: ID, mass: f32) -> Self {
        assert!(mass > 0.0);

        Movable {
            id,
            position: Position::default(),
            velocity: Velocity::default(),
            mass,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) -> &mut Self {
        self.position.x = x;
        self.position.y = y;
        self
    }

    pub fn set_velocity(&mut self, vx: f32, vy: f32) -> &mut Self {
        self.velocity.vx = vx;
        self.velocity.vy = vy;
        self
    }

    //for method build chaining
    pub fn build(&self) -> Movable {
        self.clone()
    }

    pub fn get_id(&self) -> ID {
        self.id
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// One explicit Euler step towards `planet`.
    ///
    /// Velocity is kicked first and the new velocity moves the position,
    /// one step per frame with no sub-stepping. The ship's own mass cancels
    /// out of the acceleration, so trajectories don't depend on it.
    #[allow(non_snake_case)]
    pub fn advance(&mut self, planet: &CelestialBody, G: f32) {
        let dist = distance(self.position.x, self.position.y, planet.x(), planet.y())
            .max(Movable::MIN_DISTANCE);
        let force = gravitational_force(G, self.mass, planet.mass(), dist);
        let acceleration = force / self.mass;
        let theta = angle_to(self.position.x, self.position.y, planet.x(), planet.y());

        self.velocity.vx += acceleration * theta.cos();
        self.velocity.vy += acceleration * theta.sin();

        self.position.x += self.velocity.vx;
        self.position.y += self.velocity.vy;
    }
}

impl PartialEq for Movable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movable {}

impl CollisionDetection for Movable {
    fn get_position(&self) -> Position {
        self.position
    }

    fn get_hitbox(&self) -> Shapes {
        Shapes::Point
    }
}

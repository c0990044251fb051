//! World.rs
//!
//! The simulation context: one planet, every live ship, the half-finished
//! launch gesture and the id counter. Built once per session and handed to
//! the frame systems as a Bevy resource.

use bevy::prelude::*;
use log::{debug, info, trace};
use rayon::prelude::*;

use crate::objects::celestial::CelestialBody;
use crate::objects::gamestate::{PlayArea, SandboxConfig};
use crate::objects::movables::{ID, Movable};
use crate::objects::traits::collisions::{CollisionDetection, Position};

/// What a single pointer press did to the launch state machine
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Gesture {
    /// first press: origin recorded, nothing spawned yet
    Staged(Position),
    /// second press: ship spawned at the staged origin
    Launched(ID),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CullReason {
    OffScreen,
    Collided,
}

/// A ship removed by the cull pass
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Culled {
    pub id: ID,
    pub reason: CullReason,
}

/// Sandbox struct: Resource
///
/// Owns the live ship list in launch order. Ships only ever leave it
/// through `cull`, which runs right after every `advance_all` inside
/// `step`, so a ship that reached the planet surface is gone before its
/// next force evaluation.
#[derive(Resource, Debug)]
pub struct Sandbox {
    planet: CelestialBody,
    bodies: Vec<Movable>,
    staged: Option<Position>,
    next_id: u32,
    area: PlayArea,
    gravity: f32,
    vel_scale: f32,
    ship_mass: f32,
    parallel_threshold: usize,
}

impl Sandbox {
    pub fn new(config: &SandboxConfig) -> Self {
        let center = config.area.center();

        Sandbox {
            planet: CelestialBody::new(
                center.x,
                center.y,
                config.planet_mass,
                config.planet_radius,
            ),
            bodies: Vec::new(),
            staged: None,
            next_id: 1,
            area: config.area,
            gravity: config.gravity,
            vel_scale: config.vel_scale,
            ship_mass: config.ship_mass,
            parallel_threshold: config.parallel_threshold,
        }
    }

    pub fn planet(&self) -> &CelestialBody {
        &self.planet
    }

    pub fn bodies(&self) -> &[Movable] {
        &self.bodies
    }

    pub fn staged(&self) -> Option<Position> {
        self.staged
    }

    /// Feeds one pointer press into the launch state machine.
    ///
    /// Idle -> Staged records `pointer` as the origin. Staged -> Idle
    /// launches a ship from the origin with a velocity proportional to the
    /// drag towards `pointer`, then clears the staged point.
    pub fn gesture_start(&mut self, pointer: Position) -> Gesture {
        match self.staged.take() {
            None => {
                self.staged = Some(pointer);
                debug!("launch staged at ({}, {})", pointer.x, pointer.y);
                Gesture::Staged(pointer)
            }
            Some(origin) => {
                let vx = (pointer.x - origin.x) / self.vel_scale;
                let vy = (pointer.y - origin.y) / self.vel_scale;
                Gesture::Launched(self.launch(origin, vx, vy))
            }
        }
    }

    /// Adds a ship at `origin` moving at `(vx, vy)` and returns its id.
    pub fn launch(&mut self, origin: Position, vx: f32, vy: f32) -> ID {
        let id = ID(self.next_id);
        self.next_id += 1;

        self.bodies.push(
            Movable::new(id, self.ship_mass)
                .set_position(origin.x, origin.y)
                .set_velocity(vx, vy)
                .build(),
        );

        info!(
            "ship {} launched from ({}, {}) with velocity ({}, {})",
            id, origin.x, origin.y, vx, vy
        );
        id
    }

    /// Moves every live ship one Euler step towards the planet.
    ///
    /// Ships never read each other, so large fleets are advanced on rayon
    /// with the same results as the sequential path.
    pub fn advance_all(&mut self) {
        let planet = &self.planet;
        let gravity = self.gravity;

        if self.bodies.len() >= self.parallel_threshold {
            self.bodies
                .par_iter_mut()
                .for_each(|ship| ship.advance(planet, gravity));
        } else {
            for ship in self.bodies.iter_mut() {
                ship.advance(planet, gravity);
            }
        }
    }

    /// Why `ship` has to go, if it does.
    pub fn removal_reason(&self, ship: &Movable) -> Option<CullReason> {
        if !self.area.contains(&ship.get_position()) {
            Some(CullReason::OffScreen)
        } else if ship.collided(&self.planet) {
            Some(CullReason::Collided)
        } else {
            None
        }
    }

    /// Removes off-screen and crashed ships, keeping launch order for the
    /// rest. Verdicts are taken over the whole list before anything is
    /// dropped.
    pub fn cull(&mut self) -> Vec<Culled> {
        let verdicts: Vec<Option<CullReason>> = self
            .bodies
            .iter()
            .map(|ship| self.removal_reason(ship))
            .collect();

        let culled: Vec<Culled> = self
            .bodies
            .iter()
            .zip(verdicts.iter())
            .filter_map(|(ship, verdict)| {
                verdict.map(|reason| Culled {
                    id: ship.get_id(),
                    reason,
                })
            })
            .collect();

        if !culled.is_empty() {
            let mut verdict = verdicts.iter();
            self.bodies
                .retain(|_| matches!(verdict.next(), Some(None)));

            for gone in &culled {
                debug!("ship {} removed: {:?}", gone.id, gone.reason);
            }
        }

        culled
    }

    /// One simulation frame: advance everything, then cull.
    pub fn step(&mut self) -> Vec<Culled> {
        self.advance_all();
        let culled = self.cull();
        trace!("step done, {} ships live", self.bodies.len());
        culled
    }
}

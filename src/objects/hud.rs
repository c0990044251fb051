//! Hud.rs
//!
//! Bevy components tagging the entities that mirror the sandbox on screen,
//! plus the handles every ship marker shares.

use bevy::prelude::*;

use crate::objects::movables::ID;

/// PlanetSprite struct: Component
///
/// Tags the disc (or textured sprite) drawn for the planet
#[derive(Component)]
pub struct PlanetSprite;

/// ShipMarker struct: Component
///
/// Tags the red marker of one live ship. The id links the entity back to
/// the ship in the `Sandbox` list; the entity is despawned once that ship
/// is culled.
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShipMarker(pub ID);

/// StatText struct: Component
///
/// One pooled line of the stat column, by line index. Lines are reused
/// frame to frame and only spawned or despawned when the fleet size changes.
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq)]
pub struct StatText(pub usize);

/// ShipAssets struct: Resource
///
/// Mesh and material shared by all ship markers, built once at startup
#[derive(Resource, Default)]
pub struct ShipAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<ColorMaterial>,
}

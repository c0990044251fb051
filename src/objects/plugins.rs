use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use log::info;
use std::collections::BTreeMap;

use crate::objects::gamestate::SandboxConfig;
use crate::objects::hud::{PlanetSprite, ShipAssets, ShipMarker, StatText};
use crate::objects::movables::{ID, Movable};
use crate::objects::telemetry::{ship_label, stat_lines};
use crate::objects::traits::collisions::Position;
use crate::objects::world::Sandbox;

const SPACE_COLOR: Color = Color::srgb(0.02, 0.02, 0.06);
const STAT_BKG_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
const PLANET_COLOR: Color = Color::srgb(0.2, 0.45, 0.9);
const SHIP_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const PREVIEW_COLOR: Color = Color::WHITE;
const STAT_FONT_SIZE: f32 = 22.0;
const SHIP_FONT_SIZE: f32 = 12.0;

/// GravitySandbox plugin
///
/// The frame driver. Physics steps on `FixedUpdate` at the configured rate;
/// input, the ship markers, the launch preview and the stat column run on
/// `Update` and only read the sandbox, apart from the click handler.
pub struct GravitySandbox {
    config: SandboxConfig,
}

impl GravitySandbox {
    pub fn new(config: SandboxConfig) -> Self {
        GravitySandbox { config }
    }
}

impl Plugin for GravitySandbox {
    fn build(&self, app: &mut App) {
        let config = &self.config;
        info!(
            "gravity sandbox {}x{}: planet {} (mass {}, radius {}), G = {}, {} steps/s",
            config.area.width,
            config.area.height,
            config.planet_name,
            config.planet_mass,
            config.planet_radius,
            config.gravity,
            config.frame_rate
        );

        app.insert_resource(config.clone());
        app.insert_resource(Sandbox::new(config));
        app.insert_resource(Time::<Fixed>::from_hz(config.frame_rate));
        app.insert_resource(ClearColor(SPACE_COLOR));
        app.init_resource::<ShipAssets>();
        app.add_systems(Startup, (setup_scene, setup_ship_assets));
        app.add_systems(FixedUpdate, step_simulation);
        app.add_systems(
            Update,
            (
                handle_clicks,
                sync_ships,
                draw_launch_preview,
                update_statbar,
            )
                .chain(),
        );
    }
}

/// Maps a world point (top-left origin, y down) onto the centered, y-up
/// 2D camera space.
pub fn to_screen(config: &SandboxConfig, point: Position) -> Vec2 {
    let size = config.window_size();
    Vec2::new(point.x - size.x / 2.0, size.y / 2.0 - point.y)
}

//markers snap to whole pixels
fn marker_translation(config: &SandboxConfig, ship: &Movable) -> Vec3 {
    let snapped = Position::new(ship.position.x.trunc(), ship.position.y.trunc());
    to_screen(config, snapped).extend(1.0)
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    asset_server: Res<AssetServer>,
    config: Res<SandboxConfig>,
    sandbox: Res<Sandbox>,
) {
    commands.spawn(Camera2d);

    //stat column background
    let column_center = Position::new(
        config.area.width + config.stat_width / 2.0,
        config.area.height / 2.0,
    );
    commands.spawn((
        Mesh2d(meshes.add(Rectangle::new(config.stat_width, config.area.height))),
        MeshMaterial2d(materials.add(STAT_BKG_COLOR)),
        Transform::from_translation(to_screen(&config, column_center).extend(-1.0)),
    ));

    let planet = sandbox.planet();
    let at = to_screen(&config, Position::new(planet.x(), planet.y())).extend(0.0);

    match &config.planet_texture {
        Some(path) => {
            commands.spawn((
                Sprite {
                    image: asset_server.load(path.clone()),
                    custom_size: Some(Vec2::splat(2.0 * planet.radius())),
                    ..default()
                },
                Transform::from_translation(at),
                PlanetSprite,
            ));
        }
        None => {
            commands.spawn((
                Mesh2d(meshes.add(Circle::new(planet.radius()))),
                MeshMaterial2d(materials.add(PLANET_COLOR)),
                Transform::from_translation(at),
                PlanetSprite,
            ));
        }
    }
}

fn setup_ship_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<SandboxConfig>,
) {
    commands.insert_resource(ShipAssets {
        mesh: meshes.add(Circle::new(config.ship_radius)),
        material: materials.add(SHIP_COLOR),
    });
}

fn step_simulation(mut sandbox: ResMut<Sandbox>) {
    sandbox.step();
}

/// Every button pressed this frame is one gesture at the cursor.
fn handle_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    window: Single<&Window, With<PrimaryWindow>>,
    mut sandbox: ResMut<Sandbox>,
) {
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    for _ in mouse.get_just_pressed() {
        sandbox.gesture_start(Position::new(cursor.x, cursor.y));
    }
}

/// Keeps one marker entity per live ship: moves the survivors, despawns the
/// culled and spawns the newly launched.
fn sync_ships(
    mut commands: Commands,
    assets: Res<ShipAssets>,
    config: Res<SandboxConfig>,
    sandbox: Res<Sandbox>,
    mut markers: Query<(Entity, &ShipMarker, &mut Transform)>,
) {
    let mut live: BTreeMap<ID, &Movable> = sandbox
        .bodies()
        .iter()
        .map(|ship| (ship.get_id(), ship))
        .collect();

    for (entity, marker, mut transform) in &mut markers {
        match live.remove(&marker.0) {
            Some(ship) => transform.translation = marker_translation(&config, ship),
            None => commands.entity(entity).despawn(),
        }
    }

    for ship in live.into_values() {
        commands.spawn((
            Mesh2d(assets.mesh.clone()),
            MeshMaterial2d(assets.material.clone()),
            Transform::from_translation(marker_translation(&config, ship)),
            ShipMarker(ship.get_id()),
            children![(
                Text2d::new(ship_label(ship)),
                TextFont {
                    font_size: SHIP_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                Transform::from_xyz(0.0, 3.0 * config.ship_radius, 0.0),
            )],
        ));
    }
}

fn draw_launch_preview(
    mut gizmos: Gizmos,
    config: Res<SandboxConfig>,
    sandbox: Res<Sandbox>,
    window: Single<&Window, With<PrimaryWindow>>,
) {
    let Some(origin) = sandbox.staged() else {
        return;
    };
    let start = to_screen(&config, origin);

    if let Some(cursor) = window.cursor_position() {
        let end = to_screen(&config, Position::new(cursor.x, cursor.y));
        gizmos.line_2d(start, end, PREVIEW_COLOR);
    }
    gizmos.circle_2d(start, config.ship_radius, SHIP_COLOR);
}

/// Rewrites the stat column, reusing line entities by index.
fn update_statbar(
    mut commands: Commands,
    config: Res<SandboxConfig>,
    sandbox: Res<Sandbox>,
    mut pool: Query<(Entity, &StatText, &mut Text, &mut Node)>,
) {
    let lines = stat_lines(&config.planet_name, sandbox.bodies());
    let left = config.area.width + config.stat_margin_left;
    let mut filled = vec![false; lines.len()];

    for (entity, slot, mut text, mut node) in &mut pool {
        match lines.get(slot.0) {
            Some(line) => {
                if text.0 != line.text {
                    text.0 = line.text.clone();
                }
                if node.top != px(line.top) {
                    node.top = px(line.top);
                }
                filled[slot.0] = true;
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for (index, line) in lines.iter().enumerate() {
        if filled[index] {
            continue;
        }
        commands.spawn((
            Text::new(line.text.clone()),
            TextFont {
                font_size: STAT_FONT_SIZE,
                ..default()
            },
            TextColor(Color::BLACK),
            Node {
                position_type: PositionType::Absolute,
                top: px(line.top),
                left: px(left),
                ..default()
            },
            StatText(index),
        ));
    }
}

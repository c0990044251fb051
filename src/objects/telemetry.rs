//! Telemetry.rs
//!
//! Read-only view of the live ships for the stat column. Physics keeps the
//! screen convention (y grows down); the vertical velocity is flipped here
//! so that "up" reads as positive. Nothing in this module touches state.

use crate::objects::movables::Movable;

const HEADER_TOP: f32 = 10.0;
const TOTAL_TOP: f32 = 40.0;
const ROW_PITCH: f32 = 90.0;
const LINE_PITCH: f32 = 25.0;

/// One line of text in the stat column, `top` in pixels from the window top
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub text: String,
    pub top: f32,
}

impl StatLine {
    fn new(text: String, top: f32) -> Self {
        StatLine { text, top }
    }
}

/// Per ship numbers as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct ShipStat {
    pub id: u32,
    pub vx: f32,
    pub vy: f32, //up is positive
}

impl ShipStat {
    pub fn from_ship(ship: &Movable) -> Self {
        ShipStat {
            id: ship.get_id().0,
            vx: round2(ship.velocity.vx),
            vy: round2(-ship.velocity.vy),
        }
    }
}

/// Rounds to two decimals and folds `-0.0` into `0.0`.
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Builds every stat column line for the current fleet.
pub fn stat_lines(planet_name: &str, ships: &[Movable]) -> Vec<StatLine> {
    let mut lines = vec![
        StatLine::new(format!("Planet: {}", planet_name), HEADER_TOP),
        StatLine::new(format!("Total = {}", ships.len()), TOTAL_TOP),
    ];

    for (index, ship) in ships.iter().enumerate() {
        let stat = ShipStat::from_ship(ship);
        let top = (index + 1) as f32 * ROW_PITCH;

        lines.push(StatLine::new(format!("Object ID: {}", stat.id), top));
        lines.push(StatLine::new(format!("X VEL. = {}", stat.vx), top + LINE_PITCH));
        lines.push(StatLine::new(
            format!("Y VEL. = {}", stat.vy),
            top + 2.0 * LINE_PITCH,
        ));
    }

    lines
}

/// Label drawn next to a ship marker.
pub fn ship_label(ship: &Movable) -> String {
    format!("ID: {}", ship.get_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::movables::ID;

    fn ship(id: u32, vx: f32, vy: f32) -> Movable {
        Movable::new(ID(id), 5.0)
            .set_position(10.0, 10.0)
            .set_velocity(vx, vy)
            .build()
    }

    #[test]
    fn empty_fleet_shows_header_only() {
        let lines = stat_lines("Earth", &[]);
        assert_eq!(
            lines,
            vec![
                StatLine::new("Planet: Earth".into(), 10.0),
                StatLine::new("Total = 0".into(), 40.0),
            ]
        );
    }

    #[test]
    fn rows_are_laid_out_per_ship() {
        let lines = stat_lines("Earth", &[ship(1, 1.0, 0.6), ship(7, -0.25, -2.0)]);

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1].text, "Total = 2");
        assert_eq!(lines[2], StatLine::new("Object ID: 1".into(), 90.0));
        assert_eq!(lines[3], StatLine::new("X VEL. = 1".into(), 115.0));
        assert_eq!(lines[4], StatLine::new("Y VEL. = -0.6".into(), 140.0));
        assert_eq!(lines[5], StatLine::new("Object ID: 7".into(), 180.0));
        assert_eq!(lines[6].text, "X VEL. = -0.25");
        assert_eq!(lines[7].text, "Y VEL. = 2");
    }

    #[test]
    fn vertical_velocity_is_flipped_for_display_only() {
        let s = ship(3, 0.0, 1.5);
        assert_eq!(ShipStat::from_ship(&s).vy, -1.5);
        assert_eq!(s.velocity.vy, 1.5);
    }

    #[test]
    fn rounding_drops_noise_and_negative_zero() {
        assert_eq!(round2(0.123_456), 0.12);
        assert_eq!(round2(-0.001), 0.0);
        assert!(round2(-0.001).is_sign_positive());
        assert_eq!(format!("{}", round2(-0.004)), "0");
    }

    #[test]
    fn ship_label_shows_id() {
        assert_eq!(ship_label(&ship(42, 0.0, 0.0)), "ID: 42");
    }
}

use crate::objects::forces;

/// Hit-box of anything taking part in the cull's contact test.
pub enum Shapes {
    Circle(f32), //radius
    Point,
}

/// A location in world space: origin at the top-left corner of the
/// play area, x grows right, y grows DOWN (screen convention).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }
}

pub trait CollisionDetection {
    fn get_position(&self) -> Position;
    fn get_hitbox(&self) -> Shapes;

    fn distance_to(&self, point: &Position) -> f32 {
        let me = self.get_position();
        forces::distance(me.x, me.y, point.x, point.y)
    }

    /// Touching counts as a collision: `distance <= r1 + r2`.
    fn collided(&self, other: &dyn CollisionDetection) -> bool {
        let distance = self.distance_to(&other.get_position());

        let reach = |shape: Shapes| match shape {
            Shapes::Circle(r) => r,
            Shapes::Point => 0.0,
        };

        distance <= reach(self.get_hitbox()) + reach(other.get_hitbox())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dot(Position);
    struct Disc(Position, f32);

    impl CollisionDetection for Dot {
        fn get_position(&self) -> Position {
            self.0
        }
        fn get_hitbox(&self) -> Shapes {
            Shapes::Point
        }
    }

    impl CollisionDetection for Disc {
        fn get_position(&self) -> Position {
            self.0
        }
        fn get_hitbox(&self) -> Shapes {
            Shapes::Circle(self.1)
        }
    }

    #[test]
    fn point_on_rim_collides() {
        let disc = Disc(Position::new(0.0, 0.0), 5.0);
        assert!(Dot(Position::new(3.0, 4.0)).collided(&disc));
        assert!(disc.collided(&Dot(Position::new(0.0, -5.0))));
    }

    #[test]
    fn point_outside_rim_does_not_collide() {
        let disc = Disc(Position::new(0.0, 0.0), 5.0);
        assert!(!Dot(Position::new(5.01, 0.0)).collided(&disc));
    }

    #[test]
    fn circles_touching_collide() {
        let a = Disc(Position::new(0.0, 0.0), 2.0);
        let b = Disc(Position::new(5.0, 0.0), 3.0);
        assert!(a.collided(&b));
    }
}

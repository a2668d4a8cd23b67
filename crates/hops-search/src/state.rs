use std::hash::{Hash, Hasher};

use hops_core::Point;

/// Identity of a node in the hop graph: where the hopper is and how fast it
/// is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub pos: Point,
    pub vel: Point,
}

/// A node of the hop graph together with the number of hops it took to
/// discover it.
///
/// Equality and hashing only look at position and velocity; `hops` is
/// metadata and never part of the node's identity.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HopperState {
    pub pos: Point,
    pub vel: Point,
    pub hops: u32,
}

impl HopperState {
    /// A hopper standing still at `pos` before its first hop.
    #[inline]
    pub const fn at_rest(pos: Point) -> Self {
        Self {
            pos,
            vel: Point::ZERO,
            hops: 0,
        }
    }

    /// Horizontal velocity component.
    #[inline]
    pub const fn velocity_x(&self) -> i32 {
        self.vel.x
    }

    /// Vertical velocity component.
    #[inline]
    pub const fn velocity_y(&self) -> i32 {
        self.vel.y
    }

    /// The graph identity of this state.
    #[inline]
    pub const fn key(&self) -> StateKey {
        StateKey {
            pos: self.pos,
            vel: self.vel,
        }
    }

    /// The state reached by changing velocity by `accel` and then moving by
    /// the new velocity. No validity checks are made.
    #[inline]
    pub fn hop(&self, accel: Point) -> Self {
        let vel = self.vel + accel;
        Self {
            pos: self.pos + vel,
            vel,
            hops: self.hops + 1,
        }
    }
}

impl PartialEq for HopperState {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HopperState {}

impl Hash for HopperState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hop_applies_acceleration_before_moving() {
        let s = HopperState {
            pos: Point::new(2, 2),
            vel: Point::new(1, 0),
            hops: 4,
        };
        let n = s.hop(Point::new(1, -1));
        assert_eq!(n.vel, Point::new(2, -1));
        assert_eq!(n.pos, Point::new(4, 1));
        assert_eq!(n.hops, 5);
        assert_eq!((n.velocity_x(), n.velocity_y()), (2, -1));
    }

    #[test]
    fn hops_excluded_from_identity() {
        let a = HopperState::at_rest(Point::new(1, 1));
        let b = HopperState { hops: 7, ..a };
        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn velocity_is_part_of_identity() {
        let a = HopperState::at_rest(Point::new(1, 1));
        let b = HopperState {
            vel: Point::new(0, 1),
            ..a
        };
        assert_ne!(a, b);
    }
}

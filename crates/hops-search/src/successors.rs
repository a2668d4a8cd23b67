use hops_core::Point;

use crate::state::HopperState;
use crate::traits::Terrain;

/// Every velocity change allowed in a single hop: -1, 0 or +1 on each axis.
pub const ACCELERATIONS: [Point; 9] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 0),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// Whether neither velocity component exceeds `max_speed` in magnitude.
#[inline]
pub fn is_valid_velocity(vel: Point, max_speed: u16) -> bool {
    vel.max_abs() <= i32::from(max_speed)
}

/// Cached successor computation helper.
///
/// Holds the output buffer so that expanding a state does not allocate.
#[derive(Debug, Clone)]
pub struct Successors {
    buf: Vec<HopperState>,
}

impl Default for Successors {
    fn default() -> Self {
        Self::new()
    }
}

impl Successors {
    /// Create a new `Successors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(ACCELERATIONS.len()),
        }
    }

    /// Return the legal successors of `state`: for each acceleration, the new
    /// velocity must respect `max_speed` and the landing cell must be free on
    /// `terrain`.
    pub fn of<T: Terrain + ?Sized>(
        &mut self,
        terrain: &T,
        state: &HopperState,
        max_speed: u16,
    ) -> &[HopperState] {
        self.buf.clear();
        for accel in ACCELERATIONS {
            if !is_valid_velocity(state.vel + accel, max_speed) {
                continue;
            }
            let next = state.hop(accel);
            if terrain.is_free(next.pos) {
                self.buf.push(next);
            }
        }
        &self.buf
    }
}

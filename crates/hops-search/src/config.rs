/// Default per-axis speed cap.
pub const MAX_SPEED: u16 = 3;

/// Tunables shared by every search of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Largest absolute velocity allowed on either axis.
    pub max_speed: u16,
}

impl SearchConfig {
    /// Configuration with a custom speed cap.
    pub const fn with_max_speed(max_speed: u16) -> Self {
        Self { max_speed }
    }

    /// Number of distinct velocities a hopper can have.
    pub fn velocity_count(&self) -> usize {
        let per_axis = 2 * usize::from(self.max_speed) + 1;
        per_axis * per_axis
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_speed_cap() {
        assert_eq!(SearchConfig::default().max_speed, 3);
        assert_eq!(SearchConfig::default().velocity_count(), 49);
        assert_eq!(SearchConfig::with_max_speed(0).velocity_count(), 1);
    }
}

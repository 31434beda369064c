//! Output volume control.
//!
//! The user-facing level is a [`VolumePercent`] moved in fixed steps by the
//! volume buttons.

use platform::VolumePercent;

/// Current level plus step handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeControl {
    level: VolumePercent,
}

impl VolumeControl {
    /// Control starting at `level`.
    pub fn new(level: VolumePercent) -> Self {
        Self { level }
    }

    /// One step louder, saturating at 100 %.
    pub fn up(&mut self) -> VolumePercent {
        self.level = self.level.step_up();
        tracing::debug!(volume = self.level.get(), "volume up");
        self.level
    }

    /// One step quieter, saturating at 0 %.
    pub fn down(&mut self) -> VolumePercent {
        self.level = self.level.step_down();
        tracing::debug!(volume = self.level.get(), "volume down");
        self.level
    }

    /// Current level.
    pub fn level(&self) -> VolumePercent {
        self.level
    }
}

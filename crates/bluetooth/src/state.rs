//! Bluetooth pairing state tracker.

/// Where the audio sink connection stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PairingState {
    /// No pairing requested since the last reset.
    #[default]
    Idle,
    /// Pairing requested; waiting for the sink to come up.
    Pairing,
    /// Sink connected.
    Connected,
}

impl PairingState {
    /// Returns `true` once the sink is connected.
    #[must_use]
    pub fn connected(self) -> bool {
        self == Self::Connected
    }

    /// Returns `true` while a request is outstanding.
    #[must_use]
    pub fn pending(self) -> bool {
        self == Self::Pairing
    }
}

#[cfg(test)]
mod tests {
    use super::PairingState;

    #[test]
    fn test_bt_starts_idle() {
        let state = PairingState::default();
        assert_eq!(state, PairingState::Idle);
        assert!(!state.connected());
        assert!(!state.pending());
    }

    #[test]
    fn test_bt_connected() {
        assert!(PairingState::Connected.connected());
        assert!(!PairingState::Connected.pending());
    }

    #[test]
    fn test_bt_pairing_is_pending() {
        assert!(PairingState::Pairing.pending());
    }
}

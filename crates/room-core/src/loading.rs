//! Loading screen gate: stays up for a minimum time from start, hides once the
//! main scene is attached. Checked from the frame tick.

use crate::constants::LOADING_MIN_DURATION_MS;
use std::time::Duration;

/// The four asset bundles making up the room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Room,
    Mirror,
    Typewriter,
    Agent,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Room,
        AssetKind::Mirror,
        AssetKind::Typewriter,
        AssetKind::Agent,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AssetKind::Room => "models/room.glb",
            AssetKind::Mirror => "models/mirror.glb",
            AssetKind::Typewriter => "models/typewriter.glb",
            AssetKind::Agent => "models/agent.glb",
        }
    }

    /// Text that replaces the loading message when this asset fails. Only the
    /// room and the mirror surface a failure; the others are logged.
    pub fn failure_text(self) -> Option<&'static str> {
        match self {
            AssetKind::Room => Some("Error loading main scene"),
            AssetKind::Mirror => Some("Error loading mirror model"),
            AssetKind::Typewriter | AssetKind::Agent => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingState {
    Waiting,
    Loaded { at: Duration },
    Failed,
    Hidden,
}

#[derive(Clone, Debug)]
pub struct LoadingGate {
    min_duration: Duration,
    state: LoadingState,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(Duration::from_millis(LOADING_MIN_DURATION_MS))
    }
}

impl LoadingGate {
    pub fn new(min_duration: Duration) -> Self {
        Self {
            min_duration,
            state: LoadingState::Waiting,
        }
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn mark_loaded(&mut self, now: Duration) {
        if self.state == LoadingState::Waiting {
            self.state = LoadingState::Loaded { at: now };
        }
    }

    /// Records a failure for `asset` and returns the text to show, if any.
    /// A room failure keeps the screen up for good.
    pub fn mark_failed(&mut self, asset: AssetKind) -> Option<&'static str> {
        if asset == AssetKind::Room && self.state == LoadingState::Waiting {
            self.state = LoadingState::Failed;
        }
        asset.failure_text()
    }

    /// When the screen should disappear, given a load finishing at `loaded_at`
    /// (both measured from start).
    pub fn hide_at(&self, loaded_at: Duration) -> Duration {
        loaded_at.max(self.min_duration)
    }

    /// Returns `true` exactly once: on the first tick at or after the hide time.
    pub fn tick(&mut self, now: Duration) -> bool {
        let LoadingState::Loaded { at } = self.state else {
            return false;
        };
        if now < self.hide_at(at) {
            return false;
        }
        self.state = LoadingState::Hidden;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fast_load_waits_for_minimum() {
        let mut gate = LoadingGate::default();
        gate.mark_loaded(ms(800));
        assert!(!gate.tick(ms(2999)));
        assert!(gate.tick(ms(3000)));
        assert!(!gate.tick(ms(3100)));
        assert_eq!(gate.state(), LoadingState::Hidden);
    }

    #[test]
    fn slow_load_hides_immediately() {
        let mut gate = LoadingGate::default();
        assert!(!gate.tick(ms(4000)));
        gate.mark_loaded(ms(4500));
        assert!(gate.tick(ms(4500)));
    }

    #[test]
    fn only_room_and_mirror_report_failure_text() {
        let mut gate = LoadingGate::default();
        assert_eq!(gate.mark_failed(AssetKind::Agent), None);
        assert_eq!(gate.state(), LoadingState::Waiting);
        assert_eq!(gate.mark_failed(AssetKind::Mirror), Some("Error loading mirror model"));
        assert_eq!(gate.mark_failed(AssetKind::Room), Some("Error loading main scene"));
        gate.mark_loaded(ms(100));
        assert!(!gate.tick(ms(10_000)));
    }
}

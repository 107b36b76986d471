//! Single-active-panel overlay manager. Mounting any panel first unmounts
//! every panel present on the host, so at most one is ever mounted.

use crate::tag::SoundCue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    Documentation,
    Team,
    Tokenomics,
    Agent,
    Typewriter,
    Social,
    Selection,
}

impl Panel {
    pub const ALL: [Panel; 7] = [
        Panel::Documentation,
        Panel::Team,
        Panel::Tokenomics,
        Panel::Agent,
        Panel::Typewriter,
        Panel::Social,
        Panel::Selection,
    ];

    /// DOM id of the mounted panel root.
    pub fn element_id(self) -> &'static str {
        match self {
            Panel::Documentation => "docs-menu",
            Panel::Team => "team-menu",
            Panel::Tokenomics => "tokenomics-menu",
            Panel::Agent => "agent-menu",
            Panel::Typewriter => "typewriter-menu",
            Panel::Social => "social-menu",
            Panel::Selection => "papers-selection-menu",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Panel::Documentation => "documentation",
            Panel::Team => "team",
            Panel::Tokenomics => "tokenomics",
            Panel::Agent => "agent",
            Panel::Typewriter => "typewriter",
            Panel::Social => "social",
            Panel::Selection => "selection",
        }
    }

    /// `(left, right)` arrow destinations for the paper panels.
    pub fn neighbours(self) -> Option<(Panel, Panel)> {
        match self {
            Panel::Documentation => Some((Panel::Tokenomics, Panel::Team)),
            Panel::Team => Some((Panel::Documentation, Panel::Tokenomics)),
            Panel::Tokenomics => Some((Panel::Team, Panel::Documentation)),
            _ => None,
        }
    }

    pub fn is_paper(self) -> bool {
        self.neighbours().is_some()
    }
}

/// Whatever renders panels (the DOM in the browser, a list in tests).
pub trait PanelHost {
    fn is_mounted(&self, panel: Panel) -> bool;
    fn mount(&mut self, panel: Panel);
    fn unmount(&mut self, panel: Panel);
    /// Appends revealed text to a mounted panel's body.
    fn append_text(&mut self, panel: Panel, text: &str);
}

/// Requests raised by panel buttons, queued until the next frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    Close(Panel),
    Navigate(Panel),
    Choose(Panel),
}

/// What a close request asks of the rest of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseOutcome {
    pub removed: bool,
    pub return_to_base: bool,
}

/// Result of an arrow navigation between paper panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub opened: Panel,
    pub cue: SoundCue,
}

#[derive(Debug, Default)]
pub struct OverlayManager {
    current: Option<Panel>,
}

impl OverlayManager {
    pub fn current(&self) -> Option<Panel> {
        self.current
    }

    /// Unmounts everything present, then mounts `panel`. Content is rebuilt on
    /// every call.
    pub fn open(&mut self, host: &mut impl PanelHost, panel: Panel) {
        for p in Panel::ALL {
            if host.is_mounted(p) {
                host.unmount(p);
            }
        }
        host.mount(panel);
        self.current = Some(panel);
        log::info!("[overlay] open {}", panel.name());
    }

    /// Removes `panel` if present. Every close returns the camera to its rest pose.
    pub fn close(&mut self, host: &mut impl PanelHost, panel: Panel) -> CloseOutcome {
        let removed = self.remove(host, panel);
        log::info!("[overlay] close {} (present: {})", panel.name(), removed);
        CloseOutcome {
            removed,
            return_to_base: true,
        }
    }

    /// Arrow navigation between paper panels: swaps panels in one step and
    /// asks for the paper cue. The camera stays where it is.
    pub fn navigate(&mut self, host: &mut impl PanelHost, to: Panel) -> Navigation {
        if let Some(cur) = self.current {
            self.remove(host, cur);
        }
        self.open(host, to);
        Navigation {
            opened: to,
            cue: SoundCue::Paper,
        }
    }

    /// Selection-card choice: replaces the selection panel, no cue.
    pub fn choose(&mut self, host: &mut impl PanelHost, to: Panel) {
        self.remove(host, Panel::Selection);
        self.open(host, to);
    }

    fn remove(&mut self, host: &mut impl PanelHost, panel: Panel) -> bool {
        let present = host.is_mounted(panel);
        if present {
            host.unmount(panel);
        }
        if self.current == Some(panel) {
            self.current = None;
        }
        present
    }
}

//! Interactive object categories and the per-category parameters that hover,
//! zoom and overlay handling look up.

use crate::constants::*;
use crate::overlay::Panel;

/// Category tag carried by a scene-graph node (or one of its ancestors).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectTag {
    Papers,
    Mirror,
    Typewriter,
    Agent,
}

impl ObjectTag {
    pub const ALL: [ObjectTag; 4] = [
        ObjectTag::Papers,
        ObjectTag::Mirror,
        ObjectTag::Typewriter,
        ObjectTag::Agent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ObjectTag::Papers => "papers",
            ObjectTag::Mirror => "mirror",
            ObjectTag::Typewriter => "typewriter",
            ObjectTag::Agent => "agent",
        }
    }

    /// Emissive color written to the object's materials while hovered.
    pub fn highlight_color(self) -> [f32; 3] {
        match self {
            ObjectTag::Papers | ObjectTag::Typewriter => HIGHLIGHT_BRIGHT,
            ObjectTag::Mirror => HIGHLIGHT_MIRROR,
            ObjectTag::Agent => HIGHLIGHT_DIM,
        }
    }

    /// Distance the camera travels toward the clicked point.
    pub fn zoom_distance(self) -> f32 {
        match self {
            ObjectTag::Mirror => ZOOM_DISTANCE_MIRROR,
            ObjectTag::Agent => ZOOM_DISTANCE_AGENT,
            ObjectTag::Papers | ObjectTag::Typewriter => ZOOM_DISTANCE_DEFAULT,
        }
    }

    pub fn click_cue(self) -> SoundCue {
        match self {
            ObjectTag::Papers => SoundCue::Paper,
            ObjectTag::Mirror => SoundCue::Glass,
            ObjectTag::Typewriter => SoundCue::Typewriter,
            ObjectTag::Agent => SoundCue::Agent,
        }
    }

    /// Panel opened once the zoom toward this object completes.
    pub fn panel(self) -> Panel {
        match self {
            ObjectTag::Papers => Panel::Selection,
            ObjectTag::Mirror => Panel::Social,
            ObjectTag::Typewriter => Panel::Typewriter,
            ObjectTag::Agent => Panel::Agent,
        }
    }
}

/// One-shot sound triggers backed by `<audio>` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Paper,
    Glass,
    Typewriter,
    Agent,
}

impl SoundCue {
    pub fn element_id(self) -> &'static str {
        match self {
            SoundCue::Paper => "paper-sound",
            SoundCue::Glass => "glass-sound",
            SoundCue::Typewriter => "typewrite-sound",
            SoundCue::Agent => "agent-sound",
        }
    }

    pub fn default_volume(self) -> f32 {
        match self {
            SoundCue::Paper | SoundCue::Agent => 0.7,
            SoundCue::Glass => 0.6,
            SoundCue::Typewriter => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bright_tags_outshine_dim_tags() {
        let bright = ObjectTag::Papers.highlight_color()[0];
        assert_eq!(bright, ObjectTag::Typewriter.highlight_color()[0]);
        assert!(bright > ObjectTag::Mirror.highlight_color()[0]);
        assert!(ObjectTag::Mirror.highlight_color()[0] > ObjectTag::Agent.highlight_color()[0]);
    }

    #[test]
    fn every_tag_maps_to_a_distinct_panel_and_cue() {
        let panels: Vec<_> = ObjectTag::ALL.iter().map(|t| t.panel()).collect();
        let cues: Vec<_> = ObjectTag::ALL.iter().map(|t| t.click_cue()).collect();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(panels[i], panels[j]);
                assert_ne!(cues[i], cues[j]);
            }
        }
    }
}

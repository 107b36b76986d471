//! Two-light strobe behind the window. A phase accumulator advances a fixed
//! step per frame and is never reset; the two lights run half a cycle apart.

use crate::constants::*;
use crate::scene::{LightId, SceneGraph};

/// One frame's strobe intensities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrobeFrame {
    pub blue: f32,
    pub blue_glow: f32,
    pub red: f32,
    pub red_glow: f32,
}

/// Scene lights driven by the animator, registered by scene assembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrobeLights {
    pub blue: LightId,
    pub blue_glow: LightId,
    pub red: LightId,
    pub red_glow: LightId,
}

#[derive(Clone, Debug, Default)]
pub struct AmbientLightAnimator {
    phase: f32,
    lights: Option<StrobeLights>,
}

impl AmbientLightAnimator {
    pub fn attach(&mut self, lights: StrobeLights) {
        self.lights = Some(lights);
    }

    /// Advances the phase one step and returns the resulting intensities.
    pub fn step(&mut self) -> StrobeFrame {
        self.phase += STROBE_PHASE_STEP;
        strobe_at(self.phase)
    }

    /// `step` plus writing the intensities into the attached scene lights.
    pub fn tick(&mut self, scene: &mut SceneGraph) -> StrobeFrame {
        let frame = self.step();
        if let Some(ids) = self.lights {
            for (id, intensity) in [
                (ids.blue, frame.blue),
                (ids.blue_glow, frame.blue_glow),
                (ids.red, frame.red),
                (ids.red_glow, frame.red_glow),
            ] {
                if let Some(light) = scene.light_mut(id) {
                    light.intensity = intensity;
                }
            }
        }
        frame
    }
}

/// Intensities at a given phase value.
pub fn strobe_at(phase: f32) -> StrobeFrame {
    let a = (phase * STROBE_FREQUENCY).sin();
    let b = (phase * STROBE_FREQUENCY + std::f32::consts::PI).sin();
    let blue = gate(a);
    let red = gate(b);
    StrobeFrame {
        blue,
        blue_glow: blue * STROBE_GLOW_FACTOR,
        red,
        red_glow: red * STROBE_GLOW_FACTOR,
    }
}

#[inline]
fn gate(v: f32) -> f32 {
    if v > STROBE_THRESHOLD {
        STROBE_MAX_INTENSITY
    } else {
        0.0
    }
}

// DOM hooks and renderer tuning for the web front-end. Interaction tuning
// lives in `room_core::constants`.

// Page structure
pub const SCENE_CONTAINER_ID: &str = "scene-container"; // init aborts without it
pub const CANVAS_ID: &str = "room-canvas";
pub const LOADING_SCREEN_SELECTOR: &str = ".loading-screen"; // optional

// Panel buttons
pub const CLOSE_BUTTON_CLASS: &str = "menu-close-btn";
pub const NAV_LEFT_CLASS: &str = "nav-arrow-left";
pub const NAV_RIGHT_CLASS: &str = "nav-arrow-right";
pub const CHOICE_CLASS: &str = "selection-option"; // papers selection cards
pub const PANEL_VISIBLE_CLASS: &str = "visible";
pub const TYPEWRITER_BODY_ID: &str = "typewriter-content"; // receives the revealed text

// Renderer
pub const MAX_LIGHTS: usize = 16; // must match the array length in scene.wgsl
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

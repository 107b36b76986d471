use glam::Vec3;

// Shared interaction/animation tuning constants.

// Camera rest pose
pub const BASE_CAMERA_POSITION: Vec3 = Vec3::new(-1.5, 1.9, 0.8);
pub const BASE_CAMERA_TARGET: Vec3 = Vec3::new(0.2, 1.3, -0.3);
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Pointer drift (parallax follow)
pub const DRIFT_FACTOR_X: f32 = 1.2; // horizontal reach per unit of NDC
pub const DRIFT_FACTOR_Y: f32 = 0.5; // vertical reach per unit of NDC
pub const CLICK_DRIFT_FACTOR_X: f32 = 0.5; // reduced reach recomputed on click
pub const CLICK_DRIFT_FACTOR_Y: f32 = 0.3;
pub const DRIFT_LERP: f32 = 0.05; // fraction of remaining distance per frame

// Orbit drag envelope
pub const ORBIT_YAW_LIMIT_RAD: f32 = std::f32::consts::PI / 6.0; // +-30 deg around base yaw
pub const ORBIT_MIN_POLAR_RAD: f32 = std::f32::consts::PI / 3.0;
pub const ORBIT_MAX_POLAR_RAD: f32 = std::f32::consts::PI / 2.0;

// Zoom sequence
pub const ZOOM_DURATION_MS: u64 = 3000;
pub const ZOOM_DISTANCE_DEFAULT: f32 = 1.7; // papers, typewriter
pub const ZOOM_DISTANCE_MIRROR: f32 = 2.6;
pub const ZOOM_DISTANCE_AGENT: f32 = 2.2;
pub const MIRROR_MIN_CAMERA_Y: f32 = 0.5;
pub const MIRROR_MAX_AGENT_DISTANCE: f32 = 8.0;
pub const MIRROR_AGENT_PULL: f32 = 2.0;
pub const AGENT_HEAD_LIFT: f32 = 1.1;

// Return-to-base tween
pub const RETURN_DURATION_MS: u64 = 1500;

// Agent placement and proximity hover fallback
pub const AGENT_BASE_POSITION: Vec3 = Vec3::new(-2.1, 0.0, -1.1);
pub const AGENT_LANDMARK_HEIGHTS: [f32; 3] = [0.0, 1.0, 1.8]; // base, torso, head
pub const AGENT_PROXIMITY_PROJECTION: f32 = 10.0; // units ahead of the camera
pub const AGENT_PROXIMITY_RADIUS: f32 = 1.5;

// Hover highlight emissive colors
pub const HIGHLIGHT_BRIGHT: [f32; 3] = [0.4, 0.4, 0.4]; // 0x666666
pub const HIGHLIGHT_MIRROR: [f32; 3] = [0.267, 0.267, 0.267]; // 0x444444
pub const HIGHLIGHT_DIM: [f32; 3] = [0.2, 0.2, 0.2]; // 0x333333

// Strobe lights behind the window
pub const STROBE_PHASE_STEP: f32 = 0.025;
pub const STROBE_FREQUENCY: f32 = 1.2;
pub const STROBE_THRESHOLD: f32 = 0.3;
pub const STROBE_MAX_INTENSITY: f32 = 10.4;
pub const STROBE_GLOW_FACTOR: f32 = 0.7;

// Loading screen
pub const LOADING_MIN_DURATION_MS: u64 = 3000;

// Typewriter panel reveal
pub const TYPEWRITER_START_DELAY_MS: u64 = 500;
pub const TYPEWRITER_MIN_CHAR_DELAY_MS: u64 = 20;
pub const TYPEWRITER_MAX_CHAR_DELAY_MS: u64 = 65;
pub const TYPEWRITER_CUE_EVERY: usize = 3;
pub const TYPEWRITER_CUE_VOLUME: f32 = 0.2;

pub mod assembly;
pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod drift;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod lights;
pub mod loading;
pub mod overlay;
pub mod pointer;
pub mod scene;
pub mod tag;
pub mod tween;
pub mod typewriter;
pub mod zoom;

pub use camera::*;
pub use config::SceneConfig;
pub use controller::*;
pub use error::SceneError;
pub use overlay::{Panel, PanelHost, UiAction};
pub use scene::*;
pub use tag::*;

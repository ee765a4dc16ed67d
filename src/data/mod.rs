//! External scene data

pub mod loader;

pub use loader::{
    default_scene_config, CollectibleSpec, CubeSceneConfig, HuePanelConfig, OrbSceneConfig,
    SceneConfig,
};

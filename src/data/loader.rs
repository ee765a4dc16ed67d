//! RON scene loader
//!
//! Loads the demo scenes from an external RON file, with fallback to
//! hardcoded defaults.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::items::{Hue, Kind, Tier};

/// One collectible to spawn
///
/// Collectibles without a position are scattered onto free floor cells at
/// scene setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleSpec {
    pub name: String,
    pub kind: Kind,
    #[serde(default)]
    pub position: Option<(i32, i32)>,
}

/// One hue panel of the cube scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuePanelConfig {
    pub hue: Hue,
    pub slots: usize,
}

/// The cube scene: ordered inventory, one panel per hue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubeSceneConfig {
    pub collectibles: Vec<CollectibleSpec>,
    pub panels: Vec<HuePanelConfig>,
}

/// The orb scene: tier-sorted inventory, one panel mirroring it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbSceneConfig {
    pub collectibles: Vec<CollectibleSpec>,
    pub slots: usize,
    /// Slot display colors indexed by tier rank
    pub tier_colors: [(u8, u8, u8); 3],
}

/// Everything the demo scenes are built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Seed for scattering unplaced collectibles
    pub seed: u64,
    pub cubes: CubeSceneConfig,
    pub orbs: OrbSceneConfig,
}

impl SceneConfig {
    /// Load from `path`, falling back to defaults with a logged warning
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded scene config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to load {}: {:#}. Using default scenes.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: SceneConfig = ron::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the scene preconditions
    ///
    /// The tier panel mirrors the sorted snapshot slot-for-slot, so the orb
    /// scene must never hold more orbs than the panel has slots, and every
    /// orb-scene collectible must carry a tier.
    pub fn validate(&self) -> Result<()> {
        let orbs = self.orbs.collectibles.len();
        if orbs > self.orbs.slots {
            bail!(
                "orb scene has {} collectibles but only {} panel slots",
                orbs,
                self.orbs.slots
            );
        }
        if let Some(spec) = self
            .orbs
            .collectibles
            .iter()
            .find(|spec| spec.kind.tier().is_none())
        {
            bail!("orb scene collectible '{}' has no tier", spec.name);
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        default_scene_config()
    }
}

/// Built-in scenes used when no RON file is present
pub fn default_scene_config() -> SceneConfig {
    let cube = |name: &str, hue: Hue, x: i32, y: i32| CollectibleSpec {
        name: name.to_string(),
        kind: Kind::Hued(hue),
        position: Some((x, y)),
    };
    let orb = |name: &str, tier: Tier| CollectibleSpec {
        name: name.to_string(),
        kind: Kind::Tiered(tier),
        position: None,
    };

    SceneConfig {
        seed: 7,
        cubes: CubeSceneConfig {
            collectibles: vec![
                cube("Red Cube", Hue::Red, 4, 2),
                cube("Red Cube", Hue::Red, 9, 6),
                cube("Red Cube", Hue::Red, 17, 3),
                cube("Blue Cube", Hue::Blue, 6, 7),
                cube("Blue Cube", Hue::Blue, 13, 2),
                cube("Blue Cube", Hue::Blue, 21, 5),
            ],
            panels: vec![
                HuePanelConfig {
                    hue: Hue::Red,
                    slots: 3,
                },
                HuePanelConfig {
                    hue: Hue::Blue,
                    slots: 3,
                },
            ],
        },
        orbs: OrbSceneConfig {
            collectibles: vec![
                orb("T2 Orb", Tier::T2),
                orb("T1 Orb", Tier::T1),
                orb("T3 Orb", Tier::T3),
                orb("T2 Orb", Tier::T2),
                orb("T1 Orb", Tier::T1),
            ],
            slots: 6,
            tier_colors: [Tier::T1.color(), Tier::T2.color(), Tier::T3.color()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.cubes.collectibles.is_empty());
        assert!(!config.cubes.panels.is_empty());
    }

    #[test]
    fn test_orb_overflow_is_rejected() {
        let mut config = SceneConfig::default();
        config.orbs.slots = config.orbs.collectibles.len() - 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cube_in_orb_scene_is_rejected() {
        let mut config = SceneConfig::default();
        config.orbs.collectibles.push(CollectibleSpec {
            name: "Stray Cube".to_string(),
            kind: Kind::Hued(Hue::Red),
            position: None,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_ron_round_trip() {
        let config = SceneConfig::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default())
            .expect("serialize default config");
        let parsed: SceneConfig = ron::from_str(&text).expect("parse serialized config");
        assert_eq!(parsed.seed, config.seed);
        assert_eq!(
            parsed.orbs.collectibles.len(),
            config.orbs.collectibles.len()
        );
    }
}

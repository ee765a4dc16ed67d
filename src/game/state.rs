//! Game state machine
//!
//! Owns the chamber scene, the inventory context and the UI panels, and
//! routes interactions through the collect system.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use hecs::World;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{CollectibleSpec, SceneConfig};
use crate::ecs::{self, Interactable, Position, Renderable};
use crate::inventory::{ActiveInventory, InventoryContext, OrderedInventory, TieredInventory};
use crate::items::Collectible;
use crate::ui::panels::{HuePanel, TierPanel};
use crate::world::Chamber;

/// Oldest messages are dropped past this point
const MESSAGE_LOG_CAP: usize = 50;

/// All possible game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Scene selection screen
    MainMenu,
    /// A demo scene is running
    Playing(SceneKind),
    /// Exit the game
    Quit,
}

/// Which demo scene is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneKind {
    /// Hued cubes into the order-preserving inventory
    Cubes,
    /// Tiered orbs into the tier-sorted inventory
    Orbs,
}

impl SceneKind {
    pub fn title(&self) -> &'static str {
        match self {
            SceneKind::Cubes => "Ordered Inventory",
            SceneKind::Orbs => "Tier-Sorted Inventory",
        }
    }
}

/// A message to display in the on-screen log
#[derive(Debug, Clone)]
pub struct GameMessage {
    pub text: String,
    pub category: MessageCategory,
}

/// Categories for message coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Item,
    System,
    Warning,
}

/// The main game struct that holds all scene data
pub struct Game {
    /// Current game state
    state: GameState,
    /// ECS world containing the collectible entities
    world: World,
    /// The room everything happens in
    chamber: Chamber,
    /// Active inventory for this run, registered once at scene start
    context: InventoryContext,
    /// Random number generator (seeded for reproducible scatter)
    rng: StdRng,
    /// Scene definitions
    config: SceneConfig,
    /// Message log
    messages: Vec<GameMessage>,
    /// Keyboard cursor in chamber coordinates
    cursor: Position,
    /// Counter for generating unique collectible IDs
    next_collectible_id: u64,
    /// Cube-scene listeners, one per hue
    hue_panels: Vec<Rc<RefCell<HuePanel>>>,
    /// Orb-scene listener
    tier_panel: Option<Rc<RefCell<TierPanel>>>,
    /// Accumulated time, drives the cursor blink
    ambient_time: f32,
}

impl Game {
    pub fn new(config: SceneConfig) -> Self {
        let seed = config.seed;
        Self {
            state: GameState::MainMenu,
            world: World::new(),
            chamber: Chamber::default(),
            context: InventoryContext::new(),
            rng: StdRng::seed_from_u64(seed),
            config,
            messages: Vec::new(),
            cursor: Position::new(1, 1),
            next_collectible_id: 0,
            hue_panels: Vec::new(),
            tier_panel: None,
            ambient_time: 0.0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn quit(&mut self) {
        self.state = GameState::Quit;
    }

    /// Advance ambient time
    pub fn update(&mut self, delta: Duration) {
        self.ambient_time += delta.as_secs_f32();
    }

    pub fn ambient_time(&self) -> f32 {
        self.ambient_time
    }

    /// Start one of the demo scenes
    ///
    /// Only valid from the main menu: the inventory context is registered
    /// exactly once per run and there is no teardown path.
    pub fn start_scene(&mut self, kind: SceneKind) {
        if self.state != GameState::MainMenu {
            return;
        }
        match kind {
            SceneKind::Cubes => self.setup_cube_scene(),
            SceneKind::Orbs => self.setup_orb_scene(),
        }
        self.cursor = Position::new(1, 1);
        self.state = GameState::Playing(kind);
        log::info!("Started {} scene", kind.title());
        self.push_message(
            format!("{} demo. Collect everything in the chamber.", kind.title()),
            MessageCategory::System,
        );
    }

    fn setup_cube_scene(&mut self) {
        let mut inventory = OrderedInventory::new();
        self.hue_panels.clear();
        let panel_configs = self.config.cubes.panels.clone();
        for panel_config in panel_configs {
            let panel = Rc::new(RefCell::new(HuePanel::new(
                panel_config.hue,
                panel_config.slots,
            )));
            let listener = Rc::clone(&panel);
            inventory.subscribe(move |event| listener.borrow_mut().on_item_added(event));
            self.hue_panels.push(panel);
        }
        self.context.register(ActiveInventory::Ordered(inventory));
        let specs = self.config.cubes.collectibles.clone();
        self.spawn_collectibles(&specs);
    }

    fn setup_orb_scene(&mut self) {
        let mut inventory = TieredInventory::new();
        let panel = Rc::new(RefCell::new(TierPanel::new(
            self.config.orbs.slots,
            self.config.orbs.tier_colors,
        )));
        let listener = Rc::clone(&panel);
        inventory.subscribe(move |snapshot| {
            if let Err(e) = listener.borrow_mut().on_snapshot(snapshot) {
                log::error!("tier panel rejected snapshot: {}", e);
            }
        });
        self.tier_panel = Some(panel);
        self.context.register(ActiveInventory::Tiered(inventory));
        let specs = self.config.orbs.collectibles.clone();
        self.spawn_collectibles(&specs);
    }

    fn spawn_collectibles(&mut self, specs: &[CollectibleSpec]) {
        for spec in specs {
            let pos = match spec.position {
                Some((x, y)) => {
                    let pos = Position::new(x, y);
                    if self.chamber.is_floor(pos) && !self.is_occupied(pos) {
                        pos
                    } else {
                        log::warn!(
                            "'{}' cannot sit at ({}, {}), scattering instead",
                            spec.name,
                            x,
                            y
                        );
                        self.free_floor_cell()
                    }
                }
                None => self.free_floor_cell(),
            };

            let id = self.next_collectible_id;
            self.next_collectible_id += 1;
            self.world.spawn((
                Collectible::new(id, spec.name.clone(), spec.kind),
                pos,
                Renderable::new(spec.kind.glyph(), spec.kind.color()),
                Interactable,
            ));
        }
        log::info!("Spawned {} collectibles", specs.len());
    }

    fn is_occupied(&self, pos: Position) -> bool {
        self.world
            .query::<&Position>()
            .iter()
            .any(|(_, entity_pos)| *entity_pos == pos)
    }

    fn free_floor_cell(&mut self) -> Position {
        loop {
            let x = self.rng.gen_range(1..self.chamber.width() - 1);
            let y = self.rng.gen_range(1..self.chamber.height() - 1);
            let pos = Position::new(x, y);
            if !self.is_occupied(pos) {
                return pos;
            }
        }
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let next = Position::new(self.cursor.x + dx, self.cursor.y + dy);
        if self.chamber.is_floor(next) {
            self.cursor = next;
        }
    }

    pub fn set_cursor(&mut self, pos: Position) {
        if self.chamber.is_floor(pos) {
            self.cursor = pos;
        }
    }

    /// Interact with whatever sits under the cursor
    pub fn interact(&mut self) {
        self.interact_at(self.cursor);
    }

    /// Interact with the cell at `pos` (mouse click target)
    ///
    /// Collecting an already-consumed or empty cell is a no-op. A failed
    /// collect leaves the scene untouched and reports to the log.
    pub fn interact_at(&mut self, pos: Position) {
        if !self.chamber.is_floor(pos) {
            return;
        }
        let Some(entity) = ecs::interactable_at(&self.world, pos) else {
            return;
        };
        match ecs::collect(&mut self.world, &mut self.context, entity) {
            Ok(Some(item)) => {
                log::info!("Collected {} (id {})", item.name, item.id);
                self.push_message(format!("Collected {}.", item.name), MessageCategory::Item);
                if self.remaining() == 0 {
                    self.push_message("Chamber cleared.".to_string(), MessageCategory::System);
                }
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("Collect failed: {}", e);
                self.push_message(format!("Cannot collect: {}.", e), MessageCategory::Warning);
            }
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn chamber(&self) -> &Chamber {
        &self.chamber
    }

    pub fn messages(&self) -> &[GameMessage] {
        &self.messages
    }

    pub fn hue_panels(&self) -> &[Rc<RefCell<HuePanel>>] {
        &self.hue_panels
    }

    pub fn tier_panel(&self) -> Option<&Rc<RefCell<TierPanel>>> {
        self.tier_panel.as_ref()
    }

    /// Collectibles still interactable in the scene
    pub fn remaining(&self) -> usize {
        self.world.query::<&Interactable>().iter().count()
    }

    /// Items the active inventory holds
    pub fn collected(&self) -> usize {
        self.context
            .current()
            .map(|inventory| inventory.len())
            .unwrap_or(0)
    }

    fn push_message(&mut self, text: String, category: MessageCategory) {
        self.messages.push(GameMessage { text, category });
        if self.messages.len() > MESSAGE_LOG_CAP {
            self.messages.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_scene_config;

    fn interactable_positions(game: &Game) -> Vec<Position> {
        game.world
            .query::<(&Position, &Interactable)>()
            .iter()
            .map(|(_, (pos, _))| *pos)
            .collect()
    }

    #[test]
    fn test_cube_scene_spawns_config_collectibles() {
        let config = default_scene_config();
        let expected = config.cubes.collectibles.len();
        let mut game = Game::new(config);
        game.start_scene(SceneKind::Cubes);

        assert_eq!(game.state(), GameState::Playing(SceneKind::Cubes));
        assert_eq!(game.remaining(), expected);
        assert_eq!(game.collected(), 0);
        assert!(interactable_positions(&game)
            .iter()
            .all(|pos| game.chamber().is_floor(*pos)));
    }

    #[test]
    fn test_collect_updates_inventory_and_panel() {
        let mut game = Game::new(default_scene_config());
        game.start_scene(SceneKind::Cubes);

        // Default config places a red cube at (4, 2).
        game.interact_at(Position::new(4, 2));

        assert_eq!(game.collected(), 1);
        let red_panel = game
            .hue_panels()
            .iter()
            .find(|panel| panel.borrow().hue() == crate::items::Hue::Red)
            .unwrap();
        assert_eq!(red_panel.borrow().active_count(), 1);
    }

    #[test]
    fn test_second_interaction_is_a_noop() {
        let mut game = Game::new(default_scene_config());
        game.start_scene(SceneKind::Cubes);

        game.interact_at(Position::new(4, 2));
        game.interact_at(Position::new(4, 2));

        assert_eq!(game.collected(), 1);
    }

    #[test]
    fn test_orb_scene_mirrors_snapshot_into_panel() {
        let mut game = Game::new(default_scene_config());
        game.start_scene(SceneKind::Orbs);
        let total = game.remaining();

        let positions = interactable_positions(&game);
        for pos in positions {
            game.interact_at(pos);
        }

        assert_eq!(game.collected(), total);
        assert_eq!(game.remaining(), 0);
        let panel = game.tier_panel().unwrap().borrow();
        assert_eq!(panel.active_count(), total);

        // Mirrored slots are sorted highest tier first.
        let ranks: Vec<u8> = panel
            .slots()
            .iter()
            .flatten()
            .map(|tier| tier.rank())
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_scene_start_only_from_menu() {
        let mut game = Game::new(default_scene_config());
        game.start_scene(SceneKind::Cubes);
        let remaining = game.remaining();

        // A second start is ignored; the first registration stays active.
        game.start_scene(SceneKind::Orbs);
        assert_eq!(game.state(), GameState::Playing(SceneKind::Cubes));
        assert_eq!(game.remaining(), remaining);
    }
}

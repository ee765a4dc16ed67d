//! ECS Systems
//!
//! Scene interaction: hit-testing clicks against interactable entities and
//! routing collected items into the active inventory.

use hecs::{Entity, World};

use crate::ecs::{Interactable, Position, Renderable};
use crate::inventory::{InventoryContext, InventoryError};
use crate::items::Collectible;

/// Find the interactable entity at `pos`, if any
pub fn interactable_at(world: &World, pos: Position) -> Option<Entity> {
    world
        .query::<(&Position, &Interactable)>()
        .iter()
        .find(|(_, (entity_pos, _))| **entity_pos == pos)
        .map(|(entity, _)| entity)
}

/// Collect `entity` into the active inventory
///
/// The entity is consumed (loses `Interactable` and `Renderable`) only
/// after the inventory accepted it; on any failure it stays fully intact
/// and can be interacted with again. Returns the collected snapshot, or
/// `None` when the entity carries no `Collectible`.
pub fn collect(
    world: &mut World,
    context: &mut InventoryContext,
    entity: Entity,
) -> Result<Option<Collectible>, InventoryError> {
    let item = match world.get::<&Collectible>(entity) {
        Ok(item) => (*item).clone(),
        Err(_) => return Ok(None),
    };

    context.current_mut()?.add(&item)?;

    let _ = world.remove_one::<Interactable>(entity);
    let _ = world.remove_one::<Renderable>(entity);
    Ok(Some(item))
}

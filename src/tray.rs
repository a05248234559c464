// tray.rs - The dice collection.
//
// DiceTray is the single owner of every live die. It's a Resource, so it is
// created when the App starts and dropped with it; systems reach it through
// Res<DiceTray> / ResMut<DiceTray> instead of a free-floating global.
//
// The tray only knows about data. Spawning and despawning the UI for each die
// happens in actions.rs, which calls into here first.

use bevy::prelude::*;
use rand::Rng;

use crate::die::{Die, DieId, DieValue};

/// Ordered list of live dice. Insertion order is display order.
#[derive(Resource, Debug, Default)]
pub struct DiceTray {
    dice: Vec<Die>,
    next_id: u64,
}

impl DiceTray {
    /// Appends a die showing `value` and returns its handle.
    pub fn insert(&mut self, value: DieValue) -> DieId {
        let id = DieId(self.next_id);
        self.next_id += 1;
        self.dice.push(Die { id, value });
        id
    }

    /// Samples a fresh value and appends a die showing it.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> Die {
        let value = DieValue::roll(rng);
        let id = self.insert(value);
        Die { id, value }
    }

    /// Rerolls one die. Returns None if `id` isn't in the tray.
    pub fn roll<R: Rng>(&mut self, id: DieId, rng: &mut R) -> Option<DieValue> {
        self.dice
            .iter_mut()
            .find(|die| die.id == id)
            .map(|die| die.roll(rng))
    }

    /// Rerolls every die, front to back. Returns how many were rolled.
    pub fn roll_all<R: Rng>(&mut self, rng: &mut R) -> usize {
        for die in &mut self.dice {
            die.roll(rng);
        }
        self.dice.len()
    }

    /// Removes exactly the die with this handle.
    ///
    /// A handle that's already gone (double dismiss, stale click) is a
    /// no-op and returns None.
    pub fn dismiss(&mut self, id: DieId) -> Option<Die> {
        let index = self.dice.iter().position(|die| die.id == id)?;
        Some(self.dice.remove(index))
    }

    /// Sum of all face values; 0 for an empty tray.
    pub fn sum(&self) -> u32 {
        self.dice.iter().map(|die| u32::from(die.value.get())).sum()
    }

    pub fn get(&self, id: DieId) -> Option<&Die> {
        self.dice.iter().find(|die| die.id == id)
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }

    pub fn ids(&self) -> Vec<DieId> {
        self.dice.iter().map(|die| die.id).collect()
    }

    pub fn values(&self) -> Vec<u8> {
        self.dice.iter().map(|die| die.value.get()).collect()
    }
}

//! The player's ship: where it is and what it carries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::error::GameError;

/// A jump between two directly linked stars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Voyage {
    pub from: usize,
    pub to: usize,
    /// Seconds travelled so far
    pub elapsed: f32,
    /// Seconds the jump takes in total
    pub duration: f32,
}

impl Voyage {
    /// Fraction of the jump completed (0-1)
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Where the ship is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Location {
    Docked(usize),
    Traveling(Voyage),
}

/// Cargo hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    capacity: u32,
    items: BTreeMap<Resource, u32>,
}

impl Inventory {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            items: BTreeMap::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn total(&self) -> u32 {
        self.items.values().sum()
    }

    pub fn free_space(&self) -> u32 {
        self.capacity.saturating_sub(self.total())
    }

    pub fn count(&self, resource: Resource) -> u32 {
        self.items.get(&resource).copied().unwrap_or(0)
    }

    /// Load `amount` units. Fails without loading anything if they don't fit.
    pub fn add(&mut self, resource: Resource, amount: u32) -> Result<(), GameError> {
        if amount > self.free_space() {
            return Err(GameError::CargoFull {
                capacity: self.capacity,
            });
        }
        *self.items.entry(resource).or_insert(0) += amount;
        Ok(())
    }

    /// Unload up to `amount` units, returning how many were removed.
    pub fn remove(&mut self, resource: Resource, amount: u32) -> u32 {
        let Some(held) = self.items.get_mut(&resource) else {
            return 0;
        };
        let taken = amount.min(*held);
        *held -= taken;
        if *held == 0 {
            self.items.remove(&resource);
        }
        taken
    }

    pub fn iter(&self) -> impl Iterator<Item = (Resource, u32)> + '_ {
        self.items.iter().map(|(r, n)| (*r, *n))
    }
}

/// Player state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub location: Location,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(home: usize, cargo_capacity: u32) -> Self {
        Self {
            location: Location::Docked(home),
            inventory: Inventory::new(cargo_capacity),
        }
    }

    /// Star the ship is docked at, if any.
    pub fn docked_at(&self) -> Option<usize> {
        match self.location {
            Location::Docked(star) => Some(star),
            Location::Traveling(_) => None,
        }
    }

    pub fn voyage(&self) -> Option<&Voyage> {
        match &self.location {
            Location::Traveling(v) => Some(v),
            Location::Docked(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_add_and_count() {
        let mut inv = Inventory::new(10);
        inv.add(Resource::Iron, 3).unwrap();
        inv.add(Resource::Iron, 2).unwrap();
        inv.add(Resource::Ice, 1).unwrap();

        assert_eq!(inv.count(Resource::Iron), 5);
        assert_eq!(inv.count(Resource::Ice), 1);
        assert_eq!(inv.count(Resource::Coal), 0);
        assert_eq!(inv.total(), 6);
        assert_eq!(inv.free_space(), 4);
    }

    #[test]
    fn test_inventory_rejects_overflow() {
        let mut inv = Inventory::new(4);
        inv.add(Resource::Helium, 3).unwrap();
        let err = inv.add(Resource::Helium, 2).unwrap_err();
        assert_eq!(err, GameError::CargoFull { capacity: 4 });
        // Nothing partially loaded
        assert_eq!(inv.total(), 3);
    }

    #[test]
    fn test_inventory_remove() {
        let mut inv = Inventory::new(10);
        inv.add(Resource::Oil, 4).unwrap();
        assert_eq!(inv.remove(Resource::Oil, 3), 3);
        assert_eq!(inv.remove(Resource::Oil, 3), 1);
        assert_eq!(inv.remove(Resource::Oil, 1), 0);
        assert_eq!(inv.iter().count(), 0);
    }

    #[test]
    fn test_voyage_progress() {
        let mut v = Voyage {
            from: 0,
            to: 1,
            elapsed: 0.0,
            duration: 4.0,
        };
        assert_eq!(v.progress(), 0.0);
        v.elapsed = 2.0;
        assert_eq!(v.progress(), 0.5);
        assert!(!v.is_complete());
        v.elapsed = 5.0;
        assert_eq!(v.progress(), 1.0);
        assert!(v.is_complete());
    }

    #[test]
    fn test_player_location() {
        let mut player = Player::new(3, 50);
        assert_eq!(player.docked_at(), Some(3));
        assert!(player.voyage().is_none());

        player.location = Location::Traveling(Voyage {
            from: 3,
            to: 4,
            elapsed: 0.0,
            duration: 1.0,
        });
        assert_eq!(player.docked_at(), None);
        assert_eq!(player.voyage().map(|v| v.to), Some(4));
    }
}

//! Player -- the single adventurer moving through a map
use crate::ItemHolder;

use std::collections::BTreeSet;

/// The player's position and carried items.
///
/// Inventory is a set: holding two items of the same name is not possible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    pub location: String,
    pub inventory: BTreeSet<String>,
}
impl Player {
    /// Create a player standing in `start` with empty hands.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            location: start.into(),
            inventory: BTreeSet::new(),
        }
    }
}
impl ItemHolder for Player {
    fn add_item(&mut self, item: &str) {
        self.inventory.insert(item.to_string());
    }

    fn remove_item(&mut self, item: &str) -> bool {
        self.inventory.remove(item)
    }

    fn contains_item(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    fn item_names(&self) -> Vec<String> {
        self.inventory.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_never_holds_duplicates() {
        let mut player = Player::new("hall");
        player.add_item("lamp");
        player.add_item("lamp");
        assert_eq!(player.item_names(), vec!["lamp".to_string()]);
        assert!(player.remove_item("lamp"));
        assert!(!player.remove_item("lamp"));
        assert!(!player.contains_item("lamp"));
    }
}

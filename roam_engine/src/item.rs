//! Item helpers.
//!
//! Items are plain names. Rooms and the player both hold them, and every move
//! between the two goes through [`crate::World::transfer`].

/// Methods common to things that can hold items.
pub trait ItemHolder {
    /// Insert an item into the holder's contents.
    fn add_item(&mut self, item: &str);
    /// Remove one copy of an item from the holder's contents. Returns `false` if it wasn't there.
    fn remove_item(&mut self, item: &str) -> bool;
    /// Return `true` when the holder contains the given item.
    fn contains_item(&self, item: &str) -> bool;
    /// Item names in display order.
    fn item_names(&self) -> Vec<String>;
}

/// Case-insensitive comparison of two item names.
pub fn same_item(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Formats a list of item names as "the a, the b or the c".
pub fn list_with_articles(names: &[String], conjunction: &str) -> String {
    let with_articles: Vec<String> = names.iter().map(|name| format!("the {name}")).collect();
    match with_articles.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} {conjunction} {last}", init.join(", ")),
    }
}

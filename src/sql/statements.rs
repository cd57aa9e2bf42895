//! Fixed statements against the `items` table. Values are always bound, never interpolated.

pub const SELECT_ALL_ITEMS: &str = "SELECT * FROM items";

pub const INSERT_ITEM: &str = "INSERT INTO items (title, body) VALUES (?, ?)";

pub const UPDATE_ITEM: &str = "UPDATE items SET title = ?, body = ? WHERE id = ?";

pub const DELETE_ITEM: &str = "DELETE FROM items WHERE id = ?";

pub const PING: &str = "SELECT 1";

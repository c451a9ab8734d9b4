// Route path constants - single source of truth for all API paths

pub const INDEX: &str = "/";
pub const ITEMS: &str = "/items/";
pub const ITEM: &str = "/items/{item_id}";

mod index_page;
mod item_create;
mod item_delete;
mod item_list;

pub use index_page::index_page;
pub use item_create::{create_item, CreateItemRequest};
pub use item_delete::delete_item;
pub use item_list::list_items;

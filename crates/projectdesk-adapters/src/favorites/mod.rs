//! Adapters for the `FavoritesStore` port.

mod json_file;
mod memory;

pub use json_file::JsonFileFavoritesStore;
pub use memory::MemoryFavoritesStore;

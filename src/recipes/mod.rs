pub mod form;
pub mod item;
pub mod list;
pub mod placeholder;
pub mod store;
pub mod thumbnail;

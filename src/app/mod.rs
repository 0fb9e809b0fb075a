// Screen module: state, layout and keyboard handling
pub mod input;
pub mod state;
pub mod ui;

pub use state::RecipeApp;

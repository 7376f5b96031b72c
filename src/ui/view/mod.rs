//! Active view: state, renderer and components

mod components;
mod renderer;
mod state;
mod utils;

pub use renderer::render_view;
pub use state::{ViewState, targets_for_mode};

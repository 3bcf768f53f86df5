//! The components module contains all shared components for our app.

mod app;
mod controller;
mod icons;
pub mod views;

pub use app::*;
pub use controller::*;
pub use icons::*;
// Views are accessed via views::ViewName

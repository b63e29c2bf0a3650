//! Ratatui browser over a [`crate::Database`]: a restaurants screen and a
//! customers screen, plus dialogs to add reviews and delete a customer's
//! reviews of one restaurant.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;

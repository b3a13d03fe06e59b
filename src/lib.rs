pub mod calendar;
pub mod cli;
pub mod error;
pub mod export;
pub mod grid;
pub mod model;
pub mod script;
pub mod selection;
pub mod tui;
pub mod util;

//! Job application form with inline validation, rendered in the terminal.

pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod ui;

//! Reactive application state

pub mod ui;

//! URL Piler library
//!
//! The bounded URL store and its file format live here so the binary, the demo and
//! the tests share one implementation. The egui front end sits in `app` and `ui`.

pub mod app;
pub mod config;
pub mod constant;
pub mod dropzone;
pub mod messages;
pub mod persist;
pub mod saver;
pub mod store;
pub mod style;
pub mod ui;

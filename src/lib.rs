pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod head;
pub mod message;
pub mod pages;
pub mod router;
pub mod style;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod generator;

#[cfg(target_arch = "wasm32")]
pub mod web;

//! Storefront for Garage Repair of Coral Springs, as a terminal client.
//!
//! `site` and `content` describe what is shown; `ui` owns the state, the
//! reducers and the terminal loop.

pub mod clipboard;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod site;
pub mod ui;

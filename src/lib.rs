//! A terminal rendition of the Inexia VR site.
//!
//! The crate renders the marketing page as a scrolling canvas, keeps the
//! navigation in sync with the section under the reader's eyes and collects
//! project inquiries through a validated form.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod inquiry;
pub mod logger;
pub mod site;
pub mod state;
pub mod tracker;
pub mod ui;
pub mod utils;

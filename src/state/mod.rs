//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - The scrollable page canvas (`PageViewport`) the section tracker observes
//! - Inquiry form editing (`FormEditor`) and toast notices (`NoticeBoard`)
//! - Navigation types (Focus, LinkCursor)
//! - State error handling

mod error;
mod form;
mod navigation;
mod notices;
mod page;

pub use error::StateError;
pub use form::{Cycle, FormEditor};
pub use navigation::{Focus, LinkCursor};
pub use notices::{NoticeBoard, Toast};
pub use page::{PageViewport, SectionSlot, UNITS_PER_ROW};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;

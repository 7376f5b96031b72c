//! View UI components
//!
//! Contains the individual panels that make up each view

pub mod dimensions;
pub mod footer;
pub mod header;
pub mod info_panel;
pub mod insight;
pub mod logs;
pub mod matrix;
pub mod radar;
pub mod summary;

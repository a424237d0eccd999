//! Palette section of quest files.
//!
//! The section went through several layouts. Whatever version a quest was saved with, decoding
//! produces the tables of the newest one: every cset, `MAX_LEVELS` palette names and the color
//! cycle table.
pub mod constants;
mod decoder;
pub mod error;
mod layout;
mod migrate;
mod parser;
mod types;

#[cfg(test)]
mod test_utils;

pub use decoder::{read_color_data, section_at, validate_color_data};
pub use layout::*;
pub use types::*;

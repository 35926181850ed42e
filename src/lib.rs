//! Season/episode extraction from webtoon chapter titles and
//! Kavita-compatible filename generation.

pub mod domain;
pub mod workflows;

pub use workflows::renamer::{generate_filename, sanitize_filename};
pub use workflows::season_parser::parse_season_from_title;

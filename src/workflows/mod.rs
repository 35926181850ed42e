pub mod renamer;
pub mod season_parser;

pub mod catalog;
pub mod config;
pub mod matching;
pub mod quiz;

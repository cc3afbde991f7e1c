//! Integration tests for the human-writer mirroring and typing pipeline

mod config_integration;
mod mirror_structure;
mod typing_engine;

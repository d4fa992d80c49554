pub mod config;
pub mod events;
pub mod gui;
pub mod scores;
pub mod sys;

pub mod app;
pub mod orbit;
pub mod theme;

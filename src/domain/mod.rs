pub mod app;
pub mod card;
pub mod format;
pub mod functions;
pub mod game;
pub mod render;
pub mod session;
pub mod stats;
pub mod tag;

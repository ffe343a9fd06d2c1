pub mod assets;
pub mod publisher;
pub mod stats;

pub mod artifact;
pub mod directory;

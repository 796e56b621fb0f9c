pub mod assets;
pub mod reports;

pub mod coder;
pub mod traits;
pub mod types;

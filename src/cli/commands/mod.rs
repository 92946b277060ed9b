pub mod export;
pub mod list;
pub mod seed;

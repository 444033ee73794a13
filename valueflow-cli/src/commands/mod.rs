pub mod dot;
pub mod list;
pub mod stats;

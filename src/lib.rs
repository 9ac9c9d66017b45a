pub mod api;
pub mod assessment;
pub mod config;
pub mod error;
pub mod estimation;
pub mod simulation;
pub mod test;
pub mod time;
pub mod utils;

pub const MAX_MSGS: usize = 100;

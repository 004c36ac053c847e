// crates/sewa-cli/src/commands/mod.rs
//
// Command module declarations for the sewa CLI.

pub mod catalog;
pub mod describe;
pub mod item;
pub mod listings;
pub mod profile;
pub mod replay;
pub mod users;

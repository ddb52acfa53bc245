pub mod config;
pub mod logging;

pub mod checksum;
pub mod confirm;
pub mod save_file;
pub mod verify;

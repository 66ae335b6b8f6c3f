pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod menu;
pub mod practice;
pub mod progress;

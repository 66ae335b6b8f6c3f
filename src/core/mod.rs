pub mod add;
pub mod del;
pub mod list;
pub mod log;
pub mod practice;
pub mod progress;

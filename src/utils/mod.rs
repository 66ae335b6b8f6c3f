pub mod colors;
pub mod date;
pub mod formatting;
pub mod input;
pub mod path;
pub mod table;

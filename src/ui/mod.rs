pub mod charts;
pub mod panels;
pub mod profile;
pub mod radar;
pub mod table;

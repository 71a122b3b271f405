pub mod address;
pub mod records;
pub mod settings;

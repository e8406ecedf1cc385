pub mod exhibits;
pub mod recipient;

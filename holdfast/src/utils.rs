pub mod log;
pub mod reload;

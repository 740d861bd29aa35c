pub mod distribution;
pub mod replace;
pub mod secrets;

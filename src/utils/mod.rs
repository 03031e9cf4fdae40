pub mod error;
pub mod logger;
pub mod monitor;
pub mod top_n;
pub mod validation;

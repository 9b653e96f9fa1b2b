//! Initialization routines for application resources.

mod logger;

pub use logger::init_logger_with;

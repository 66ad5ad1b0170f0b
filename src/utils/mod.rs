pub mod console_logger;
pub mod fps;
pub mod random;

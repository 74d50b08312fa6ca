pub mod clock;
pub mod services;
pub mod utils;

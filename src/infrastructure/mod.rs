pub mod logging;
pub mod user;

pub mod attendance;
pub mod month;
pub mod settings;
pub mod summary;

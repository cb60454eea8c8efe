// Module exports for models

pub mod settings;
pub mod slot;
pub mod subject;
pub mod weekday;

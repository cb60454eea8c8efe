// Settings service: the single persisted settings row

mod mapper;
mod service;

pub use service::SettingsService;

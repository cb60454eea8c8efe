// Service module exports

pub mod config;
pub mod database;
pub mod settings;
pub mod slot;
pub mod subject;
pub mod timetable;

pub mod subject_manager;

pub mod app_config;
pub mod storage_config;

//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦。
//! - `record_backend`：在 tokio 运行时上执行远端请求，结果经 mpsc 通道回到主循环
//! - `config_service`：读取/保存 JSON 配置文件

mod config_service;
mod record_backend;

pub use config_service::{AppConfig, ConfigService, LocalConfigService, API_URL_ENV};
pub use record_backend::{BackendCommand, RecordBackend};

//! Record Form TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 远端请求与配置 (`backend/`)
//!
//! 启动顺序：日志 → 配置 → tokio 运行时与 API 客户端 → 终端 → 主循环 → 恢复终端。

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use record_form_api::HttpRecordApi;
use record_form_core::RecordService;

use backend::{ConfigService, LocalConfigService, RecordBackend, API_URL_ENV};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志写入文件，失败时静默
    let log_path = init_logging();

    // 2. 加载配置
    let config_service = LocalConfigService::new();
    let config = config_service
        .load()
        .unwrap_or_else(|e| {
            log::warn!("Failed to load config: {e:#}");
            backend::AppConfig::default()
        })
        .with_api_url_override(std::env::var(API_URL_ENV).ok());

    // 首次运行时写出默认配置，方便用户修改
    if !config_service.path().exists() {
        if let Err(e) = config_service.save(&backend::AppConfig::default()) {
            log::warn!("Failed to write default config: {e:#}");
        }
    }
    log::debug!("Config file: {}", config_service.path().display());

    let language = i18n::Language::from_code(&config.language).unwrap_or_default();
    i18n::set_language(language);
    view::theme::set_theme(config.theme);

    // 3. 运行时与 API 客户端
    let runtime = tokio::runtime::Runtime::new()?;
    let api = HttpRecordApi::with_timeout(&config.base_url(), config.request_timeout())?;
    log::info!(
        "Starting record form against {} ({}, log: {})",
        api.base_url(),
        language.code(),
        log_path.map_or_else(|| "disabled".to_string(), |p| p.display().to_string())
    );
    let (record_backend, mut results) =
        RecordBackend::new(runtime.handle().clone(), RecordService::new(Arc::new(api)));

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, &record_backend, &mut results);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 未完成的请求随运行时一起丢弃
    runtime.shutdown_background();
    log::info!("Exiting");

    result
}

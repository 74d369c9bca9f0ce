//! 日志初始化
//!
//! 终端被界面占用，日志写入平台数据目录下的文件。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件路径：`{data_local_dir}/record-form/record-form.log`
pub fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("record-form")
        .join("record-form.log")
}

/// 安装 tracing 订阅器（同时接管 `log` 宏的输出）
///
/// 文件无法打开时不记录日志，返回 `None`。
pub fn init_logging() -> Option<PathBuf> {
    let path = log_file_path();
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return None;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    // RUST_LOG 未设置时默认 info
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .ok()?;

    Some(path)
}

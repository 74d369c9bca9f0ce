//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 [`AppMessage`](crate::message::AppMessage)。
//!
//! 分发顺序：
//! - Ctrl+C 总是退出
//! - 有弹窗打开时，交给弹窗处理
//! - 全局快捷键（Tab、Esc、Alt+e、Alt+d ...）
//! - 其余按键按焦点所在控件处理

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};

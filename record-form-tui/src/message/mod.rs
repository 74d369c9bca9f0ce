//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 键盘输入被翻译成 [`AppMessage`]；后台请求的结果以
//! [`AppMessage::Remote`] 的形式回到同一条通道。

mod app;
mod form;
mod list;
mod modal;

pub use app::AppMessage;
pub use form::FormMessage;
pub use list::ListMessage;
pub use modal::ModalMessage;

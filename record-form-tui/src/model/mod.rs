//! Model 层：应用状态
//!
//! 表单本身的数据（记录列表、输入框内容、编辑中的记录、错误）
//! 由 `record_form_core::FormState` 持有；这里只增加终端界面
//! 自己需要的状态：焦点、选中行、弹窗。

mod app;
mod focus;
mod modal;

pub use app::App;
pub use focus::Focus;
pub use modal::{Modal, ModalState};

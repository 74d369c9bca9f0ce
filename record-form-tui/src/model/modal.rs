//! 弹窗状态定义

/// 当前打开的弹窗
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 删除确认
    ConfirmDelete {
        /// 待删除记录 id
        id: String,
        /// 用于提示的记录名
        name: String,
        /// 0 = 取消，1 = 删除
        focus: usize,
    },
    /// 快捷键帮助
    Help,
}

/// 弹窗容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// None = 无弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示删除确认弹窗，默认焦点在“取消”
    pub fn show_confirm_delete(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.active = Some(Modal::ConfirmDelete {
            id: id.into(),
            name: name.into(),
            focus: 0,
        });
    }
}

//! 应用主状态结构

use record_form_api::Record;
use record_form_core::FormState;

use super::{Focus, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点控件
    pub focus: Focus,

    /// 表单状态（只通过 `record_form_core::reduce` 替换）
    pub form: FormState,

    /// 列表中选中的行
    pub selected: usize,

    /// 提交/删除请求是否仍在进行
    pub pending_requests: usize,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            form: FormState::new(),
            selected: 0,
            pending_requests: 0,
            modal: ModalState::new(),
        }
    }

    /// 当前选中的记录
    pub fn selected_record(&self) -> Option<&Record> {
        self.form.records.get(self.selected)
    }

    /// 列表变化后把选中行限制在范围内
    pub fn clamp_selection(&mut self) {
        let len = self.form.records.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

//! 应用主消息枚举

use record_form_core::FormEvent;

use super::{FormMessage, ListMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个控件（Tab）
    FocusNext,

    /// 焦点移到上一个控件（Shift+Tab）
    FocusPrev,

    /// 输入框/提交按钮相关消息
    Form(FormMessage),

    /// 记录列表相关消息
    List(ListMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台请求完成
    Remote(FormEvent),

    /// Esc：取消编辑并清空表单
    Reset,

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

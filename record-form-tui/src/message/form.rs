//! 表单消息

/// 输入框和提交按钮上的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 在当前输入框末尾追加字符
    Input(char),
    /// 删除当前输入框最后一个字符
    Backspace,
    /// 清空当前输入框
    ClearField,
    /// 提交表单
    Submit,
}

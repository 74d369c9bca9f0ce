//! 弹窗消息

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    /// 在“取消 / 删除”之间切换
    ToggleChoice,
    /// 确认当前选择
    Confirm,
}

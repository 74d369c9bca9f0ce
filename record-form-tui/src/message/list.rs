//! 列表消息

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 编辑选中的记录
    Edit,
    /// 请求删除选中的记录（先弹出确认）
    Delete,
}

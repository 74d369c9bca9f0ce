//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **错误提示归 `errors.*`**：与 `FormError` 的变体一一对应
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 表单区域
    pub form: FormTexts,
    /// 记录列表
    pub list: ListTexts,
    /// 错误提示
    pub errors: ErrorTexts,
    /// 弹窗
    pub modal: ModalTexts,
    /// 状态栏提示
    pub hints: HintTexts,
}

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    /// 请求进行中时状态栏显示
    pub working: &'static str,
}

pub struct FormTexts {
    pub title: &'static str,
    pub name_label: &'static str,
    pub age_label: &'static str,
    /// 提交按钮（新建）
    pub add_button: &'static str,
    /// 提交按钮（编辑中）
    pub update_button: &'static str,
    /// 编辑中时标题后缀
    pub editing: &'static str,
}

pub struct ListTexts {
    pub title: &'static str,
    pub empty: &'static str,
}

pub struct ErrorTexts {
    pub fetch_failed: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub required: &'static str,
    pub age_not_number: &'static str,
    pub record_not_found: &'static str,
}

pub struct ModalTexts {
    pub confirm_delete_title: &'static str,
    /// 后面接记录名
    pub confirm_delete_prompt: &'static str,
    pub help_title: &'static str,
    /// (按键, 说明)
    pub help_lines: &'static [(&'static str, &'static str)],
}

pub struct HintTexts {
    pub switch_focus: &'static str,
    pub submit: &'static str,
    pub select: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub cancel_edit: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

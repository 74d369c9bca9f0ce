//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "记录表单",
        loading: "加载中...",
        cancel: "取消",
        delete: "删除",
        working: "处理中...",
    },

    form: FormTexts {
        title: "记录",
        name_label: "姓名",
        age_label: "年龄",
        add_button: "添加数据",
        update_button: "更新数据",
        editing: "编辑中",
    },

    list: ListTexts {
        title: "记录列表",
        empty: "暂无记录",
    },

    errors: ErrorTexts {
        fetch_failed: "获取数据时出错",
        save_failed: "保存数据时出错",
        delete_failed: "删除数据时出错",
        required: "姓名和年龄为必填项",
        age_not_number: "年龄必须是整数",
        record_not_found: "记录不存在",
    },

    modal: ModalTexts {
        confirm_delete_title: " 确认删除 ",
        confirm_delete_prompt: "删除记录",
        help_title: " 帮助 ",
        help_lines: &[
            ("Tab/S-Tab", "切换焦点"),
            ("Enter", "提交表单"),
            ("↑↓/jk", "选择记录"),
            ("Alt+e / e", "编辑选中记录"),
            ("Alt+d / d", "删除选中记录"),
            ("Esc", "取消编辑 / 关闭"),
            ("?/Alt+h", "显示帮助"),
            ("Ctrl+C/Alt+q", "退出"),
        ],
    },

    hints: HintTexts {
        switch_focus: "焦点",
        submit: "提交",
        select: "选择",
        edit: "编辑",
        delete: "删除",
        cancel_edit: "取消",
        help: "帮助",
        quit: "退出",
    },
};

//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, ErrorTexts, FormTexts, HintTexts, ListTexts, ModalTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Record Form",
        loading: "Loading...",
        cancel: "Cancel",
        delete: "Delete",
        working: "Working...",
    },

    form: FormTexts {
        title: "Record",
        name_label: "Name",
        age_label: "Age",
        add_button: "Add Data",
        update_button: "Update Data",
        editing: "editing",
    },

    list: ListTexts {
        title: "Records",
        empty: "No records",
    },

    errors: ErrorTexts {
        fetch_failed: "There was an error fetching data",
        save_failed: "There was an error saving data",
        delete_failed: "There was an error deleting data",
        required: "Name and age are required",
        age_not_number: "Age must be a whole number",
        record_not_found: "Record not found",
    },

    modal: ModalTexts {
        confirm_delete_title: " Confirm Deletion ",
        confirm_delete_prompt: "Delete record",
        help_title: " Help ",
        help_lines: &[
            ("Tab/S-Tab", "Move focus"),
            ("Enter", "Submit form"),
            ("↑↓/jk", "Select record"),
            ("Alt+e / e", "Edit selected record"),
            ("Alt+d / d", "Delete selected record"),
            ("Esc", "Cancel edit / close"),
            ("?/Alt+h", "Show this help"),
            ("Ctrl+C/Alt+q", "Quit"),
        ],
    },

    hints: HintTexts {
        switch_focus: "Focus",
        submit: "Submit",
        select: "Select",
        edit: "Edit",
        delete: "Delete",
        cancel_edit: "Cancel",
        help: "Help",
        quit: "Quit",
    },
};

//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。

use std::sync::atomic::{AtomicUsize, Ordering};

use record_form_core::{FormError, ValidationKind};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &zh_cn::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 把表单错误翻译成当前语言
pub fn error_text(error: &FormError) -> String {
    let texts = &t().errors;
    match error {
        FormError::FetchFailed => texts.fetch_failed.to_string(),
        FormError::SaveFailed => texts.save_failed.to_string(),
        FormError::DeleteFailed => texts.delete_failed.to_string(),
        FormError::RecordNotFound(_) => texts.record_not_found.to_string(),
        FormError::ValidationFailed(ValidationKind::Required) => texts.required.to_string(),
        FormError::ValidationFailed(ValidationKind::AgeNotNumber) => {
            texts.age_not_number.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in [Language::EnUs, Language::ZhCn] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("zh"), Some(Language::ZhCn));
        assert_eq!(Language::from_code("fr-FR"), None);
    }

    #[test]
    fn english_texts_match_core_messages() {
        let en = &en_us::TRANSLATIONS;
        assert_eq!(en.errors.fetch_failed, FormError::FetchFailed.to_string());
        assert_eq!(en.errors.save_failed, FormError::SaveFailed.to_string());
        assert_eq!(en.errors.delete_failed, FormError::DeleteFailed.to_string());
        assert_eq!(
            en.errors.record_not_found,
            FormError::RecordNotFound(String::new()).to_string()
        );
        assert_eq!(en.errors.required, ValidationKind::Required.to_string());
        assert_eq!(
            en.errors.age_not_number,
            ValidationKind::AgeNotNumber.to_string()
        );
    }

    #[test]
    fn validation_kinds_use_their_own_texts() {
        let texts = &t().errors;
        assert_eq!(
            error_text(&FormError::ValidationFailed(ValidationKind::Required)),
            texts.required
        );
        assert_eq!(
            error_text(&FormError::ValidationFailed(ValidationKind::AgeNotNumber)),
            texts.age_not_number
        );
    }
}

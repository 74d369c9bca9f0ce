//! 焦点状态定义

/// 可获得焦点的控件，按 Tab 顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 姓名输入框
    #[default]
    Name,
    /// 年龄输入框
    Age,
    /// 提交按钮
    Submit,
    /// 记录列表
    List,
}

impl Focus {
    /// Tab：下一个控件（循环）
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Age,
            Self::Age => Self::Submit,
            Self::Submit => Self::List,
            Self::List => Self::Name,
        }
    }

    /// Shift+Tab：上一个控件（循环）
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::List,
            Self::Age => Self::Name,
            Self::Submit => Self::Age,
            Self::List => Self::Submit,
        }
    }

    /// 是否是文本输入框
    pub fn is_input(self) -> bool {
        matches!(self, Self::Name | Self::Age)
    }

    pub fn is_list(self) -> bool {
        matches!(self, Self::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycles_through_every_control() {
        let mut focus = Focus::default();
        let mut seen = vec![focus];
        for _ in 0..3 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(seen, [Focus::Name, Focus::Age, Focus::Submit, Focus::List]);
        assert_eq!(focus.next(), Focus::Name);
    }

    #[test]
    fn prev_undoes_next() {
        for f in [Focus::Name, Focus::Age, Focus::Submit, Focus::List] {
            assert_eq!(f.next().prev(), f);
        }
    }
}

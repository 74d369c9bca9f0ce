//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Focus};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 有请求进行中时显示在右侧
    if app.pending_requests > 0 {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            t().common.working,
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;
    let mut hints = vec![("Tab", h.switch_focus)];

    match app.focus {
        Focus::Name | Focus::Age | Focus::Submit => {
            hints.push(("Enter", h.submit));
        }
        Focus::List => {
            hints.push(("↑↓", h.select));
            hints.push(("e", h.edit));
            hints.push(("d", h.delete));
        }
    }

    if app.form.is_editing() {
        hints.push(("Esc", h.cancel_edit));
    }

    hints.push(("Alt+h", h.help));
    hints.push(("Alt+q", h.quit));
    hints
}

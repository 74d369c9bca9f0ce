//! 表单组件：姓名、年龄输入框与提交按钮

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{error_text, t};
use crate::model::{App, Focus};
use crate::view::theme::{colors, Styles};

/// 标签列宽度
const LABEL_WIDTH: u16 = 8;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_input() || app.focus == Focus::Submit;

    let title = if app.form.is_editing() {
        format!(" {} ({}) ", texts.form.title, texts.form.editing)
    } else {
        format!(" {} ", texts.form.title)
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width <= LABEL_WIDTH {
        return;
    }

    let row = |offset: u16| Rect::new(inner.x, inner.y + offset, inner.width, 1);

    render_input(
        frame,
        row(0),
        texts.form.name_label,
        &app.form.name,
        app.focus == Focus::Name,
    );
    if inner.height > 1 {
        render_input(
            frame,
            row(1),
            texts.form.age_label,
            &app.form.age,
            app.focus == Focus::Age,
        );
    }

    if inner.height > 3 {
        let label = if app.form.is_editing() {
            texts.form.update_button
        } else {
            texts.form.add_button
        };
        let style = if app.focus == Focus::Submit {
            Styles::selected()
        } else {
            Style::default().fg(c.success).add_modifier(Modifier::BOLD)
        };
        let button = Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH as usize)),
            Span::styled(format!("[ {label} ]"), style),
        ]);
        frame.render_widget(Paragraph::new(button), row(3));
    }

    if inner.height > 4 {
        if let Some(error) = &app.form.error {
            let line = Paragraph::new(error_text(error)).style(Style::default().fg(c.error));
            frame.render_widget(line, row(4));
        }
    }
}

/// 渲染一行 `标签 值`，获得焦点时显示光标
fn render_input(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let c = colors();
    let value_style = if focused {
        Style::default().fg(c.fg).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(c.fg)
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{label:<width$}", width = LABEL_WIDTH as usize),
            Style::default().fg(c.muted),
        ),
        Span::styled(value.to_string(), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if focused {
        let text_width = u16::try_from(value.width()).unwrap_or(u16::MAX);
        let max_x = area.x + area.width.saturating_sub(1);
        let x = (area.x + LABEL_WIDTH).saturating_add(text_width).min(max_x);
        frame.set_cursor_position(Position::new(x, area.y));
    }
}

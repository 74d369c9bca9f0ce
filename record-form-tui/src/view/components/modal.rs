//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};

/// 渲染当前弹窗（如果有）
pub fn render(app: &App, frame: &mut Frame) {
    match &app.modal.active {
        Some(Modal::ConfirmDelete { name, focus, .. }) => {
            render_confirm_delete(frame, name, *focus);
        }
        Some(Modal::Help) => render_help(frame),
        None => {}
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 去掉边框和左右留白后的区域
fn padded(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn render_confirm_delete(frame: &mut Frame, name: &str, focus: usize) {
    let texts = t();
    let area = centered_rect(44, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(texts.modal.confirm_delete_title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let chosen = Style::default().fg(Color::Black).bg(Color::White);
    let idle = Style::default().fg(Color::White);
    let (cancel_style, delete_style) = if focus == 0 {
        (chosen, idle)
    } else {
        (idle, chosen.bg(Color::Red))
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", texts.modal.confirm_delete_prompt),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("\"{name}\"?"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {}  ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!("  {}  ", texts.common.delete), delete_style),
        ])
        .alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, padded(area));
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let lines_count = u16::try_from(texts.modal.help_lines.len()).unwrap_or(u16::MAX);
    let area = centered_rect(48, lines_count.saturating_add(2), frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(texts.modal.help_title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let lines: Vec<Line> = texts
        .modal
        .help_lines
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:<14}"), Style::default().fg(Color::Yellow)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), padded(area));
}

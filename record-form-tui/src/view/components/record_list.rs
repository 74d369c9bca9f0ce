//! 记录列表组件

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ({}) ", texts.list.title, app.form.records.len()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_list()));

    if app.form.loading {
        let loading = Paragraph::new(texts.common.loading)
            .style(Style::default().fg(c.muted))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if app.form.records.is_empty() {
        let empty = Paragraph::new(texts.list.empty)
            .style(Style::default().fg(c.muted))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let editing_id = app.form.editing.as_ref().map(|r| r.id.as_str());
    let items: Vec<ListItem> = app
        .form
        .records
        .iter()
        .map(|record| {
            let style = if Some(record.id.as_str()) == editing_id {
                Style::default().fg(c.warning)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(format!("{} - {}", record.name, record.age)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

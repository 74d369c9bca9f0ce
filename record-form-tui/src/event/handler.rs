//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ListMessage, ModalMessage};
use crate::model::{App, Focus, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Reset;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    // Shift+Tab 在不同终端上报的修饰键不一致，只看键码
    if key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::List(ListMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::List(ListMessage::Delete);
    }

    match app.focus {
        Focus::Name | Focus::Age => handle_input_keys(key),
        Focus::Submit => handle_button_keys(key),
        Focus::List => handle_list_keys(key),
    }
}

/// 输入框中的按键
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::CLEAR_FIELD.matches(&key) {
        return AppMessage::Form(FormMessage::ClearField);
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            AppMessage::Form(FormMessage::Input(c))
        }
        (_, KeyCode::Backspace) => AppMessage::Form(FormMessage::Backspace),
        _ => AppMessage::Noop,
    }
}

/// 提交按钮上的按键
fn handle_button_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => AppMessage::Form(FormMessage::Submit),
        KeyCode::Char('?') => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

/// 列表中的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if !matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) {
        return AppMessage::Noop;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::SelectNext),
        KeyCode::Home => AppMessage::List(ListMessage::SelectFirst),
        KeyCode::End => AppMessage::List(ListMessage::SelectLast),
        KeyCode::Enter | KeyCode::Char('e') => AppMessage::List(ListMessage::Edit),
        KeyCode::Delete | KeyCode::Char('d') => AppMessage::List(ListMessage::Delete),
        KeyCode::Char('?') => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

/// 弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match modal {
        Modal::ConfirmDelete { .. } => match key.code {
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('h' | 'l') => AppMessage::Modal(ModalMessage::ToggleChoice),
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::Char('?' | 'q') => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        press(KeyModifiers::NONE, code)
    }

    fn app_with_focus(focus: Focus) -> App {
        let mut app = App::new();
        app.focus = focus;
        app
    }

    #[test]
    fn release_events_are_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(event, &App::new()), AppMessage::Noop));
    }

    #[test]
    fn characters_type_into_inputs() {
        let app = app_with_focus(Focus::Name);
        assert!(matches!(
            handle_event(key(KeyCode::Char('?')), &app),
            AppMessage::Form(FormMessage::Input('?'))
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::SHIFT, KeyCode::Char('A')), &app),
            AppMessage::Form(FormMessage::Input('A'))
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Submit)
        ));
    }

    #[test]
    fn global_shortcuts() {
        let app = app_with_focus(Focus::Age);
        assert!(matches!(
            handle_event(press(KeyModifiers::CONTROL, KeyCode::Char('c')), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::ALT, KeyCode::Char('q')), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::ALT, KeyCode::Char('h')), &app),
            AppMessage::ShowHelp
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Reset
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Tab), &app),
            AppMessage::FocusNext
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::SHIFT, KeyCode::BackTab), &app),
            AppMessage::FocusPrev
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::ALT, KeyCode::Char('e')), &app),
            AppMessage::List(ListMessage::Edit)
        ));
        assert!(matches!(
            handle_event(press(KeyModifiers::ALT, KeyCode::Char('d')), &app),
            AppMessage::List(ListMessage::Delete)
        ));
    }

    #[test]
    fn list_keys() {
        let app = app_with_focus(Focus::List);
        assert!(matches!(
            handle_event(key(KeyCode::Char('j')), &app),
            AppMessage::List(ListMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('e')), &app),
            AppMessage::List(ListMessage::Edit)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('d')), &app),
            AppMessage::List(ListMessage::Delete)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('?')), &app),
            AppMessage::ShowHelp
        ));
    }

    #[test]
    fn esc_closes_modal_instead_of_resetting() {
        let mut app = App::new();
        app.modal.show_confirm_delete("1", "Ana");
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Right), &app),
            AppMessage::Modal(ModalMessage::ToggleChoice)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
        // 弹窗打开时 Tab 不移动焦点
        assert!(!matches!(
            handle_event(key(KeyCode::Tab), &app),
            AppMessage::FocusNext
        ));
    }
}

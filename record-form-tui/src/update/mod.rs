//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 需要访问网络时返回一个 [`BackendCommand`]，由主循环交给 Backend 执行；
//! 执行结果以 [`AppMessage::Remote`] 的形式再回到这里。

mod form;
mod list;
mod modal;

use record_form_core::{reduce, FormEvent};

use crate::backend::BackendCommand;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<BackendCommand> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::FocusNext => {
            if !app.modal.is_open() {
                app.focus = app.focus.next();
            }
            None
        }

        AppMessage::FocusPrev => {
            if !app.modal.is_open() {
                app.focus = app.focus.prev();
            }
            None
        }

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::List(list_msg) => list::update(app, list_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Remote(event) => {
            app.pending_requests = app.pending_requests.saturating_sub(1);
            apply(app, event);
            None
        }

        AppMessage::Reset => {
            if app.modal.is_open() {
                app.modal.close();
            } else {
                apply(app, FormEvent::Reset);
            }
            None
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Noop => None,
    }
}

/// 启动时的首个请求：加载列表
pub fn initial_command(app: &mut App) -> BackendCommand {
    request(app, BackendCommand::LoadRecords)
}

/// 把一个表单事件归约进 `app.form`
fn apply(app: &mut App, event: FormEvent) {
    let state = std::mem::take(&mut app.form);
    app.form = reduce(state, event);
    app.clamp_selection();
}

/// 记录一个进行中的请求
fn request(app: &mut App, command: BackendCommand) -> BackendCommand {
    app.pending_requests += 1;
    command
}

#[cfg(test)]
mod tests {
    use record_form_api::{Age, RecordPayload};
    use record_form_core::test_utils::record;
    use record_form_core::{FormError, SubmitRequest, ValidationKind};

    use super::*;
    use crate::message::{FormMessage, ListMessage, ModalMessage};
    use crate::model::{Focus, Modal};

    fn loaded(records: Vec<record_form_api::Record>) -> App {
        let mut app = App::new();
        assert_eq!(initial_command(&mut app), BackendCommand::LoadRecords);
        update(&mut app, AppMessage::Remote(FormEvent::ListLoaded(records)));
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert!(update(app, AppMessage::Form(FormMessage::Input(c))).is_none());
        }
    }

    #[test]
    fn list_result_stops_loading() {
        let app = loaded(vec![record("1", "Ana", 30)]);
        assert!(!app.form.loading);
        assert_eq!(app.pending_requests, 0);
        assert_eq!(app.form.records.len(), 1);
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut app = loaded(vec![]);
        type_text(&mut app, "Ana");
        update(&mut app, AppMessage::FocusNext);
        type_text(&mut app, "30");
        update(&mut app, AppMessage::Form(FormMessage::Backspace));

        assert_eq!(app.form.name, "Ana");
        assert_eq!(app.form.age, "3");
    }

    #[test]
    fn typing_on_list_is_ignored() {
        let mut app = loaded(vec![]);
        app.focus = Focus::List;
        type_text(&mut app, "x");
        assert!(app.form.name.is_empty() && app.form.age.is_empty());
    }

    #[test]
    fn submit_with_empty_fields_sends_nothing() {
        let mut app = loaded(vec![]);
        let cmd = update(&mut app, AppMessage::Form(FormMessage::Submit));

        assert!(cmd.is_none());
        assert_eq!(app.pending_requests, 0);
        assert_eq!(
            app.form.error,
            Some(FormError::ValidationFailed(ValidationKind::Required))
        );
    }

    #[test]
    fn submit_creates_when_not_editing() {
        let mut app = loaded(vec![]);
        type_text(&mut app, "Ana");
        update(&mut app, AppMessage::FocusNext);
        type_text(&mut app, "30");

        let cmd = update(&mut app, AppMessage::Form(FormMessage::Submit));
        assert_eq!(
            cmd,
            Some(BackendCommand::Submit(SubmitRequest::Create(
                RecordPayload::new("Ana", Age::Years(30))
            )))
        );
        assert_eq!(app.pending_requests, 1);

        update(
            &mut app,
            AppMessage::Remote(FormEvent::Created(record("9", "Ana", 30))),
        );
        assert_eq!(app.pending_requests, 0);
        assert_eq!(app.form.records.len(), 1);
        assert!(app.form.name.is_empty());
    }

    #[test]
    fn edit_selected_then_submit_updates() {
        let mut app = loaded(vec![record("1", "Ana", 30), record("2", "Bo", 41)]);
        app.focus = Focus::List;
        update(&mut app, AppMessage::List(ListMessage::SelectNext));
        update(&mut app, AppMessage::List(ListMessage::Edit));

        assert_eq!(app.focus, Focus::Name);
        assert_eq!(app.form.name, "Bo");
        assert_eq!(app.form.submit_label(), "Update Data");

        app.focus = Focus::Age;
        update(&mut app, AppMessage::Form(FormMessage::ClearField));
        type_text(&mut app, "42");
        let cmd = update(&mut app, AppMessage::Form(FormMessage::Submit));
        assert_eq!(
            cmd,
            Some(BackendCommand::Submit(SubmitRequest::Update {
                id: "2".into(),
                payload: RecordPayload::new("Bo", Age::Years(42)),
            }))
        );
    }

    #[test]
    fn delete_asks_for_confirmation_first() {
        let mut app = loaded(vec![record("1", "Ana", 30)]);
        assert!(update(&mut app, AppMessage::List(ListMessage::Delete)).is_none());
        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmDelete { ref id, focus: 0, .. }) if id == "1"
        ));

        // 默认焦点在“取消”
        assert!(update(&mut app, AppMessage::Modal(ModalMessage::Confirm)).is_none());
        assert!(!app.modal.is_open());

        update(&mut app, AppMessage::List(ListMessage::Delete));
        update(&mut app, AppMessage::Modal(ModalMessage::ToggleChoice));
        let cmd = update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert_eq!(cmd, Some(BackendCommand::Delete("1".into())));
        assert!(!app.modal.is_open());

        update(&mut app, AppMessage::Remote(FormEvent::Deleted("1".into())));
        assert!(app.form.records.is_empty());
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn delete_on_empty_list_does_nothing() {
        let mut app = loaded(vec![]);
        update(&mut app, AppMessage::List(ListMessage::Delete));
        update(&mut app, AppMessage::List(ListMessage::Edit));
        assert!(!app.modal.is_open());
        assert!(app.form.error.is_none());
    }

    #[test]
    fn reset_closes_modal_before_clearing_form() {
        let mut app = loaded(vec![record("1", "Ana", 30)]);
        update(&mut app, AppMessage::List(ListMessage::Edit));
        update(&mut app, AppMessage::ShowHelp);

        update(&mut app, AppMessage::Reset);
        assert!(!app.modal.is_open());
        assert!(app.form.is_editing());

        update(&mut app, AppMessage::Reset);
        assert!(!app.form.is_editing());
        assert!(app.form.name.is_empty());
    }

    #[test]
    fn selection_follows_list_changes() {
        let mut app = loaded(vec![record("1", "Ana", 30), record("2", "Bo", 41)]);
        update(&mut app, AppMessage::List(ListMessage::SelectLast));
        assert_eq!(app.selected, 1);
        update(&mut app, AppMessage::List(ListMessage::SelectNext));
        assert_eq!(app.selected, 1);

        update(&mut app, AppMessage::Remote(FormEvent::Deleted("2".into())));
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_record().map(|r| r.id.as_str()), Some("1"));
    }

    #[test]
    fn focus_does_not_move_under_modal() {
        let mut app = loaded(vec![]);
        update(&mut app, AppMessage::ShowHelp);
        update(&mut app, AppMessage::FocusNext);
        assert_eq!(app.focus, Focus::Name);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}

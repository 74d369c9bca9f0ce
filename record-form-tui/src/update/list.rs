//! 记录列表的更新逻辑

use record_form_core::FormEvent;

use super::apply;
use crate::backend::BackendCommand;
use crate::message::ListMessage;
use crate::model::{App, Focus};

pub fn update(app: &mut App, msg: ListMessage) -> Option<BackendCommand> {
    let len = app.form.records.len();
    match msg {
        ListMessage::SelectPrevious => {
            app.selected = app.selected.saturating_sub(1);
        }
        ListMessage::SelectNext => {
            if app.selected + 1 < len {
                app.selected += 1;
            }
        }
        ListMessage::SelectFirst => app.selected = 0,
        ListMessage::SelectLast => app.selected = len.saturating_sub(1),
        ListMessage::Edit => {
            if let Some(id) = app.selected_record().map(|r| r.id.clone()) {
                apply(app, FormEvent::EditRequested(id));
                app.focus = Focus::Name;
            }
        }
        ListMessage::Delete => {
            if let Some(record) = app.selected_record() {
                let (id, name) = (record.id.clone(), record.name.clone());
                app.modal.show_confirm_delete(id, name);
            }
        }
    }
    None
}

//! 输入框与提交按钮的更新逻辑

use record_form_core::{plan_submit, FormEvent};

use super::{apply, request};
use crate::backend::BackendCommand;
use crate::message::FormMessage;
use crate::model::{App, Focus};

pub fn update(app: &mut App, msg: FormMessage) -> Option<BackendCommand> {
    match msg {
        FormMessage::Input(c) => {
            edit_field(app, |text| text.push(c));
            None
        }
        FormMessage::Backspace => {
            edit_field(app, |text| {
                text.pop();
            });
            None
        }
        FormMessage::ClearField => {
            edit_field(app, String::clear);
            None
        }
        FormMessage::Submit => submit(app),
    }
}

/// 修改当前获得焦点的输入框
fn edit_field(app: &mut App, f: impl FnOnce(&mut String)) {
    match app.focus {
        Focus::Name => {
            let mut name = app.form.name.clone();
            f(&mut name);
            apply(app, FormEvent::NameChanged(name));
        }
        Focus::Age => {
            let mut age = app.form.age.clone();
            f(&mut age);
            apply(app, FormEvent::AgeChanged(age));
        }
        Focus::Submit | Focus::List => {}
    }
}

fn submit(app: &mut App) -> Option<BackendCommand> {
    match plan_submit(&app.form) {
        Ok(req) => Some(request(app, BackendCommand::Submit(req))),
        Err(e) => {
            log::warn!("Submit rejected: {e}");
            apply(app, FormEvent::Failed(e));
            None
        }
    }
}

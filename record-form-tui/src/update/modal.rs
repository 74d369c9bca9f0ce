//! 弹窗的更新逻辑

use super::request;
use crate::backend::BackendCommand;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

pub fn update(app: &mut App, msg: ModalMessage) -> Option<BackendCommand> {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
            None
        }
        ModalMessage::ToggleChoice => {
            if let Some(Modal::ConfirmDelete { focus, .. }) = app.modal.active.as_mut() {
                *focus = 1 - *focus;
            }
            None
        }
        ModalMessage::Confirm => match app.modal.active.take() {
            Some(Modal::ConfirmDelete { id, focus: 1, .. }) => {
                Some(request(app, BackendCommand::Delete(id)))
            }
            _ => None,
        },
    }
}

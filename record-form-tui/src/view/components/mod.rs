//! UI 组件

pub mod form;
pub mod modal;
pub mod record_list;
pub mod statusbar;

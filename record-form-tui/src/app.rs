//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! ```text
//! loop {
//!     terminal.draw(|f| view::render(&app, f))   // 渲染 UI
//!     if app.should_quit { break }
//!     while let Ok(event) = results.try_recv() { // 取回后台请求结果
//!         update(Remote(event))
//!     }
//!     if let Some(event) = poll_event() {        // 最长等待 100ms
//!         let msg = handle_event(event, &app);
//!         update(msg) -> Option<BackendCommand>  // 需要网络时交给 Backend
//!     }
//! }
//! ```

use std::time::Duration;

use anyhow::Result;
use record_form_core::FormEvent;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::RecordBackend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &RecordBackend,
    results: &mut UnboundedReceiver<FormEvent>,
) -> Result<()> {
    backend.dispatch(update::initial_command(app));

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| view::render(app, frame))?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 取回已完成的后台请求
        while let Ok(event) = results.try_recv() {
            if let Some(command) = update::update(app, AppMessage::Remote(event)) {
                backend.dispatch(command);
            }
        }

        // 4. 轮询键盘事件
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            if let Some(command) = update::update(app, msg) {
                backend.dispatch(command);
            }
        }
    }

    Ok(())
}

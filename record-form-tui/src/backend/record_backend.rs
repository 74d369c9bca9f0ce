//! 远端请求调度
//!
//! 主循环不等待网络：每条命令都被 spawn 到 tokio 运行时，
//! 完成后把 [`FormEvent`] 发回主循环。请求之间没有去重，
//! 后完成的响应覆盖先完成的。

use record_form_core::{FormEvent, RecordService, SubmitRequest};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Update 层请求执行的远端操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// 拉取全部记录
    LoadRecords,
    /// 新建或更新
    Submit(SubmitRequest),
    /// 按 id 删除
    Delete(String),
}

/// 后台请求执行器
pub struct RecordBackend {
    handle: Handle,
    service: RecordService,
    tx: UnboundedSender<FormEvent>,
}

impl RecordBackend {
    /// 创建执行器，返回结果接收端
    pub fn new(handle: Handle, service: RecordService) -> (Self, UnboundedReceiver<FormEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                handle,
                service,
                tx,
            },
            rx,
        )
    }

    /// 在后台执行命令
    pub fn dispatch(&self, command: BackendCommand) {
        log::debug!("Dispatching {command:?}");
        let service = self.service.clone();
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let event = match command {
                BackendCommand::LoadRecords => service.fetch_records().await,
                BackendCommand::Submit(request) => service.execute_submit(request).await,
                BackendCommand::Delete(id) => service.delete_record(id).await,
            };
            // 接收端已关闭说明程序正在退出
            if tx.send(event).is_err() {
                log::debug!("UI loop gone, dropping result");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use record_form_api::{Age, RecordPayload};
    use record_form_core::test_utils::{record, MockRecordApi};
    use record_form_core::FormError;
    use tokio::runtime::Runtime;

    use super::*;

    fn setup(mock: &Arc<MockRecordApi>) -> (Runtime, RecordBackend, UnboundedReceiver<FormEvent>) {
        let runtime = Runtime::new().unwrap();
        let (backend, rx) =
            RecordBackend::new(runtime.handle().clone(), RecordService::new(mock.clone()));
        (runtime, backend, rx)
    }

    #[test]
    fn load_sends_list_back() {
        let mock = Arc::new(MockRecordApi::with_records(vec![record("1", "Ana", 30)]));
        let (_runtime, backend, mut rx) = setup(&mock);

        backend.dispatch(BackendCommand::LoadRecords);

        assert_eq!(
            rx.blocking_recv(),
            Some(FormEvent::ListLoaded(vec![record("1", "Ana", 30)]))
        );
    }

    #[test]
    fn submit_and_delete_results_arrive() {
        let mock = Arc::new(MockRecordApi::new());
        let (_runtime, backend, mut rx) = setup(&mock);

        backend.dispatch(BackendCommand::Submit(SubmitRequest::Create(
            RecordPayload::new("Bo", Age::Years(41)),
        )));
        let Some(FormEvent::Created(created)) = rx.blocking_recv() else {
            panic!("expected Created");
        };
        assert_eq!(created.name, "Bo");

        backend.dispatch(BackendCommand::Delete(created.id.clone()));
        assert_eq!(rx.blocking_recv(), Some(FormEvent::Deleted(created.id)));
    }

    #[test]
    fn failures_arrive_as_failed_events() {
        let mock = Arc::new(MockRecordApi::new());
        let (runtime, backend, mut rx) = setup(&mock);
        runtime.block_on(mock.fail_next_with_status(500));

        backend.dispatch(BackendCommand::LoadRecords);
        assert_eq!(
            rx.blocking_recv(),
            Some(FormEvent::Failed(FormError::FetchFailed))
        );
    }
}

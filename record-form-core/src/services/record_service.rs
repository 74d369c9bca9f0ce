//! 远端记录操作服务
//!
//! 每个方法执行一次 API 调用，并把结果折叠成一个 [`FormEvent`]。
//! 失败会在这里完整记录日志，事件中只保留面向用户的静态消息。

use std::sync::Arc;

use record_form_api::RecordApi;

use crate::error::{log_api_error, FormError};
use crate::state::FormEvent;
use crate::validation::SubmitRequest;

/// 记录操作服务
#[derive(Clone)]
pub struct RecordService {
    api: Arc<dyn RecordApi>,
}

impl RecordService {
    /// 创建服务实例
    #[must_use]
    pub fn new(api: Arc<dyn RecordApi>) -> Self {
        Self { api }
    }

    /// 拉取全部记录
    pub async fn fetch_records(&self) -> FormEvent {
        match self.api.list().await {
            Ok(records) => {
                log::info!("Loaded {} records", records.len());
                FormEvent::ListLoaded(records)
            }
            Err(e) => {
                log_api_error("fetching data", &e);
                FormEvent::Failed(FormError::FetchFailed)
            }
        }
    }

    /// 执行已通过校验的提交
    pub async fn execute_submit(&self, request: SubmitRequest) -> FormEvent {
        let result = match &request {
            SubmitRequest::Create(payload) => self.api.create(payload).await,
            SubmitRequest::Update { id, payload } => self.api.update(id, payload).await,
        };

        match result {
            Ok(record) => {
                log::debug!("API response: {record:?}");
                match request {
                    SubmitRequest::Create(_) => FormEvent::Created(record),
                    SubmitRequest::Update { id, .. } => FormEvent::Updated { id, record },
                }
            }
            Err(e) => {
                log_api_error("saving data", &e);
                FormEvent::Failed(FormError::SaveFailed)
            }
        }
    }

    /// 按 id 删除记录
    pub async fn delete_record(&self, id: String) -> FormEvent {
        match self.api.delete(&id).await {
            Ok(()) => {
                log::info!("Deleted record {id}");
                FormEvent::Deleted(id)
            }
            Err(e) => {
                log_api_error("deleting data", &e);
                FormEvent::Failed(FormError::DeleteFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{record, MockRecordApi};
    use record_form_api::{Age, RecordPayload};

    fn service(mock: &Arc<MockRecordApi>) -> RecordService {
        RecordService::new(mock.clone())
    }

    #[tokio::test]
    async fn fetch_maps_success_and_failure() {
        let mock = Arc::new(MockRecordApi::with_records(vec![record("1", "Ana", 30)]));
        assert_eq!(
            service(&mock).fetch_records().await,
            FormEvent::ListLoaded(vec![record("1", "Ana", 30)])
        );

        mock.fail_next_with_status(500).await;
        assert_eq!(
            service(&mock).fetch_records().await,
            FormEvent::Failed(FormError::FetchFailed)
        );
    }

    #[tokio::test]
    async fn update_event_carries_the_addressed_id() {
        let mock = Arc::new(MockRecordApi::with_records(vec![record("1", "Ana", 30)]));
        let event = service(&mock)
            .execute_submit(SubmitRequest::Update {
                id: "1".into(),
                payload: RecordPayload::new("Ana", Age::Years(31)),
            })
            .await;

        assert_eq!(
            event,
            FormEvent::Updated {
                id: "1".into(),
                record: record("1", "Ana", 31),
            }
        );
    }

    #[tokio::test]
    async fn failed_create_is_save_failed() {
        let mock = Arc::new(MockRecordApi::new());
        mock.fail_next_with_status(400).await;
        let event = service(&mock)
            .execute_submit(SubmitRequest::Create(RecordPayload::new(
                "Ana",
                Age::Years(30),
            )))
            .await;
        assert_eq!(event, FormEvent::Failed(FormError::SaveFailed));
    }

    #[tokio::test]
    async fn delete_maps_success_and_failure() {
        let mock = Arc::new(MockRecordApi::with_records(vec![record("1", "Ana", 30)]));
        mock.fail_next_with_status(503).await;
        assert_eq!(
            service(&mock).delete_record("1".into()).await,
            FormEvent::Failed(FormError::DeleteFailed)
        );
        assert_eq!(
            service(&mock).delete_record("1".into()).await,
            FormEvent::Deleted("1".into())
        );
        assert_eq!(mock.delete_calls(), 2);
    }
}

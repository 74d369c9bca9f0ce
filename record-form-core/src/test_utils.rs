//! 测试辅助模块
//!
//! 提供内存版 [`RecordApi`] 和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use record_form_api::{Age, ApiError, Record, RecordApi, RecordPayload, Result};
use tokio::sync::RwLock;

/// 构造一条记录
pub fn record(id: &str, name: &str, age: u16) -> Record {
    Record {
        id: id.to_string(),
        name: name.to_string(),
        age: Age::Years(age),
    }
}

// ===== MockRecordApi =====

/// 内存中的记录集合，行为与远端集合一致
pub struct MockRecordApi {
    records: RwLock<Vec<Record>>,
    /// 如果 Some，下一次调用返回此错误
    next_error: RwLock<Option<ApiError>>,
    last_payload: RwLock<Option<RecordPayload>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MockRecordApi {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
            next_error: RwLock::new(None),
            last_payload: RwLock::new(None),
            next_id: AtomicUsize::new(1),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// 让下一次调用以给定 HTTP 状态失败
    pub async fn fail_next_with_status(&self, status: u16) {
        self.fail_next(ApiError::HttpStatus { status, body: None })
            .await;
    }

    pub async fn fail_next(&self, error: ApiError) {
        *self.next_error.write().await = Some(error);
    }

    /// 服务端当前持有的记录
    pub async fn records(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }

    /// 最近一次 create/update 收到的请求体
    pub async fn last_payload(&self) -> Option<RecordPayload> {
        self.last_payload.read().await.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    async fn take_error(&self) -> Result<()> {
        match self.next_error.write().await.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for MockRecordApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordApi for MockRecordApi {
    async fn list(&self) -> Result<Vec<Record>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.take_error().await?;
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, payload: &RecordPayload) -> Result<Record> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.write().await = Some(payload.clone());
        self.take_error().await?;

        let id = format!("mock-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = Record {
            id,
            name: payload.name.clone(),
            age: payload.age.clone(),
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, payload: &RecordPayload) -> Result<Record> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.write().await = Some(payload.clone());
        self.take_error().await?;

        let mut store = self.records.write().await;
        let slot = store
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ApiError::HttpStatus {
                status: 404,
                body: None,
            })?;
        slot.name.clone_from(&payload.name);
        slot.age = payload.age.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.take_error().await?;
        self.records.write().await.retain(|r| r.id != id);
        Ok(())
    }
}

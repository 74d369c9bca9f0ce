use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Record, RecordPayload};

/// 记录集合 API Trait
///
/// 四个操作一一对应远端集合端点的 GET / POST / PUT / DELETE。
/// 实现方不得重试，也不得缓存结果。
#[async_trait]
pub trait RecordApi: Send + Sync {
    /// 获取全部记录 (`GET /`)
    async fn list(&self) -> Result<Vec<Record>>;

    /// 创建记录，返回服务端分配了 id 的记录 (`POST /`)
    async fn create(&self, payload: &RecordPayload) -> Result<Record>;

    /// 按 id 更新记录，返回更新后的记录 (`PUT /:id`)
    async fn update(&self, id: &str, payload: &RecordPayload) -> Result<Record>;

    /// 按 id 删除记录，响应体被忽略 (`DELETE /:id`)
    async fn delete(&self, id: &str) -> Result<()>;
}

//! 共享测试工具和辅助函数

#![allow(dead_code)]

use mockito::{Mock, Server, ServerGuard};
use record_form_api::HttpRecordApi;
use serde_json::{json, Value};

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 启动本地 mock 服务器，并创建指向其集合路径 `/api/` 的客户端
pub async fn start() -> (ServerGuard, HttpRecordApi) {
    let server = Server::new_async().await;
    let api = HttpRecordApi::new(&format!("{}/api", server.url()))
        .unwrap_or_else(|e| panic!("mock server URL rejected: {e}"));
    (server, api)
}

/// 服务端格式的记录 JSON
pub fn record_json(id: &str, name: &str, age: &str) -> Value {
    json!({ "_id": id, "name": name, "age": age })
}

/// 注册一个返回 JSON 的 mock
pub async fn mock_json(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: &Value,
) -> Mock {
    server
        .mock(method, path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

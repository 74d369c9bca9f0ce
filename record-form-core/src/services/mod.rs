//! 服务层

mod record_service;

pub use record_service::RecordService;

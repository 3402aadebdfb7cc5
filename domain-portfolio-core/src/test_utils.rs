//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::repository::KeyValueRepository;
use crate::services::ServiceContext;
use crate::traits::KeyValueStore;
use crate::types::{DomainRecord, DomainStatus, RenewalUnit};

pub use crate::services::default_portfolio;

// ===== MockKeyValueStore =====

pub struct MockKeyValueStore {
    data: RwLock<HashMap<String, serde_json::Value>>,
    /// 如果 Some，set 时返回此错误（用于测试保存失败路径）
    set_error: RwLock<Option<String>>,
}

impl MockKeyValueStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            set_error: RwLock::new(None),
        }
    }

    pub async fn set_set_error(&self, err: Option<String>) {
        *self.set_error.write().await = err;
    }
}

#[async_trait]
impl KeyValueStore for MockKeyValueStore {
    async fn get(&self, key: &str) -> CoreResult<Option<serde_json::Value>> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> CoreResult<()> {
        if let Some(ref msg) = *self.set_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.data.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 构造一条普通（非永久）测试记录
pub fn domain(id: u64, name: &str) -> DomainRecord {
    DomainRecord {
        id,
        name: name.to_string(),
        expiry: "2025-12-31".to_string(),
        renewal_period: "1年".to_string(),
        renewal_value: 1,
        renewal_unit: RenewalUnit::Year,
        provider: "Namecheap".to_string(),
        console_url: String::new(),
        status: DomainStatus::Active,
        is_permanent: false,
        display_order: Some(0),
    }
}

/// 基于同一个 mock store 创建服务上下文
pub fn create_test_context() -> (ServiceContext, Arc<MockKeyValueStore>) {
    let store = Arc::new(MockKeyValueStore::new());
    let repository = Arc::new(KeyValueRepository::new(store.clone()));
    let ctx = ServiceContext::new(repository.clone(), repository);
    (ctx, store)
}

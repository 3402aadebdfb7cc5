//! 域名集合管理服务
//!
//! 每个操作都是 load -> mutate -> save 整个集合，并由服务级互斥锁串行化，
//! 新集合完整构建后才会保存，失败不会留下部分状态。

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::listing;
use crate::traits::DomainRepository;
use crate::types::{
    renewal_period, CreateDomainRequest, DomainRecord, DomainUpdate, ImportFile, ImportResult,
    ImportedDomain, ListQuery, MoveDirection, RenewalUnit, PERMANENT_EXPIRY,
};
use crate::utils::date::today_iso;

use super::seed::default_portfolio;

/// 域名集合管理服务
pub struct DomainService {
    repository: Arc<dyn DomainRepository>,
    lock: Mutex<()>,
}

impl DomainService {
    /// 创建域名服务实例
    #[must_use]
    pub fn new(repository: Arc<dyn DomainRepository>) -> Self {
        Self {
            repository,
            lock: Mutex::new(()),
        }
    }

    /// 按过滤和排序条件列出域名
    pub async fn list(&self, query: &ListQuery) -> CoreResult<Vec<DomainRecord>> {
        let records = self.list_all().await?;
        Ok(listing::process(&records, query))
    }

    /// 原始集合（首次加载时写入默认数据）
    pub async fn list_all(&self) -> CoreResult<Vec<DomainRecord>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// 获取单个域名
    pub async fn get(&self, id: u64) -> CoreResult<DomainRecord> {
        self.list_all()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(CoreError::DomainNotFound(id))
    }

    /// 新增域名
    pub async fn add(&self, request: CreateDomainRequest) -> CoreResult<DomainRecord> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(CoreError::ValidationError(
                "Domain name cannot be empty".to_string(),
            ));
        }

        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let record = DomainRecord {
            id: next_id(&records),
            name: name.to_string(),
            expiry: initial_expiry(request.expiry.as_deref(), request.is_permanent),
            renewal_period: renewal_period(request.renewal_value, request.renewal_unit),
            renewal_value: request.renewal_value,
            renewal_unit: request.renewal_unit,
            provider: request.provider,
            console_url: request.console_url,
            status: request.status,
            is_permanent: request.is_permanent,
            display_order: Some(next_order(&records)),
        };
        records.push(record.clone());
        self.repository.save(&records).await?;

        log::info!("Added domain {} (id {})", record.name, record.id);
        Ok(record)
    }

    /// 克隆域名：新 id、排在最后、名称追加 `-clone`
    pub async fn clone_domain(&self, id: u64) -> CoreResult<DomainRecord> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let source = find(&records, id)?;
        let mut copy = source.clone();
        copy.name = source.clone_name();
        copy.id = next_id(&records);
        copy.display_order = Some(next_order(&records));

        records.push(copy.clone());
        self.repository.save(&records).await?;

        log::info!("Cloned domain {id} as {} (id {})", copy.name, copy.id);
        Ok(copy)
    }

    /// 部分更新
    pub async fn update(&self, id: u64, mut update: DomainUpdate) -> CoreResult<DomainRecord> {
        if let Some(name) = update.name.take() {
            let name = name.trim();
            if name.is_empty() {
                return Err(CoreError::ValidationError(
                    "Domain name cannot be empty".to_string(),
                ));
            }
            update.name = Some(name.to_string());
        }

        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let record = find_mut(&mut records, id)?;
        update.apply_to(record);
        let updated = record.clone();
        self.repository.save(&records).await?;

        log::info!("Updated domain {id}");
        Ok(updated)
    }

    /// 切换永久状态
    ///
    /// 设为永久时到期日改为 `永久`；取消时仅当到期日仍为 `永久` 才恢复为当天。
    /// 续期周期保持不变。
    pub async fn set_permanent(&self, id: u64, is_permanent: bool) -> CoreResult<DomainRecord> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let record = find_mut(&mut records, id)?;
        record.is_permanent = is_permanent;
        if is_permanent {
            record.expiry = PERMANENT_EXPIRY.to_string();
        } else if record.expiry == PERMANENT_EXPIRY {
            record.expiry = today_iso();
        }
        let updated = record.clone();
        self.repository.save(&records).await?;

        log::info!("Domain {id} permanent = {is_permanent}");
        Ok(updated)
    }

    /// 删除域名
    pub async fn delete(&self, id: u64) -> CoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(CoreError::DomainNotFound(id))?;
        let removed = records.remove(index);
        self.repository.save(&records).await?;

        log::info!("Deleted domain {} (id {id})", removed.name);
        Ok(())
    }

    /// 与显示顺序中的相邻记录交换 `displayOrder`
    ///
    /// 第一条上移、最后一条下移不做任何修改。返回移动后的集合。
    pub async fn move_order(
        &self,
        id: u64,
        direction: MoveDirection,
    ) -> CoreResult<Vec<DomainRecord>> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        // 集合下标，按显示顺序排列（相同顺序按集合位置）
        let mut ranked: Vec<usize> = (0..records.len()).collect();
        ranked.sort_by_key(|&i| records[i].order());

        let pos = ranked
            .iter()
            .position(|&i| records[i].id == id)
            .ok_or(CoreError::DomainNotFound(id))?;
        let neighbour = match direction {
            MoveDirection::Up => pos.checked_sub(1),
            MoveDirection::Down => Some(pos + 1).filter(|&p| p < ranked.len()),
        };
        let Some(neighbour) = neighbour else {
            log::debug!("Domain {id} is already at the edge, move {direction:?} ignored");
            return Ok(records);
        };

        let (a, b) = (ranked[pos], ranked[neighbour]);
        let (order_a, order_b) = (records[a].order(), records[b].order());
        records[a].display_order = Some(order_b);
        records[b].display_order = Some(order_a);
        self.repository.save(&records).await?;

        log::info!("Moved domain {id} {direction:?}");
        Ok(records)
    }

    /// 批量导入（全部成功或全部放弃）
    ///
    /// 文件必须是 `{"domains": [...]}` 且数组非空，每一项都需要非空的 `name`。
    pub async fn import(&self, json: &str) -> CoreResult<ImportResult> {
        let entries = parse_import(json)?;

        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let first_id = next_id(&records);
        let first_order = next_order(&records);
        let mut ids = Vec::with_capacity(entries.len());
        for (((entry, name), id), order) in entries.into_iter().zip(first_id..).zip(first_order..) {
            ids.push(id);
            records.push(imported_record(entry, name, id, order));
        }
        self.repository.save(&records).await?;

        log::info!("Imported {} domains", ids.len());
        Ok(ImportResult {
            imported_count: ids.len(),
            ids,
        })
    }

    /// 导入模板
    #[must_use]
    pub fn export_template(&self) -> ImportFile {
        ImportFile::template()
    }

    /// 读取集合；不存在时写入默认数据，缺失的显示顺序用下标补齐。
    /// 调用方需持有锁。
    async fn load(&self) -> CoreResult<Vec<DomainRecord>> {
        let Some(mut records) = self.repository.load().await? else {
            let records = default_portfolio();
            self.repository.save(&records).await?;
            log::info!("No domain data found, seeded {} sample domains", records.len());
            return Ok(records);
        };

        for (record, index) in records.iter_mut().zip(0_i64..) {
            if record.display_order.is_none() {
                record.display_order = Some(index);
            }
        }
        Ok(records)
    }
}

fn find(records: &[DomainRecord], id: u64) -> CoreResult<&DomainRecord> {
    records
        .iter()
        .find(|r| r.id == id)
        .ok_or(CoreError::DomainNotFound(id))
}

fn find_mut(records: &mut [DomainRecord], id: u64) -> CoreResult<&mut DomainRecord> {
    records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(CoreError::DomainNotFound(id))
}

/// max(id) + 1，空集合为 1
fn next_id(records: &[DomainRecord]) -> u64 {
    records.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
}

/// max(displayOrder) + 1（缺失视为 0），空集合为 0
fn next_order(records: &[DomainRecord]) -> i64 {
    records
        .iter()
        .map(DomainRecord::order)
        .max()
        .map_or(0, |max| max + 1)
}

fn initial_expiry(expiry: Option<&str>, is_permanent: bool) -> String {
    if is_permanent {
        return PERMANENT_EXPIRY.to_string();
    }
    expiry
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map_or_else(today_iso, str::to_string)
}

/// 校验导入文件，返回每一项及其名称
fn parse_import(json: &str) -> CoreResult<Vec<(ImportedDomain, String)>> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| CoreError::ImportError(format!("Invalid JSON: {e}")))?;

    let items = value
        .get("domains")
        .and_then(serde_json::Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or_else(|| {
            CoreError::ImportError(
                "Import data must contain a non-empty 'domains' array".to_string(),
            )
        })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let n = i + 1;
            let entry: ImportedDomain = serde_json::from_value(item.clone())
                .map_err(|e| CoreError::ImportError(format!("Domain #{n} is invalid: {e}")))?;
            let name = entry
                .name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or_else(|| {
                    CoreError::ImportError(format!(
                        "Domain #{n} is missing the required 'name' field"
                    ))
                })?
                .to_string();
            Ok((entry, name))
        })
        .collect()
}

fn imported_record(entry: ImportedDomain, name: String, id: u64, order: i64) -> DomainRecord {
    let renewal_value = entry.renewal_value.unwrap_or(0);
    let renewal_unit = entry.renewal_unit.unwrap_or(RenewalUnit::None);
    DomainRecord {
        id,
        name,
        expiry: initial_expiry(entry.expiry.as_deref(), entry.is_permanent),
        renewal_period: renewal_period(renewal_value, renewal_unit),
        renewal_value,
        renewal_unit,
        provider: entry.provider.unwrap_or_default(),
        console_url: entry.console_url.unwrap_or_default(),
        status: entry.status.unwrap_or_default(),
        is_permanent: entry.is_permanent,
        display_order: Some(order),
    }
}

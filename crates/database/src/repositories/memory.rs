//! 内存商品仓库
//!
//! 不依赖数据库，数据保存在进程内，主要用于本地调试和测试。
//! 名称匹配与SQLite的 `like '%' || 名称 || '%'` 保持一致：ASCII不区分大小写，
//! 名称中的 `%` 匹配任意长度字符，`_` 匹配单个字符。

use crate::models::item::{Item, ItemSearchCondition, ItemUpdate};
use crate::repositories::traits::ItemRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct MemoryStore {
    sequence: i64,
    items: BTreeMap<i64, Item>,
}

/// 内存商品仓库结构体
///
/// 克隆出来的实例共享同一份数据
#[derive(Debug, Clone, Default)]
pub struct MemoryItemRepository {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空所有数据（ID序列不重置）
    pub async fn clear_store(&self) {
        self.store.write().await.items.clear();
    }
}

#[async_trait::async_trait]
impl ItemRepositoryTrait for MemoryItemRepository {
    async fn save(&self, mut item: Item) -> DatabaseResult<Item> {
        if let Some(id) = item.id {
            return Err(DatabaseError::AlreadyPersisted(id));
        }

        let mut store = self.store.write().await;
        store.sequence += 1;
        let id = store.sequence;
        item.id = Some(id);
        store.items.insert(id, item.clone());

        debug!("✅ 商品保存成功: {:?}", item);
        Ok(item)
    }

    async fn update(&self, item_id: i64, update: ItemUpdate) -> DatabaseResult<()> {
        let mut store = self.store.write().await;
        if let Some(item) = store.items.get_mut(&item_id) {
            item.apply(&update);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Item>> {
        Ok(self.store.read().await.items.get(&id).cloned())
    }

    async fn find_all(&self, condition: ItemSearchCondition) -> DatabaseResult<Vec<Item>> {
        let pattern: Option<Vec<char>> = condition
            .name_filter()
            .map(|name| format!("%{name}%").chars().collect());

        let store = self.store.read().await;
        let items = store
            .items
            .values()
            .filter(|item| {
                pattern
                    .as_deref()
                    .is_none_or(|pattern| like_matches(&item.item_name, pattern))
            })
            .filter(|item| condition.max_price.is_none_or(|max_price| item.price <= max_price))
            .cloned()
            .collect();

        Ok(items)
    }
}

/// 按SQLite `like` 的规则匹配（不带 `escape`）
fn like_matches(value: &str, pattern: &[char]) -> bool {
    let value: Vec<char> = value.chars().collect();
    let (mut v, mut p) = (0, 0);
    // 最近一次 `%` 的位置，以及它当前吞掉的字符结束位置
    let mut backtrack: Option<(usize, usize)> = None;

    while v < value.len() {
        match pattern.get(p) {
            Some('%') => {
                backtrack = Some((p, v));
                p += 1;
            }
            Some(c) if *c == '_' || c.eq_ignore_ascii_case(&value[v]) => {
                v += 1;
                p += 1;
            }
            _ => match backtrack {
                Some((star, consumed)) => {
                    backtrack = Some((star, consumed + 1));
                    p = star + 1;
                    v = consumed + 1;
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|c| *c == '%')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(value: &str, pattern: &str) -> bool {
        like_matches(value, &pattern.chars().collect::<Vec<_>>())
    }

    #[test]
    fn test_like_matches() {
        assert!(matches("itemA", "%item%"));
        assert!(matches("ITEMa", "%itema%"));
        assert!(matches("itemA", "%_%"));
        assert!(matches("itemA", "%%%"));
        assert!(matches("50%off", "%0%f%"));
        assert!(matches("item_B", "%m_B%"));
        assert!(!matches("itemA", "%m_B%"));
        assert!(!matches("itemA", "%itemAB%"));
        assert!(!matches("", "%_%"));
        assert!(matches("", "%%"));
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let repository = MemoryItemRepository::new();
        let other = repository.clone();

        let saved = repository.save(Item::new("itemA", 10000, 10)).await.unwrap();

        let found = other.find_by_id(saved.id.unwrap()).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_clear_store_keeps_sequence() {
        let repository = MemoryItemRepository::new();
        let first = repository.save(Item::new("itemA", 10000, 10)).await.unwrap();

        repository.clear_store().await;
        assert!(repository.find_all(ItemSearchCondition::default()).await.unwrap().is_empty());

        let second = repository.save(Item::new("itemB", 20000, 20)).await.unwrap();
        assert!(second.id > first.id);
    }
}

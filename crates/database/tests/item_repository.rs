//! 商品仓库行为测试
//!
//! 所有仓库实现都必须表现一致，这里对每种实现运行同一组用例，
//! SQL仓库使用独立的内存SQLite数据库。

use database::{
    connect_in_memory, DatabaseError, DatabaseResult, Item, ItemQueryRepository,
    ItemQueryRepositoryTrait, ItemRepositoryTrait, ItemSearchCondition, ItemUpdate,
    MemoryItemRepository, NamedParamItemRepository, OrmItemRepository, PositionalItemRepository,
};

async fn positional() -> PositionalItemRepository {
    PositionalItemRepository::new(connect_in_memory().await.unwrap())
}

async fn named() -> NamedParamItemRepository {
    NamedParamItemRepository::new(connect_in_memory().await.unwrap())
}

async fn orm() -> OrmItemRepository {
    OrmItemRepository::new(connect_in_memory().await.unwrap())
}

async fn memory() -> MemoryItemRepository {
    MemoryItemRepository::new()
}

/// 命令仓库负责写入和按ID查询，搜索交给查询仓库，两者共享同一个连接池
#[derive(Debug, Clone)]
struct CommandQueryRepository {
    command: OrmItemRepository,
    query: ItemQueryRepository,
}

#[async_trait::async_trait]
impl ItemRepositoryTrait for CommandQueryRepository {
    async fn save(&self, item: Item) -> DatabaseResult<Item> {
        self.command.save(item).await
    }

    async fn update(&self, item_id: i64, update: ItemUpdate) -> DatabaseResult<()> {
        self.command.update(item_id, update).await
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Item>> {
        self.command.find_by_id(id).await
    }

    async fn find_all(&self, condition: ItemSearchCondition) -> DatabaseResult<Vec<Item>> {
        self.query.find_all(condition).await
    }
}

async fn command_query() -> CommandQueryRepository {
    let pool = connect_in_memory().await.unwrap();
    CommandQueryRepository {
        command: OrmItemRepository::new(pool.clone()),
        query: ItemQueryRepository::new(pool),
    }
}

/// 为每种仓库实现生成一组 `#[tokio::test]`
macro_rules! repository_tests {
    ($($name:ident => $repo:expr;)*) => {
        $(
            mod $name {
                use super::*;

                #[tokio::test]
                async fn save_then_find() {
                    check_save_then_find($repo.await).await;
                }

                #[tokio::test]
                async fn save_rejects_persisted_item() {
                    check_save_rejects_persisted_item($repo.await).await;
                }

                #[tokio::test]
                async fn find_missing_returns_none() {
                    check_find_missing_returns_none($repo.await).await;
                }

                #[tokio::test]
                async fn update_mutates_target_only() {
                    check_update_mutates_target_only($repo.await).await;
                }

                #[tokio::test]
                async fn update_missing_is_noop() {
                    check_update_missing_is_noop($repo.await).await;
                }

                #[tokio::test]
                async fn find_all_filters() {
                    check_find_all_filters($repo.await).await;
                }

                #[tokio::test]
                async fn find_all_like_wildcards() {
                    check_find_all_like_wildcards($repo.await).await;
                }
            }
        )*
    };
}

repository_tests! {
    positional_sql => positional();
    named_sql => named();
    orm_entity => orm();
    memory_store => memory();
    command_query => command_query();
}

async fn check_save_then_find<R: ItemRepositoryTrait>(repository: R) {
    let saved = repository.save(Item::new("itemA", 10000, 10)).await.unwrap();
    let id = saved.id.expect("保存后应该分配ID");

    let found = repository.find_by_id(id).await.unwrap();
    assert_eq!(found, Some(saved));

    let second = repository.save(Item::new("itemB", 20000, 20)).await.unwrap();
    assert_ne!(second.id, Some(id));
}

async fn check_save_rejects_persisted_item<R: ItemRepositoryTrait>(repository: R) {
    let saved = repository.save(Item::new("itemA", 10000, 10)).await.unwrap();

    let err = repository.save(saved.clone()).await.unwrap_err();
    assert!(matches!(err, DatabaseError::AlreadyPersisted(id) if Some(id) == saved.id));

    let all = repository.find_all(ItemSearchCondition::default()).await.unwrap();
    assert_eq!(all.len(), 1);
}

async fn check_find_missing_returns_none<R: ItemRepositoryTrait>(repository: R) {
    assert_eq!(repository.find_by_id(999).await.unwrap(), None);
}

async fn check_update_mutates_target_only<R: ItemRepositoryTrait>(repository: R) {
    let target = repository.save(Item::new("item1", 10000, 10)).await.unwrap();
    let other = repository.save(Item::new("item2", 20000, 20)).await.unwrap();
    let target_id = target.id.unwrap();

    let update = ItemUpdate {
        item_name: "item3".to_string(),
        price: 30000,
        quantity: 30,
    };
    repository.update(target_id, update).await.unwrap();

    let updated = repository.find_by_id(target_id).await.unwrap().unwrap();
    assert_eq!(updated.id, Some(target_id));
    assert_eq!(updated.item_name, "item3");
    assert_eq!(updated.price, 30000);
    assert_eq!(updated.quantity, 30);

    let untouched = repository.find_by_id(other.id.unwrap()).await.unwrap();
    assert_eq!(untouched, Some(other));
}

async fn check_update_missing_is_noop<R: ItemRepositoryTrait>(repository: R) {
    let saved = repository.save(Item::new("item1", 10000, 10)).await.unwrap();

    let update = ItemUpdate {
        item_name: "ghost".to_string(),
        price: 1,
        quantity: 1,
    };
    repository.update(saved.id.unwrap() + 100, update).await.unwrap();

    let all = repository.find_all(ItemSearchCondition::default()).await.unwrap();
    assert_eq!(all, vec![saved]);
}

async fn check_find_all_filters<R: ItemRepositoryTrait>(repository: R) {
    let item1 = repository.save(Item::new("itemA-1", 10000, 10)).await.unwrap();
    let item2 = repository.save(Item::new("itemA-2", 20000, 20)).await.unwrap();
    let item3 = repository.save(Item::new("itemB-1", 30000, 30)).await.unwrap();

    let search = |name: Option<&str>, max_price: Option<i32>| {
        ItemSearchCondition::new(name.map(str::to_string), max_price)
    };

    // 没有条件
    let all = vec![item1.clone(), item2.clone(), item3.clone()];
    assert_eq!(repository.find_all(search(None, None)).await.unwrap(), all);
    assert_eq!(repository.find_all(search(Some(""), None)).await.unwrap(), all);
    assert_eq!(repository.find_all(search(Some("  "), None)).await.unwrap(), all);

    // 只有名称
    assert_eq!(
        repository.find_all(search(Some("itemA"), None)).await.unwrap(),
        vec![item1.clone(), item2.clone()]
    );
    assert_eq!(
        repository.find_all(search(Some("B-"), None)).await.unwrap(),
        vec![item3.clone()]
    );

    // 只有价格（包含上限）
    assert_eq!(
        repository.find_all(search(None, Some(10000))).await.unwrap(),
        vec![item1.clone()]
    );
    assert_eq!(
        repository.find_all(search(None, Some(25000))).await.unwrap(),
        vec![item1.clone(), item2.clone()]
    );

    // 名称 + 价格
    assert_eq!(
        repository.find_all(search(Some("itemA"), Some(10000))).await.unwrap(),
        vec![item1]
    );
    assert!(repository
        .find_all(search(Some("itemB"), Some(20000)))
        .await
        .unwrap()
        .is_empty());

    assert!(repository.find_all(search(Some("nothing"), None)).await.unwrap().is_empty());
}

async fn check_find_all_like_wildcards<R: ItemRepositoryTrait>(repository: R) {
    let plain = repository.save(Item::new("itemA", 10000, 10)).await.unwrap();
    let underscore = repository.save(Item::new("item_B", 20000, 20)).await.unwrap();
    let percent = repository.save(Item::new("50%off", 30000, 30)).await.unwrap();

    let search = |name: &str| ItemSearchCondition::new(Some(name.to_string()), None);
    let all = vec![plain.clone(), underscore.clone(), percent.clone()];

    // `_` 匹配任意单个字符，`%` 匹配任意长度字符
    assert_eq!(repository.find_all(search("_")).await.unwrap(), all);
    assert_eq!(repository.find_all(search("%")).await.unwrap(), all);
    assert_eq!(
        repository.find_all(search("m_B")).await.unwrap(),
        vec![underscore.clone()]
    );
    assert_eq!(repository.find_all(search("0%f")).await.unwrap(), vec![percent]);

    // ASCII 不区分大小写
    assert_eq!(
        repository.find_all(search("ITEM")).await.unwrap(),
        vec![plain, underscore]
    );
}

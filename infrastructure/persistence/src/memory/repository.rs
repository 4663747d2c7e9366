use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::repository::{CrudRepository, Entity};
use business::domain::shared::paging::{Page, PageRequest, Sort};

/// Process-local store for any entity keyed by `i64`.
///
/// Identifiers come from a counter starting at 1 and are never reused, even
/// after deletes. Records live only as long as the repository.
pub struct InMemoryRepository<T> {
    records: RwLock<BTreeMap<i64, T>>,
    sequence: AtomicI64,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(1),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> CrudRepository<T, i64> for InMemoryRepository<T>
where
    T: Entity<Id = i64>,
{
    async fn save(&self, entity: T) -> Result<T, RepositoryError> {
        let mut records = self.records.write().await;
        match entity.id() {
            None => {
                let id = self.sequence.fetch_add(1, Ordering::SeqCst);
                let entity = entity.with_id(id);
                records.insert(id, entity.clone());
                Ok(entity)
            }
            Some(id) => match records.get_mut(&id) {
                Some(existing) => {
                    *existing = entity.clone();
                    Ok(entity)
                }
                None => Err(RepositoryError::not_found()),
            },
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_all_sorted(&self, sort: Sort) -> Result<Vec<T>, RepositoryError> {
        let mut items = self.find_all().await?;
        sort.apply(&mut items)?;
        Ok(items)
    }

    async fn find_page(
        &self,
        page: PageRequest,
        sort: Option<Sort>,
    ) -> Result<Page<T>, RepositoryError> {
        let items = match sort {
            Some(sort) => self.find_all_sorted(sort).await?,
            None => self.find_all().await?,
        };
        let total = items.len() as u64;
        let items = items
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size() as usize)
            .collect();

        Ok(Page::new(items, page, total))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.records.read().await.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        if self.records.write().await.remove(&id).is_none() {
            tracing::debug!(id, "Delete of missing record ignored");
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.records.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use business::domain::product::model::{NewProductProps, Product};
    use business::domain::product::repository::ProductRepository;
    use proptest::prelude::*;

    fn new_product(name: &str, price: i64) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            price,
            description: String::new(),
            stock: 0,
        })
        .unwrap()
    }

    fn repository() -> Arc<dyn ProductRepository> {
        Arc::new(InMemoryRepository::<Product>::new())
    }

    #[tokio::test]
    async fn should_walk_through_widget_lifecycle() {
        let repo = repository();

        let saved = repo.save(new_product("Widget", 0)).await.unwrap();
        assert_eq!(saved.id, Some(1));
        assert_eq!(saved.name, "Widget");

        let found = repo.find_by_id(1).await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(repo.count().await.unwrap(), 1);

        repo.delete_by_id(1).await.unwrap();

        assert_eq!(repo.find_by_id(1).await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_keep_last_write_when_saving_existing_id() {
        let repo = repository();
        let saved = repo.save(new_product("Widget", 100)).await.unwrap();

        let mut changed = saved.clone();
        changed.name = "Gadget".to_string();
        changed.stock = 12;
        repo.save(changed.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(saved.id.unwrap()).await.unwrap(), Some(changed));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_fail_update_when_id_unknown() {
        let repo = repository();
        let ghost = new_product("Ghost", 1).with_id(77);

        let result = repo.save(ghost).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_ignore_delete_of_missing_id() {
        let repo = repository();
        repo.save(new_product("Widget", 1)).await.unwrap();

        assert!(repo.delete_by_id(42).await.is_ok());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_not_reuse_ids_after_delete() {
        let repo = repository();
        let first = repo.save(new_product("First", 1)).await.unwrap();
        repo.delete_by_id(first.id.unwrap()).await.unwrap();

        let second = repo.save(new_product("Second", 1)).await.unwrap();

        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn should_sort_and_page_records() {
        let repo = repository();
        for (name, price) in [("A", 300), ("B", 100), ("C", 200), ("D", 100)] {
            repo.save(new_product(name, price)).await.unwrap();
        }

        let sorted = repo.find_all_sorted(Sort::asc("price")).await.unwrap();
        let names: Vec<_> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "D", "C", "A"]);

        let page = repo
            .find_page(PageRequest::new(1, 3), Some(Sort::desc("name")))
            .await
            .unwrap();
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "A");
    }

    #[tokio::test]
    async fn should_reject_unknown_sort_field() {
        let repo = repository();

        let result = repo.find_all_sorted(Sort::asc("colour")).await;

        assert!(matches!(result, Err(RepositoryError::InvalidSort(field)) if field == "colour"));
    }

    #[tokio::test]
    async fn should_assign_distinct_ids_under_concurrent_saves() {
        let repo = repository();
        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.save(new_product(&format!("P{}", i), i)).await.unwrap()
            }));
        }

        let mut ids = BTreeSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().id.unwrap());
        }

        assert_eq!(ids.len(), 32);
        assert_eq!(repo.count().await.unwrap(), 32);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(String, i64),
        Update(usize, String),
        Delete(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            ("[a-z]{1,8}", 0i64..10_000).prop_map(|(name, price)| Op::Insert(name, price)),
            (0usize..16, "[a-z]{1,8}").prop_map(|(slot, name)| Op::Update(slot, name)),
            (0usize..16).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn repository_matches_a_reference_model(ops in prop::collection::vec(op(), 0..40)) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            runtime.block_on(async {
                let repo = repository();
                let mut model: BTreeMap<i64, Product> = BTreeMap::new();
                let mut issued: Vec<i64> = Vec::new();

                for op in ops {
                    match op {
                        Op::Insert(name, price) => {
                            let saved = repo.save(new_product(&name, price)).await.unwrap();
                            let id = saved.id.unwrap();
                            prop_assert!(!model.contains_key(&id));
                            prop_assert_eq!(&saved.name, &name);
                            issued.push(id);
                            model.insert(id, saved);
                        }
                        Op::Update(slot, name) => {
                            let Some(&id) = issued.get(slot) else { continue };
                            let product = new_product(&name, 1).with_id(id);
                            let result = repo.save(product.clone()).await;
                            if model.contains_key(&id) {
                                prop_assert_eq!(result.unwrap(), product.clone());
                                model.insert(id, product);
                            } else {
                                prop_assert!(matches!(result, Err(RepositoryError::NotFound)));
                            }
                        }
                        Op::Delete(slot) => {
                            let Some(&id) = issued.get(slot) else { continue };
                            repo.delete_by_id(id).await.unwrap();
                            model.remove(&id);
                            prop_assert_eq!(repo.find_by_id(id).await.unwrap(), None);
                        }
                    }
                }

                prop_assert_eq!(repo.count().await.unwrap(), model.len() as u64);
                let all = repo.find_all().await.unwrap();
                prop_assert_eq!(all, model.values().cloned().collect::<Vec<_>>());
                for (id, product) in &model {
                    let found = repo.find_by_id(*id).await.unwrap();
                    prop_assert_eq!(found.as_ref(), Some(product));
                }
                Ok(())
            })?;
        }
    }
}

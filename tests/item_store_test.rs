mod common;

use common::setup_item_store;
use stockcheck_backend::errors::internal::ItemStoreError;
use stockcheck_backend::errors::InternalError;

#[tokio::test]
async fn test_insert_assigns_sequential_ids() {
    let store = setup_item_store().await;

    let first = store
        .insert(None, "Hoodie".to_string(), 150)
        .await
        .expect("Insert failed");
    let second = store
        .insert(None, "Jeans".to_string(), 80)
        .await
        .expect("Insert failed");

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_insert_honors_client_supplied_id() {
    let store = setup_item_store().await;

    let item = store
        .insert(Some(187654), "Slim Fit Hoodie".to_string(), 150)
        .await
        .expect("Insert failed");

    assert_eq!(item.id, 187654);
    assert_eq!(item.name, "Slim Fit Hoodie");
    assert_eq!(item.stock, 150);
}

#[tokio::test]
async fn test_insert_duplicate_id_is_typed_conflict() {
    let store = setup_item_store().await;
    store
        .insert(Some(42), "First".to_string(), 1)
        .await
        .expect("Insert failed");

    let result = store.insert(Some(42), "Second".to_string(), 2).await;

    match result {
        Err(InternalError::Item(ItemStoreError::DuplicateId(42))) => {}
        other => panic!("Expected DuplicateId(42), got: {:?}", other.map(|m| m.id)),
    }

    // The original row is untouched
    let survivor = store.find(42).await.expect("Find failed").expect("Row gone");
    assert_eq!(survivor.name, "First");
}

#[tokio::test]
async fn test_find_returns_none_for_missing_row() {
    let store = setup_item_store().await;

    let found = store.find(237922).await.expect("Find failed");

    assert!(found.is_none());
}

#[tokio::test]
async fn test_list_sorts_by_each_known_key() {
    let store = setup_item_store().await;
    store.insert(Some(3), "b".to_string(), 20).await.expect("Insert failed");
    store.insert(Some(1), "c".to_string(), 30).await.expect("Insert failed");
    store.insert(Some(2), "a".to_string(), 10).await.expect("Insert failed");

    let by_id: Vec<i32> = store
        .list(Some("id"), None)
        .await
        .expect("List failed")
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(by_id, vec![1, 2, 3]);

    let by_name: Vec<String> = store
        .list(Some("name"), None)
        .await
        .expect("List failed")
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(by_name, vec!["a", "b", "c"]);

    let by_stock: Vec<i32> = store
        .list(Some("stock"), None)
        .await
        .expect("List failed")
        .into_iter()
        .map(|m| m.stock)
        .collect();
    assert_eq!(by_stock, vec![10, 20, 30]);
}

#[tokio::test]
async fn test_list_limit_applies_after_ordering() {
    let store = setup_item_store().await;
    for (id, stock) in [(1, 50), (2, 10), (3, 40), (4, 20)] {
        store
            .insert(Some(id), format!("item-{}", id), stock)
            .await
            .expect("Insert failed");
    }

    let stocks: Vec<i32> = store
        .list(Some("stock"), Some(2))
        .await
        .expect("List failed")
        .into_iter()
        .map(|m| m.stock)
        .collect();

    assert_eq!(stocks, vec![10, 20]);
}

#[tokio::test]
async fn test_list_unknown_key_and_zero_count_are_ignored() {
    let store = setup_item_store().await;
    for id in [1, 2, 3] {
        store
            .insert(Some(id), format!("item-{}", id), id)
            .await
            .expect("Insert failed");
    }

    let all = store.list(Some("flavor"), Some(0)).await.expect("List failed");

    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_update_moves_row_to_new_id() {
    let store = setup_item_store().await;
    store
        .insert(Some(5), "Raincoat".to_string(), 7)
        .await
        .expect("Insert failed");

    let updated = store
        .update(5, Some(9), None, None)
        .await
        .expect("Update failed");

    assert_eq!(updated.id, 9);
    assert_eq!(updated.name, "Raincoat");
    assert!(!store.exists(5).await.expect("Exists failed"));
}

#[tokio::test]
async fn test_update_to_taken_id_is_typed_conflict() {
    let store = setup_item_store().await;
    store.insert(Some(5), "A".to_string(), 1).await.expect("Insert failed");
    store.insert(Some(9), "B".to_string(), 2).await.expect("Insert failed");

    let result = store.update(5, Some(9), None, None).await;

    assert!(matches!(
        result,
        Err(InternalError::Item(ItemStoreError::DuplicateId(9)))
    ));
}

#[tokio::test]
async fn test_update_with_no_changes_returns_current_row() {
    let store = setup_item_store().await;
    store
        .insert(Some(5), "Raincoat".to_string(), 7)
        .await
        .expect("Insert failed");

    let unchanged = store.update(5, None, None, None).await.expect("Update failed");

    assert_eq!(unchanged.id, 5);
    assert_eq!(unchanged.name, "Raincoat");
    assert_eq!(unchanged.stock, 7);
}

#[tokio::test]
async fn test_update_missing_row_reports_vanished() {
    let store = setup_item_store().await;

    let result = store.update(404404, None, None, Some(1)).await;

    assert!(matches!(
        result,
        Err(InternalError::Item(ItemStoreError::Vanished(404404)))
    ));
}

#[tokio::test]
async fn test_delete_reports_whether_a_row_existed() {
    let store = setup_item_store().await;
    store
        .insert(Some(5), "Raincoat".to_string(), 7)
        .await
        .expect("Insert failed");

    assert!(store.delete(5).await.expect("Delete failed"));
    assert!(!store.delete(5).await.expect("Delete failed"));
}

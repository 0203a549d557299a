use anyhow::Result;
use eco_cart::core::actor::DEFAULT_CHANNEL_CAPACITY;
use eco_cart::{
    CartActor, CartEntry, CartObserver, CartService, CartStore, CatalogConfig, EcoCartError,
    ProductDetail, ProductInfo, ScoreModel, SharedCart,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingObserver {
    changes: Mutex<Vec<(Vec<String>, f64)>>,
}

impl CartObserver for RecordingObserver {
    fn cart_changed(&self, snapshot: &[CartEntry], aggregate_score: f64) {
        let names = snapshot.iter().map(|e| e.name().to_string()).collect();
        self.changes.lock().unwrap().push((names, aggregate_score));
    }
}

fn entry(name: &str, normalized_score: f64) -> CartEntry {
    CartEntry::new(ProductInfo::new(name, "img", "desc"), normalized_score).unwrap()
}

async fn exercise<S: CartService>(cart: &S) -> Result<()> {
    let tofu = entry("Tofu", 0.81);
    let tofu_id = tofu.id();

    assert!(cart.add(tofu).await?);
    assert!(cart.add(entry("Cashews", 0.22)).await?);
    assert!(!cart.add(entry("Tofu", 0.30)).await?);
    assert!((cart.aggregate_score().await? - 5.15).abs() < 1e-9);

    assert!(cart.remove(tofu_id).await?);
    assert!(!cart.remove(tofu_id).await?);

    let snapshot = cart.snapshot().await?;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name(), "Cashews");
    Ok(())
}

#[tokio::test]
async fn test_shared_cart_service() -> Result<()> {
    let cart = SharedCart::new(CartStore::new());
    let observer = Arc::new(RecordingObserver::default());
    cart.subscribe(observer.clone())?;

    exercise(&cart).await?;

    let changes = observer.changes.lock().unwrap();
    assert_eq!(changes.len(), 3);
    assert_eq!(changes[1].0, vec!["Tofu", "Cashews"]);
    assert_eq!(changes[2].0, vec!["Cashews"]);
    assert!((changes[2].1 - 2.2).abs() < 1e-9);
    Ok(())
}

#[tokio::test]
async fn test_actor_cart_service() -> Result<()> {
    let observer = Arc::new(RecordingObserver::default());
    let (cart, task) = CartActor::new(CartStore::new())
        .with_observer(observer.clone())
        .spawn(DEFAULT_CHANNEL_CAPACITY);

    exercise(&cart).await?;
    drop(cart);

    let store = task.await?;
    assert_eq!(store.len(), 1);
    assert_eq!(observer.changes.lock().unwrap().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_actor_serializes_concurrent_adds() -> Result<()> {
    let (cart, task) = CartActor::new(CartStore::new()).spawn(4);

    let mut joins = Vec::new();
    for i in 0..20 {
        let handle = cart.clone();
        joins.push(tokio::spawn(async move {
            handle.add(entry(&format!("Item {}", i % 5), 0.5)).await
        }));
    }

    let mut accepted = 0;
    for join in joins {
        if join.await?? {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 5);
    assert_eq!(cart.snapshot().await?.len(), 5);
    drop(cart);
    assert_eq!(task.await?.len(), 5);
    Ok(())
}

#[tokio::test]
async fn test_closed_actor_reports_unavailable() -> Result<()> {
    let (cart, task) = CartActor::new(CartStore::new()).spawn(DEFAULT_CHANNEL_CAPACITY);
    task.abort();
    let _ = task.await;

    let result = cart.aggregate_score().await;
    assert!(matches!(result, Err(EcoCartError::CartUnavailable)));
    Ok(())
}

/// 從商品頁加入：分數只在這裡除以 10
#[tokio::test]
async fn test_detail_submit_through_service() -> Result<()> {
    let catalog = CatalogConfig::builtin()?;
    let cart = SharedCart::new(CartStore::new());

    let mut tofu = catalog.require_product("Tofu")?.detail();
    let mut cashews = catalog.require_product("Cashews")?.detail();

    assert!(tofu.submit(&cart).await?);
    assert!(!tofu.submit(&cart).await?);
    assert!(cashews.submit(&cart).await?);

    let snapshot = cart.snapshot().await?;
    assert!((snapshot[0].normalized_score() - 0.81).abs() < 1e-9);
    assert!((snapshot[1].normalized_score() - 0.22).abs() < 1e-9);
    assert!((cart.aggregate_score().await? - 5.15).abs() < 1e-9);
    Ok(())
}

/// 分數超出範圍時，非同步加入也不能改變購物車
#[tokio::test]
async fn test_detail_submit_rejects_out_of_range_score() -> Result<()> {
    let shared = SharedCart::new(CartStore::new());
    let (actor, task) = CartActor::new(CartStore::new()).spawn(DEFAULT_CHANNEL_CAPACITY);

    let mut beef = ProductDetail::new(
        ProductInfo::new("Beef", "beef", "Description goes here"),
        ScoreModel::new(11.0, HashMap::new(), Vec::new()),
    );

    let result = beef.submit(&shared).await;
    assert!(matches!(result, Err(EcoCartError::Domain(_))));
    assert!(!beef.is_added());
    assert!(shared.snapshot().await?.is_empty());

    let result = beef.submit(&actor).await;
    assert!(matches!(result, Err(EcoCartError::Domain(_))));
    assert!(!beef.is_added());
    assert!(actor.snapshot().await?.is_empty());

    drop(actor);
    assert!(task.await?.is_empty());
    Ok(())
}

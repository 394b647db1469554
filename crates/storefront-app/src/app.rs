//! Top-level storefront orchestrator.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use storefront_client::{FetchError, StorefrontApi};
use storefront_core::{CartEntry, CartStore, Product, SearchFilter};
use storefront_ui::{
    CartView, ErrorBannerView, GoodsList, GoodsListProps, SearchBox, SearchBoxProps,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::banner::ErrorBanner;
use crate::config::{Messages, StorefrontConfig};
use crate::error::AppError;

/// Observable load state of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Initial fetch not finished (or not started).
    Loading,
    /// Catalog and cart are loaded, or a failed load has been acknowledged
    /// by the banner expiring.
    Ready,
    /// Initial fetch failed and the banner is still up.
    Error,
}

/// User intent raised by a component.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    UpdateSearch(String),
    Buy(Product),
    Delete(usize),
    ToggleCart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading,
    Loaded,
    Failed,
}

/// Owns catalog, search line and error banner; shares the cart store with
/// the cart view.
///
/// `Storefront` is single-threaded. Cart writes are spawned with
/// [`tokio::task::spawn_local`], so `buy`, `delete` and `pump` must run
/// inside a [`tokio::task::LocalSet`].
pub struct Storefront {
    api: Rc<dyn StorefrontApi>,
    messages: Messages,
    catalog: Vec<Product>,
    search_line: String,
    phase: Phase,
    load_error_until: Option<Instant>,
    banner: Rc<RefCell<ErrorBanner>>,
    cart: CartStore,
    search_box: SearchBox,
    goods_list: GoodsList,
    cart_view: CartView,
    intents_tx: mpsc::UnboundedSender<Intent>,
    intents: mpsc::UnboundedReceiver<Intent>,
    pending: Vec<JoinHandle<()>>,
}

impl Storefront {
    /// Build the component tree around an injected cart store.
    pub fn new(api: Rc<dyn StorefrontApi>, cart: CartStore, config: &StorefrontConfig) -> Self {
        let messages = config.messages.clone();
        let labels = messages.labels.clone();
        let (intents_tx, intents) = mpsc::unbounded_channel();

        let mut search_box =
            SearchBox::new(SearchBoxProps::default(), labels.search_placeholder.clone());
        let tx = intents_tx.clone();
        search_box.on_update.on(move |line: &String| {
            let _ = tx.send(Intent::UpdateSearch(line.clone()));
        });

        let mut goods_list = GoodsList::new(GoodsListProps::default(), labels.clone());
        let tx = intents_tx.clone();
        goods_list.on_buy.on(move |product: &Product| {
            let _ = tx.send(Intent::Buy(product.clone()));
        });

        let mut cart_view = CartView::new(cart.clone(), labels);
        let tx = intents_tx.clone();
        cart_view.on_delete.on(move |index: &usize| {
            let _ = tx.send(Intent::Delete(*index));
        });

        Self {
            api,
            messages,
            catalog: Vec::new(),
            search_line: String::new(),
            phase: Phase::Loading,
            load_error_until: None,
            banner: Rc::new(RefCell::new(ErrorBanner::new(config.banner.ttl()))),
            cart,
            search_box,
            goods_list,
            cart_view,
            intents_tx,
            intents,
            pending: Vec::new(),
        }
    }

    /// Load catalog and cart concurrently.
    ///
    /// Both requests must succeed: the catalog replaces the local list and
    /// the fetched cart replaces the store contents. On any failure nothing
    /// is applied and the load-failure banner is shown.
    pub async fn mount(&mut self) -> Result<(), AppError> {
        self.phase = Phase::Loading;
        self.load_error_until = None;
        let api = Rc::clone(&self.api);

        tracing::debug!("loading catalog and cart");
        match futures::try_join!(api.catalog(), api.cart()) {
            Ok((catalog, cart)) => {
                tracing::info!(
                    products = catalog.len(),
                    cart_entries = cart.len(),
                    "storefront loaded"
                );
                self.catalog = catalog;
                self.cart.replace_all(cart);
                self.phase = Phase::Loaded;
                self.sync_goods();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "initial load failed");
                self.phase = Phase::Failed;
                let mut banner = self.banner.borrow_mut();
                banner.show(self.messages.load_failed.clone());
                self.load_error_until = banner.expires_at();
                Err(e.into())
            }
        }
    }

    /// Current load state.
    ///
    /// A failed load reads as `Error` only until its own banner would have
    /// expired; later banner messages (e.g. from cart writes) don't count.
    pub fn state(&self) -> LoadState {
        match self.phase {
            Phase::Loading => LoadState::Loading,
            Phase::Loaded => LoadState::Ready,
            Phase::Failed
                if self
                    .load_error_until
                    .is_some_and(|until| Instant::now() < until) =>
            {
                LoadState::Error
            }
            Phase::Failed => LoadState::Ready,
        }
    }

    /// Full catalog as loaded.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn search_line(&self) -> &str {
        &self.search_line
    }

    pub fn is_search_active(&self) -> bool {
        !self.search_line.is_empty()
    }

    /// Replace the search line and recompute the visible catalog.
    pub fn set_search_line(&mut self, line: impl Into<String>) {
        self.search_line = line.into();
        self.search_box.set_props(SearchBoxProps {
            search_line: self.search_line.clone(),
        });
        self.sync_goods();
    }

    /// Catalog filtered by the current search line.
    pub fn filtered_goods(&self) -> Vec<Product> {
        SearchFilter::new(&self.search_line).apply(&self.catalog)
    }

    /// The shared cart store.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Add `product` to the cart and post it in the background.
    pub fn buy(&mut self, product: Product) {
        tracing::debug!(product = %product.id_product, "buy");
        self.cart.add(product.clone());

        let api = Rc::clone(&self.api);
        self.spawn_write("add_to_cart", async move { api.add_to_cart(&product).await });
    }

    /// Remove the cart entry at `index` and delete it in the background.
    ///
    /// An index outside the cart is rejected without any request.
    pub fn delete(&mut self, index: usize) -> Result<CartEntry, AppError> {
        let removed = self.cart.remove_at(index)?;
        tracing::debug!(index, product = %removed.id_product, "delete");

        let api = Rc::clone(&self.api);
        self.spawn_write("remove_from_cart", async move {
            api.remove_from_cart(index).await
        });
        Ok(removed)
    }

    /// Show or hide the cart, returning the new visibility.
    pub fn toggle_cart_visibility(&mut self) -> bool {
        self.cart.toggle_visibility()
    }

    /// Current banner text, if any.
    pub fn error_message(&self) -> Option<String> {
        self.banner.borrow().message().map(str::to_string)
    }

    /// Apply one intent.
    pub fn handle(&mut self, intent: Intent) -> Result<(), AppError> {
        match intent {
            Intent::UpdateSearch(line) => self.set_search_line(line),
            Intent::Buy(product) => self.buy(product),
            Intent::Delete(index) => {
                self.delete(index)?;
            }
            Intent::ToggleCart => {
                self.toggle_cart_visibility();
            }
        }
        Ok(())
    }

    /// Apply every queued intent, in emission order.
    ///
    /// Returns how many intents were processed. Intents that fail are
    /// logged and skipped.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(intent) = self.intents.try_recv() {
            if let Err(e) = self.handle(intent) {
                tracing::warn!(error = %e, "intent rejected");
            }
            processed += 1;
        }
        processed
    }

    /// Sender for intents raised outside the components (e.g. a cart
    /// button in the page header).
    pub fn intent_sender(&self) -> mpsc::UnboundedSender<Intent> {
        self.intents_tx.clone()
    }

    pub fn search_box(&self) -> &SearchBox {
        &self.search_box
    }

    pub fn goods_list(&self) -> &GoodsList {
        &self.goods_list
    }

    pub fn cart_view(&self) -> &CartView {
        &self.cart_view
    }

    /// Render the whole page.
    pub fn render(&self) -> String {
        format!(
            r#"<div id="app">
{}
{}
{}
{}
</div>"#,
            ErrorBannerView::render(self.error_message().as_deref()),
            self.search_box.render(),
            self.goods_list.render(),
            self.cart_view.render()
        )
    }

    /// Number of background writes still running.
    pub fn pending_writes(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }

    /// Wait for every background write spawned so far.
    pub async fn settle(&mut self) {
        for handle in std::mem::take(&mut self.pending) {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "cart write task did not complete");
            }
        }
    }

    fn sync_goods(&mut self) {
        let goods = self.filtered_goods();
        self.goods_list.set_props(GoodsListProps { goods });
    }

    fn spawn_write<F>(&mut self, action: &'static str, write: F)
    where
        F: Future<Output = Result<(), FetchError>> + 'static,
    {
        let banner = Rc::clone(&self.banner);
        let message = self.messages.write_failed.clone();

        let handle = tokio::task::spawn_local(async move {
            match write.await {
                Ok(()) => tracing::debug!(action, "cart write acknowledged"),
                Err(e) => {
                    tracing::warn!(action, error = %e, "cart write failed");
                    banner.borrow_mut().show(message);
                }
            }
        });

        self.pending.retain(|h| !h.is_finished());
        self.pending.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;
    use storefront_client::cart_entry_path;
    use tokio::task::LocalSet;

    #[derive(Default)]
    struct MockApi {
        catalog: Vec<Product>,
        cart: Vec<CartEntry>,
        fail_catalog: bool,
        fail_cart: bool,
        fail_writes: bool,
        calls: RefCell<Vec<String>>,
    }

    impl MockApi {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    fn server_error() -> FetchError {
        FetchError::Http {
            status: 500,
            url: "http://test/cart".to_string(),
            body: "boom".to_string(),
        }
    }

    #[async_trait(?Send)]
    impl StorefrontApi for MockApi {
        async fn catalog(&self) -> Result<Vec<Product>, FetchError> {
            self.record("GET /catalog".to_string());
            if self.fail_catalog {
                return Err(FetchError::Transport("unreachable".to_string()));
            }
            Ok(self.catalog.clone())
        }

        async fn cart(&self) -> Result<Vec<CartEntry>, FetchError> {
            self.record("GET /cart".to_string());
            if self.fail_cart {
                return Err(server_error());
            }
            Ok(self.cart.clone())
        }

        async fn add_to_cart(&self, product: &Product) -> Result<(), FetchError> {
            self.record(format!("POST /cart {}", product.product_name));
            if self.fail_writes {
                return Err(server_error());
            }
            Ok(())
        }

        async fn remove_from_cart(&self, index: usize) -> Result<(), FetchError> {
            self.record(format!("DELETE {}", cart_entry_path(index)));
            if self.fail_writes {
                return Err(server_error());
            }
            Ok(())
        }
    }

    fn apple() -> Product {
        Product::new(1, "Apple", 10.0)
    }

    fn banana() -> Product {
        Product::new(2, "Banana", 5.0)
    }

    fn fruit_api() -> Rc<MockApi> {
        Rc::new(MockApi {
            catalog: vec![apple(), banana()],
            ..Default::default()
        })
    }

    fn storefront(api: Rc<MockApi>) -> Storefront {
        Storefront::new(api, CartStore::new(), &StorefrontConfig::default())
    }

    #[tokio::test]
    async fn test_mount_loads_catalog_and_cart() {
        let api = Rc::new(MockApi {
            catalog: vec![apple(), banana()],
            cart: vec![banana()],
            ..Default::default()
        });
        let mut app = storefront(Rc::clone(&api));
        assert_eq!(app.state(), LoadState::Loading);

        app.mount().await.unwrap();

        assert_eq!(app.state(), LoadState::Ready);
        assert_eq!(app.catalog(), &[apple(), banana()]);
        assert_eq!(app.cart().entries(), vec![banana()]);
        assert_eq!(api.calls(), vec!["GET /catalog", "GET /cart"]);
    }

    #[tokio::test]
    async fn test_remount_replaces_cart() {
        let api = Rc::new(MockApi {
            catalog: vec![apple()],
            cart: vec![apple()],
            ..Default::default()
        });
        let mut app = storefront(api);

        app.mount().await.unwrap();
        app.mount().await.unwrap();

        assert_eq!(app.cart().len(), 1);
    }

    #[tokio::test]
    async fn test_search_filters_catalog() {
        let mut app = storefront(fruit_api());
        app.mount().await.unwrap();

        assert_eq!(app.filtered_goods(), vec![apple(), banana()]);
        assert!(!app.is_search_active());

        app.set_search_line("an");
        assert!(app.is_search_active());
        assert_eq!(app.filtered_goods(), vec![banana()]);
        assert_eq!(app.goods_list().props().goods, vec![banana()]);
        assert_eq!(app.search_box().props().search_line, "an");
    }

    #[tokio::test]
    async fn test_empty_catalog_renders_not_found() {
        let mut app = storefront(Rc::new(MockApi::default()));
        app.mount().await.unwrap();
        app.set_search_line("anything");

        assert!(app.filtered_goods().is_empty());
        assert!(app.render().contains("not-found-items"));
    }

    #[tokio::test]
    async fn test_double_buy_adds_two_entries() {
        LocalSet::new()
            .run_until(async {
                let api = fruit_api();
                let mut app = storefront(Rc::clone(&api));
                app.mount().await.unwrap();

                app.buy(apple());
                app.buy(apple());
                // Local state changes before any write completes.
                assert_eq!(app.cart().entries(), vec![apple(), apple()]);

                app.settle().await;
                let posts = api
                    .calls()
                    .into_iter()
                    .filter(|c| c.starts_with("POST"))
                    .count();
                assert_eq!(posts, 2);
                assert_eq!(app.pending_writes(), 0);
            })
            .await;
    }

    #[tokio::test]
    async fn test_delete_by_index_issues_one_request() {
        LocalSet::new()
            .run_until(async {
                let (a, b, c) = (
                    Product::new(1, "A", 1.0),
                    Product::new(2, "B", 2.0),
                    Product::new(3, "C", 3.0),
                );
                let api = Rc::new(MockApi {
                    cart: vec![a.clone(), b.clone(), c.clone()],
                    ..Default::default()
                });
                let mut app = storefront(Rc::clone(&api));
                app.mount().await.unwrap();

                assert_eq!(app.delete(1).unwrap(), b);
                assert_eq!(app.cart().entries(), vec![a, c]);

                app.settle().await;
                let deletes: Vec<String> = api
                    .calls()
                    .into_iter()
                    .filter(|c| c.starts_with("DELETE"))
                    .collect();
                assert_eq!(deletes, vec!["DELETE /cart/1"]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_delete_out_of_range_is_rejected() {
        LocalSet::new()
            .run_until(async {
                let api = fruit_api();
                let mut app = storefront(Rc::clone(&api));
                app.mount().await.unwrap();

                let err = app.delete(0).unwrap_err();
                assert!(matches!(err, AppError::Store(_)));

                app.settle().await;
                assert!(api.calls().iter().all(|c| !c.starts_with("DELETE")));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_load_shows_banner_for_ttl() {
        let api = Rc::new(MockApi {
            catalog: vec![apple()],
            fail_catalog: true,
            fail_cart: true,
            ..Default::default()
        });
        let mut app = storefront(api);

        assert!(app.mount().await.is_err());
        assert!(app.catalog().is_empty());
        assert_eq!(app.state(), LoadState::Error);
        assert_eq!(app.error_message().as_deref(), Some("Товары не найдены"));
        assert!(app.render().contains("error-banner"));

        tokio::time::advance(Duration::from_millis(3499)).await;
        assert!(app.error_message().is_some());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(app.error_message(), None);
        assert_eq!(app.state(), LoadState::Ready);
        assert!(app.catalog().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_write_failure_after_load_failure_stays_ready() {
        LocalSet::new()
            .run_until(async {
                let api = Rc::new(MockApi {
                    fail_catalog: true,
                    fail_cart: true,
                    fail_writes: true,
                    ..Default::default()
                });
                let mut app = storefront(api);

                assert!(app.mount().await.is_err());
                assert_eq!(app.state(), LoadState::Error);

                tokio::time::advance(Duration::from_millis(3500)).await;
                assert_eq!(app.state(), LoadState::Ready);

                app.buy(apple());
                app.settle().await;

                assert_eq!(
                    app.error_message().as_deref(),
                    Some("Не удалось обновить корзину")
                );
                assert_eq!(app.state(), LoadState::Ready);
            })
            .await;
    }

    #[tokio::test]
    async fn test_partial_failure_applies_nothing() {
        let api = Rc::new(MockApi {
            catalog: vec![apple()],
            cart: vec![banana()],
            fail_cart: true,
            ..Default::default()
        });
        let mut app = storefront(api);

        let err = app.mount().await.unwrap_err();
        assert!(matches!(err, AppError::Fetch(FetchError::Http { status: 500, .. })));
        assert!(app.catalog().is_empty());
        assert!(app.cart().is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_surfaces_on_banner() {
        LocalSet::new()
            .run_until(async {
                let api = Rc::new(MockApi {
                    catalog: vec![apple()],
                    fail_writes: true,
                    ..Default::default()
                });
                let mut app = storefront(api);
                app.mount().await.unwrap();

                app.buy(apple());
                app.settle().await;

                assert_eq!(
                    app.error_message().as_deref(),
                    Some("Не удалось обновить корзину")
                );
                // No rollback.
                assert_eq!(app.cart().entries(), vec![apple()]);
                assert_eq!(app.state(), LoadState::Ready);
            })
            .await;
    }

    #[tokio::test]
    async fn test_component_intents_are_routed() {
        LocalSet::new()
            .run_until(async {
                let api = fruit_api();
                let mut app = storefront(Rc::clone(&api));
                app.mount().await.unwrap();

                app.search_box().input("an");
                assert_eq!(app.pump(), 1);
                assert_eq!(app.filtered_goods(), vec![banana()]);

                assert!(app.goods_list().buy(0));
                assert!(app.goods_list().buy(0));
                assert_eq!(app.pump(), 2);
                assert_eq!(app.cart().entries(), vec![banana(), banana()]);

                app.intent_sender().send(Intent::ToggleCart).unwrap();
                app.pump();
                assert!(app.cart_view().is_visible());

                assert!(app.cart_view().delete(0));
                app.pump();
                assert_eq!(app.cart().len(), 1);

                // Stale index from an outdated render is skipped, not fatal.
                app.intent_sender().send(Intent::Delete(5)).unwrap();
                assert_eq!(app.pump(), 1);
                assert_eq!(app.cart().len(), 1);

                app.settle().await;
                assert_eq!(
                    api.calls(),
                    vec![
                        "GET /catalog",
                        "GET /cart",
                        "POST /cart Banana",
                        "POST /cart Banana",
                        "DELETE /cart/0",
                    ]
                );
            })
            .await;
    }

    #[tokio::test]
    async fn test_render_is_deterministic() {
        let mut app = storefront(fruit_api());
        app.mount().await.unwrap();
        app.set_search_line("a");
        app.toggle_cart_visibility();

        let first = app.render();
        assert_eq!(first, app.render());
        assert!(first.contains("search-line"));
        assert!(first.contains("<h3>Apple</h3>"));
        assert!(first.contains("cart-container"));
        assert!(!first.contains("error-banner"));
    }
}

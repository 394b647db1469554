//! Catalog grid components.

use storefront_core::Product;

use crate::event::EventEmitter;
use crate::html::html_escape;
use crate::labels::Labels;

/// One product card.
#[derive(Debug, Clone, PartialEq)]
pub struct GoodsItem {
    pub good: Product,
}

impl GoodsItem {
    pub fn new(good: Product) -> Self {
        Self { good }
    }

    /// Render the card with its buy button.
    pub fn render(&self, labels: &Labels) -> String {
        format!(
            r#"<div class="goods-item" data-product-id="{}">
    <h3>{}</h3>
    <p>{}</p>
    <button class="add">{}</button>
</div>"#,
            html_escape(&self.good.id_product.to_string()),
            html_escape(&self.good.product_name),
            html_escape(&self.good.price_display(&labels.currency)),
            html_escape(&labels.buy)
        )
    }
}

/// Props of [`GoodsList`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoodsListProps {
    /// Products to show, already filtered by the parent.
    pub goods: Vec<Product>,
}

/// The visible catalog, or a "not found" block when it is empty.
#[derive(Debug)]
pub struct GoodsList {
    props: GoodsListProps,
    labels: Labels,
    /// Emitted with the product whose buy button was pressed.
    pub on_buy: EventEmitter<Product>,
}

impl GoodsList {
    pub fn new(props: GoodsListProps, labels: Labels) -> Self {
        Self {
            props,
            labels,
            on_buy: EventEmitter::new(),
        }
    }

    pub fn props(&self) -> &GoodsListProps {
        &self.props
    }

    pub fn set_props(&mut self, props: GoodsListProps) {
        self.props = props;
    }

    pub fn is_empty(&self) -> bool {
        self.props.goods.is_empty()
    }

    /// Cards for the current props.
    pub fn items(&self) -> Vec<GoodsItem> {
        self.props.goods.iter().cloned().map(GoodsItem::new).collect()
    }

    /// The buy button of the card at `index` was pressed.
    ///
    /// Every press emits; there is no debounce. Returns `false` when no card
    /// exists at `index`.
    pub fn buy(&self, index: usize) -> bool {
        match self.props.goods.get(index) {
            Some(good) => {
                self.on_buy.emit(good);
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> String {
        if self.is_empty() {
            return format!(
                r#"<div class="not-found-items">
    <h2>{}</h2>
</div>"#,
                html_escape(&self.labels.not_found)
            );
        }

        let items: String = self
            .items()
            .iter()
            .map(|item| item.render(&self.labels))
            .collect::<Vec<_>>()
            .join("\n");

        format!(r#"<div class="goods-list">
{}
</div>"#, items)
    }
}

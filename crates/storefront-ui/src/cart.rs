//! Cart contents component.

use storefront_core::CartStore;

use crate::event::EventEmitter;
use crate::html::html_escape;
use crate::labels::Labels;

/// Renders the injected cart store.
///
/// The view never mutates the store itself. Delete buttons emit the row
/// index through `on_delete` and the owner of the store performs the
/// removal.
#[derive(Debug)]
pub struct CartView {
    store: CartStore,
    labels: Labels,
    /// Emitted with the index of the row whose delete button was pressed.
    pub on_delete: EventEmitter<usize>,
}

impl CartView {
    pub fn new(store: CartStore, labels: Labels) -> Self {
        Self {
            store,
            labels,
            on_delete: EventEmitter::new(),
        }
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    pub fn is_visible(&self) -> bool {
        self.store.is_visible()
    }

    /// The delete button of row `index` was pressed.
    ///
    /// Returns `false` when no row exists at `index`.
    pub fn delete(&self, index: usize) -> bool {
        if index >= self.store.len() {
            return false;
        }
        self.on_delete.emit(&index);
        true
    }

    /// Render the cart, or nothing while hidden.
    pub fn render(&self) -> String {
        if !self.store.is_visible() {
            return String::new();
        }

        let rows: String = self
            .store
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                format!(
                    r#"        <li>{} <button class="delete" data-index="{}">{}</button></li>"#,
                    html_escape(&entry.product_name),
                    index,
                    html_escape(&self.labels.delete)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<div class="cart-container">
    <ul>
{}
    </ul>
</div>"#,
            rows
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use storefront_core::Product;

    fn filled_store() -> CartStore {
        let store = CartStore::new();
        store.add(Product::new(1, "A", 1.0));
        store.add(Product::new(2, "B", 2.0));
        store
    }

    #[test]
    fn test_hidden_cart_renders_nothing() {
        let view = CartView::new(filled_store(), Labels::default());
        assert!(!view.is_visible());
        assert_eq!(view.render(), "");
    }

    #[test]
    fn test_visible_cart_lists_entries() {
        let store = filled_store();
        let view = CartView::new(store.clone(), Labels::default());
        store.toggle_visibility();

        let html = view.render();
        assert!(html.contains("cart-container"));
        assert!(html.contains(r#"<li>A <button class="delete" data-index="0">Удалить</button></li>"#));
        assert!(html.contains(r#"data-index="1""#));
    }

    #[test]
    fn test_view_follows_store_changes() {
        let store = filled_store();
        let view = CartView::new(store.clone(), Labels::default());
        store.set_visible(true);

        store.remove_at(0).unwrap();
        let html = view.render();
        assert!(!html.contains("<li>A "));
        assert!(html.contains("<li>B "));
    }

    #[test]
    fn test_delete_emits_index_without_mutating() {
        let store = filled_store();
        let mut view = CartView::new(store.clone(), Labels::default());
        let deleted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&deleted);
        view.on_delete.on(move |index| sink.borrow_mut().push(*index));

        assert!(view.delete(1));
        assert!(!view.delete(2));

        assert_eq!(*deleted.borrow(), vec![1]);
        assert_eq!(store.len(), 2);
    }
}

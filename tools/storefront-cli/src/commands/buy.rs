//! Buy command.

use anyhow::{bail, Result};
use storefront_core::ProductId;

use super::BuyArgs;
use crate::context::Context;

/// Run the buy command.
pub async fn run(args: BuyArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.mounted().await?;

    let id = ProductId::parse(&args.id);
    let Some(product) = app.catalog().iter().find(|p| p.id_product == id).cloned() else {
        bail!("No product with id {} in the catalog", id);
    };

    app.buy(product.clone());
    app.settle().await;

    if let Some(message) = app.error_message() {
        bail!(message);
    }

    if ctx.output.is_json() {
        ctx.output.json(&app.cart().entries());
    } else {
        ctx.output.success(&format!(
            "Added {} to the cart ({} entries)",
            product.product_name,
            app.cart().len()
        ));
    }

    Ok(())
}

//! Show cart command.

use anyhow::Result;

use crate::context::Context;

/// Run the cart command.
pub async fn run(ctx: &Context) -> Result<()> {
    let app = ctx.mounted().await?;
    let entries = app.cart().entries();

    if ctx.output.is_json() {
        ctx.output.json(&entries);
        return Ok(());
    }

    if entries.is_empty() {
        ctx.output.info("Cart is empty");
        return Ok(());
    }

    let currency = &ctx.config.messages.labels.currency;
    let total: f64 = entries.iter().map(|e| e.price).sum();

    ctx.output.header(&format!("Cart ({} entries)", entries.len()));
    ctx.output.product_table(
        "#",
        entries.iter().enumerate().map(|(i, e)| (i.to_string(), e)),
        currency,
    );
    ctx.output.kv("Total", &format!("{} {}", total, currency));

    Ok(())
}

//! List catalog command.

use anyhow::Result;

use super::ListArgs;
use crate::context::Context;

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.mounted().await?;
    app.set_search_line(args.search);

    let goods = app.filtered_goods();
    if ctx.output.is_json() {
        ctx.output.json(&goods);
        return Ok(());
    }

    if goods.is_empty() {
        ctx.output.warn(&ctx.config.messages.labels.not_found);
        return Ok(());
    }

    let currency = &ctx.config.messages.labels.currency;
    ctx.output.header(&format!(
        "{} of {} products",
        goods.len(),
        app.catalog().len()
    ));
    ctx.output.product_table(
        "ID",
        goods.iter().map(|p| (p.id_product.to_string(), p)),
        currency,
    );

    Ok(())
}

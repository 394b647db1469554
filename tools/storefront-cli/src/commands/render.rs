//! Render command.

use anyhow::Result;

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
///
/// A failed load still renders: the page then carries the error banner and
/// the "not found" block, as a browser would show it.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.storefront();
    if let Err(e) = app.mount().await {
        ctx.output.warn(&format!("{:#}", e));
    }

    app.set_search_line(args.search);
    if args.show_cart {
        app.cart().set_visible(true);
    }

    println!("{}", app.render());
    Ok(())
}

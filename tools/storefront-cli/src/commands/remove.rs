//! Remove command.

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::RemoveArgs;
use crate::context::Context;

/// Run the remove command.
pub async fn run(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut app = ctx.mounted().await?;

    let Some(entry) = app.cart().get(args.index) else {
        bail!(
            "No cart entry at position {} (cart has {} entries)",
            args.index,
            app.cart().len()
        );
    };

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {} from the cart?", entry.product_name))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Removal cancelled");
            return Ok(());
        }
    }

    let removed = app.delete(args.index)?;
    app.settle().await;

    if let Some(message) = app.error_message() {
        bail!(message);
    }

    if ctx.output.is_json() {
        ctx.output.json(&app.cart().entries());
    } else {
        ctx.output.success(&format!("Removed {}", removed.product_name));
    }

    Ok(())
}

//! CLI command implementations.

pub mod buy;
pub mod cart;
pub mod config;
pub mod list;
pub mod remove;
pub mod render;

use clap::Args;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Search text; `*` is ignored, matching is case-insensitive.
    #[arg(short, long, default_value = "")]
    pub search: String,
}

/// Arguments for the buy command.
#[derive(Args)]
pub struct BuyArgs {
    /// `id_product` of the product to buy.
    pub id: String,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Position of the entry in the cart (as shown by `storefront cart`).
    pub index: usize,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Search text applied before rendering.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Render with the cart open.
    #[arg(long)]
    pub show_cart: bool,
}

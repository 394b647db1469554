//! Storefront components.
//!
//! Components are plain structs: props come in through typed setters, user
//! intents go out through [`EventEmitter`]s, and `render()` returns an HTML
//! fragment. No UI framework is assumed; a host wires emitters to its own
//! event loop and re-renders on change.
//!
//! - `SearchBox` - search input, emits the new search line
//! - `GoodsList` / `GoodsItem` - catalog grid, emits buy intents
//! - `CartView` - cart contents, emits delete intents by index
//! - `ErrorBannerView` - transient error message

mod banner;
mod cart;
mod event;
mod goods;
mod html;
mod labels;
mod search;

pub use banner::*;
pub use cart::*;
pub use event::*;
pub use goods::*;
pub use html::html_escape;
pub use labels::*;
pub use search::*;

//! Component event contract.

use std::fmt;
use std::rc::Rc;

/// Callback list for one kind of component event.
///
/// Handlers run synchronously, in registration order, every time the
/// component emits. A component with no handlers emits into the void.
pub struct EventEmitter<T> {
    handlers: Vec<Rc<dyn Fn(&T)>>,
}

impl<T> EventEmitter<T> {
    /// Create an emitter with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler.
    pub fn on(&mut self, handler: impl Fn(&T) + 'static) {
        self.handlers.push(Rc::new(handler));
    }

    /// Invoke every handler with `event`.
    pub fn emit(&self, event: &T) {
        for handler in &self.handlers {
            handler(event);
        }
    }

    /// Number of registered handlers.
    pub fn listener_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.handlers.len())
            .finish()
    }
}

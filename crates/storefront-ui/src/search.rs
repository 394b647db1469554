//! Search input component.

use crate::event::EventEmitter;
use crate::html::html_escape;

/// Props of [`SearchBox`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBoxProps {
    /// Current search text, owned by the parent.
    pub search_line: String,
}

/// Text input bound one way to the parent's search line.
///
/// Typing does not change the props; it emits `on_update` with the new text
/// and the parent decides whether to pass it back down.
#[derive(Debug)]
pub struct SearchBox {
    props: SearchBoxProps,
    placeholder: String,
    /// Emitted with the input's new value on every keystroke.
    pub on_update: EventEmitter<String>,
}

impl SearchBox {
    pub fn new(props: SearchBoxProps, placeholder: impl Into<String>) -> Self {
        Self {
            props,
            placeholder: placeholder.into(),
            on_update: EventEmitter::new(),
        }
    }

    pub fn props(&self) -> &SearchBoxProps {
        &self.props
    }

    pub fn set_props(&mut self, props: SearchBoxProps) {
        self.props = props;
    }

    /// The user changed the input text.
    pub fn input(&self, value: &str) {
        self.on_update.emit(&value.to_string());
    }

    pub fn render(&self) -> String {
        format!(
            r#"<form class="search-form">
    <input type="text" placeholder="{}" class="search-line" value="{}"/>
</form>"#,
            html_escape(&self.placeholder),
            html_escape(&self.props.search_line)
        )
    }
}

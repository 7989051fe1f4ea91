//! Menu items and their validation.
use crate::Error;
use crate::core::{Point, mouse};
use crate::style::ITEM_CLASS;

use std::rc::Rc;

/// The click that selected a [`MenuItem`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    /// The position of the cursor when the item was clicked.
    pub position: Point,
    /// The mouse button that was released over the item.
    pub button: mouse::Button,
    /// The position of the item in the menu.
    pub index: usize,
}

/// A row of a context menu.
///
/// When the row is clicked, `on_click` receives the data of the
/// [`ContextMenu`](crate::ContextMenu) and the [`Click`], and produces the
/// message to publish.
pub struct MenuItem<'a, Data, Message> {
    label: String,
    on_click: Rc<dyn Fn(&Data, Click) -> Message + 'a>,
    class: Option<String>,
}

impl<'a, Data, Message> MenuItem<'a, Data, Message> {
    /// Creates a new [`MenuItem`] with the given label and click handler.
    pub fn new(label: impl Into<String>, on_click: impl Fn(&Data, Click) -> Message + 'a) -> Self {
        Self {
            label: label.into(),
            on_click: Rc::new(on_click),
            class: None,
        }
    }

    /// Creates a new [`MenuItem`] that always produces a clone of `message`.
    pub fn with_message(label: impl Into<String>, message: Message) -> Self
    where
        Message: Clone + 'a,
    {
        Self::new(label, move |_, _| message.clone())
    }

    /// Adds an extra class to the row, next to [`ITEM_CLASS`].
    ///
    /// A blank class is the same as no class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();

        self.class = if class.trim().is_empty() {
            None
        } else {
            Some(class)
        };
        self
    }

    /// Returns the label of the item.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the extra class of the item, if any.
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Returns the classes applied to the row of this item.
    ///
    /// The list always starts with [`ITEM_CLASS`]. The extra class follows
    /// only when one was set.
    pub fn classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = vec![ITEM_CLASS];
        classes.extend(self.class_name());
        classes
    }

    pub(crate) fn click(&self, data: &Data, click: Click) -> Message {
        (self.on_click)(data, click)
    }
}

impl<Data, Message> Clone for MenuItem<'_, Data, Message> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            on_click: Rc::clone(&self.on_click),
            class: self.class.clone(),
        }
    }
}

impl<Data, Message> std::fmt::Debug for MenuItem<'_, Data, Message> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}

/// Checks a list of menu items before it is handed to a
/// [`ContextMenu`](crate::ContextMenu).
///
/// Every item needs a label with visible characters.
pub fn validate<Data, Message>(items: &[MenuItem<'_, Data, Message>]) -> Result<(), Error> {
    match items.iter().position(|item| item.label.trim().is_empty()) {
        Some(index) => Err(Error::EmptyLabel { index }),
        None => Ok(()),
    }
}

//! A right-click context menu for [`iced`] that stays on screen.
//!
//! [`ContextMenu`] wraps any element. A right-click on the element opens a
//! popup with a list of [`MenuItem`]s next to the cursor. The popup is
//! measured before it is shown, so it can flip to the other side of the
//! cursor when it would overflow the window. It closes when an item is
//! clicked or when a mouse button is pressed outside of it.
//!
//! # Example
//! ```no_run
//! # mod iced { pub mod widget { pub use iced_widget::*; } }
//! # pub type Element<'a, Message> = iced_widget::core::Element<'a, Message, iced_widget::Theme, iced_widget::Renderer>;
//! use iced::widget::container;
//! use dynamic_context_menu::{MenuItem, context_menu};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Copy(String),
//!     Shown,
//! }
//!
//! fn view<'a>(path: String) -> Element<'a, Message> {
//!     context_menu(
//!         container("Right-click me").padding(20),
//!         path,
//!         vec![MenuItem::new("Copy path", |path: &String, _| {
//!             Message::Copy(path.clone())
//!         })],
//!     )
//!     .on_context_menu(Message::Shown)
//!     .into()
//! }
//! ```
//!
//! [`iced`]: https://github.com/iced-rs/iced
pub use iced_widget::core;
pub use iced_widget::{Renderer, Theme};

use iced_widget::{Text, text};

mod error;
mod overlay;
mod state;
mod widget;

pub mod item;
pub mod placement;
pub mod style;

pub use error::Error;
pub use item::{Click, MenuItem, validate};
pub use placement::{ClickLocation, Placement, PositionStyle};
pub use style::StyleSheet;
pub use widget::ContextMenu;

use crate::core::Element;

/// Creates a new [`ContextMenu`] that shows `items` when `content` is
/// right-clicked.
///
/// `data` is handed to the click handler of the selected item.
///
/// # Panics
///
/// Panics if the items are invalid. See [`validate`].
pub fn context_menu<'a, Data, Message>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    data: Data,
    items: Vec<MenuItem<'a, Data, Message>>,
) -> ContextMenu<'a, Data, Message>
where
    Message: 'a,
{
    ContextMenu::new(content, data, items)
}

/// A configuration error of a [`ContextMenu`](crate::ContextMenu).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A menu item has no visible label.
    #[error("menu item {index} has an empty label")]
    EmptyLabel {
        /// The position of the item in the menu.
        index: usize,
    },
}

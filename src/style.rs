//! Styling for context menus.
//!
//! A menu is styled through two stable classes: [`MENU_CLASS`] for the
//! container and [`ITEM_CLASS`] for every row. A row may carry one extra
//! class chosen by the caller, see [`MenuItem::class`].
//!
//! [`MenuItem::class`]: crate::MenuItem::class
use crate::core::{Border, Color, Shadow, Theme, Vector};

/// The class of the menu container.
pub const MENU_CLASS: &str = "context-menu";

/// The class shared by every row of a menu.
pub const ITEM_CLASS: &str = "item-hoverable";

/// The appearance of the menu container.
#[derive(Debug, Clone, Copy)]
pub struct Appearance {
    /// The background [`Color`] of the menu.
    pub background: Color,
    /// The default text [`Color`] of the rows.
    pub text_color: Color,
    /// The [`Border`] of the menu.
    pub border: Border,
    /// The [`Shadow`] of the menu.
    pub shadow: Shadow,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background: Color::from_rgb(0.95, 0.95, 0.95),
            text_color: Color::BLACK,
            border: Border {
                color: Color::from_rgb(0.8, 0.8, 0.8),
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// The status of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// The row is idle.
    Active,
    /// The cursor is over the row.
    Hovered,
}

/// The appearance of a single row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemAppearance {
    /// The background [`Color`] of the row, if any.
    pub background: Option<Color>,
    /// The text [`Color`] of the row.
    pub text_color: Color,
    /// The corner radius of the row background.
    pub border_radius: f32,
}

/// The style sheet of a context menu.
pub trait StyleSheet {
    /// The supported style of the [`StyleSheet`].
    type Style: Default + Clone;

    /// Produces the [`Appearance`] of the [`MENU_CLASS`] container.
    fn menu(&self, style: &Self::Style) -> Appearance;

    /// Produces the [`ItemAppearance`] of a row with the given classes.
    ///
    /// `classes` always starts with [`ITEM_CLASS`].
    fn item(&self, style: &Self::Style, classes: &[&str], status: ItemStatus) -> ItemAppearance;
}

/// The default style of a context menu.
#[derive(Default, Clone, Copy, Debug)]
pub enum Style {
    /// The default style.
    #[default]
    Default,
}

impl StyleSheet for Theme {
    type Style = Style;

    fn menu(&self, style: &Self::Style) -> Appearance {
        match style {
            Style::Default => {
                let palette = self.extended_palette();

                Appearance {
                    background: palette.background.base.color,
                    text_color: palette.background.base.text,
                    border: Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    shadow: Shadow {
                        color: Color::BLACK.scale_alpha(if palette.is_dark { 0.4 } else { 0.2 }),
                        offset: Vector::new(0.0, 3.0),
                        blur_radius: 8.0,
                    },
                }
            }
        }
    }

    fn item(&self, style: &Self::Style, classes: &[&str], status: ItemStatus) -> ItemAppearance {
        match style {
            Style::Default => {
                let palette = self.extended_palette();

                let text_color = if classes.contains(&"danger") {
                    palette.danger.base.color
                } else if classes.contains(&"primary") {
                    palette.primary.strong.color
                } else {
                    palette.background.base.text
                };

                match status {
                    ItemStatus::Active => ItemAppearance {
                        background: None,
                        text_color,
                        border_radius: 4.0,
                    },
                    ItemStatus::Hovered => ItemAppearance {
                        background: Some(palette.background.weak.color),
                        text_color,
                        border_radius: 4.0,
                    },
                }
            }
        }
    }
}

//! The popup of a [`ContextMenu`](crate::ContextMenu).
//!
//! The popup lives in the overlay layer of the runtime, so it is laid out
//! against the whole window and drawn on top of every other widget. Its
//! `layout` is the measurement pass: the rows are laid out first, and the
//! measured size decides where the popup goes.
use crate::core::layout::{self, Layout};
use crate::core::mouse;
use crate::core::overlay;
use crate::core::renderer;
use crate::core::widget::Tree;
use crate::core::{
    Border, Clipboard, Element, Event, Padding, Point, Rectangle, Shell, Size, Vector,
};
use crate::item::{Click, MenuItem};
use crate::placement::{Placement, PositionStyle};
use crate::state::State;
use crate::style::{ItemStatus, StyleSheet};

/// The space between the menu border and its rows.
const MENU_PADDING: f32 = 4.0;

/// Keeps the menu above the overlays of the wrapped content.
const MENU_INDEX: f32 = 2.0;

pub(crate) struct MenuOverlay<'a, 'b, Data, Message, Theme, Renderer>
where
    Theme: StyleSheet,
{
    pub(crate) state: &'b mut State,
    pub(crate) rows: &'b mut [Element<'a, Message, Theme, Renderer>],
    pub(crate) trees: &'b mut [Tree],
    pub(crate) items: &'b [MenuItem<'a, Data, Message>],
    pub(crate) data: &'b Data,
    pub(crate) ignored: Vec<Rectangle>,
    pub(crate) on_shown: Option<&'b dyn Fn() -> Message>,
    pub(crate) translation: Vector,
    pub(crate) placement: Placement,
    pub(crate) padding: Padding,
    pub(crate) style: &'b <Theme as StyleSheet>::Style,
}

impl<Data, Message, Theme, Renderer> MenuOverlay<'_, '_, Data, Message, Theme, Renderer>
where
    Theme: StyleSheet,
{
    fn row_at(layout: Layout<'_>, position: Point) -> Option<usize> {
        layout
            .children()
            .position(|row| row.bounds().contains(position))
    }
}

impl<Data, Message, Theme, Renderer> overlay::Overlay<Message, Theme, Renderer>
    for MenuOverlay<'_, '_, Data, Message, Theme, Renderer>
where
    Theme: StyleSheet,
    Renderer: renderer::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, bounds: Size) -> layout::Node {
        let padding = self.padding;
        let padding_x = padding.left + padding.right;
        let padding_y = padding.top + padding.bottom;

        let limits = layout::Limits::new(
            Size::ZERO,
            Size::new(
                (bounds.width - padding_x - 2.0 * MENU_PADDING).max(0.0),
                (bounds.height - padding_y - 2.0 * MENU_PADDING).max(0.0),
            ),
        );

        let mut width: f32 = 0.0;

        let contents: Vec<layout::Node> = self
            .rows
            .iter_mut()
            .zip(self.trees.iter_mut())
            .map(|(row, tree)| {
                let node = row.as_widget_mut().layout(tree, renderer, &limits);
                width = width.max(node.size().width + padding_x);
                node
            })
            .collect();

        let mut y = MENU_PADDING;

        let rows = contents
            .into_iter()
            .map(|content| {
                let height = content.size().height + padding_y;
                let row = layout::Node::with_children(
                    Size::new(width, height),
                    vec![content.move_to(Point::new(padding.left, padding.top))],
                )
                .move_to(Point::new(MENU_PADDING, y));

                y += height;
                row
            })
            .collect();

        let size = Size::new(width + 2.0 * MENU_PADDING, y + MENU_PADDING);

        let position = self
            .state
            .commit_measurement(size, bounds, self.translation, self.placement)
            .unwrap_or(Point::ORIGIN);

        layout::Node::with_children(size, rows).move_to(position)
    }

    fn draw(
        &self,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
    ) {
        if !self.state.style().is_some_and(PositionStyle::is_visible) {
            return;
        }

        let bounds = layout.bounds();
        let appearance = theme.menu(self.style);

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: appearance.border,
                shadow: appearance.shadow,
                ..renderer::Quad::default()
            },
            appearance.background,
        );

        let rows = self
            .rows
            .iter()
            .zip(self.trees.iter())
            .zip(self.items)
            .zip(layout.children());

        for (((row, tree), item), row_layout) in rows {
            let row_bounds = row_layout.bounds();

            let status = if cursor.is_over(row_bounds) {
                ItemStatus::Hovered
            } else {
                ItemStatus::Active
            };

            let item_appearance = theme.item(self.style, &item.classes(), status);

            if let Some(background) = item_appearance.background {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: row_bounds,
                        border: Border {
                            radius: item_appearance.border_radius.into(),
                            ..Border::default()
                        },
                        ..renderer::Quad::default()
                    },
                    background,
                );
            }

            let Some(content_layout) = row_layout.children().next() else {
                continue;
            };

            row.as_widget().draw(
                tree,
                renderer,
                theme,
                &renderer::Style {
                    text_color: item_appearance.text_color,
                },
                content_layout,
                cursor,
                &bounds,
            );
        }
    }

    fn update(
        &mut self,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
    ) {
        if self.state.take_shown() {
            if let Some(on_shown) = self.on_shown {
                shell.publish(on_shown());
            }
        }

        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(_)) => {
                let Some(position) = cursor.position() else {
                    return;
                };

                if bounds.contains(position) {
                    shell.capture_event();
                    return;
                }

                if self.state.interact_outside(position, bounds, &self.ignored) {
                    log::debug!("ContextMenu: dismissed by a press at {position:?}");

                    shell.invalidate_layout();
                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(button)) => {
                let Some(position) = cursor.position_over(bounds) else {
                    return;
                };

                shell.capture_event();

                if *button != mouse::Button::Left {
                    return;
                }

                let Some(index) = Self::row_at(layout, position) else {
                    return;
                };

                let click = Click {
                    position,
                    button: *button,
                    index,
                };

                if let Some(message) = self.state.select(self.items, self.data, click) {
                    shell.publish(message);
                }

                shell.invalidate_layout();
                shell.request_redraw();
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if self.state.hover(Self::row_at(layout, *position)) {
                    shell.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn index(&self) -> f32 {
        MENU_INDEX
    }

    fn mouse_interaction(
        &self,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        match cursor.position() {
            Some(position) if Self::row_at(layout, position).is_some() => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::None,
        }
    }
}

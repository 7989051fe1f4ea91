//! A context menu is a menu in a graphical user interface that appears upon
//! user interaction, such as a right-click mouse operation.
use crate::core::layout;
use crate::core::mouse;
use crate::core::overlay;
use crate::core::renderer;
use crate::core::text;
use crate::core::widget::tree::{self, Tree};
use crate::core::widget::{Operation, Widget};
use crate::core::{
    Clipboard, Element, Event, Layout, Length, Padding, Pixels, Rectangle, Shell, Size, Vector,
};
use crate::item::{self, MenuItem};
use crate::overlay::MenuOverlay;
use crate::placement::{ClickLocation, Placement};
use crate::state::State;
use crate::style::StyleSheet;
use crate::{Error, Text};

use std::rc::Rc;

/// A widget that shows a menu of [`MenuItem`]s when its content is
/// right-clicked.
///
/// The menu opens next to the cursor and flips to the other side of it when
/// it would leave the window. It closes when one of its items is clicked, or
/// when a mouse button is pressed anywhere outside of it.
///
/// # Example
/// ```no_run
/// # mod iced { pub mod widget { pub use iced_widget::*; } }
/// # pub type Element<'a, Message> = iced_widget::core::Element<'a, Message, iced_widget::Theme, iced_widget::Renderer>;
/// use iced::widget::text;
/// use dynamic_context_menu::{ContextMenu, MenuItem};
///
/// #[derive(Debug, Clone)]
/// enum Message {
///     Rename(usize),
///     Delete(usize),
/// }
///
/// fn view<'a>(index: usize) -> Element<'a, Message> {
///     ContextMenu::new(
///         text("Right-click me"),
///         index,
///         vec![
///             MenuItem::new("Rename", |index: &usize, _| Message::Rename(*index)),
///             MenuItem::new("Delete", |index: &usize, _| Message::Delete(*index))
///                 .class("danger"),
///         ],
///     )
///     .into()
/// }
/// ```
#[must_use]
pub struct ContextMenu<'a, Data, Message, Theme = crate::Theme, Renderer = crate::Renderer>
where
    Theme: StyleSheet,
    Renderer: text::Renderer,
{
    content: Element<'a, Message, Theme, Renderer>,
    rows: Vec<Element<'a, Message, Theme, Renderer>>,
    items: Vec<MenuItem<'a, Data, Message>>,
    data: Data,
    ignored: Vec<Rectangle>,
    ignore_trigger: bool,
    on_context_menu: Option<Rc<dyn Fn() -> Message + 'a>>,
    placement: Placement,
    padding: Padding,
    style: <Theme as StyleSheet>::Style,
}

impl<'a, Data, Message, Theme, Renderer> ContextMenu<'a, Data, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: StyleSheet + crate::text::Catalog + 'a,
    Renderer: text::Renderer + 'a,
{
    /// The default [`Padding`] of each row.
    pub const DEFAULT_PADDING: Padding = Padding {
        top: 4.0,
        right: 12.0,
        bottom: 4.0,
        left: 12.0,
    };

    /// Creates a new [`ContextMenu`] for the given content.
    ///
    /// `data` is handed to the click handler of the selected item.
    ///
    /// # Panics
    ///
    /// Panics if the items are invalid. See [`validate`](crate::validate)
    /// and [`ContextMenu::try_new`].
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        data: Data,
        items: Vec<MenuItem<'a, Data, Message>>,
    ) -> Self {
        match Self::try_new(content, data, items) {
            Ok(context_menu) => context_menu,
            Err(error) => panic!("invalid context menu: {error}"),
        }
    }

    /// Creates a new [`ContextMenu`] for the given content, validating the
    /// items first.
    pub fn try_new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        data: Data,
        items: Vec<MenuItem<'a, Data, Message>>,
    ) -> Result<Self, Error> {
        item::validate(&items)?;

        Ok(Self {
            content: content.into(),
            rows: rows(&items, None),
            items,
            data,
            ignored: Vec::new(),
            ignore_trigger: false,
            on_context_menu: None,
            placement: Placement::default(),
            padding: Self::DEFAULT_PADDING,
            style: <Theme as StyleSheet>::Style::default(),
        })
    }

    /// Sets the regions of the window where a press does not close the menu.
    ///
    /// The regions are given in window coordinates and are not tracked. If
    /// an ignored widget scrolls or moves, pass its new bounds in the next
    /// `view`. The bounds of a widget with an id can be queried with
    /// `iced::widget::selector::find`.
    ///
    /// Use [`ignore_trigger`](Self::ignore_trigger) to exempt the content of
    /// this [`ContextMenu`], which follows it automatically.
    pub fn ignore_click_events(mut self, regions: impl IntoIterator<Item = Rectangle>) -> Self {
        self.ignored = regions.into_iter().collect();
        self
    }

    /// Sets whether a press on the content itself keeps the menu open.
    pub fn ignore_trigger(mut self, ignore_trigger: bool) -> Self {
        self.ignore_trigger = ignore_trigger;
        self
    }

    /// Publishes `message` once the menu is placed and visible.
    pub fn on_context_menu(self, message: Message) -> Self
    where
        Message: Clone,
    {
        self.on_context_menu_with(move || message.clone())
    }

    /// Publishes a message once the menu is placed and visible.
    pub fn on_context_menu_with(mut self, f: impl Fn() -> Message + 'a) -> Self {
        self.on_context_menu = Some(Rc::new(f));
        self
    }

    /// Sets the [`Placement`] strategy of the menu.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the [`Padding`] of each row.
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the text size of the rows.
    pub fn text_size(mut self, size: impl Into<Pixels>) -> Self {
        self.rows = rows(&self.items, Some(size.into()));
        self
    }

    /// Sets the style of the menu.
    pub fn style(mut self, style: impl Into<<Theme as StyleSheet>::Style>) -> Self {
        self.style = style.into();
        self
    }
}

fn rows<'a, Data, Message, Theme, Renderer>(
    items: &[MenuItem<'a, Data, Message>],
    size: Option<Pixels>,
) -> Vec<Element<'a, Message, Theme, Renderer>>
where
    Message: 'a,
    Theme: crate::text::Catalog + 'a,
    Renderer: text::Renderer + 'a,
{
    items
        .iter()
        .map(|item| {
            let label = Text::new(item.label().to_owned());

            match size {
                Some(size) => label.size(size).into(),
                None => label.into(),
            }
        })
        .collect()
}

impl<'a, Data, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ContextMenu<'a, Data, Message, Theme, Renderer>
where
    Theme: StyleSheet,
    Renderer: text::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        std::iter::once(&self.content)
            .chain(&self.rows)
            .map(Tree::new)
            .collect()
    }

    fn diff(&self, tree: &mut Tree) {
        let children: Vec<_> = std::iter::once(&self.content).chain(&self.rows).collect();

        tree.diff_children(&children);
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        // A nested context menu takes precedence.
        if shell.is_event_captured() {
            return;
        }

        if let Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right)) = event {
            if let Some(position) = cursor.position_over(layout.bounds()) {
                let state = tree.state.downcast_mut::<State>();

                state.activate(ClickLocation::from(position));

                log::debug!(
                    "ContextMenu: opened at {position:?} with {} items",
                    self.items.len()
                );

                shell.capture_event();
                shell.invalidate_layout();
                shell.request_redraw();
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let Tree {
            state, children, ..
        } = tree;

        let state = state.downcast_mut::<State>();

        let (content_tree, trees) = children.split_first_mut()?;

        let content = self.content.as_widget_mut().overlay(
            content_tree,
            layout,
            renderer,
            viewport,
            translation,
        );

        if !state.is_showing() {
            return content;
        }

        let mut ignored = self.ignored.clone();

        if self.ignore_trigger {
            ignored.push(layout.bounds() + translation);
        }

        let menu = overlay::Element::new(Box::new(MenuOverlay {
            state,
            rows: &mut self.rows,
            trees,
            items: &self.items,
            data: &self.data,
            ignored,
            on_shown: self.on_context_menu.as_deref(),
            translation,
            placement: self.placement,
            padding: self.padding,
            style: &self.style,
        }));

        match content {
            Some(content) => Some(overlay::Element::new(Box::new(
                overlay::Group::with_children(vec![content, menu]),
            ))),
            None => Some(menu),
        }
    }
}

impl<'a, Data, Message, Theme, Renderer> From<ContextMenu<'a, Data, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Data: 'a,
    Message: 'a,
    Theme: StyleSheet + 'a,
    Renderer: text::Renderer + 'a,
{
    fn from(context_menu: ContextMenu<'a, Data, Message, Theme, Renderer>) -> Self {
        Element::new(context_menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Overlay as _;
    use crate::core::{Point, Theme, clipboard, event};
    use iced_widget::Container;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Delete(usize),
        Shown,
    }

    type Menu<'a> = ContextMenu<'a, usize, Message, Theme, ()>;

    const VIEWPORT: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 800.0,
        height: 600.0,
    };

    fn entry() -> Element<'static, Message, Theme, ()> {
        Container::new(Text::<'static, Theme, ()>::new("Entry"))
            .width(100.0)
            .height(50.0)
            .into()
    }

    fn items(count: usize) -> Vec<MenuItem<'static, usize, Message>> {
        (0..count)
            .map(|i| MenuItem::new(format!("Item {i}"), |index: &usize, _| Message::Delete(*index)))
            .collect()
    }

    struct Harness {
        element: Element<'static, Message, Theme, ()>,
        tree: Tree,
        node: layout::Node,
    }

    impl Harness {
        fn new(menu: Menu<'static>) -> Self {
            let mut element: Element<'static, Message, Theme, ()> = menu.into();
            let mut tree = Tree::new(&element);

            let node = element.as_widget_mut().layout(
                &mut tree,
                &(),
                &layout::Limits::new(Size::ZERO, VIEWPORT.size()),
            );

            Self {
                element,
                tree,
                node,
            }
        }

        fn release(&mut self, button: mouse::Button, position: Point) -> event::Status {
            let mut messages = Vec::new();
            let mut shell = Shell::new(&mut messages);

            self.element.as_widget_mut().update(
                &mut self.tree,
                &Event::Mouse(mouse::Event::ButtonReleased(button)),
                Layout::new(&self.node),
                mouse::Cursor::Available(position),
                &(),
                &mut clipboard::Null,
                &mut shell,
                &VIEWPORT,
            );

            shell.event_status()
        }

        fn is_showing(&self) -> bool {
            self.tree.state.downcast_ref::<State>().is_showing()
        }

        fn has_overlay(&mut self) -> bool {
            self.element
                .as_widget_mut()
                .overlay(
                    &mut self.tree,
                    Layout::new(&self.node),
                    &(),
                    &VIEWPORT,
                    Vector::ZERO,
                )
                .is_some()
        }
    }

    #[test]
    fn tree_has_a_child_per_row() {
        let harness = Harness::new(Menu::new(entry(), 0, items(3)));

        assert_eq!(harness.tree.children.len(), 4);
    }

    #[test]
    fn right_click_on_the_content_opens_the_menu() {
        let mut harness =
            Harness::new(Menu::new(entry(), 7, items(2)).on_context_menu(Message::Shown));

        assert!(!harness.has_overlay());

        let status = harness.release(mouse::Button::Right, Point::new(50.0, 25.0));

        assert_eq!(status, event::Status::Captured);
        assert!(harness.is_showing());
        assert!(harness.has_overlay());
    }

    #[test]
    fn other_clicks_do_not_open_the_menu() {
        let mut harness = Harness::new(Menu::new(entry(), 7, items(2)));

        let outside = harness.release(mouse::Button::Right, Point::new(500.0, 500.0));
        let left = harness.release(mouse::Button::Left, Point::new(50.0, 25.0));

        assert_eq!(outside, event::Status::Ignored);
        assert_eq!(left, event::Status::Ignored);
        assert!(!harness.is_showing());
        assert!(!harness.has_overlay());
    }

    #[test]
    fn menus_without_items_still_open() {
        let mut harness = Harness::new(Menu::new(entry(), 0, Vec::new()));

        let _ = harness.release(mouse::Button::Right, Point::new(10.0, 10.0));

        assert!(harness.is_showing());
        assert!(harness.has_overlay());
    }

    #[test]
    fn try_new_rejects_blank_labels() {
        let mut invalid = items(2);
        invalid.push(MenuItem::new("   ", |_: &usize, _| Message::Shown));

        let result = Menu::try_new(entry(), 0, invalid);

        assert_eq!(result.err(), Some(Error::EmptyLabel { index: 2 }));
    }

    #[test]
    #[should_panic(expected = "invalid context menu")]
    fn new_panics_on_invalid_items() {
        let _ = Menu::new(
            entry(),
            0,
            vec![MenuItem::new("", |_: &usize, _| Message::Shown)],
        );
    }

    #[test]
    fn blank_classes_are_accepted() {
        let menu = Menu::try_new(
            entry(),
            0,
            vec![MenuItem::new("Open", |_: &usize, _| Message::Shown).class("")],
        );

        assert!(menu.is_ok());
    }

    fn nested() -> Harness {
        let inner = Menu::new(entry(), 1, items(1));

        Harness::new(Menu::new(
            Container::new(inner).padding(10.0),
            2,
            items(3),
        ))
    }

    fn inner_is_showing(harness: &Harness) -> bool {
        harness.tree.children[0]
            .state
            .downcast_ref::<State>()
            .is_showing()
    }

    #[test]
    fn innermost_trigger_opens_its_own_menu() {
        let mut harness = nested();

        let status = harness.release(mouse::Button::Right, Point::new(20.0, 20.0));

        assert_eq!(status, event::Status::Captured);
        assert!(inner_is_showing(&harness));
        assert!(!harness.is_showing());
    }

    #[test]
    fn outer_trigger_opens_outside_of_the_inner_one() {
        let mut harness = nested();

        let status = harness.release(mouse::Button::Right, Point::new(5.0, 5.0));

        assert_eq!(status, event::Status::Captured);
        assert!(!inner_is_showing(&harness));
        assert!(harness.is_showing());
    }

    #[test]
    fn content_overlays_stay_while_the_menu_is_open() {
        let mut harness = nested();

        let _ = harness.release(mouse::Button::Right, Point::new(20.0, 20.0));
        let _ = harness.release(mouse::Button::Right, Point::new(5.0, 5.0));

        assert!(inner_is_showing(&harness));
        assert!(harness.is_showing());

        let mut overlay = harness
            .element
            .as_widget_mut()
            .overlay(
                &mut harness.tree,
                Layout::new(&harness.node),
                &(),
                &VIEWPORT,
                Vector::ZERO,
            )
            .expect("overlay");

        let node = overlay.as_overlay_mut().layout(&(), VIEWPORT.size());

        let mut rows: Vec<usize> = node
            .children()
            .iter()
            .map(|menu| menu.children().len())
            .collect();
        rows.sort_unstable();

        assert_eq!(rows, vec![1, 3]);
    }
}

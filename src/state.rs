use crate::core::{Point, Rectangle, Size, Vector};
use crate::item::{Click, MenuItem};
use crate::placement::{self, ClickLocation, Placement, PositionStyle};

/// The local state of a [`ContextMenu`](crate::ContextMenu).
///
/// A menu is either hidden, or showing. A showing menu is measured first
/// ([`PositionStyle::Measuring`]) and placed afterwards
/// ([`PositionStyle::Placed`]).
#[derive(Debug, Clone, Default)]
pub(crate) struct State {
    showing: bool,
    style: Option<PositionStyle>,
    click_location: Option<ClickLocation>,
    shown_pending: bool,
    hovered: Option<usize>,
}

impl State {
    pub(crate) fn is_showing(&self) -> bool {
        self.showing
    }

    pub(crate) fn style(&self) -> Option<PositionStyle> {
        self.style
    }

    /// Opens the menu at `location` and starts the measurement pass.
    ///
    /// Any previous activation is discarded.
    pub(crate) fn activate(&mut self, location: ClickLocation) {
        self.showing = true;
        self.style = Some(PositionStyle::Measuring);
        self.click_location = Some(location);
        self.shown_pending = false;
        self.hovered = None;
    }

    /// Commits the measured `size` of the menu and returns its position.
    ///
    /// The first commit of an activation places the menu and arms the
    /// shown notification. Later commits keep the existing position.
    pub(crate) fn commit_measurement(
        &mut self,
        size: Size,
        viewport: Size,
        translation: Vector,
        placement: Placement,
    ) -> Option<Point> {
        if !self.showing {
            return None;
        }

        match self.style? {
            PositionStyle::Placed { left, top } => Some(Point::new(left, top)),
            PositionStyle::Measuring => {
                let location = self.click_location? + translation;
                let size = placement::measured(size);
                let position = placement.resolve(location, size, viewport);

                log::debug!(
                    "ContextMenu: placing {size:?} menu opened at {location:?} in {viewport:?} at {position:?}"
                );

                self.style = Some(PositionStyle::Placed {
                    left: position.x,
                    top: position.y,
                });
                self.shown_pending = true;

                Some(position)
            }
        }
    }

    /// Returns `true` once after the menu has been placed.
    pub(crate) fn take_shown(&mut self) -> bool {
        std::mem::take(&mut self.shown_pending)
    }

    /// Records the row under the cursor.
    ///
    /// Returns `true` if the hovered row changed.
    pub(crate) fn hover(&mut self, row: Option<usize>) -> bool {
        if !self.showing || self.hovered == row {
            return false;
        }

        self.hovered = row;
        true
    }

    /// Hides the menu and clears the activation.
    ///
    /// Returns `false` if the menu was already hidden.
    pub(crate) fn dismiss(&mut self) -> bool {
        let was_showing = self.showing;

        *self = Self::default();

        was_showing
    }

    /// Dismisses the menu if `position` is outside of both the menu and every
    /// ignored region.
    ///
    /// Returns `true` if the menu was dismissed.
    pub(crate) fn interact_outside(
        &mut self,
        position: Point,
        menu: Rectangle,
        ignored: &[Rectangle],
    ) -> bool {
        if !self.showing || !is_outside(position, menu, ignored) {
            return false;
        }

        self.dismiss()
    }

    /// Dismisses the menu and dispatches the item at `click.index`.
    ///
    /// The menu is hidden before the handler runs.
    pub(crate) fn select<Data, Message>(
        &mut self,
        items: &[MenuItem<'_, Data, Message>],
        data: &Data,
        click: Click,
    ) -> Option<Message> {
        if !self.showing {
            return None;
        }

        let item = items.get(click.index)?;

        let _ = self.dismiss();

        log::debug!("ContextMenu: {:?} selected", item.label());

        Some(item.click(data, click))
    }
}

/// Returns `true` if `position` is neither inside `menu` nor inside any of the
/// `ignored` regions.
pub(crate) fn is_outside(position: Point, menu: Rectangle, ignored: &[Rectangle]) -> bool {
    !menu.contains(position) && !ignored.iter().any(|region| region.contains(position))
}

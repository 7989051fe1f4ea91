//! Placement of the popup relative to the pointer.
//!
//! The menu is measured first and placed afterwards. Each axis is resolved on
//! its own: the menu opens towards the positive side of the cursor when the
//! remaining space is larger than the menu, and flips to the negative side
//! otherwise.

use crate::core::{Point, Size, Vector};

/// The distance kept between the cursor and the nearest menu edge.
pub const CURSOR_OFFSET: f32 = 5.0;

/// The location of the pointer when the context menu was requested.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClickLocation {
    /// The horizontal coordinate.
    pub x: f32,
    /// The vertical coordinate.
    pub y: f32,
}

impl ClickLocation {
    /// Creates a new [`ClickLocation`].
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for ClickLocation {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<ClickLocation> for Point {
    fn from(location: ClickLocation) -> Self {
        Point::new(location.x, location.y)
    }
}

impl std::ops::Add<Vector> for ClickLocation {
    type Output = Self;

    fn add(self, translation: Vector) -> Self {
        Self::new(self.x + translation.x, self.y + translation.y)
    }
}

/// The visual state of an open menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionStyle {
    /// The menu is laid out to obtain its size, but not drawn.
    Measuring,
    /// The menu is drawn with its top-left corner at the given offsets.
    Placed {
        /// The horizontal offset in logical pixels.
        left: f32,
        /// The vertical offset in logical pixels.
        top: f32,
    },
}

impl PositionStyle {
    /// Returns the opacity of the menu in this state.
    pub fn opacity(self) -> f32 {
        match self {
            PositionStyle::Measuring => 0.0,
            PositionStyle::Placed { .. } => 1.0,
        }
    }

    /// Returns `true` if the menu should be drawn.
    pub fn is_visible(self) -> bool {
        self.opacity() > 0.0
    }

    /// Returns the top-left corner of a placed menu.
    pub fn position(self) -> Option<Point> {
        match self {
            PositionStyle::Measuring => None,
            PositionStyle::Placed { left, top } => Some(Point::new(left, top)),
        }
    }
}

/// The strategy used to place the menu next to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Open towards the bottom-right and flip per axis when the menu does not
    /// fit. The flipped side is not checked.
    #[default]
    Flip,
    /// Like [`Placement::Flip`], but the result is clamped into the viewport
    /// whenever the flipped side does not fit either.
    FlipAndClamp,
}

impl Placement {
    /// Computes the top-left corner of a menu of the given `size` opened at
    /// `location` inside a `viewport` of the given size.
    pub fn resolve(self, location: ClickLocation, size: Size, viewport: Size) -> Point {
        let left = flip(location.x, size.width, viewport.width);
        let top = flip(location.y, size.height, viewport.height);

        match self {
            Placement::Flip => Point::new(left, top),
            Placement::FlipAndClamp => Point::new(
                clamp(left, size.width, viewport.width),
                clamp(top, size.height, viewport.height),
            ),
        }
    }
}

fn flip(cursor: f32, extent: f32, available: f32) -> f32 {
    if available - cursor > extent {
        cursor + CURSOR_OFFSET
    } else {
        cursor - extent - CURSOR_OFFSET
    }
}

fn clamp(position: f32, extent: f32, available: f32) -> f32 {
    let max = (available - extent).max(0.0);

    position.min(max).max(0.0)
}

/// Sanitizes a measured size.
///
/// A size that cannot be measured (non-finite or negative components) counts
/// as zero, which anchors the menu at the raw cursor offset.
pub(crate) fn measured(size: Size) -> Size {
    let sanitize = |value: f32| {
        if value.is_finite() && value >= 0.0 {
            value
        } else {
            0.0
        }
    };

    let sanitized = Size::new(sanitize(size.width), sanitize(size.height));

    if sanitized != size {
        log::warn!("ContextMenu: unusable menu size {size:?}, treating it as {sanitized:?}");
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);
    const MENU: Size = Size::new(150.0, 60.0);

    #[test]
    fn opens_towards_bottom_right_when_there_is_room() {
        let position = Placement::Flip.resolve(ClickLocation::new(100.0, 100.0), MENU, VIEWPORT);

        assert_eq!(position, Point::new(105.0, 105.0));
    }

    #[test]
    fn flips_both_axes_near_the_bottom_right_corner() {
        let position = Placement::Flip.resolve(ClickLocation::new(780.0, 580.0), MENU, VIEWPORT);

        assert_eq!(position, Point::new(625.0, 515.0));
    }

    #[test]
    fn axes_are_resolved_independently() {
        let position = Placement::Flip.resolve(ClickLocation::new(780.0, 100.0), MENU, VIEWPORT);

        assert_eq!(position, Point::new(625.0, 105.0));
    }

    #[test]
    fn exact_fit_flips() {
        // 800 - 650 == 150 is not strictly larger than the menu width.
        let position = Placement::Flip.resolve(ClickLocation::new(650.0, 0.0), MENU, VIEWPORT);

        assert_eq!(position.x, 650.0 - 150.0 - CURSOR_OFFSET);
        assert_eq!(position.y, CURSOR_OFFSET);
    }

    #[test]
    fn flip_does_not_check_the_flipped_side() {
        let wide = Size::new(1000.0, 60.0);
        let position = Placement::Flip.resolve(ClickLocation::new(100.0, 100.0), wide, VIEWPORT);

        assert_eq!(position.x, 100.0 - 1000.0 - CURSOR_OFFSET);
    }

    #[test]
    fn clamping_keeps_the_menu_on_screen() {
        let wide = Size::new(1000.0, 60.0);
        let position =
            Placement::FlipAndClamp.resolve(ClickLocation::new(100.0, 590.0), wide, VIEWPORT);

        assert_eq!(position, Point::new(0.0, 590.0 - 60.0 - CURSOR_OFFSET));
    }

    #[test]
    fn clamping_does_not_move_a_menu_that_fits() {
        let location = ClickLocation::new(780.0, 580.0);

        assert_eq!(
            Placement::FlipAndClamp.resolve(location, MENU, VIEWPORT),
            Placement::Flip.resolve(location, MENU, VIEWPORT),
        );
    }

    #[test]
    fn empty_menu_sits_at_the_cursor_offset() {
        let position =
            Placement::Flip.resolve(ClickLocation::new(10.0, 20.0), Size::ZERO, VIEWPORT);

        assert_eq!(position, Point::new(15.0, 25.0));
    }

    #[test]
    fn unusable_measurements_count_as_zero() {
        assert_eq!(measured(Size::new(f32::NAN, -3.0)), Size::ZERO);
        assert_eq!(measured(Size::new(f32::INFINITY, 12.0)), Size::new(0.0, 12.0));
        assert_eq!(measured(MENU), MENU);
    }

    #[test]
    fn position_style_visibility() {
        assert!(!PositionStyle::Measuring.is_visible());
        assert_eq!(PositionStyle::Measuring.position(), None);

        let placed = PositionStyle::Placed {
            left: 1.0,
            top: 2.0,
        };

        assert!(placed.is_visible());
        assert_eq!(placed.opacity(), 1.0);
        assert_eq!(placed.position(), Some(Point::new(1.0, 2.0)));
    }
}

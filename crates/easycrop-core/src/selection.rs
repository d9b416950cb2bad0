use crate::geometry::{DisplayGeometry, Point};

/// A rectangle spanned by a drag gesture, in viewport coordinates.
///
/// `anchor` is where the gesture started and is never clamped. `current`
/// follows the pointer, clamped to the displayed image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionRect {
    pub anchor: Point,
    pub current: Point,
}

impl SelectionRect {
    pub fn at(point: Point) -> Self {
        Self {
            anchor: point,
            current: point,
        }
    }

    /// Top-left and bottom-right corners, sorted per axis.
    pub fn normalized(&self) -> (Point, Point) {
        (
            Point::new(
                self.anchor.x.min(self.current.x),
                self.anchor.y.min(self.current.y),
            ),
            Point::new(
                self.anchor.x.max(self.current.x),
                self.anchor.y.max(self.current.y),
            ),
        )
    }
}

/// Selection gesture state: idle (optionally holding the last rectangle) or dragging.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Idle { last: Option<SelectionRect> },
    Dragging(SelectionRect),
}

impl Default for Selection {
    fn default() -> Self {
        Self::Idle { last: None }
    }
}

impl Selection {
    /// Start a new gesture. Any previous rectangle is dropped.
    pub fn begin(&mut self, point: Point) -> SelectionRect {
        let rect = SelectionRect::at(point);
        *self = Self::Dragging(rect);
        rect
    }

    /// Move the free corner. Ignored when no gesture is in progress.
    pub fn update(&mut self, point: Point, geometry: &DisplayGeometry) -> Option<SelectionRect> {
        match self {
            Self::Dragging(rect) => {
                rect.current = geometry.clamp_point(point);
                Some(*rect)
            }
            Self::Idle { .. } => None,
        }
    }

    /// Apply a last update and end the gesture, keeping the rectangle.
    pub fn finalize(&mut self, point: Point, geometry: &DisplayGeometry) -> Option<SelectionRect> {
        let rect = self.update(point, geometry)?;
        *self = Self::Idle { last: Some(rect) };
        Some(rect)
    }

    /// End an in-progress gesture where it currently stands.
    pub fn settle(&mut self) -> Option<SelectionRect> {
        if let Self::Dragging(rect) = *self {
            *self = Self::Idle { last: Some(rect) };
        }
        self.last()
    }

    /// The finalized rectangle, if idle.
    pub fn last(&self) -> Option<SelectionRect> {
        match self {
            Self::Idle { last } => *last,
            Self::Dragging(_) => None,
        }
    }

    /// Rectangle to draw: the in-progress one, else the finalized one.
    pub fn visible(&self) -> Option<SelectionRect> {
        match self {
            Self::Idle { last } => *last,
            Self::Dragging(rect) => Some(*rect),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

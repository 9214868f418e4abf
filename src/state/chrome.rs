//! Floating panel chrome: visibility, position and drag tracking.
//!
//! DESIGN
//! ======
//! The panel starts anchored by the stylesheet (right/bottom). The first drag
//! switches it to absolute `left`/`top`, which stays in effect for the rest of
//! the page lifetime. Positions are clamped on every move so the panel never
//! leaves the viewport, including intermediate frames.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    Open,
    #[default]
    Closed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum WidgetPosition {
    /// Placed by the stylesheet's right/bottom offsets.
    #[default]
    Anchored,
    Absolute {
        left: f64,
        top: f64,
    },
}

impl WidgetPosition {
    pub fn css_left(self) -> String {
        match self {
            Self::Anchored => String::new(),
            Self::Absolute { left, .. } => format!("{left}px"),
        }
    }

    pub fn css_top(self) -> String {
        match self {
            Self::Anchored => String::new(),
            Self::Absolute { top, .. } => format!("{top}px"),
        }
    }

    /// `auto` once absolutely placed so the stylesheet anchor stops applying.
    pub fn css_right_bottom(self) -> &'static str {
        match self {
            Self::Anchored => "",
            Self::Absolute { .. } => "auto",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Inner window dimensions.
pub type Viewport = Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse { button: i16 },
    Touch { touches: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn mouse(button: i16, x: f64, y: f64) -> Self {
        Self { kind: PointerKind::Mouse { button }, x, y }
    }

    pub fn touch(touches: u32, x: f64, y: f64) -> Self {
        Self { kind: PointerKind::Touch { touches }, x, y }
    }

    /// Primary mouse button or exactly one finger.
    fn is_single(self) -> bool {
        match self.kind {
            PointerKind::Mouse { button } => button == 0,
            PointerKind::Touch { touches } => touches == 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragTracker {
    source: DragSource,
    origin_x: f64,
    origin_y: f64,
    start: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChromeState {
    visibility: Visibility,
    badge_visible: bool,
    position: WidgetPosition,
    drag: Option<DragTracker>,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            visibility: Visibility::Closed,
            badge_visible: true,
            position: WidgetPosition::Anchored,
            drag: None,
        }
    }
}

impl ChromeState {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// The toggle button is shown exactly while the panel is closed.
    pub fn toggle_visible(&self) -> bool {
        !self.is_open()
    }

    pub fn badge_visible(&self) -> bool {
        self.badge_visible
    }

    pub fn position(&self) -> WidgetPosition {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_source(&self) -> Option<DragSource> {
        self.drag.map(|d| d.source)
    }

    /// Open the panel and clear the unread badge. Returns `false` if already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.visibility = Visibility::Open;
        self.badge_visible = false;
        true
    }

    /// Close the panel. Returns `false` if already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.visibility = Visibility::Closed;
        self.drag = None;
        true
    }

    /// Start tracking a drag from `pointer` with the panel at `panel`.
    /// Secondary buttons and multi-touch presses are ignored.
    pub fn begin_drag(&mut self, pointer: Pointer, panel: Rect) -> bool {
        if !pointer.is_single() {
            return false;
        }
        let source = match pointer.kind {
            PointerKind::Mouse { .. } => DragSource::Mouse,
            PointerKind::Touch { .. } => DragSource::Touch,
        };
        self.drag = Some(DragTracker { source, origin_x: pointer.x, origin_y: pointer.y, start: panel });
        true
    }

    /// Move the panel by the pointer's offset from the drag origin, clamped to
    /// `viewport`. Returns `false` when no drag is active or the move is a
    /// multi-touch gesture.
    pub fn drag_to(&mut self, pointer: Pointer, panel: Size, viewport: Viewport) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        if let PointerKind::Touch { touches } = pointer.kind {
            if touches != 1 {
                return false;
            }
        }
        let left = drag.start.left + (pointer.x - drag.origin_x);
        let top = drag.start.top + (pointer.y - drag.origin_y);
        let (left, top) = clamp_to_viewport(left, top, panel, viewport);
        self.position = WidgetPosition::Absolute { left, top };
        true
    }

    /// Stop tracking; returns the source of the drag that ended.
    pub fn end_drag(&mut self) -> Option<DragSource> {
        self.drag.take().map(|d| d.source)
    }
}

/// Clamp a panel origin into `[0, viewport - panel]` on both axes. When the
/// panel is larger than the viewport the origin pins to 0.
pub fn clamp_to_viewport(left: f64, top: f64, panel: Size, viewport: Viewport) -> (f64, f64) {
    let max_left = viewport.width - panel.width;
    let max_top = viewport.height - panel.height;
    (left.min(max_left).max(0.0), top.min(max_top).max(0.0))
}

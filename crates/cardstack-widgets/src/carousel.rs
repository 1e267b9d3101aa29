//! Vertical spring-snapped carousel.
//!
//! The carousel owns one child per card and a continuous offset measured in
//! item units. Dragging moves the offset with the pointer; releasing snaps to
//! the nearest item with a spring. Settling is reported separately from the
//! gesture ending: [`ScrollEnded`] fires on release, [`SnappedToItem`] only
//! when the snap spring reaches rest.

use cardstack_core::{
    interpolate, Canvas, Constraints, Event, LayoutResult, MouseButton, Rect, Size, Spring,
    SpringConfig, TouchId, Transform2D, TypeId, Widget,
};
use std::any::Any;

/// Spring used for the snap-to-item animation.
pub const SNAP_SPRING: SpringConfig = SpringConfig::custom(1.0, 200.0, 24.0);

/// Displacement/speed threshold below which the snap counts as settled.
const SNAP_REST_THRESHOLD: f64 = 0.05;

/// Finger travel in pixels before a touch becomes a scroll gesture.
const DRAG_ACTIVATION_SLOP: f32 = 10.0;

/// Scale of an item one full position away from center.
const ITEM_SCALE_MIN: f64 = 0.9;

/// Parallax travel of an item, as a fraction of the window height.
const ITEM_PARALLAX: f64 = 0.05;

/// Message emitted once per gesture when scrolling begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBegan;

/// Message emitted when the finger lifts and the snap animation starts.
///
/// This is not the settle point; see [`SnappedToItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEnded;

/// Message emitted when the snap animation completes on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnappedToItem {
    /// Index the carousel settled on
    pub index: usize,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    /// Touch driving the drag, `None` for mouse drags
    touch: Option<TouchId>,
    start_y: f32,
    last_y: f32,
    /// Whether the slop threshold has been crossed
    begun: bool,
}

/// Vertically swipeable, spring-snapped item pager.
pub struct Carousel {
    children: Vec<Box<dyn Widget>>,
    /// Continuous position in item units
    offset: Spring,
    /// Last settled index
    index: usize,
    drag: Option<DragState>,
    /// A snap animation is in flight
    snapping: bool,
    /// Size of each item surface; defaults to the layout bounds
    item_size: Option<Size>,
    bounds: Rect,
    test_id_value: Option<String>,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

impl Carousel {
    /// Create an empty carousel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            offset: Spring::new(0.0)
                .with_config(SNAP_SPRING)
                .with_precision(SNAP_REST_THRESHOLD),
            index: 0,
            drag: None,
            snapping: false,
            item_size: None,
            bounds: Rect::default(),
            test_id_value: None,
        }
    }

    /// Add an item.
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Set the item surface size.
    #[must_use]
    pub fn item_size(mut self, size: Size) -> Self {
        self.item_size = Some(size);
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Add an item in place.
    pub fn push_child(&mut self, widget: Box<dyn Widget>) {
        self.children.push(widget);
    }

    /// Replace all items, resetting position to the first one.
    pub fn replace_children(&mut self, children: Vec<Box<dyn Widget>>) {
        self.children = children;
        self.offset.set_immediate(0.0);
        self.index = 0;
        self.drag = None;
        self.snapping = false;
        let bounds = self.bounds;
        if bounds.width > 0.0 || bounds.height > 0.0 {
            self.layout(bounds);
        }
    }

    /// Update the item surface size after construction.
    pub fn set_item_size(&mut self, size: Size) {
        self.item_size = Some(size);
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the carousel has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Wrap-around is enabled only with more than one item.
    #[must_use]
    pub fn looping(&self) -> bool {
        self.children.len() > 1
    }

    /// Last settled index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current continuous offset in item units.
    #[must_use]
    pub fn offset_value(&self) -> f64 {
        self.offset.value
    }

    /// Whether a snap animation is in flight.
    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.snapping
    }

    /// Position of item `index` relative to the viewport center, in item
    /// units; 0 is centered, ±1 one full position away. Wraps to the nearest
    /// representation when looping.
    #[must_use]
    pub fn item_progress(&self, index: usize) -> f64 {
        let mut d = index as f64 - self.offset.value;
        if self.looping() {
            let n = self.children.len() as f64;
            d -= (d / n).round() * n;
        }
        d
    }

    fn item_rect(&self, bounds: Rect) -> Rect {
        let size = self.item_size.unwrap_or_else(|| bounds.size());
        Rect::new(
            bounds.x + (bounds.width - size.width) / 2.0,
            bounds.y + (bounds.height - size.height) / 2.0,
            size.width,
            size.height,
        )
    }

    fn begin_drag(&mut self, touch: Option<TouchId>, y: f32) {
        if self.drag.is_none() {
            self.drag = Some(DragState {
                touch,
                start_y: y,
                last_y: y,
                begun: false,
            });
        }
    }

    fn drag_move(&mut self, touch: Option<TouchId>, y: f32) -> Option<Box<dyn Any + Send>> {
        let drag = self.drag.as_mut()?;
        if drag.touch != touch {
            return None;
        }

        let mut began = false;
        if !drag.begun {
            if (y - drag.start_y).abs() < DRAG_ACTIVATION_SLOP {
                drag.last_y = y;
                return None;
            }
            drag.begun = true;
            began = true;
        }

        let dy = drag.last_y - y;
        drag.last_y = y;

        let height = f64::from(self.bounds.height.max(1.0));
        let value = self.offset.value + f64::from(dy) / height;
        self.offset.set_immediate(value);
        self.snapping = false;

        if began {
            log::debug!("scroll began");
            Some(Box::new(ScrollBegan))
        } else {
            None
        }
    }

    fn end_drag(&mut self, touch: Option<TouchId>) -> Option<Box<dyn Any + Send>> {
        let drag = *self.drag.as_ref()?;
        if drag.touch != touch {
            return None;
        }
        self.drag = None;
        if !drag.begun {
            return None;
        }

        let target = self.offset.value.round();
        self.offset.set_target(target);
        self.snapping = true;
        log::debug!("scroll ended, snapping to {target}");
        Some(Box::new(ScrollEnded))
    }

    fn wheel(&mut self, delta_y: f32) -> Option<Box<dyn Any + Send>> {
        if delta_y == 0.0 {
            return None;
        }
        let step = if delta_y > 0.0 { 1.0 } else { -1.0 };
        let began = !self.snapping;
        let target = self.offset.target.round() + step;
        self.offset.set_target(target);
        self.snapping = true;
        if began {
            log::debug!("scroll began");
            Some(Box::new(ScrollBegan))
        } else {
            None
        }
    }

    fn active_child_event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let index = self.index;
        self.children.get_mut(index)?.event(event)
    }
}

impl Widget for Carousel {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        match self.item_size {
            Some(size) => constraints.constrain(size),
            None => constraints.biggest(),
        }
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let rect = self.item_rect(bounds);
        for child in &mut self.children {
            child.layout(rect);
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.children.is_empty() {
            return;
        }
        canvas.push_clip(self.bounds);
        let height = f64::from(self.bounds.height);
        for (i, child) in self.children.iter().enumerate() {
            let d = self.item_progress(i);
            if d.abs() > 1.0 {
                continue;
            }
            let travel = d * height;
            let parallax = interpolate(
                d,
                [-1.0, 1.0],
                [-ITEM_PARALLAX * height, ITEM_PARALLAX * height],
            );
            let scale = (1.0 - (1.0 - ITEM_SCALE_MIN) * d.abs()) as f32;

            let center = child.bounds().center();
            let transform = Transform2D::translate(0.0, (travel + parallax) as f32)
                .then(&Transform2D::translate(center.x, center.y))
                .then(&Transform2D::scale(scale, scale))
                .then(&Transform2D::translate(-center.x, -center.y));

            canvas.push_transform(transform);
            child.paint(canvas);
            canvas.pop_transform();
        }
        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        // A single item disables swiping entirely; events still reach the
        // active card's embedded view.
        if self.children.len() <= 1 {
            return self.active_child_event(event);
        }

        match *event {
            Event::TouchStart { id, position, .. } => {
                if self.bounds.contains_point(&position) {
                    self.begin_drag(Some(id), position.y);
                }
                self.active_child_event(event)
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.bounds.contains_point(&position) {
                    self.begin_drag(None, position.y);
                }
                self.active_child_event(event)
            }
            Event::TouchMove { id, position, .. } => self.drag_move(Some(id), position.y),
            Event::MouseMove { position } => self.drag_move(None, position.y),
            Event::TouchEnd { id, .. } | Event::TouchCancel { id } => self.end_drag(Some(id)),
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } => self.end_drag(None),
            Event::Scroll { delta_y, .. } => self.wheel(delta_y),
            _ => self.active_child_event(event),
        }
    }

    fn update(&mut self, dt: f64) -> Option<Box<dyn Any + Send>> {
        for child in &mut self.children {
            child.update(dt);
        }

        self.offset.update(dt);
        if self.snapping && self.offset.at_rest {
            self.snapping = false;
            let n = self.children.len() as i64;
            let normalized = (self.offset.value.round() as i64).rem_euclid(n) as usize;
            self.offset.set_immediate(normalized as f64);
            self.index = normalized;
            return Some(Box::new(SnappedToItem { index: normalized }));
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

//! The card stack component.
//!
//! Composes the shell, the carousel of card surfaces, the navigation dots,
//! and the active-card label, and routes carousel events into the expansion
//! controller. Hosts observe state through the [`IndexChanged`] and
//! [`ExpandChanged`] messages returned from `event` and `update`.

use crate::card::Card;
use crate::carousel::{Carousel, ScrollBegan, ScrollEnded, SnappedToItem};
use crate::container::CardView;
use crate::controller::{ExpandMode, ExpansionController};
use crate::dimensions::StackDimensions;
use crate::dots::NavigationDots;
use crate::shell::Shell;
use cardstack_core::{
    Canvas, Color, Constraints, Event, FontWeight, LayoutResult, Point, Rect, Size, TextStyle,
    TypeId, Widget,
};
use std::any::Any;
use std::collections::VecDeque;

pub use crate::controller::{ExpandChanged, IndexChanged};

/// Label shown when no active card resolves (e.g. an empty stack).
pub const FALLBACK_LABEL: &str = "Test name";

/// Horizontal inset of the window inside the component.
const WINDOW_PADDING_LEFT: f32 = 9.0;

/// Width reserved for the dot column beside the window.
const DOTS_COLUMN_WIDTH: f32 = 13.0;

/// Gap between the window and the label underneath.
const LABEL_GAP: f32 = 5.0;

/// Label font size.
const LABEL_SIZE: f32 = 12.0;

/// Label line height.
const LABEL_LINE_HEIGHT: f32 = 16.0;

/// Identity of one card, kept beside the carousel's surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CardMeta {
    id: String,
    label: String,
}

/// Vertically swipeable stack of cards with an expand-on-interaction shell.
pub struct CardStack {
    meta: Vec<CardMeta>,
    dims: StackDimensions,
    controller: ExpansionController,
    carousel: Carousel,
    shell: Shell,
    dots: NavigationDots,
    pending: VecDeque<Box<dyn Any + Send>>,
    label_position: Point,
    bounds: Rect,
    test_id_value: Option<String>,
}

impl Default for CardStack {
    fn default() -> Self {
        Self::new()
    }
}

impl CardStack {
    /// Create an empty stack with the default dimension preset.
    #[must_use]
    pub fn new() -> Self {
        let dims = StackDimensions::default();
        Self {
            meta: Vec::new(),
            dims,
            controller: ExpansionController::default(),
            carousel: Carousel::new().item_size(dims.card_size()),
            shell: Shell::new(dims),
            dots: NavigationDots::new(0),
            pending: VecDeque::new(),
            label_position: Point::ORIGIN,
            bounds: Rect::default(),
            test_id_value: None,
        }
    }

    /// Create an empty stack sized for a screen.
    #[must_use]
    pub fn for_screen(screen: Size) -> Self {
        let mut stack = Self::new();
        stack.apply_dimensions(StackDimensions::for_screen(screen));
        stack
    }

    /// Add a card.
    pub fn card(mut self, card: Card) -> Self {
        self.meta.push(CardMeta {
            id: card.id.clone(),
            label: card.label.clone(),
        });
        self.carousel.push_child(Box::new(CardView::from_card(card)));
        self.dots.set_count(self.meta.len());
        self
    }

    /// Add several cards.
    pub fn cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        for card in cards {
            self = self.card(card);
        }
        self
    }

    /// Start expanded instead of collapsed (uncontrolled mode).
    #[must_use]
    pub fn default_expanded(mut self, expanded: bool) -> Self {
        self.controller = ExpansionController::new(ExpandMode::Uncontrolled {
            default_expanded: expanded,
        });
        self
    }

    /// Hand ownership of the expansion value to the host (controlled mode).
    ///
    /// Gestures and the settle timer then only emit [`ExpandChanged`]
    /// intents; the host applies them back through [`Self::set_expanded`].
    #[must_use]
    pub fn controlled(mut self, expanded: bool) -> Self {
        self.controller = ExpansionController::new(ExpandMode::Controlled { expanded });
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    /// Whether the stack has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    /// Current expansion value in [0, 1].
    #[must_use]
    pub fn expansion(&self) -> f64 {
        self.controller.progress()
    }

    /// Currently settled card index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    /// Label of the active card, or the placeholder when none resolves.
    #[must_use]
    pub fn active_label(&self) -> &str {
        self.meta
            .get(self.controller.active_index())
            .map_or(FALLBACK_LABEL, |meta| meta.label.as_str())
    }

    /// Whether an auto-collapse is scheduled.
    #[must_use]
    pub fn is_collapse_pending(&self) -> bool {
        self.controller.is_collapse_pending()
    }

    /// Drive the expansion value from the host.
    ///
    /// This is how a controlled host applies the state it owns after an
    /// [`ExpandChanged`] intent; in uncontrolled mode it is a programmatic
    /// toggle.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.controller.set_expanded(expanded);
    }

    /// Replace the card list.
    ///
    /// The carousel resets to the first card. An emptied list cancels any
    /// pending collapse so the timer cannot fire against missing content.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.meta = cards
            .iter()
            .map(|card| CardMeta {
                id: card.id.clone(),
                label: card.label.clone(),
            })
            .collect();
        let views = cards
            .into_iter()
            .map(|card| Box::new(CardView::from_card(card)) as Box<dyn Widget>)
            .collect();
        self.carousel.replace_children(views);
        self.dots.set_count(self.meta.len());
        self.controller.reset_index();
        if self.meta.is_empty() {
            self.controller.cancel_pending();
        }
    }

    /// Window rect of the swipeable area for the current layout.
    #[must_use]
    pub fn window_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x + WINDOW_PADDING_LEFT,
            self.bounds.y,
            self.dims.window_width,
            self.dims.window_height,
        )
    }

    fn dots_rect(&self) -> Rect {
        let window = self.window_rect();
        Rect::new(
            window.x + window.width,
            window.y,
            DOTS_COLUMN_WIDTH,
            window.height,
        )
    }

    fn apply_dimensions(&mut self, dims: StackDimensions) {
        self.dims = dims;
        self.shell.set_dimensions(dims);
        self.carousel.set_item_size(dims.card_size());
        if self.bounds.width > 0.0 || self.bounds.height > 0.0 {
            self.layout(self.bounds);
        }
    }

    fn route_carousel(&mut self, message: Option<Box<dyn Any + Send>>) {
        let Some(message) = message else { return };

        if message.downcast_ref::<ScrollBegan>().is_some() {
            let changed = self.controller.on_gesture_begin();
            self.pending.push_back(Box::new(changed));
        } else if message.downcast_ref::<ScrollEnded>().is_some() {
            // The settle event, not the gesture end, schedules the collapse.
        } else if let Some(snap) = message.downcast_ref::<SnappedToItem>() {
            let changed = self.controller.on_item_settled(snap.index);
            self.dots.set_active(snap.index);
            self.pending.push_back(Box::new(changed));
        } else {
            // A message from an embedded card view bubbles to the host.
            self.pending.push_back(message);
        }
    }
}

impl Widget for CardStack {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(
            WINDOW_PADDING_LEFT + self.dims.window_width + DOTS_COLUMN_WIDTH,
            self.dims.window_height + LABEL_GAP + LABEL_LINE_HEIGHT,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let window = self.window_rect();
        self.carousel.layout(window);
        self.label_position = Point::new(
            window.x + window.width / 2.0,
            window.y + window.height + LABEL_GAP,
        );
        LayoutResult {
            size: self.measure(Constraints::loose(bounds.size())),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let progress = self.controller.progress();
        let window = self.window_rect();

        // Shell first: it sits behind the cards.
        self.shell.paint(canvas, progress, window);
        self.carousel.paint(canvas);
        self.dots.paint(canvas, progress, self.dots_rect());

        let style = TextStyle {
            size: LABEL_SIZE,
            color: Color::WHITE,
            weight: FontWeight::Normal,
        };
        canvas.draw_text(self.active_label(), self.label_position, &style);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match *event {
            Event::Resize { width, height } => {
                self.apply_dimensions(StackDimensions::for_screen(Size::new(width, height)));
            }
            _ => {
                let message = self.carousel.event(event);
                self.route_carousel(message);
            }
        }
        self.pending.pop_front()
    }

    fn update(&mut self, dt: f64) -> Option<Box<dyn Any + Send>> {
        let message = self.carousel.update(dt);
        self.route_carousel(message);

        if let Some(changed) = self.controller.update(dt) {
            self.pending.push_back(Box::new(changed));
        }
        self.dots.update(dt);
        self.pending.pop_front()
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        self.carousel.children()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        self.carousel.children_mut()
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

//! Per-card surface: color plate, cover image, embedded view.

use crate::card::Card;
use cardstack_core::{
    Canvas, Color, Constraints, CornerRadius, Event, LayoutResult, Rect, Size, TypeId, Widget,
};
use std::any::Any;

/// Corner radius shared by every card surface.
pub const CARD_RADIUS: f32 = 22.0;

/// Renders one card's visual content inside the carousel.
///
/// Layers bottom-up: background color, cover-fit image, embedded widget.
/// Everything is clipped to the card bounds.
pub struct CardView {
    background: Option<Color>,
    image: Option<String>,
    corner_radius: f32,
    children: Vec<Box<dyn Widget>>,
    test_id_value: String,
    bounds: Rect,
}

impl CardView {
    /// Build the surface for a card, consuming its embedded view.
    #[must_use]
    pub fn from_card(card: Card) -> Self {
        let mut children = Vec::new();
        if let Some(view) = card.view {
            children.push(view);
        }
        Self {
            background: card.color,
            image: card.image,
            corner_radius: CARD_RADIUS,
            children,
            test_id_value: card.id,
            bounds: Rect::default(),
        }
    }

    /// Override the corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Background color, if any.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }
}

impl Widget for CardView {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.biggest()
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        for child in &mut self.children {
            child.layout(bounds);
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.push_clip(self.bounds);
        if let Some(background) = self.background {
            canvas.fill_rounded_rect(
                self.bounds,
                CornerRadius::uniform(self.corner_radius),
                background,
            );
        }
        if let Some(image) = &self.image {
            canvas.draw_image(self.bounds, image);
        }
        for child in &self.children {
            child.paint(canvas);
        }
        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        for child in self.children.iter_mut().rev() {
            if let Some(msg) = child.event(event) {
                return Some(msg);
            }
        }
        None
    }

    fn update(&mut self, dt: f64) -> Option<Box<dyn Any + Send>> {
        for child in &mut self.children {
            if let Some(msg) = child.update(dt) {
                return Some(msg);
            }
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
        !self.children.is_empty()
    }

    fn test_id(&self) -> Option<&str> {
        Some(&self.test_id_value)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstack_core::{DrawCommand, RecordingCanvas};

    const CARD_BOUNDS: Rect = Rect::new(3.0, 3.0, 338.0, 158.0);

    #[test]
    fn test_color_only_card() {
        let mut view = CardView::from_card(Card::new("a", "A").color(Color::rgb(0.9, 0.3, 0.3)));
        view.layout(CARD_BOUNDS);

        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas);

        // Clip, plate, pop.
        assert_eq!(canvas.command_count(), 3);
        match &canvas.commands()[1] {
            DrawCommand::RoundedRect { rect, radius, .. } => {
                assert_eq!(*rect, CARD_BOUNDS);
                assert_eq!(radius.top_left, CARD_RADIUS);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_image_drawn_above_color() {
        let mut view = CardView::from_card(
            Card::new("b", "B")
                .color(Color::BLACK)
                .image("widgets/photo.png"),
        );
        view.layout(CARD_BOUNDS);

        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas);

        assert!(matches!(
            canvas.commands()[1],
            DrawCommand::RoundedRect { .. }
        ));
        match &canvas.commands()[2] {
            DrawCommand::Image { rect, source } => {
                assert_eq!(*rect, CARD_BOUNDS);
                assert_eq!(source, "widgets/photo.png");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_bare_card_paints_only_clip() {
        let mut view = CardView::from_card(Card::new("c", "C"));
        view.layout(CARD_BOUNDS);

        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 2); // PushClip + PopClip
    }

    #[test]
    fn test_test_id_is_card_id() {
        let view = CardView::from_card(Card::new("clock", "Clock"));
        assert_eq!(view.test_id(), Some("clock"));
        assert!(!view.is_interactive());
    }

    #[test]
    fn test_corner_radius_override() {
        let mut view = CardView::from_card(Card::new("e", "E").color(Color::WHITE))
            .corner_radius(10.0);
        view.layout(CARD_BOUNDS);

        let mut canvas = RecordingCanvas::new();
        view.paint(&mut canvas);
        match &canvas.commands()[1] {
            DrawCommand::RoundedRect { radius, .. } => assert_eq!(radius.top_left, 10.0),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_embedded_view_fills_card() {
        struct Probe;
        impl Widget for Probe {
            fn type_id(&self) -> TypeId {
                TypeId::of::<Self>()
            }
            fn measure(&self, constraints: Constraints) -> Size {
                constraints.biggest()
            }
            fn layout(&mut self, bounds: Rect) -> LayoutResult {
                LayoutResult {
                    size: bounds.size(),
                }
            }
            fn paint(&self, canvas: &mut dyn Canvas) {
                canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
            }
            fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
                Some(Box::new(42_u8))
            }
            fn children(&self) -> &[Box<dyn Widget>] {
                &[]
            }
            fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
                &mut []
            }
        }

        let mut view = CardView::from_card(Card::new("d", "D").view(Probe));
        view.layout(CARD_BOUNDS);
        assert!(view.is_interactive());

        // Events forward to the embedded view and bubble its message.
        let msg = view.event(&Event::MouseMove {
            position: cardstack_core::Point::new(0.0, 0.0),
        });
        assert_eq!(msg.unwrap().downcast_ref::<u8>(), Some(&42));
    }
}

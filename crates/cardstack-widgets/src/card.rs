//! Card descriptor for the stack.

use cardstack_core::{Color, Widget};
use serde::{Deserialize, Serialize};

/// Describes a single card in the stack.
///
/// The list of cards is ordered and owned by the caller; the stack never
/// reorders or mutates it.
#[derive(Serialize, Deserialize)]
pub struct Card {
    /// Stable identifier, unique within the stack
    pub id: String,
    /// Label shown under the stack while this card is active
    pub label: String,
    /// Background color of the card surface
    pub color: Option<Color>,
    /// Backend-resolved image source, drawn cover-fit behind the view
    pub image: Option<String>,
    /// Embedded custom widget rendered on top of color and image
    #[serde(skip)]
    pub view: Option<Box<dyn Widget>>,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: None,
            image: None,
            view: None,
        }
    }

    /// Set the background color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the image source.
    #[must_use]
    pub fn image(mut self, source: impl Into<String>) -> Self {
        self.image = Some(source.into());
        self
    }

    /// Embed a custom widget.
    pub fn view(mut self, widget: impl Widget + 'static) -> Self {
        self.view = Some(Box::new(widget));
        self
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("color", &self.color)
            .field("image", &self.image)
            .field("view", &self.view.as_ref().map(|_| "<widget>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_new() {
        let card = Card::new("clock", "Clock");
        assert_eq!(card.id, "clock");
        assert_eq!(card.label, "Clock");
        assert!(card.color.is_none());
        assert!(card.image.is_none());
        assert!(card.view.is_none());
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new("weather", "Weather")
            .color(Color::rgb(0.2, 0.4, 0.9))
            .image("widgets/weather.png");
        assert_eq!(card.color.unwrap().b, 0.9);
        assert_eq!(card.image.as_deref(), Some("widgets/weather.png"));
    }

    #[test]
    fn test_card_serde_skips_view() {
        let card = Card::new("calendar", "Calendar").color(Color::WHITE);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "calendar");
        assert_eq!(back.label, "Calendar");
        assert!(back.view.is_none());
    }

    #[test]
    fn test_card_debug_does_not_require_widget_debug() {
        let card = Card::new("a", "A");
        let debug = format!("{card:?}");
        assert!(debug.contains("Card"));
    }
}

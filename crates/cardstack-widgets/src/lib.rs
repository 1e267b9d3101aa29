//! Swipeable card stack widget.
//!
//! A vertically swipeable stack of cards modeled on a home-screen widget
//! stack: swiping expands a frosted shell behind the cards and reveals
//! per-card navigation dots, and the shell collapses again shortly after the
//! carousel settles.
//!
//! The exported component is [`CardStack`]; everything else is its
//! collaborators.

pub mod card;
pub mod carousel;
pub mod container;
pub mod controller;
pub mod dimensions;
pub mod dots;
pub mod shell;
pub mod stack;

pub use card::Card;
pub use carousel::{Carousel, ScrollBegan, ScrollEnded, SnappedToItem};
pub use container::CardView;
pub use controller::{
    ExpandChanged, ExpandMode, ExpansionController, IndexChanged, COLLAPSE_DELAY, EXPAND_SPRING,
};
pub use dimensions::StackDimensions;
pub use dots::{DotVisual, NavigationDots};
pub use shell::Shell;
pub use stack::{CardStack, FALLBACK_LABEL};

//! Swipeable card deck
//!
//! A [`Deck`] shows the card at its cursor as the active, draggable card
//! and the cards after it as a static stack. Releasing a drag past the
//! threshold flies the card out, reports it through the swipe callbacks
//! and advances to the next card; once every card is gone the deck
//! renders its "no more cards" view.

mod card;
mod cursor;
mod deck;
mod error;
mod options;

pub use card::{render_with, Card, CardRenderer, FnCardRenderer};
pub use cursor::DeckCursor;
pub use deck::{CardStyle, Deck, DeckFrame, RenderedCard};
pub use error::DeckError;
pub use options::{DeckOptions, MAX_FLY_OUT_DURATION_MILLIS};

pub use swipedeck_foundation::{CardTransform, GestureHandler, GestureState, SwipeDecision};

pub mod prelude {
    pub use crate::card::{render_with, Card, CardRenderer};
    pub use crate::deck::{CardStyle, Deck, DeckFrame, RenderedCard};
    pub use crate::error::DeckError;
    pub use crate::options::DeckOptions;
    pub use swipedeck_foundation::{CardTransform, GestureHandler, SwipeDecision};
}

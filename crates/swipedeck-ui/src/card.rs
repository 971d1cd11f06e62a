use std::fmt;
use std::hash::Hash;

/// An item in the deck. The deck only looks at its key.
pub trait Card {
    type Key: Clone + Eq + Hash + fmt::Debug;

    /// Stable key, unique within one deck.
    fn key(&self) -> Self::Key;
}

/// Produces the views the deck hands back each frame.
pub trait CardRenderer<C> {
    type View;

    fn render_card(&self, card: &C) -> Self::View;

    /// Shown in place of the stack once every card has been swiped.
    fn render_no_more_cards(&self) -> Self::View;
}

/// [`CardRenderer`] backed by two closures. See [`render_with`].
pub struct FnCardRenderer<F, E> {
    card: F,
    empty: E,
}

/// Build a renderer from a per-card closure and a fallback closure.
pub fn render_with<C, V, F, E>(card: F, empty: E) -> FnCardRenderer<F, E>
where
    F: Fn(&C) -> V,
    E: Fn() -> V,
{
    FnCardRenderer { card, empty }
}

impl<C, V, F, E> CardRenderer<C> for FnCardRenderer<F, E>
where
    F: Fn(&C) -> V,
    E: Fn() -> V,
{
    type View = V;

    fn render_card(&self, card: &C) -> V {
        (self.card)(card)
    }

    fn render_no_more_cards(&self) -> V {
        (self.empty)()
    }
}

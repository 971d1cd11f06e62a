use std::rc::Rc;

use rustc_hash::FxHashSet;
use swipedeck_core::{Owned, RuntimeHandle};
use swipedeck_foundation::{
    CardTransform, GestureController, GestureHandler, GestureState, OffsetTracker,
    SwipeCompletion, SwipeDecision,
};

use crate::{Card, CardRenderer, DeckCursor, DeckError, DeckOptions};

/// How the renderer should place one card this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardStyle {
    /// The draggable top card.
    Active(CardTransform),
    /// A static card `n` positions behind the active one, pushed down by
    /// `n * stack_offset`.
    Stacked { top_offset: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedCard<K, V> {
    pub key: K,
    /// Index in the full card sequence.
    pub position: usize,
    pub style: CardStyle,
    pub view: V,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckFrame<K, V> {
    /// Remaining cards, active card first. Dismissed cards are omitted.
    Cards(Vec<RenderedCard<K, V>>),
    /// No cards left: only the fallback view is shown.
    Exhausted(V),
}

impl<K, V> DeckFrame<K, V> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DeckFrame::Exhausted(_))
    }

    pub fn cards(&self) -> &[RenderedCard<K, V>] {
        match self {
            DeckFrame::Cards(cards) => cards,
            DeckFrame::Exhausted(_) => &[],
        }
    }

    pub fn active(&self) -> Option<&RenderedCard<K, V>> {
        self.cards().first()
    }
}

type CardCallback<C> = Box<dyn FnMut(&C) + 'static>;

struct DeckCallbacks<C> {
    on_swipe_right: CardCallback<C>,
    on_swipe_left: CardCallback<C>,
    on_exhausted: Box<dyn FnMut() + 'static>,
}

impl<C> Default for DeckCallbacks<C> {
    fn default() -> Self {
        Self {
            on_swipe_right: Box::new(|_| {}),
            on_swipe_left: Box::new(|_| {}),
            on_exhausted: Box::new(|| {}),
        }
    }
}

/// Bridges fly-out completion back into the deck's cursor and callbacks.
struct DeckCompletion<C> {
    cursor: Owned<DeckCursor<C>>,
    callbacks: Owned<DeckCallbacks<C>>,
}

impl<C: Card> SwipeCompletion for DeckCompletion<C> {
    fn swiped(&self, decision: SwipeDecision) {
        self.cursor.with(|cursor| match cursor.current() {
            Ok(card) => {
                log::debug!(
                    "card {:?} at {} swiped {decision:?}",
                    card.key(),
                    cursor.index()
                );
                self.callbacks.update(|callbacks| match decision {
                    SwipeDecision::Right => (callbacks.on_swipe_right)(card),
                    SwipeDecision::Left => (callbacks.on_swipe_left)(card),
                    SwipeDecision::None => {}
                });
            }
            Err(err) => log::warn!("swipe {decision:?} completed without a card: {err}"),
        });
    }

    fn advance(&self) {
        match self.cursor.update(|cursor| cursor.advance()) {
            Ok(index) => {
                let exhausted = self.cursor.with(|cursor| cursor.is_exhausted());
                log::debug!("deck cursor advanced to {index}; exhausted: {exhausted}");
                if exhausted {
                    self.callbacks.update(|callbacks| (callbacks.on_exhausted)());
                }
            }
            Err(err) => log::warn!("deck cursor not advanced: {err}"),
        }
    }
}

/// Swipeable stack over a fixed sequence of cards.
///
/// One [`GestureController`] (and its offset tracker) lives for the whole
/// deck and is re-bound to whichever card is at the cursor. Drive it by
/// forwarding gesture samples through [`GestureHandler`] and running the
/// runtime's frames; read [`Deck::frame`] whenever the host draws.
pub struct Deck<C: Card + 'static, R: CardRenderer<C>> {
    runtime: RuntimeHandle,
    cursor: Owned<DeckCursor<C>>,
    callbacks: Owned<DeckCallbacks<C>>,
    controller: GestureController,
    renderer: R,
    options: DeckOptions,
}

impl<C: Card + 'static, R: CardRenderer<C>> Deck<C, R> {
    /// An empty `cards` sequence is valid: the deck starts exhausted.
    pub fn new(
        runtime: RuntimeHandle,
        cards: Vec<C>,
        renderer: R,
        options: DeckOptions,
    ) -> Result<Self, DeckError> {
        options.validate()?;
        ensure_unique_keys(&cards)?;
        let mapping = options.rotation_mapping()?;

        let cursor = Owned::new(DeckCursor::new(cards));
        let callbacks = Owned::new(DeckCallbacks::default());
        let completion = Rc::new(DeckCompletion {
            cursor: cursor.clone(),
            callbacks: callbacks.clone(),
        });
        let tracker = OffsetTracker::new(runtime.clone(), mapping);
        let controller = GestureController::new(tracker, options.gesture_config(), completion);

        let len = cursor.with(|cursor| cursor.len());
        if len == 0 {
            log::debug!("deck created without cards; starting exhausted");
        } else {
            log::debug!("deck created with {len} cards");
        }

        Ok(Self {
            runtime,
            cursor,
            callbacks,
            controller,
            renderer,
            options,
        })
    }

    pub fn on_swipe_right(self, callback: impl FnMut(&C) + 'static) -> Self {
        self.callbacks
            .update(|callbacks| callbacks.on_swipe_right = Box::new(callback));
        self
    }

    pub fn on_swipe_left(self, callback: impl FnMut(&C) + 'static) -> Self {
        self.callbacks
            .update(|callbacks| callbacks.on_swipe_left = Box::new(callback));
        self
    }

    /// Called once, when the swipe of the last card completes.
    pub fn on_exhausted(self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks
            .update(|callbacks| callbacks.on_exhausted = Box::new(callback));
        self
    }

    pub fn options(&self) -> &DeckOptions {
        &self.options
    }

    pub fn index(&self) -> usize {
        self.cursor.with(|cursor| cursor.index())
    }

    pub fn len(&self) -> usize {
        self.cursor.with(|cursor| cursor.len())
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.with(|cursor| cursor.is_empty())
    }

    pub fn remaining(&self) -> usize {
        self.cursor.with(|cursor| cursor.remaining())
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.with(|cursor| cursor.is_exhausted())
    }

    /// Run `f` on the active card.
    pub fn with_current<T>(&self, f: impl FnOnce(&C) -> T) -> Result<T, DeckError> {
        self.cursor.with(|cursor| cursor.current().map(f))
    }

    pub fn current_key(&self) -> Option<C::Key> {
        self.with_current(|card| card.key()).ok()
    }

    pub fn gesture_state(&self) -> GestureState {
        self.controller.state()
    }

    /// True while the active card is flying out or springing back.
    pub fn is_settling(&self) -> bool {
        self.controller.is_settling()
    }

    /// Style of the active card, or `None` once exhausted.
    pub fn active_style(&self) -> Option<CardTransform> {
        if self.is_exhausted() {
            None
        } else {
            Some(self.controller.tracker().layout_style())
        }
    }

    /// Project the deck for the renderer.
    pub fn frame(&self) -> DeckFrame<C::Key, R::View> {
        self.cursor.with(|cursor| {
            if cursor.is_exhausted() {
                return DeckFrame::Exhausted(self.renderer.render_no_more_cards());
            }

            let index = cursor.index();
            let active = self.controller.tracker().layout_style();
            let cards = cursor
                .cards()
                .iter()
                .enumerate()
                .skip(index)
                .map(|(position, card)| {
                    let style = if position == index {
                        CardStyle::Active(active)
                    } else {
                        CardStyle::Stacked {
                            top_offset: self.options.stack_offset * (position - index) as f32,
                        }
                    };
                    RenderedCard {
                        key: card.key(),
                        position,
                        style,
                        view: self.renderer.render_card(card),
                    }
                })
                .collect();
            DeckFrame::Cards(cards)
        })
    }
}

impl<C: Card + 'static, R: CardRenderer<C>> GestureHandler for Deck<C, R> {
    /// Refused only when there is no active card to bind the gesture to.
    fn on_gesture_start(&mut self) -> bool {
        self.runtime.assert_ui_thread();
        if self.is_exhausted() {
            log::debug!("gesture start refused: deck is exhausted");
            return false;
        }
        self.controller.on_gesture_start()
    }

    fn on_gesture_move(&mut self, dx: f32, dy: f32) {
        self.runtime.assert_ui_thread();
        if self.is_exhausted() {
            return;
        }
        self.controller.on_gesture_move(dx, dy);
    }

    fn on_gesture_release(&mut self, dx: f32, dy: f32) -> Option<SwipeDecision> {
        self.runtime.assert_ui_thread();
        if self.is_exhausted() {
            log::debug!("release ({dx}, {dy}) dropped: no active card");
            return None;
        }
        self.controller.on_gesture_release(dx, dy)
    }
}

fn ensure_unique_keys<C: Card>(cards: &[C]) -> Result<(), DeckError> {
    let mut seen = FxHashSet::default();
    for (index, card) in cards.iter().enumerate() {
        let key = card.key();
        if !seen.insert(key.clone()) {
            return Err(DeckError::DuplicateKey {
                index,
                key: format!("{key:?}"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/deck_tests.rs"]
mod tests;

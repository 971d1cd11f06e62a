use crate::DeckError;

/// Position of the active card in a fixed sequence.
///
/// `index` only grows, one step per accepted swipe, and stops at
/// `len`, which is the exhausted state.
#[derive(Debug, Clone)]
pub struct DeckCursor<C> {
    cards: Vec<C>,
    index: usize,
}

impl<C> DeckCursor<C> {
    pub fn new(cards: Vec<C>) -> Self {
        Self { cards, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }

    pub fn is_exhausted(&self) -> bool {
        self.index == self.cards.len()
    }

    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    pub fn current(&self) -> Result<&C, DeckError> {
        self.cards
            .get(self.index)
            .ok_or(DeckError::NotAvailable { index: self.index })
    }

    /// Step to the next card, returning the new index.
    pub fn advance(&mut self) -> Result<usize, DeckError> {
        if self.is_exhausted() {
            return Err(DeckError::OutOfRange {
                index: self.index,
                len: self.cards.len(),
            });
        }
        self.index += 1;
        Ok(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_to_exhaustion() {
        let mut cursor = DeckCursor::new(vec!["a", "b"]);
        assert_eq!(cursor.current(), Ok(&"a"));
        assert_eq!(cursor.remaining(), 2);

        assert_eq!(cursor.advance(), Ok(1));
        assert_eq!(cursor.current(), Ok(&"b"));
        assert!(!cursor.is_exhausted());

        assert_eq!(cursor.advance(), Ok(2));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn exhausted_cursor_refuses_to_move() {
        let mut cursor = DeckCursor::new(vec![1]);
        cursor.advance().expect("one card to advance past");

        assert_eq!(
            cursor.advance(),
            Err(DeckError::OutOfRange { index: 1, len: 1 })
        );
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.current(), Err(DeckError::NotAvailable { index: 1 }));
    }

    #[test]
    fn empty_sequence_starts_exhausted() {
        let cursor: DeckCursor<u8> = DeckCursor::new(Vec::new());
        assert!(cursor.is_empty());
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.current(), Err(DeckError::NotAvailable { index: 0 }));
    }

    #[test]
    fn index_never_decreases() {
        let mut cursor = DeckCursor::new((0..5).collect::<Vec<_>>());
        let mut previous = cursor.index();
        for _ in 0..8 {
            let _ = cursor.advance();
            assert!(cursor.index() >= previous);
            assert!(cursor.index() <= cursor.len());
            previous = cursor.index();
        }
        assert_eq!(cursor.index(), 5);
    }
}

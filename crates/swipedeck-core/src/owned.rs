use std::cell::RefCell;
use std::rc::Rc;

/// Deck state shared between the deck and the continuations it schedules.
///
/// Every clone points at the same value. Access is closure-scoped so a
/// borrow never outlives the call that needs it.
pub struct Owned<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for Owned<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Owned<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_see_each_others_updates() {
        let cursor = Owned::new(vec!['a', 'b']);
        let continuation = cursor.clone();

        let popped = continuation.update(|cards| cards.pop());

        assert_eq!(popped, Some('b'));
        assert_eq!(cursor.with(|cards| cards.len()), 1);
    }

    #[test]
    fn nested_reads_share_the_borrow() {
        let count = Owned::new(3u32);
        let doubled = count.with(|outer| count.with(|inner| outer + inner));
        assert_eq!(doubled, 6);
    }
}

// Position within the home card stack; wraps back to the first card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    pub index: usize,
    pub len: usize,
    /// Bumped on every advance, even when the index wraps onto itself.
    pub turn: u64,
}

impl Deck {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            turn: 0,
        }
    }

    pub fn current(&self) -> Option<usize> {
        (self.index < self.len).then_some(self.index)
    }

    /// Like, nope and a committed swipe all land here.
    pub fn advance(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            turn: self.turn + 1,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around() {
        let d = Deck::new(3);
        assert_eq!(d.current(), Some(0));
        let d = d.advance().advance();
        assert_eq!(d.current(), Some(2));
        assert_eq!(d.advance().current(), Some(0));
    }

    #[test]
    fn single_card_deck_still_moves_to_a_new_turn() {
        let d = Deck::new(1);
        let next = d.advance();
        assert_eq!(next.current(), Some(0));
        assert_ne!(next.turn, d.turn);
    }

    #[test]
    fn empty_deck_is_inert() {
        let d = Deck::new(0);
        assert_eq!(d.current(), None);
        assert_eq!(d.advance(), d);
    }
}

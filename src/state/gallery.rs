// Which image of a card is showing. Prev/next wrap; dots jump directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageCursor {
    pub index: usize,
    pub len: usize,
}

impl ImageCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        Self { index, ..self }
    }

    /// Out-of-range indices are ignored.
    pub fn select(self, index: usize) -> Self {
        if index < self.len { Self { index, ..self } } else { self }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        let c = ImageCursor::new(3);
        assert_eq!(c.prev().index, 2);
        assert_eq!(c.next().next().next().index, 0);
        assert_eq!(c.select(2).next().index, 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let c = ImageCursor::new(3).select(1);
        assert_eq!(c.select(7).index, 1);
        assert!(c.is_active(1));
        assert!(!c.is_active(0));
    }

    #[test]
    fn empty_gallery_never_moves() {
        let c = ImageCursor::new(0);
        assert_eq!(c.next(), c);
        assert_eq!(c.prev(), c);
        assert!(!c.is_active(0));
    }
}

/// Which of `len` focusable items currently has keyboard focus. Wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    index: usize,
    len: usize,
}

impl FocusRing {
    pub fn new(len: usize) -> Self {
        FocusRing { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is(&self, i: usize) -> bool {
        self.index == i
    }

    pub fn set(&mut self, i: usize) {
        if i < self.len {
            self.index = i;
        }
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index >= self.len - 1 { 0 } else { self.index + 1 };
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut ring = FocusRing::new(3);
        ring.previous();
        assert_eq!(ring.index(), 2);
        ring.next();
        assert_eq!(ring.index(), 0);
        ring.next();
        ring.next();
        assert!(ring.is(2));
    }

    #[test]
    fn test_set_ignores_out_of_range() {
        let mut ring = FocusRing::new(2);
        ring.set(1);
        ring.set(5);
        assert_eq!(ring.index(), 1);
    }

    #[test]
    fn test_empty_ring_is_inert() {
        let mut ring = FocusRing::new(0);
        ring.next();
        ring.previous();
        assert_eq!(ring.index(), 0);
    }
}

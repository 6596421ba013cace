use std::ops::Range;

/// A byte offset range into the text a diagnostic is reported against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            start: range.start as u32,
            end: range.end as u32,
        }
    }

    /// Shift a span that was computed relative to a sub-slice starting at `base`.
    pub fn offset(self, base: usize) -> Span {
        Span {
            start: self.start + base as u32,
            end: self.end + base as u32,
        }
    }

    pub fn range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let a = Span::new(2, 5).offset(10);
        assert_eq!(a, Span::new(12, 15));
        assert_eq!(a.range(), 12..15);
    }

    #[test]
    fn test_from_range() {
        assert_eq!(Span::from_range(3..4), Span::new(3, 4));
        assert_eq!(Span::default().range(), 0..0);
    }
}

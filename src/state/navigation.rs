//! Navigation-related state types.

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    /// Scrolling the page and using the navigation bar.
    Page,
    /// Editing the inquiry form overlay.
    Form,
}

/// Selected entry of the navigation bar, separate from the active section.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct LinkCursor {
    index: usize,
}

impl LinkCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.index = index;
        }
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_cursor_wraps() {
        let mut cursor = LinkCursor::default();
        cursor.previous(5);
        assert_eq!(cursor.index(), 4);
        cursor.next(5);
        assert_eq!(cursor.index(), 0);
        cursor.select(7, 5);
        assert_eq!(cursor.index(), 0);
        cursor.select(3, 5);
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn test_empty_link_bar() {
        let mut cursor = LinkCursor::default();
        cursor.next(0);
        cursor.previous(0);
        assert_eq!(cursor.index(), 0);
    }
}

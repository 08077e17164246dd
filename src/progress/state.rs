//! The three progress values

/// Progress values wrap modulo this, so 101 aliases to 0 while 100 stays 100
pub const PROGRESS_MODULUS: u32 = 101;

/// Wrap a raw progress value into `0..=100`
pub fn wrap_progress(value: u32) -> u32 {
    value % PROGRESS_MODULUS
}

/// Left lobe, right lobe and bottom path progress, each in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProgressState {
    left: u32,
    right: u32,
    bottom: u32,
}

impl ProgressState {
    pub fn new(left: u32, right: u32, bottom: u32) -> Self {
        Self {
            left: wrap_progress(left),
            right: wrap_progress(right),
            bottom: wrap_progress(bottom),
        }
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    pub fn set_left(&mut self, value: u32) {
        self.left = wrap_progress(value);
    }

    pub fn set_right(&mut self, value: u32) {
        self.right = wrap_progress(value);
    }

    pub fn set_bottom(&mut self, value: u32) {
        self.bottom = wrap_progress(value);
    }

    pub fn with_left(mut self, value: u32) -> Self {
        self.set_left(value);
        self
    }

    pub fn with_right(mut self, value: u32) -> Self {
        self.set_right(value);
        self
    }

    pub fn with_bottom(mut self, value: u32) -> Self {
        self.set_bottom(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_hundred() {
        assert_eq!(wrap_progress(100), 100);
        assert_eq!(wrap_progress(101), 0);
        assert_eq!(wrap_progress(202), 0);
        assert_eq!(wrap_progress(150), 49);
    }

    #[test]
    fn test_setters_wrap() {
        let mut p = ProgressState::new(101, 50, 303);
        assert_eq!((p.left(), p.right(), p.bottom()), (0, 50, 0));
        p.set_right(102);
        assert_eq!(p.right(), 1);
        assert_eq!(p.with_bottom(100).bottom(), 100);
    }
}

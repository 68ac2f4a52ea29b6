//! Cart sidebar visibility.

/// Whether the cart sidebar is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartPanel {
    open: bool,
}

impl CartPanel {
    /// Show the sidebar. Returns `true` if it was hidden.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Hide the sidebar. Returns `true` if it was showing.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_report_changes() {
        let mut panel = CartPanel::default();
        assert!(!panel.is_open());
        assert!(panel.open());
        assert!(!panel.open());
        assert!(panel.close());
        assert!(!panel.close());
    }
}

/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: split pane, forms stack vertically
    Compact,
    /// 60-99 cols: half-screen
    Normal,
    /// 100+ cols: full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }

    /// Product table shows the Description column
    pub fn shows_description(&self) -> bool {
        self.at_least(Breakpoint::Normal)
    }

    /// Product table shows the Thumbnail column
    pub fn shows_thumbnail(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }

    /// Create and edit forms sit side by side
    pub fn forms_side_by_side(&self) -> bool {
        self.at_least(Breakpoint::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(300), Breakpoint::Wide);
    }

    #[test]
    fn narrow_terminals_drop_columns() {
        let compact = Breakpoint::Compact;
        assert!(!compact.shows_description());
        assert!(!compact.shows_thumbnail());
        assert!(!compact.forms_side_by_side());

        let normal = Breakpoint::Normal;
        assert!(normal.shows_description());
        assert!(!normal.shows_thumbnail());

        assert!(Breakpoint::Wide.shows_thumbnail());
    }
}

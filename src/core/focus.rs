//! # Focus Controller
//!
//! Which of the three form regions receives keyboard input.
//!
//! ```text
//!        advance            advance
//! ProjectName ──► TeamName ──► ComponentList
//!     ▲                             │
//!     └─────────── advance ─────────┘
//! ```
//!
//! `retreat` walks the same cycle backwards. Both directions wrap, so there
//! are no error states.

/// Number of focusable regions.
const TARGET_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    ProjectName,
    TeamName,
    ComponentList,
}

impl FocusTarget {
    pub fn index(self) -> usize {
        match self {
            FocusTarget::ProjectName => 0,
            FocusTarget::TeamName => 1,
            FocusTarget::ComponentList => 2,
        }
    }

    /// Maps any index onto the cycle (`index mod 3`).
    pub fn from_index(index: usize) -> Self {
        match index % TARGET_COUNT {
            0 => FocusTarget::ProjectName,
            1 => FocusTarget::TeamName,
            _ => FocusTarget::ComponentList,
        }
    }

    pub fn is_text_field(self) -> bool {
        !matches!(self, FocusTarget::ComponentList)
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusTarget::ProjectName => "Project name",
            FocusTarget::TeamName => "Team name",
            FocusTarget::ComponentList => "Components",
        }
    }
}

/// A transition performed by [`Focus::advance`] or [`Focus::retreat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    pub from: FocusTarget,
    pub to: FocusTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    index: usize,
}

impl Focus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(target: FocusTarget) -> Self {
        Self {
            index: target.index(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> FocusTarget {
        FocusTarget::from_index(self.index)
    }

    pub fn advance(&mut self) -> FocusChange {
        self.move_to((self.index + 1) % TARGET_COUNT)
    }

    pub fn retreat(&mut self) -> FocusChange {
        self.move_to((self.index + TARGET_COUNT - 1) % TARGET_COUNT)
    }

    fn move_to(&mut self, index: usize) -> FocusChange {
        let from = self.current();
        self.index = index;
        FocusChange {
            from,
            to: self.current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TARGETS: [FocusTarget; 3] = [
        FocusTarget::ProjectName,
        FocusTarget::TeamName,
        FocusTarget::ComponentList,
    ];

    #[test]
    fn test_starts_on_project_name() {
        assert_eq!(Focus::new().current(), FocusTarget::ProjectName);
        assert_eq!(Focus::new().index(), 0);
    }

    #[test]
    fn test_advance_cycles_forward() {
        let mut focus = Focus::new();
        assert_eq!(focus.advance().to, FocusTarget::TeamName);
        assert_eq!(focus.advance().to, FocusTarget::ComponentList);
        let change = focus.advance();
        assert_eq!(change.from, FocusTarget::ComponentList);
        assert_eq!(change.to, FocusTarget::ProjectName);
    }

    #[test]
    fn test_retreat_wraps_to_last_target() {
        let mut focus = Focus::new();
        let change = focus.retreat();
        assert_eq!(change.from, FocusTarget::ProjectName);
        assert_eq!(change.to, FocusTarget::ComponentList);
        assert_eq!(focus.index(), 2);
    }

    #[test]
    fn test_three_steps_return_to_start() {
        for start in ALL_TARGETS {
            let mut focus = Focus::starting_at(start);
            for _ in 0..3 {
                focus.advance();
            }
            assert_eq!(focus.current(), start);

            for _ in 0..3 {
                focus.retreat();
            }
            assert_eq!(focus.current(), start);
        }
    }

    #[test]
    fn test_retreat_undoes_advance() {
        for start in ALL_TARGETS {
            let mut focus = Focus::starting_at(start);
            focus.advance();
            focus.retreat();
            assert_eq!(focus.current(), start);
        }
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(FocusTarget::from_index(3), FocusTarget::ProjectName);
        assert_eq!(FocusTarget::from_index(5), FocusTarget::ComponentList);
        for target in ALL_TARGETS {
            assert_eq!(FocusTarget::from_index(target.index()), target);
        }
    }

    #[test]
    fn test_only_list_is_not_a_text_field() {
        assert!(FocusTarget::ProjectName.is_text_field());
        assert!(FocusTarget::TeamName.is_text_field());
        assert!(!FocusTarget::ComponentList.is_text_field());
    }
}

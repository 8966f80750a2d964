//! Start menu selection state

/// Entries on the start menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::Start, MenuItem::Exit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Start => "Start Game",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Navigation input understood by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Confirm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    selected: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one input; returns the chosen item when the selection is confirmed
    pub fn handle(&mut self, input: MenuInput) -> Option<MenuItem> {
        match input {
            MenuInput::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            MenuInput::Down => {
                self.selected = (self.selected + 1).min(MenuItem::ALL.len() - 1);
                None
            }
            MenuInput::Confirm => Some(self.selected_item()),
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }
}

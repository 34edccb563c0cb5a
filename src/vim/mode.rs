/// Editing mode of the form, vim style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VimMode {
    #[default]
    Normal,
    Insert,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction {
    EnterInsert,
    EnterCommand,
    Escape,
    Execute,
}

impl VimMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            VimMode::Normal => "NORMAL",
            VimMode::Insert => "INSERT",
            VimMode::Command => "COMMAND",
        }
    }

    /// Apply a mode action. Actions that make no sense in the current mode leave it unchanged.
    pub fn transition(self, action: ModeAction) -> VimMode {
        use ModeAction::*;
        use VimMode::*;

        match (self, action) {
            (Normal, EnterInsert) => Insert,
            (Normal, EnterCommand) => Command,
            (Insert | Command, Escape) | (Command, Execute) => Normal,
            (mode, _) => mode,
        }
    }
}

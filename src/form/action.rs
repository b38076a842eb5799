use std::fmt;

/// Menu entries of the interactive form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Generate,
    ChangeOperation,
    ChangeDialect,
    EditInput,
    LoadFile,
    SaveOutput,
    ShowConfig,
    Quit,
}

impl FormAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generate => "Generate",
            Self::ChangeOperation => "Change operation",
            Self::ChangeDialect => "Change target database",
            Self::EditInput => "Edit input",
            Self::LoadFile => "Load .java / .sql file",
            Self::SaveOutput => "Save output",
            Self::ShowConfig => "Show configuration",
            Self::Quit => "Quit",
        }
    }
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Menu entries available in the current state.
///
/// The target database entry is hidden for operations that ignore it, and
/// saving is offered only once there is output to save.
pub fn menu(needs_dialect: bool, has_output: bool) -> Vec<FormAction> {
    let mut actions = vec![FormAction::Generate, FormAction::ChangeOperation];
    if needs_dialect {
        actions.push(FormAction::ChangeDialect);
    }
    actions.extend([FormAction::EditInput, FormAction::LoadFile]);
    if has_output {
        actions.push(FormAction::SaveOutput);
    }
    actions.extend([FormAction::ShowConfig, FormAction::Quit]);
    actions
}

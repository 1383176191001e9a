//! Dialog state
//!
//! Which popup is open and the data it is editing. At most one is expected
//! to be open at a time; key handling checks them in a fixed priority order.

pub use crate::ui::components::complete_dialog::CompleteDialogData;
pub use crate::ui::components::confirm_dialog::ConfirmType;
pub use crate::ui::components::household_selector::HouseholdSelectorData;
pub use crate::ui::components::new_task_dialog::NewTaskData;

#[derive(Debug, Default)]
pub struct DialogState {
    pub show_help: bool,
    pub household_selector: Option<HouseholdSelectorData>,
    pub complete_dialog: Option<CompleteDialogData>,
    pub new_task_dialog: Option<NewTaskData>,
    pub confirm_dialog: Option<ConfirmType>,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close_all(&mut self) {
        self.show_help = false;
        self.household_selector = None;
        self.complete_dialog = None;
        self.new_task_dialog = None;
        self.confirm_dialog = None;
    }

    pub fn has_active_dialog(&self) -> bool {
        self.show_help
            || self.household_selector.is_some()
            || self.complete_dialog.is_some()
            || self.new_task_dialog.is_some()
            || self.confirm_dialog.is_some()
    }
}

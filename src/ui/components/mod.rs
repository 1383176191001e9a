pub mod complete_dialog;
pub mod confirm_dialog;
pub mod dialog_utils;
pub mod empty_state;
pub mod footer;
pub mod fresh_list;
pub mod header;
pub mod help_panel;
pub mod household_selector;
pub mod leaderboard;
pub mod new_task_dialog;
pub mod task_queue;
pub mod toast;

pub mod clear_history;
pub mod create_log;
pub mod delete_log;
pub mod get_day;
pub mod get_effective_goal;
pub mod get_history;
pub mod get_logs;
pub mod remove_history_item;
pub mod set_goal;
pub mod update_log;

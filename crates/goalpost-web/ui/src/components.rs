mod achievement_card;
mod deadline_list;
mod empty_state;
mod goal_card;
mod milestone_card;
mod nav_bar;
mod priority_badge;
mod progress_bar;
mod stat_card;
mod status_badge;
mod tab_bar;
mod task_composer;
mod task_row;
mod toast_stack;

pub use achievement_card::AchievementCard;
pub use deadline_list::DeadlineList;
pub use empty_state::EmptyState;
pub use goal_card::GoalCard;
pub use milestone_card::MilestoneCard;
pub use nav_bar::NavBar;
pub use priority_badge::PriorityBadge;
pub use progress_bar::ProgressBar;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use tab_bar::{
  TabBar,
  TabItem
};
pub use task_composer::TaskComposer;
pub use task_row::TaskRow;
pub use toast_stack::ToastStack;

pub(crate) fn format_date(
  date: Option<chrono::NaiveDate>
) -> String {
  date
    .map(|date| {
      date.format("%b %-d, %Y").to_string()
    })
    .unwrap_or_else(|| "—".to_string())
}

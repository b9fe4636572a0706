use goalpost_shared::progress::goal_progress;
use goalpost_shared::stats::{
  dashboard_stats,
  recent_goals,
  upcoming_deadlines
};
use yew::{
  Html,
  classes,
  function_component,
  html
};
use yew_router::prelude::Link;

use super::{
  render_load_state,
  use_goal_list
};
use crate::app::config::use_config;
use crate::app::routes::Route;
use crate::app::session::use_session;
use crate::app::theme::use_theme;
use crate::app::today;
use crate::components::{
  DeadlineList,
  EmptyState,
  ProgressBar,
  StatCard,
  StatusBadge
};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
  let theme = use_theme();
  let config = use_config();
  let session = use_session();
  let list = use_goal_list();

  if let Some(placeholder) =
    render_load_state(&list.load)
  {
    return placeholder;
  }

  let today = today();
  let stats =
    dashboard_stats(&list.goals, today);
  let recent = recent_goals(
    &list.goals,
    config.dashboard.recent_goal_limit
  );
  let deadlines = upcoming_deadlines(
    &list.goals,
    today,
    config.dashboard.due_soon_days
  );
  let panel = classes!(
    "panel",
    theme.is_dark().then_some("panel-dark")
  );

  html! {
      <section class="page dashboard">
          <div class="page-head">
              <h1>{ format!("Hello, {}", session.display_name()) }</h1>
              <Link<Route> to={Route::Goals} classes="btn ok">{ "View goals" }</Link<Route>>
          </div>
          <div class="stat-grid">
              <StatCard label="Goals" value={stats.total_goals.to_string()}
                  hint={format!("{} active, {} on hold", stats.active_goals, stats.on_hold_goals)} />
              <StatCard label="Completed" value={stats.completed_goals.to_string()}
                  hint={format!("{}% completion rate", stats.completion_rate)} accent="accent-ok" />
              <StatCard label="Average progress" value={format!("{}%", stats.average_progress)} />
              <StatCard label="Tasks done" value={format!("{}/{}", stats.completed_tasks, stats.total_tasks)} />
              <StatCard label="Overdue" value={stats.overdue_goals.to_string()}
                  accent={(stats.overdue_goals > 0).then_some("accent-danger")} />
          </div>
          <div class="dashboard-columns">
              <div class={panel.clone()}>
                  <h2>{ "Recent goals" }</h2>
                  {
                      if recent.is_empty() {
                          html! {
                              <EmptyState title="No goals yet" detail="Create your first goal to get started.">
                                  <Link<Route> to={Route::Goals} classes="btn">{ "Create a goal" }</Link<Route>>
                              </EmptyState>
                          }
                      } else {
                          html! {
                              <ul class="recent-goals">
                                  {
                                      for recent.iter().map(|goal| html! {
                                          <li key={goal.id.clone()}>
                                              <div class="recent-goal-head">
                                                  <Link<Route> to={Route::GoalDetail { id: goal.id.clone() }}>
                                                      { &goal.title }
                                                  </Link<Route>>
                                                  <StatusBadge status={goal.status} />
                                              </div>
                                              <ProgressBar value={goal_progress(goal)} compact={true} />
                                          </li>
                                      })
                                  }
                              </ul>
                          }
                      }
                  }
              </div>
              <div class={panel}>
                  <h2>{ format!("Due in the next {} days", config.dashboard.due_soon_days) }</h2>
                  <DeadlineList deadlines={deadlines} />
              </div>
          </div>
      </section>
  }
}

use goalpost_shared::stats::Deadline;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};
use yew_router::prelude::Link;

use super::{
  EmptyState,
  PriorityBadge,
  format_date
};
use crate::app::routes::Route;

#[derive(Properties, PartialEq)]
pub struct DeadlineListProps {
  pub deadlines: Vec<Deadline>
}

fn relative_label(days_left: i64) -> String {
  match days_left {
    | 0 => "today".to_string(),
    | 1 => "tomorrow".to_string(),
    | days if days < 0 => {
      format!("{} days ago", -days)
    }
    | days => format!("in {days} days")
  }
}

#[function_component(DeadlineList)]
pub fn deadline_list(
  props: &DeadlineListProps
) -> Html {
  if props.deadlines.is_empty() {
    return html! {
        <EmptyState title="Nothing due soon" detail="Upcoming goal, milestone and task dates show up here." />
    };
  }

  html! {
      <ul class="deadline-list">
          {
              for props.deadlines.iter().cloned().map(|deadline| html! {
                  <li class={classes!("deadline", deadline.overdue.then_some("overdue"))}>
                      <span class="badge">{ deadline.kind.label() }</span>
                      <Link<Route> to={Route::GoalDetail { id: deadline.goal_id.clone() }} classes="deadline-title">
                          { deadline.title.clone() }
                      </Link<Route>>
                      <PriorityBadge priority={deadline.priority} />
                      <span class="deadline-date" title={format_date(Some(deadline.due))}>
                          { relative_label(deadline.days_left) }
                      </span>
                  </li>
              })
          }
      </ul>
  }
}

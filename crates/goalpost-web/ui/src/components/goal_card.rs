use goalpost_shared::Goal;
use goalpost_shared::progress::{
  goal_progress,
  goal_task_counts
};
use goalpost_shared::stats::days_remaining;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};
use yew_router::prelude::Link;

use super::{
  PriorityBadge,
  ProgressBar,
  StatusBadge,
  format_date
};
use crate::app::routes::Route;
use crate::app::theme::use_theme;
use crate::app::today;

#[derive(Properties, PartialEq)]
pub struct GoalCardProps {
  pub goal:      Goal,
  pub on_edit:   Callback<Goal>,
  pub on_delete: Callback<Goal>
}

fn deadline_hint(goal: &Goal) -> Option<String> {
  if !goal.status.is_open() {
    return None;
  }
  let end = goal.end_date?;
  let days = days_remaining(end, today());
  Some(match days {
    | overdue if overdue < 0 => {
      format!("{} days overdue", -overdue)
    }
    | 0 => "due today".to_string(),
    | 1 => "1 day left".to_string(),
    | _ => format!("{days} days left")
  })
}

#[function_component(GoalCard)]
pub fn goal_card(
  props: &GoalCardProps
) -> Html {
  let theme = use_theme();
  let goal = &props.goal;
  let progress = goal_progress(goal);
  let counts = goal_task_counts(goal);
  let hint = deadline_hint(goal);
  let overdue = hint
    .as_deref()
    .is_some_and(|hint| hint.ends_with("overdue"));

  let on_edit = {
    let on_edit = props.on_edit.clone();
    let goal = goal.clone();
    Callback::from(move |_: MouseEvent| {
      on_edit.emit(goal.clone());
    })
  };
  let on_delete = {
    let on_delete = props.on_delete.clone();
    let goal = goal.clone();
    Callback::from(move |_: MouseEvent| {
      on_delete.emit(goal.clone());
    })
  };

  html! {
      <div class={classes!("panel", "goal-card", theme.is_dark().then_some("panel-dark"))}>
          <div class="goal-card-head">
              <Link<Route> to={Route::GoalDetail { id: goal.id.clone() }} classes="goal-title">
                  { &goal.title }
              </Link<Route>>
              <div class="badges">
                  <StatusBadge status={goal.status} />
                  <PriorityBadge priority={goal.priority} />
              </div>
          </div>
          {
              if let Some(category) = &goal.category {
                  html! { <div class="goal-category">{ category }</div> }
              } else {
                  html! {}
              }
          }
          {
              if goal.description.trim().is_empty() {
                  html! {}
              } else {
                  html! { <div class="goal-description">{ &goal.description }</div> }
              }
          }
          <ProgressBar value={progress} />
          <div class="goal-meta">
              <span>{ format!("{} → {}", format_date(goal.start_date), format_date(goal.end_date)) }</span>
              {
                  if counts.total > 0 {
                      html! { <span>{ format!("{}/{} tasks", counts.completed, counts.total) }</span> }
                  } else {
                      html! {}
                  }
              }
              {
                  if let Some(hint) = hint {
                      html! { <span class={classes!("deadline-hint", overdue.then_some("overdue"))}>{ hint }</span> }
                  } else {
                      html! {}
                  }
              }
          </div>
          <div class="actions">
              <button class="btn" type="button" onclick={on_edit}>{ "Edit" }</button>
              <button class="btn danger" type="button" onclick={on_delete}>{ "Delete" }</button>
          </div>
      </div>
  }
}

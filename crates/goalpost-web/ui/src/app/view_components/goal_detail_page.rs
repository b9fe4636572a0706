use goalpost_shared::progress::{
  derived_status,
  goal_progress,
  goal_task_counts
};
use goalpost_shared::{
  Goal,
  GoalPatch,
  Milestone,
  MilestonePatch,
  Task,
  TaskCreate,
  TaskPatch
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  UseReducerDispatcher,
  classes,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};
use yew_router::prelude::{
  Link,
  use_navigator
};

use super::confirm_modal::ConfirmModal;
use super::goal_modal::{
  GoalModal,
  GoalModalState
};
use super::milestone_modal::{
  MilestoneModal,
  MilestoneModalState
};
use super::render_load_state;
use crate::api::{
  ApiClient,
  ApiError
};
use crate::app::routes::Route;
use crate::app::session::{
  SessionContext,
  report_api_error,
  use_api,
  use_session
};
use crate::app::state::{
  GoalDetailAction,
  GoalDetailState
};
use crate::app::theme::use_theme;
use crate::app::toast::{
  Toaster,
  use_toaster
};
use crate::app::ui_debug;
use crate::components::{
  EmptyState,
  MilestoneCard,
  PriorityBadge,
  ProgressBar,
  StatusBadge,
  format_date
};

#[derive(Properties, PartialEq)]
pub struct GoalDetailPageProps {
  pub id: String
}

#[derive(Clone, PartialEq)]
enum PendingDelete {
  Goal(Goal),
  Milestone(Milestone)
}

/// Goal with milestones and tasks filled in,
/// fetching the nested lists when the goal
/// payload does not embed them.
async fn load_goal(
  api: &ApiClient,
  id: &str
) -> Result<Goal, ApiError> {
  let mut goal = api.get_goal(id).await?;
  if goal.milestones.is_empty() {
    goal.milestones =
      api.list_milestones(id).await?;
  }
  for milestone in &mut goal.milestones {
    if milestone.goal_id.is_empty() {
      milestone.goal_id = goal.id.clone();
    }
    if milestone.tasks.is_empty() {
      milestone.tasks =
        api.list_tasks(&milestone.id).await?;
    }
    for task in &mut milestone.tasks {
      if task.milestone_id.is_empty() {
        task.milestone_id =
          milestone.id.clone();
      }
    }
  }
  Ok(goal)
}

/// Everything an async handler needs to
/// talk to the backend and report back.
#[derive(Clone)]
struct Ctx {
  api:        ApiClient,
  session:    SessionContext,
  toaster:    Toaster,
  dispatcher: UseReducerDispatcher<GoalDetailState>
}

impl Ctx {
  fn fail(&self, action: &str, error: &ApiError) {
    report_api_error(
      &self.session,
      &self.toaster,
      action,
      error
    );
  }
}

#[function_component(GoalDetailPage)]
pub fn goal_detail_page(
  props: &GoalDetailPageProps
) -> Html {
  let theme = use_theme();
  let api = use_api();
  let session = use_session();
  let toaster = use_toaster();
  let navigator = use_navigator();
  let detail =
    use_reducer(GoalDetailState::default);
  let busy = use_state(|| false);
  let dragging = use_state(|| None::<usize>);
  let drop_hint = use_state(|| None::<usize>);
  let goal_modal =
    use_state(|| None::<GoalModalState>);
  let milestone_modal =
    use_state(|| None::<MilestoneModalState>);
  let pending_delete =
    use_state(|| None::<PendingDelete>);

  let ctx = Ctx {
    api,
    session,
    toaster,
    dispatcher: detail.dispatcher()
  };

  {
    let ctx = ctx.clone();
    use_effect_with(
      (props.id.clone(), ctx.api.clone()),
      move |(id, api)| {
        let id = id.clone();
        let api = api.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match load_goal(&api, &id).await {
              | Ok(goal) => {
                tracing::info!(
                  goal = %goal.id,
                  milestones = goal.milestones.len(),
                  "goal loaded"
                );
                ctx.dispatcher.dispatch(
                  GoalDetailAction::Loaded(goal)
                );
              }
              | Err(error) => {
                ctx.fail("load goal", &error);
                ctx.dispatcher.dispatch(
                  GoalDetailAction::Failed(
                    error.to_string()
                  )
                );
              }
            }
          }
        );
        || ()
      }
    );
  }

  if let Some(placeholder) =
    render_load_state(&detail.load)
  {
    return placeholder;
  }
  let Some(goal) = detail.goal.clone() else {
    return html! {
        <EmptyState title="Goal not found" />
    };
  };

  // Goal-level actions.

  let on_edit_goal = {
    let goal_modal = goal_modal.clone();
    let goal = goal.clone();
    Callback::from(move |_: MouseEvent| {
      goal_modal
        .set(Some(GoalModalState::edit(&goal)));
    })
  };
  let on_delete_goal = {
    let pending_delete =
      pending_delete.clone();
    let goal = goal.clone();
    Callback::from(move |_: MouseEvent| {
      pending_delete.set(Some(
        PendingDelete::Goal(goal.clone())
      ));
    })
  };
  let on_submit_goal = {
    let ctx = ctx.clone();
    let goal_modal = goal_modal.clone();
    let busy = busy.clone();
    let goal_id = goal.id.clone();
    Callback::from(
      move |state: GoalModalState| {
        let draft =
          match state.draft.to_create() {
            | Ok(draft) => draft,
            | Err(invalid) => {
              goal_modal.set(Some(
                state.with_error(invalid)
              ));
              return;
            }
          };
        busy.set(true);
        let ctx = ctx.clone();
        let goal_modal = goal_modal.clone();
        let busy = busy.clone();
        let goal_id = goal_id.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let patch =
              GoalPatch::from_create(&draft);
            let result = ctx
              .api
              .update_goal(&goal_id, &patch)
              .await;
            busy.set(false);
            match result {
              | Ok(updated) => {
                ctx.dispatcher.dispatch(
                  GoalDetailAction::SetGoal(
                    updated
                  )
                );
                ctx.toaster.success("Goal saved");
                goal_modal.set(None);
              }
              | Err(error) => {
                ctx.fail("save goal", &error);
                goal_modal.set(Some(
                  state.with_error(error)
                ));
              }
            }
          }
        );
      }
    )
  };

  let suggested = derived_status(&goal);
  let on_apply_status = {
    let ctx = ctx.clone();
    let goal = goal.clone();
    Callback::from(move |_: MouseEvent| {
      let patch = GoalPatch {
        status: Some(suggested),
        progress: Some(goal_progress(&goal)),
        ..GoalPatch::default()
      };
      let previous = goal.clone();
      let mut optimistic = goal.clone();
      patch.apply(&mut optimistic);
      ctx.dispatcher.dispatch(
        GoalDetailAction::SetGoal(optimistic)
      );

      let ctx = ctx.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let result = ctx
            .api
            .update_goal(&previous.id, &patch)
            .await;
          match result {
            | Ok(updated) => {
              ctx.dispatcher.dispatch(
                GoalDetailAction::SetGoal(
                  updated
                )
              );
            }
            | Err(error) => {
              ctx.dispatcher.dispatch(
                GoalDetailAction::SetGoal(
                  previous
                )
              );
              ctx.fail("update status", &error);
            }
          }
        }
      );
    })
  };

  // Milestone actions.

  let on_new_milestone = {
    let milestone_modal =
      milestone_modal.clone();
    Callback::from(move |_: MouseEvent| {
      milestone_modal.set(Some(
        MilestoneModalState::create()
      ));
    })
  };
  let on_edit_milestone = {
    let milestone_modal =
      milestone_modal.clone();
    Callback::from(
      move |milestone: Milestone| {
        milestone_modal.set(Some(
          MilestoneModalState::edit(
            &milestone
          )
        ));
      }
    )
  };
  let on_delete_milestone = {
    let pending_delete =
      pending_delete.clone();
    Callback::from(
      move |milestone: Milestone| {
        pending_delete.set(Some(
          PendingDelete::Milestone(milestone)
        ));
      }
    )
  };
  let on_submit_milestone = {
    let ctx = ctx.clone();
    let milestone_modal =
      milestone_modal.clone();
    let busy = busy.clone();
    let goal_id = goal.id.clone();
    Callback::from(
      move |state: MilestoneModalState| {
        let draft =
          match state.draft.to_create() {
            | Ok(draft) => draft,
            | Err(invalid) => {
              milestone_modal.set(Some(
                state.with_error(invalid)
              ));
              return;
            }
          };
        busy.set(true);
        let ctx = ctx.clone();
        let milestone_modal =
          milestone_modal.clone();
        let busy = busy.clone();
        let goal_id = goal_id.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let result = match &state.editing {
              | Some(id) => {
                ctx
                  .api
                  .update_milestone(
                    id,
                    &MilestonePatch::from_create(
                      &draft
                    )
                  )
                  .await
              }
              | None => {
                ctx
                  .api
                  .create_milestone(
                    &goal_id, &draft
                  )
                  .await
              }
            };
            busy.set(false);
            match result {
              | Ok(mut milestone) => {
                if milestone.goal_id.is_empty() {
                  milestone.goal_id =
                    goal_id.clone();
                }
                ctx.dispatcher.dispatch(
                  GoalDetailAction::UpsertMilestone(
                    milestone
                  )
                );
                ctx
                  .toaster
                  .success("Milestone saved");
                milestone_modal.set(None);
              }
              | Err(error) => {
                ctx.fail(
                  "save milestone",
                  &error
                );
                milestone_modal.set(Some(
                  state.with_error(error)
                ));
              }
            }
          }
        );
      }
    )
  };
  let on_toggle_milestone = {
    let ctx = ctx.clone();
    Callback::from(
      move |milestone: Milestone| {
        let patch = MilestonePatch {
          completed: Some(!milestone.completed),
          ..MilestonePatch::default()
        };
        ctx.dispatcher.dispatch(
          GoalDetailAction::PatchMilestone(
            milestone.id.clone(),
            patch.clone()
          )
        );

        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let result = ctx
              .api
              .update_milestone(
                &milestone.id,
                &patch
              )
              .await;
            match result {
              | Ok(mut updated) => {
                updated.goal_id =
                  milestone.goal_id.clone();
                ctx.dispatcher.dispatch(
                  GoalDetailAction::UpsertMilestone(
                    updated
                  )
                );
              }
              | Err(error) => {
                ctx.dispatcher.dispatch(
                  GoalDetailAction::UpsertMilestone(
                    milestone
                  )
                );
                ctx.fail(
                  "update milestone",
                  &error
                );
              }
            }
          }
        );
      }
    )
  };

  // Reordering is local to this view.
  let on_drag_start = {
    let dragging = dragging.clone();
    Callback::from(move |index: usize| {
      dragging.set(Some(index));
    })
  };
  let on_drag_over = {
    let drop_hint = drop_hint.clone();
    Callback::from(move |index: usize| {
      if *drop_hint != Some(index) {
        drop_hint.set(Some(index));
      }
    })
  };
  let on_drag_end = {
    let dragging = dragging.clone();
    let drop_hint = drop_hint.clone();
    Callback::from(move |_: ()| {
      dragging.set(None);
      drop_hint.set(None);
    })
  };
  let on_drop = {
    let dispatcher = ctx.dispatcher.clone();
    Callback::from(
      move |(from, to): (usize, usize)| {
        if from == to {
          return;
        }
        ui_debug(
          "milestone.drop",
          &format!("{from} -> {to}")
        );
        dispatcher.dispatch(
          GoalDetailAction::MoveMilestone(
            from, to
          )
        );
      }
    )
  };

  // Task actions.

  let on_add_task = {
    let ctx = ctx.clone();
    let busy = busy.clone();
    Callback::from(
      move |(milestone_id, draft): (
        String,
        TaskCreate
      )| {
        busy.set(true);
        let ctx = ctx.clone();
        let busy = busy.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let result = ctx
              .api
              .create_task(&milestone_id, &draft)
              .await;
            busy.set(false);
            match result {
              | Ok(mut task) => {
                if task.milestone_id.is_empty() {
                  task.milestone_id = milestone_id;
                }
                ctx.dispatcher.dispatch(
                  GoalDetailAction::UpsertTask(
                    task
                  )
                );
              }
              | Err(error) => {
                ctx.fail("add task", &error)
              }
            }
          }
        );
      }
    )
  };
  let on_toggle_task = {
    let ctx = ctx.clone();
    Callback::from(move |task: Task| {
      let patch =
        TaskPatch::completion(!task.completed);
      ctx.dispatcher.dispatch(
        GoalDetailAction::PatchTask {
          milestone_id: task
            .milestone_id
            .clone(),
          task_id:      task.id.clone(),
          patch:        patch.clone()
        }
      );

      let ctx = ctx.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let result = ctx
            .api
            .update_task(&task.id, &patch)
            .await;
          match result {
            | Ok(mut updated) => {
              updated.milestone_id =
                task.milestone_id.clone();
              ctx.dispatcher.dispatch(
                GoalDetailAction::UpsertTask(
                  updated
                )
              );
            }
            | Err(error) => {
              ctx.dispatcher.dispatch(
                GoalDetailAction::UpsertTask(
                  task
                )
              );
              ctx.fail("update task", &error);
            }
          }
        }
      );
    })
  };
  let on_delete_task = {
    let ctx = ctx.clone();
    let detail = detail.clone();
    Callback::from(move |task: Task| {
      let Some((index, previous)) = detail
        .task(&task.milestone_id, &task.id)
      else {
        return;
      };
      ctx.dispatcher.dispatch(
        GoalDetailAction::RemoveTask {
          milestone_id: task
            .milestone_id
            .clone(),
          task_id:      task.id.clone()
        }
      );

      let ctx = ctx.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          if let Err(error) =
            ctx.api.delete_task(&task.id).await
          {
            ctx.dispatcher.dispatch(
              GoalDetailAction::RestoreTask(
                index, previous
              )
            );
            ctx.fail("delete task", &error);
          }
        }
      );
    })
  };

  // Confirmed deletes.

  let on_close_confirm = {
    let pending_delete =
      pending_delete.clone();
    Callback::from(move |_: MouseEvent| {
      pending_delete.set(None);
    })
  };
  let on_confirm_delete = {
    let ctx = ctx.clone();
    let detail = detail.clone();
    let pending_delete =
      pending_delete.clone();
    Callback::from(move |_: ()| {
      let Some(target) =
        (*pending_delete).clone()
      else {
        return;
      };
      pending_delete.set(None);
      let ctx = ctx.clone();

      match target {
        | PendingDelete::Goal(goal) => {
          let navigator = navigator.clone();
          wasm_bindgen_futures::spawn_local(
            async move {
              match ctx
                .api
                .delete_goal(&goal.id)
                .await
              {
                | Ok(()) => {
                  ctx.toaster.info(format!(
                    "Deleted \"{}\"",
                    goal.title
                  ));
                  if let Some(navigator) =
                    navigator
                  {
                    navigator.push(&Route::Goals);
                  }
                }
                | Err(error) => {
                  ctx.fail("delete goal", &error)
                }
              }
            }
          );
        }
        | PendingDelete::Milestone(milestone) => {
          let Some((index, previous)) =
            detail.milestone(&milestone.id)
          else {
            return;
          };
          ctx.dispatcher.dispatch(
            GoalDetailAction::RemoveMilestone(
              milestone.id.clone()
            )
          );
          wasm_bindgen_futures::spawn_local(
            async move {
              if let Err(error) = ctx
                .api
                .delete_milestone(&milestone.id)
                .await
              {
                ctx.dispatcher.dispatch(
                  GoalDetailAction::RestoreMilestone(
                    index, previous
                  )
                );
                ctx.fail(
                  "delete milestone",
                  &error
                );
              }
            }
          );
        }
      }
    })
  };

  let on_close_goal_modal = {
    let goal_modal = goal_modal.clone();
    Callback::from(move |_: MouseEvent| {
      goal_modal.set(None);
    })
  };
  let on_close_milestone_modal = {
    let milestone_modal =
      milestone_modal.clone();
    Callback::from(move |_: MouseEvent| {
      milestone_modal.set(None);
    })
  };

  let progress = goal_progress(&goal);
  let counts = goal_task_counts(&goal);
  let confirm = (*pending_delete).clone().map(
    |target| match target {
      | PendingDelete::Goal(goal) => (
        "Delete goal",
        format!(
          "Delete \"{}\" with all of its \
           milestones and tasks?",
          goal.title
        )
      ),
      | PendingDelete::Milestone(milestone) => (
        "Delete milestone",
        format!(
          "Delete \"{}\" and its tasks?",
          milestone.title
        )
      )
    }
  );

  html! {
      <section class="page goal-detail">
          <Link<Route> to={Route::Goals} classes="back-link">{ "← All goals" }</Link<Route>>
          <div class={classes!("panel", "goal-header", theme.is_dark().then_some("panel-dark"))}>
              <div class="page-head">
                  <h1>{ &goal.title }</h1>
                  <div class="badges">
                      <StatusBadge status={goal.status} />
                      <PriorityBadge priority={goal.priority} />
                  </div>
              </div>
              {
                  if goal.description.trim().is_empty() {
                      html! {}
                  } else {
                      html! { <p class="goal-description">{ &goal.description }</p> }
                  }
              }
              <ProgressBar value={progress} />
              <div class="goal-meta">
                  <span>{ format!("{} → {}", format_date(goal.start_date), format_date(goal.end_date)) }</span>
                  <span>{ format!("{} milestones", goal.milestones.len()) }</span>
                  <span>{ format!("{}/{} tasks done", counts.completed, counts.total) }</span>
              </div>
              {
                  if suggested != goal.status {
                      html! {
                          <div class="suggestion">
                              <span>{ format!("Progress suggests this goal is {}.", suggested.label().to_lowercase()) }</span>
                              <button class="btn" type="button" onclick={on_apply_status}>
                                  { format!("Mark {}", suggested.label()) }
                              </button>
                          </div>
                      }
                  } else {
                      html! {}
                  }
              }
              <div class="actions">
                  <button class="btn" type="button" onclick={on_edit_goal}>{ "Edit" }</button>
                  <button class="btn danger" type="button" onclick={on_delete_goal}>{ "Delete" }</button>
              </div>
          </div>
          <div class="page-head">
              <h2>{ "Milestones" }</h2>
              <button class="btn ok" type="button" onclick={on_new_milestone}>{ "Add milestone" }</button>
          </div>
          {
              if goal.milestones.is_empty() {
                  html! {
                      <EmptyState title="No milestones yet" detail="Break this goal into milestones to track progress." />
                  }
              } else {
                  html! {
                      <div class="milestone-list">
                          {
                              for goal.milestones.iter().cloned().enumerate().map(|(index, milestone)| {
                                  let key = milestone.id.clone();
                                  html! {
                                      <MilestoneCard
                                          key={key}
                                          {milestone}
                                          {index}
                                          is_dragging={*dragging == Some(index)}
                                          is_drop_hint={*drop_hint == Some(index) && *dragging != Some(index)}
                                          busy={*busy}
                                          on_drag_start={on_drag_start.clone()}
                                          on_drag_over={on_drag_over.clone()}
                                          on_drag_end={on_drag_end.clone()}
                                          on_drop={on_drop.clone()}
                                          on_edit={on_edit_milestone.clone()}
                                          on_delete={on_delete_milestone.clone()}
                                          on_toggle={on_toggle_milestone.clone()}
                                          on_add_task={on_add_task.clone()}
                                          on_toggle_task={on_toggle_task.clone()}
                                          on_delete_task={on_delete_task.clone()}
                                      />
                                  }
                              })
                          }
                      </div>
                  }
              }
          }
          <GoalModal
              modal_state={goal_modal.clone()}
              busy={*busy}
              on_submit={on_submit_goal}
              on_close={on_close_goal_modal}
          />
          <MilestoneModal
              modal_state={milestone_modal.clone()}
              busy={*busy}
              on_submit={on_submit_milestone}
              on_close={on_close_milestone_modal}
          />
          {
              if let Some((title, message)) = confirm {
                  html! {
                      <ConfirmModal
                          title={title}
                          message={message}
                          on_confirm={on_confirm_delete}
                          on_close={on_close_confirm}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </section>
  }
}

use goalpost_shared::filter::{
  TaskFilter,
  filter_tasks,
  search_tasks
};
use goalpost_shared::progress::{
  milestone_progress,
  milestone_task_counts
};
use goalpost_shared::{
  Milestone,
  Task,
  TaskCreate
};
use web_sys::{
  DragEvent,
  HtmlInputElement,
  InputEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_state
};

use super::{
  EmptyState,
  PriorityBadge,
  ProgressBar,
  TabBar,
  TabItem,
  TaskComposer,
  TaskRow,
  format_date
};
use crate::app::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct MilestoneCardProps {
  pub milestone:     Milestone,
  pub index:         usize,
  pub is_dragging:   bool,
  pub is_drop_hint:  bool,
  pub busy:          bool,
  pub on_drag_start: Callback<usize>,
  pub on_drag_over:  Callback<usize>,
  pub on_drag_end:   Callback<()>,
  pub on_drop:       Callback<(usize, usize)>,
  pub on_edit:       Callback<Milestone>,
  pub on_delete:     Callback<Milestone>,
  pub on_toggle:     Callback<Milestone>,
  pub on_add_task:
    Callback<(String, TaskCreate)>,
  pub on_toggle_task: Callback<Task>,
  pub on_delete_task: Callback<Task>
}

#[function_component(MilestoneCard)]
pub fn milestone_card(
  props: &MilestoneCardProps
) -> Html {
  let theme = use_theme();
  let task_filter =
    use_state(TaskFilter::default);
  let search = use_state(String::new);
  let milestone = &props.milestone;
  let index = props.index;
  let progress =
    milestone_progress(milestone);
  let counts =
    milestone_task_counts(milestone);
  let visible = search_tasks(
    &filter_tasks(
      &milestone.tasks,
      *task_filter
    ),
    &search
  );

  let ondragstart = {
    let on_drag_start =
      props.on_drag_start.clone();
    Callback::from(
      move |event: DragEvent| {
        if let Some(data_transfer) =
          event.data_transfer()
        {
          let _ = data_transfer.set_data(
            "text/plain",
            &index.to_string()
          );
          data_transfer
            .set_drop_effect("move");
        }
        on_drag_start.emit(index);
      }
    )
  };

  let ondragover = {
    let on_drag_over =
      props.on_drag_over.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        on_drag_over.emit(index);
      }
    )
  };

  let ondragend = {
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(move |_: DragEvent| {
      on_drag_end.emit(());
    })
  };

  let ondrop = {
    let on_drop = props.on_drop.clone();
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        let from = event
          .data_transfer()
          .and_then(|data_transfer| {
            data_transfer
              .get_data("text/plain")
              .ok()
          })
          .and_then(|raw| {
            raw.trim().parse::<usize>().ok()
          });
        match from {
          | Some(from) => {
            on_drop.emit((from, index))
          }
          | None => {
            tracing::warn!(
              "failed to read dragged \
               milestone index"
            );
          }
        }
        on_drag_end.emit(());
      }
    )
  };

  let on_edit = {
    let on_edit = props.on_edit.clone();
    let milestone = milestone.clone();
    Callback::from(move |_: MouseEvent| {
      on_edit.emit(milestone.clone());
    })
  };
  let on_delete = {
    let on_delete = props.on_delete.clone();
    let milestone = milestone.clone();
    Callback::from(move |_: MouseEvent| {
      on_delete.emit(milestone.clone());
    })
  };
  let on_toggle = {
    let on_toggle = props.on_toggle.clone();
    let milestone = milestone.clone();
    Callback::from(move |_: MouseEvent| {
      on_toggle.emit(milestone.clone());
    })
  };
  let on_add_task = {
    let on_add_task =
      props.on_add_task.clone();
    let milestone_id = milestone.id.clone();
    Callback::from(move |draft: TaskCreate| {
      on_add_task
        .emit((milestone_id.clone(), draft));
    })
  };
  let on_filter = {
    let task_filter = task_filter.clone();
    Callback::from(move |key: &'static str| {
      let next = TaskFilter::all()
        .into_iter()
        .find(|filter| filter.key() == key)
        .unwrap_or_default();
      task_filter.set(next);
    })
  };

  let on_search = {
    let search = search.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      search.set(input.value());
    })
  };

  let tabs: Vec<TabItem> = TaskFilter::all()
    .into_iter()
    .map(|filter| {
      let count = filter_tasks(
        &milestone.tasks,
        filter
      )
      .len();
      TabItem {
        key:   filter.key(),
        label: format!(
          "{} ({count})",
          filter.label()
        )
      }
    })
    .collect();

  html! {
      <div
          class={classes!(
              "panel",
              "milestone-card",
              theme.is_dark().then_some("panel-dark"),
              milestone.completed.then_some("completed"),
              props.is_dragging.then_some("dragging"),
              props.is_drop_hint.then_some("drop-hint")
          )}
          draggable="true"
          {ondragstart}
          {ondragover}
          {ondragend}
          {ondrop}
      >
          <div class="milestone-head">
              <span class="drag-handle" title="Drag to reorder">{ "⋮⋮" }</span>
              <div class="milestone-title">{ &milestone.title }</div>
              <PriorityBadge priority={milestone.priority} />
              <span class="badge">{ format!("due {}", format_date(milestone.due_date)) }</span>
              {
                  if counts.total == 0 {
                      html! {}
                  } else {
                      html! { <span class="badge">{ format!("{} open", counts.open()) }</span> }
                  }
              }
          </div>
          {
              if milestone.description.trim().is_empty() {
                  html! {}
              } else {
                  html! { <div class="task-subtitle">{ &milestone.description }</div> }
              }
          }
          <ProgressBar value={progress} compact={true} />
          <div class="milestone-toolbar">
              <TabBar tabs={tabs} active={task_filter.key()} on_select={on_filter} small={true} />
              <input
                  class="task-search"
                  type="search"
                  placeholder="Search tasks"
                  value={(*search).clone()}
                  oninput={on_search}
              />
              <div class="actions">
                  <button class={theme.pick("btn ok", "btn ok btn-dark")} type="button" onclick={on_toggle} disabled={props.busy}>
                      { if milestone.completed { "Reopen" } else { "Complete" } }
                  </button>
                  <button class="btn" type="button" onclick={on_edit}>{ "Edit" }</button>
                  <button class="btn danger" type="button" onclick={on_delete}>{ "Delete" }</button>
              </div>
          </div>
          <div class="task-list">
              {
                  if visible.is_empty() {
                      html! {
                          <EmptyState
                              title={if counts.total == 0 { "No tasks yet" } else { "Nothing in this view" }}
                          />
                      }
                  } else {
                      html! {
                          <>
                              {
                                  for visible.into_iter().map(|task| {
                                      let key = task.id.clone();
                                      html! {
                                          <TaskRow
                                              key={key}
                                              {task}
                                              on_toggle={props.on_toggle_task.clone()}
                                              on_delete={props.on_delete_task.clone()}
                                          />
                                      }
                                  })
                              }
                          </>
                      }
                  }
              }
          </div>
          <TaskComposer on_submit={on_add_task} busy={props.busy} />
      </div>
  }
}

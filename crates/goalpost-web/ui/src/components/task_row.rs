use goalpost_shared::Task;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::{
  PriorityBadge,
  format_date
};
use crate::app::today;

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub task:      Task,
  pub on_toggle: Callback<Task>,
  pub on_delete: Callback<Task>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let task = &props.task;
  let overdue = !task.completed
    && task
      .due_date
      .is_some_and(|due| due < today());

  let on_toggle = {
    let on_toggle = props.on_toggle.clone();
    let task = task.clone();
    Callback::from(move |_: web_sys::Event| {
      on_toggle.emit(task.clone());
    })
  };
  let on_delete = {
    let on_delete = props.on_delete.clone();
    let task = task.clone();
    Callback::from(move |e: MouseEvent| {
      e.stop_propagation();
      on_delete.emit(task.clone());
    })
  };

  html! {
      <div class={classes!("task-row", task.completed.then_some("done"), overdue.then_some("overdue"))}>
          <input
              type="checkbox"
              class="task-check"
              checked={task.completed}
              onchange={on_toggle}
          />
          <div class="task-body">
              <div class="task-title">{ &task.title }</div>
              {
                  match task.description.as_deref().map(str::trim) {
                      | Some(description) if !description.is_empty() => {
                          html! { <div class="task-subtitle">{ description.to_string() }</div> }
                      }
                      | _ => html! {}
                  }
              }
          </div>
          <PriorityBadge priority={task.priority} />
          {
              if task.due_date.is_some() {
                  html! { <span class="badge">{ format!("due {}", format_date(task.due_date)) }</span> }
              } else {
                  html! {}
              }
          }
          <button class="btn icon danger" type="button" title="Delete task" onclick={on_delete}>{ "✕" }</button>
      </div>
  }
}

use goalpost_shared::{
  Priority,
  TaskCreate
};
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement
};
use yew::{
  Callback,
  Html,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

use crate::app::forms::TaskDraft;

#[derive(Properties, PartialEq)]
pub struct TaskComposerProps {
  pub on_submit: Callback<TaskCreate>,
  #[prop_or_default]
  pub busy:      bool
}

#[function_component(TaskComposer)]
pub fn task_composer(
  props: &TaskComposerProps
) -> Html {
  let draft = use_state(TaskDraft::default);
  let error = use_state(|| None::<String>);

  let on_title = {
    let draft = draft.clone();
    Callback::from(move |e: yew::InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.title = input.value();
      draft.set(next);
    })
  };
  let on_due = {
    let draft = draft.clone();
    Callback::from(move |e: web_sys::Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.due_date = input.value();
      draft.set(next);
    })
  };
  let on_priority = {
    let draft = draft.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.priority =
        Priority::from_key(&select.value())
          .unwrap_or_default();
      draft.set(next);
    })
  };
  let on_submit = {
    let draft = draft.clone();
    let error = error.clone();
    let on_submit = props.on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      match draft.to_create() {
        | Ok(create) => {
          on_submit.emit(create);
          draft.set(TaskDraft {
            priority: draft.priority,
            ..TaskDraft::default()
          });
          error.set(None);
        }
        | Err(validation) => {
          error.set(Some(validation.to_string()));
        }
      }
    })
  };

  html! {
      <form class="task-composer" onsubmit={on_submit}>
          <input
              class="input"
              placeholder="Add a task"
              value={draft.title.clone()}
              oninput={on_title}
          />
          <input
              class="input date"
              type="date"
              value={draft.due_date.clone()}
              onchange={on_due}
          />
          <select class="input" onchange={on_priority}>
              {
                  for Priority::all().into_iter().map(|priority| html! {
                      <option value={priority.key()} selected={priority == draft.priority}>
                          { priority.label() }
                      </option>
                  })
              }
          </select>
          <button class="btn ok" type="submit" disabled={props.busy}>{ "Add" }</button>
          {
              if let Some(message) = &*error {
                  html! { <div class="form-error">{ message }</div> }
              } else {
                  html! {}
              }
          }
      </form>
  }
}

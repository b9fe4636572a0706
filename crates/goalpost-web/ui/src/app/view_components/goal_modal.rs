use goalpost_shared::{
  GoalStatus,
  Priority
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  SubmitEvent,
  UseStateHandle,
  classes,
  function_component,
  html
};

use super::{
  input_value,
  select_value,
  stop_propagation,
  textarea_value
};
use crate::app::forms::GoalDraft;
use crate::app::theme::use_theme;

#[derive(Clone, PartialEq)]
pub enum GoalModalMode {
  Create,
  Edit(String)
}

#[derive(Clone, PartialEq)]
pub struct GoalModalState {
  pub mode:  GoalModalMode,
  pub draft: GoalDraft
}

impl GoalModalState {
  pub fn create() -> Self {
    Self {
      mode:  GoalModalMode::Create,
      draft: GoalDraft::default()
    }
  }

  pub fn edit(
    goal: &goalpost_shared::Goal
  ) -> Self {
    Self {
      mode:  GoalModalMode::Edit(
        goal.id.clone()
      ),
      draft: GoalDraft::from_goal(goal)
    }
  }

  pub fn with_error(
    mut self,
    error: impl ToString
  ) -> Self {
    self.draft.error = Some(error.to_string());
    self
  }
}

#[derive(Properties, PartialEq)]
pub struct GoalModalProps {
  pub modal_state:
    UseStateHandle<Option<GoalModalState>>,
  pub busy:      bool,
  pub on_submit: Callback<GoalModalState>,
  pub on_close:  Callback<MouseEvent>
}

/// Edits a field of the open draft and
/// clears any previous error.
fn update_draft(
  modal_state: &UseStateHandle<
    Option<GoalModalState>
  >,
  edit: impl FnOnce(&mut GoalDraft)
) {
  if let Some(mut current) =
    (**modal_state).clone()
  {
    edit(&mut current.draft);
    current.draft.error = None;
    modal_state.set(Some(current));
  }
}

#[function_component(GoalModal)]
pub fn goal_modal(
  props: &GoalModalProps
) -> Html {
  let theme = use_theme();
  let modal_state =
    props.modal_state.clone();
  let Some(state) = (*modal_state).clone()
  else {
    return html! {};
  };
  let draft = state.draft.clone();

  let on_title = {
    let modal_state = modal_state.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let value = input_value(&e);
        update_draft(&modal_state, |draft| {
          draft.title = value
        });
      }
    )
  };
  let on_description = {
    let modal_state = modal_state.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let value = textarea_value(&e);
        update_draft(&modal_state, |draft| {
          draft.description = value
        });
      }
    )
  };
  let on_category = {
    let modal_state = modal_state.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let value = input_value(&e);
        update_draft(&modal_state, |draft| {
          draft.category = value
        });
      }
    )
  };
  let on_start = {
    let modal_state = modal_state.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let value = input_value(&e);
        update_draft(&modal_state, |draft| {
          draft.start_date = value
        });
      }
    )
  };
  let on_end = {
    let modal_state = modal_state.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let value = input_value(&e);
        update_draft(&modal_state, |draft| {
          draft.end_date = value
        });
      }
    )
  };
  let on_priority = {
    let modal_state = modal_state.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let priority =
          Priority::from_key(&select_value(&e))
            .unwrap_or_default();
        update_draft(&modal_state, |draft| {
          draft.priority = priority
        });
      }
    )
  };
  let on_status = {
    let modal_state = modal_state.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let status = GoalStatus::from_key(
          &select_value(&e)
        )
        .unwrap_or_default();
        update_draft(&modal_state, |draft| {
          draft.status = status
        });
      }
    )
  };
  let onsubmit = {
    let on_submit = props.on_submit.clone();
    let state = state.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      on_submit.emit(state.clone());
    })
  };

  let heading = match state.mode {
    | GoalModalMode::Create => "New goal",
    | GoalModalMode::Edit(_) => "Edit goal"
  };

  html! {
      <div class="modal-backdrop" onclick={props.on_close.clone()}>
          <form
              class={classes!("modal", theme.is_dark().then_some("modal-dark"))}
              onclick={stop_propagation()}
              {onsubmit}
          >
              <div class="header">{ heading }</div>
              <div class="content">
                  <label class="field">
                      <span>{ "Title" }</span>
                      <input value={draft.title.clone()} oninput={on_title} placeholder="Run a half marathon" />
                  </label>
                  <label class="field">
                      <span>{ "Description" }</span>
                      <textarea value={draft.description.clone()} oninput={on_description} rows="3" />
                  </label>
                  <label class="field">
                      <span>{ "Category" }</span>
                      <input value={draft.category.clone()} oninput={on_category} placeholder="Health" />
                  </label>
                  <div class="field-row">
                      <label class="field">
                          <span>{ "Start" }</span>
                          <input type="date" value={draft.start_date.clone()} oninput={on_start} />
                      </label>
                      <label class="field">
                          <span>{ "Target" }</span>
                          <input type="date" value={draft.end_date.clone()} oninput={on_end} />
                      </label>
                  </div>
                  <div class="field-row">
                      <label class="field">
                          <span>{ "Priority" }</span>
                          <select onchange={on_priority}>
                              {
                                  for Priority::all().into_iter().map(|priority| html! {
                                      <option value={priority.key()} selected={priority == draft.priority}>
                                          { priority.label() }
                                      </option>
                                  })
                              }
                          </select>
                      </label>
                      <label class="field">
                          <span>{ "Status" }</span>
                          <select onchange={on_status}>
                              {
                                  for GoalStatus::all().into_iter().map(|status| html! {
                                      <option value={status.key()} selected={status == draft.status}>
                                          { status.label() }
                                      </option>
                                  })
                              }
                          </select>
                      </label>
                  </div>
                  {
                      if let Some(error) = &draft.error {
                          html! { <div class="field-error">{ error }</div> }
                      } else {
                          html! {}
                      }
                  }
              </div>
              <div class="footer">
                  <button class="btn" type="button" onclick={props.on_close.clone()}>{ "Cancel" }</button>
                  <button class="btn ok" type="submit" disabled={props.busy}>
                      { if props.busy { "Saving…" } else { "Save" } }
                  </button>
              </div>
          </form>
      </div>
  }
}

use goalpost_shared::{
  Milestone,
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
use crate::app::forms::MilestoneDraft;
use crate::app::theme::use_theme;

#[derive(Clone, PartialEq)]
pub struct MilestoneModalState {
  /// `None` while creating.
  pub editing: Option<String>,
  pub draft:   MilestoneDraft
}

impl MilestoneModalState {
  pub fn create() -> Self {
    Self {
      editing: None,
      draft:   MilestoneDraft::default()
    }
  }

  pub fn edit(milestone: &Milestone) -> Self {
    Self {
      editing: Some(milestone.id.clone()),
      draft:   MilestoneDraft::from_milestone(
        milestone
      )
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
pub struct MilestoneModalProps {
  pub modal_state: UseStateHandle<
    Option<MilestoneModalState>
  >,
  pub busy:        bool,
  pub on_submit:   Callback<MilestoneModalState>,
  pub on_close:    Callback<MouseEvent>
}

fn update_draft(
  modal_state: &UseStateHandle<
    Option<MilestoneModalState>
  >,
  edit: impl FnOnce(&mut MilestoneDraft)
) {
  if let Some(mut current) =
    (**modal_state).clone()
  {
    edit(&mut current.draft);
    current.draft.error = None;
    modal_state.set(Some(current));
  }
}

#[function_component(MilestoneModal)]
pub fn milestone_modal(
  props: &MilestoneModalProps
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
  let on_due = {
    let modal_state = modal_state.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let value = input_value(&e);
        update_draft(&modal_state, |draft| {
          draft.due_date = value
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
  let onsubmit = {
    let on_submit = props.on_submit.clone();
    let state = state.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      on_submit.emit(state.clone());
    })
  };

  html! {
      <div class="modal-backdrop" onclick={props.on_close.clone()}>
          <form
              class={classes!("modal", theme.is_dark().then_some("modal-dark"))}
              onclick={stop_propagation()}
              {onsubmit}
          >
              <div class="header">
                  { if state.editing.is_some() { "Edit milestone" } else { "New milestone" } }
              </div>
              <div class="content">
                  <label class="field">
                      <span>{ "Title" }</span>
                      <input value={draft.title.clone()} oninput={on_title} />
                  </label>
                  <label class="field">
                      <span>{ "Description" }</span>
                      <textarea value={draft.description.clone()} oninput={on_description} rows="2" />
                  </label>
                  <div class="field-row">
                      <label class="field">
                          <span>{ "Due" }</span>
                          <input type="date" value={draft.due_date.clone()} oninput={on_due} />
                      </label>
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
                  <button class="btn ok" type="submit" disabled={props.busy}>{ "Save" }</button>
              </div>
          </form>
      </div>
  }
}

use goalpost_shared::filter::{
  GoalQuery,
  GoalSort,
  GoalTab,
  filter_goals,
  tab_counts
};
use goalpost_shared::{
  Goal,
  GoalPatch,
  Priority
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_state
};

use super::confirm_modal::ConfirmModal;
use super::goal_modal::{
  GoalModal,
  GoalModalMode,
  GoalModalState
};
use super::{
  input_value,
  render_load_state,
  select_value,
  use_goal_list
};
use crate::app::session::{
  report_api_error,
  use_api,
  use_session
};
use crate::app::state::GoalListAction;
use crate::app::toast::use_toaster;
use crate::app::ui_debug;
use crate::components::{
  EmptyState,
  GoalCard,
  TabBar,
  TabItem
};

#[function_component(GoalsPage)]
pub fn goals_page() -> Html {
  let list = use_goal_list();
  let api = use_api();
  let session = use_session();
  let toaster = use_toaster();
  let query = use_state(GoalQuery::default);
  let goal_modal =
    use_state(|| None::<GoalModalState>);
  let pending_delete =
    use_state(|| None::<Goal>);
  let busy = use_state(|| false);

  let on_tab = {
    let query = query.clone();
    Callback::from(move |key: &'static str| {
      let mut next = (*query).clone();
      next.tab = GoalTab::from_key(key);
      query.set(next);
    })
  };
  let on_search = {
    let query = query.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let mut next = (*query).clone();
        next.search = input_value(&e);
        query.set(next);
      }
    )
  };
  let on_priority = {
    let query = query.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let mut next = (*query).clone();
        next.priority =
          Priority::from_key(&select_value(&e));
        query.set(next);
      }
    )
  };
  let on_sort = {
    let query = query.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let mut next = (*query).clone();
        next.sort =
          GoalSort::from_key(&select_value(&e));
        query.set(next);
      }
    )
  };

  let on_new = {
    let goal_modal = goal_modal.clone();
    Callback::from(move |_: MouseEvent| {
      goal_modal
        .set(Some(GoalModalState::create()));
    })
  };
  let on_edit = {
    let goal_modal = goal_modal.clone();
    Callback::from(move |goal: Goal| {
      goal_modal
        .set(Some(GoalModalState::edit(&goal)));
    })
  };
  let on_delete = {
    let pending_delete =
      pending_delete.clone();
    Callback::from(move |goal: Goal| {
      pending_delete.set(Some(goal));
    })
  };
  let on_close_modal = {
    let goal_modal = goal_modal.clone();
    Callback::from(move |_: MouseEvent| {
      goal_modal.set(None);
    })
  };
  let on_close_confirm = {
    let pending_delete =
      pending_delete.clone();
    Callback::from(move |_: MouseEvent| {
      pending_delete.set(None);
    })
  };

  let on_submit = {
    let api = api.clone();
    let session = session.clone();
    let toaster = toaster.clone();
    let dispatcher = list.dispatcher();
    let goal_modal = goal_modal.clone();
    let busy = busy.clone();
    Callback::from(
      move |state: GoalModalState| {
        let draft = match state
          .draft
          .to_create()
        {
          | Ok(draft) => draft,
          | Err(invalid) => {
            goal_modal.set(Some(
              state.with_error(invalid)
            ));
            return;
          }
        };

        busy.set(true);
        let api = api.clone();
        let session = session.clone();
        let toaster = toaster.clone();
        let dispatcher = dispatcher.clone();
        let goal_modal = goal_modal.clone();
        let busy = busy.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let result = match &state.mode {
              | GoalModalMode::Create => {
                api.create_goal(&draft).await
              }
              | GoalModalMode::Edit(id) => {
                api
                  .update_goal(
                    id,
                    &GoalPatch::from_create(
                      &draft
                    )
                  )
                  .await
              }
            };
            busy.set(false);
            match result {
              | Ok(goal) => {
                toaster.success(format!(
                  "Saved \"{}\"",
                  goal.title
                ));
                dispatcher.dispatch(
                  GoalListAction::Upsert(goal)
                );
                goal_modal.set(None);
              }
              | Err(error) => {
                report_api_error(
                  &session,
                  &toaster,
                  "save goal",
                  &error
                );
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

  let on_confirm_delete = {
    let list = list.clone();
    let pending_delete =
      pending_delete.clone();
    Callback::from(move |_: ()| {
      let Some(target) =
        (*pending_delete).clone()
      else {
        return;
      };
      pending_delete.set(None);
      let Some((index, previous)) =
        list.find(&target.id)
      else {
        return;
      };

      ui_debug("goal.delete", &target.id);
      list.dispatch(GoalListAction::Remove(
        target.id.clone()
      ));
      let api = api.clone();
      let session = session.clone();
      let toaster = toaster.clone();
      let dispatcher = list.dispatcher();
      wasm_bindgen_futures::spawn_local(
        async move {
          match api.delete_goal(&target.id).await
          {
            | Ok(()) => {
              toaster.info(format!(
                "Deleted \"{}\"",
                target.title
              ));
            }
            | Err(error) => {
              dispatcher.dispatch(
                GoalListAction::Restore(
                  index, previous
                )
              );
              report_api_error(
                &session,
                &toaster,
                "delete goal",
                &error
              );
            }
          }
        }
      );
    })
  };

  let placeholder = render_load_state(&list.load);
  let visible = filter_goals(&list.goals, &query);
  let tabs: Vec<TabItem> =
    tab_counts(&list.goals)
      .into_iter()
      .map(|(tab, count)| TabItem {
        key:   tab.key(),
        label: format!("{} ({count})", tab.label())
      })
      .collect();

  html! {
      <section class="page goals">
          <div class="page-head">
              <h1>{ "Goals" }</h1>
              <button class="btn ok" type="button" onclick={on_new}>{ "New goal" }</button>
          </div>
          <TabBar tabs={tabs} active={query.tab.key()} on_select={on_tab} />
          <div class="toolbar">
              <input
                  class="search"
                  type="search"
                  placeholder="Search goals"
                  value={query.search.clone()}
                  oninput={on_search}
              />
              <select onchange={on_priority}>
                  <option value="" selected={query.priority.is_none()}>{ "Any priority" }</option>
                  {
                      for Priority::all().into_iter().map(|priority| html! {
                          <option value={priority.key()} selected={query.priority == Some(priority)}>
                              { priority.label() }
                          </option>
                      })
                  }
              </select>
              <select onchange={on_sort}>
                  {
                      for GoalSort::all().into_iter().map(|sort| html! {
                          <option value={sort.key()} selected={query.sort == sort}>
                              { format!("Sort: {}", sort.label()) }
                          </option>
                      })
                  }
              </select>
          </div>
          {
              if let Some(placeholder) = placeholder {
                  placeholder
              } else if visible.is_empty() {
                  html! {
                      <EmptyState
                          title={if list.goals.is_empty() { "No goals yet" } else { "No goals match" }}
                          detail="Adjust the filters or create a new goal."
                      />
                  }
              } else {
                  html! {
                      <div class="goal-grid">
                          {
                              for visible.into_iter().map(|goal| {
                                  let key = goal.id.clone();
                                  html! {
                                      <GoalCard
                                          key={key}
                                          {goal}
                                          on_edit={on_edit.clone()}
                                          on_delete={on_delete.clone()}
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
              on_submit={on_submit}
              on_close={on_close_modal.clone()}
          />
          {
              if let Some(goal) = &*pending_delete {
                  html! {
                      <ConfirmModal
                          title="Delete goal"
                          message={format!("Delete \"{}\" with all of its milestones and tasks?", goal.title)}
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

use std::rc::Rc;

use goalpost_shared::list;
use goalpost_shared::{
  Goal,
  Milestone,
  MilestonePatch,
  Task,
  TaskPatch
};
use yew::Reducible;

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub enum LoadState {
  #[default]
  Loading,
  Ready,
  Failed(String)
}

pub enum GoalListAction {
  Loaded(Vec<Goal>),
  Failed(String),
  Upsert(Goal),
  Remove(String),
  Restore(usize, Goal)
}

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct GoalListState {
  pub load:  LoadState,
  pub goals: Vec<Goal>
}

impl GoalListState {
  pub fn find(
    &self,
    id: &str
  ) -> Option<(usize, Goal)> {
    let index =
      list::position(&self.goals, id)?;
    Some((index, self.goals[index].clone()))
  }
}

impl Reducible for GoalListState {
  type Action = GoalListAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | GoalListAction::Loaded(goals) => {
        next.goals = goals;
        next.load = LoadState::Ready;
      }
      | GoalListAction::Failed(message) => {
        next.load = LoadState::Failed(message);
      }
      | GoalListAction::Upsert(mut goal) => {
        if goal.milestones.is_empty()
          && let Some(index) =
            list::position(&next.goals, &goal.id)
        {
          goal.milestones = std::mem::take(
            &mut next.goals[index].milestones
          );
        }
        list::upsert(&mut next.goals, goal);
      }
      | GoalListAction::Remove(id) => {
        list::remove(&mut next.goals, &id);
      }
      | GoalListAction::Restore(
        index,
        goal
      ) => {
        if list::position(&next.goals, &goal.id)
          .is_none()
        {
          list::restore(
            &mut next.goals,
            index,
            goal
          );
        }
      }
    }
    Rc::new(next)
  }
}

pub enum GoalDetailAction {
  Loaded(Goal),
  Failed(String),
  /// Replaces goal fields, keeping the loaded
  /// milestones when the server omits them.
  SetGoal(Goal),
  UpsertMilestone(Milestone),
  PatchMilestone(String, MilestonePatch),
  RemoveMilestone(String),
  RestoreMilestone(usize, Milestone),
  MoveMilestone(usize, usize),
  UpsertTask(Task),
  PatchTask {
    milestone_id: String,
    task_id:      String,
    patch:        TaskPatch
  },
  RemoveTask {
    milestone_id: String,
    task_id:      String
  },
  RestoreTask(usize, Task)
}

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct GoalDetailState {
  pub load: LoadState,
  pub goal: Option<Goal>
}

impl GoalDetailState {
  pub fn milestone(
    &self,
    id: &str
  ) -> Option<(usize, Milestone)> {
    let goal = self.goal.as_ref()?;
    let index =
      list::position(&goal.milestones, id)?;
    Some((
      index,
      goal.milestones[index].clone()
    ))
  }

  pub fn task(
    &self,
    milestone_id: &str,
    task_id: &str
  ) -> Option<(usize, Task)> {
    let (_, milestone) =
      self.milestone(milestone_id)?;
    let index =
      list::position(&milestone.tasks, task_id)?;
    Some((
      index,
      milestone.tasks[index].clone()
    ))
  }
}

fn milestone_mut<'a>(
  goal: &'a mut Goal,
  id: &str
) -> Option<&'a mut Milestone> {
  goal
    .milestones
    .iter_mut()
    .find(|milestone| milestone.id == id)
}

impl Reducible for GoalDetailState {
  type Action = GoalDetailAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();

    if let GoalDetailAction::Loaded(goal) =
      action
    {
      next.goal = Some(goal);
      next.load = LoadState::Ready;
      return Rc::new(next);
    }
    if let GoalDetailAction::Failed(message) =
      action
    {
      next.load = LoadState::Failed(message);
      return Rc::new(next);
    }

    let Some(goal) = next.goal.as_mut() else {
      tracing::warn!(
        "goal detail action before load"
      );
      return self;
    };

    match action {
      | GoalDetailAction::Loaded(_)
      | GoalDetailAction::Failed(_) => {}
      | GoalDetailAction::SetGoal(mut updated) => {
        if updated.milestones.is_empty() {
          updated.milestones =
            std::mem::take(&mut goal.milestones);
        }
        *goal = updated;
      }
      | GoalDetailAction::UpsertMilestone(
        mut milestone
      ) => {
        if milestone.tasks.is_empty()
          && let Some(existing) =
            milestone_mut(goal, &milestone.id)
        {
          milestone.tasks =
            std::mem::take(&mut existing.tasks);
        }
        list::upsert(
          &mut goal.milestones,
          milestone
        );
      }
      | GoalDetailAction::PatchMilestone(
        id,
        patch
      ) => {
        if let Some(milestone) =
          milestone_mut(goal, &id)
        {
          patch.apply(milestone);
        }
      }
      | GoalDetailAction::RemoveMilestone(id) => {
        list::remove(&mut goal.milestones, &id);
      }
      | GoalDetailAction::RestoreMilestone(
        index,
        milestone
      ) => {
        if list::position(
          &goal.milestones,
          &milestone.id
        )
        .is_none()
        {
          list::restore(
            &mut goal.milestones,
            index,
            milestone
          );
        }
      }
      | GoalDetailAction::MoveMilestone(
        from,
        to
      ) => {
        list::move_item(
          &mut goal.milestones,
          from,
          to
        );
      }
      | GoalDetailAction::UpsertTask(task) => {
        if let Some(milestone) = milestone_mut(
          goal,
          &task.milestone_id
        ) {
          list::upsert(&mut milestone.tasks, task);
        }
      }
      | GoalDetailAction::PatchTask {
        milestone_id,
        task_id,
        patch
      } => {
        if let Some(milestone) =
          milestone_mut(goal, &milestone_id)
        {
          list::update_with(
            &mut milestone.tasks,
            &task_id,
            |task| patch.apply(task)
          );
        }
      }
      | GoalDetailAction::RemoveTask {
        milestone_id,
        task_id
      } => {
        if let Some(milestone) =
          milestone_mut(goal, &milestone_id)
        {
          list::remove(
            &mut milestone.tasks,
            &task_id
          );
        }
      }
      | GoalDetailAction::RestoreTask(
        index,
        task
      ) => {
        if let Some(milestone) = milestone_mut(
          goal,
          &task.milestone_id
        ) && list::position(
          &milestone.tasks,
          &task.id
        )
        .is_none()
        {
          list::restore(
            &mut milestone.tasks,
            index,
            task
          );
        }
      }
    }

    Rc::new(next)
  }
}

#[cfg(test)]
mod tests {
  use goalpost_shared::GoalStatus;

  use super::*;

  fn goal_json() -> Goal {
    serde_json::from_str(
      r#"{
        "_id": "g1",
        "title": "Ship v1",
        "status": "in_progress",
        "milestones": [
          { "_id": "m1", "goalId": "g1", "title": "Design",
            "tasks": [
              { "_id": "t1", "milestoneId": "m1", "title": "Sketch" },
              { "_id": "t2", "milestoneId": "m1", "title": "Review" }
            ] },
          { "_id": "m2", "goalId": "g1", "title": "Build" }
        ]
      }"#
    )
    .expect("goal fixture")
  }

  fn loaded() -> Rc<GoalDetailState> {
    Rc::new(GoalDetailState::default())
      .reduce(GoalDetailAction::Loaded(
        goal_json()
      ))
  }

  #[test]
  fn goal_list_remove_and_restore() {
    let state = Rc::new(GoalListState::default())
      .reduce(GoalListAction::Loaded(vec![
        goal_json()
      ]));
    assert_eq!(state.load, LoadState::Ready);

    let (index, goal) =
      state.find("g1").expect("goal");
    let state = state
      .reduce(GoalListAction::Remove(
        "g1".to_string()
      ));
    assert!(state.goals.is_empty());

    let state = state
      .reduce(GoalListAction::Restore(
        index,
        goal.clone()
      ))
      .reduce(GoalListAction::Restore(
        index, goal
      ));
    assert_eq!(state.goals.len(), 1);
  }

  #[test]
  fn goal_list_upsert_keeps_milestones() {
    let state = Rc::new(GoalListState::default())
      .reduce(GoalListAction::Loaded(vec![
        goal_json()
      ]));
    let mut edited = goal_json();
    edited.title = "Ship v2".to_string();
    edited.milestones.clear();

    let state = state
      .reduce(GoalListAction::Upsert(edited));
    assert_eq!(state.goals[0].title, "Ship v2");
    assert_eq!(state.goals[0].milestones.len(), 2);
  }

  #[test]
  fn toggling_a_task_then_rolling_back() {
    let state = loaded();
    let (_, previous) =
      state.task("m1", "t1").expect("task");

    let state = state.reduce(
      GoalDetailAction::PatchTask {
        milestone_id: "m1".to_string(),
        task_id:      "t1".to_string(),
        patch:        TaskPatch::completion(
          true
        )
      }
    );
    assert!(
      state
        .task("m1", "t1")
        .expect("task")
        .1
        .completed
    );

    let state = state.reduce(
      GoalDetailAction::UpsertTask(previous)
    );
    assert!(
      !state
        .task("m1", "t1")
        .expect("task")
        .1
        .completed
    );
  }

  #[test]
  fn removed_task_restores_at_original_index(
  ) {
    let state = loaded();
    let (index, task) =
      state.task("m1", "t1").expect("task");
    let state = state
      .reduce(GoalDetailAction::RemoveTask {
        milestone_id: "m1".to_string(),
        task_id:      "t1".to_string()
      })
      .reduce(GoalDetailAction::RestoreTask(
        index, task
      ));
    let (_, milestone) =
      state.milestone("m1").expect("m1");
    assert_eq!(milestone.tasks[0].id, "t1");
    assert_eq!(milestone.tasks.len(), 2);
  }

  #[test]
  fn milestone_upsert_keeps_loaded_tasks() {
    let state = loaded();
    let (_, mut renamed) =
      state.milestone("m1").expect("m1");
    renamed.title = "Design v2".to_string();
    renamed.tasks.clear();

    let state = state.reduce(
      GoalDetailAction::UpsertMilestone(
        renamed
      )
    );
    let (_, milestone) =
      state.milestone("m1").expect("m1");
    assert_eq!(milestone.title, "Design v2");
    assert_eq!(milestone.tasks.len(), 2);
  }

  #[test]
  fn set_goal_keeps_milestones_and_moves_reorder(
  ) {
    let mut bare = goal_json();
    bare.milestones.clear();
    bare.status = GoalStatus::Completed;

    let state = loaded()
      .reduce(GoalDetailAction::SetGoal(bare))
      .reduce(GoalDetailAction::MoveMilestone(
        0, 1
      ));
    let goal = state.goal.as_ref().expect("goal");
    assert_eq!(goal.status, GoalStatus::Completed);
    assert_eq!(goal.milestones[0].id, "m2");
    assert_eq!(goal.milestones[1].id, "m1");
  }

  #[test]
  fn actions_before_load_are_ignored() {
    let state = Rc::new(GoalDetailState::default())
      .reduce(GoalDetailAction::RemoveMilestone(
        "m1".to_string()
      ));
    assert!(state.goal.is_none());
    assert_eq!(state.load, LoadState::Loading);
  }
}

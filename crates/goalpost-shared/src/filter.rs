use std::cmp::Ordering;

use crate::model::{
  Goal,
  GoalStatus,
  Priority,
  Task
};
use crate::progress::goal_progress;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum GoalTab {
  #[default]
  All,
  Active,
  Completed,
  OnHold
}

impl GoalTab {
  pub fn all() -> [Self; 4] {
    [
      Self::All,
      Self::Active,
      Self::Completed,
      Self::OnHold
    ]
  }

  pub fn key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Active => "active",
      | Self::Completed => "completed",
      | Self::OnHold => "on_hold"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Active => "Active",
      | Self::Completed => "Completed",
      | Self::OnHold => "On hold"
    }
  }

  pub fn from_key(raw: &str) -> Self {
    Self::all()
      .into_iter()
      .find(|tab| tab.key() == raw.trim())
      .unwrap_or_default()
  }

  pub fn matches(
    self,
    status: GoalStatus
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Active => matches!(
        status,
        GoalStatus::NotStarted
          | GoalStatus::InProgress
      ),
      | Self::Completed => {
        status == GoalStatus::Completed
      }
      | Self::OnHold => {
        status == GoalStatus::OnHold
      }
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum GoalSort {
  #[default]
  Recent,
  DueDate,
  Priority,
  Progress,
  Title
}

impl GoalSort {
  pub fn all() -> [Self; 5] {
    [
      Self::Recent,
      Self::DueDate,
      Self::Priority,
      Self::Progress,
      Self::Title
    ]
  }

  pub fn key(self) -> &'static str {
    match self {
      | Self::Recent => "recent",
      | Self::DueDate => "due_date",
      | Self::Priority => "priority",
      | Self::Progress => "progress",
      | Self::Title => "title"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Recent => "Newest",
      | Self::DueDate => "Due date",
      | Self::Priority => "Priority",
      | Self::Progress => "Progress",
      | Self::Title => "Title"
    }
  }

  pub fn from_key(raw: &str) -> Self {
    Self::all()
      .into_iter()
      .find(|sort| {
        sort.key() == raw.trim()
      })
      .unwrap_or_default()
  }
}

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct GoalQuery {
  pub tab:      GoalTab,
  pub search:   String,
  pub priority: Option<Priority>,
  pub sort:     GoalSort
}

fn contains_folded(
  haystack: &str,
  needle: &str
) -> bool {
  haystack
    .to_lowercase()
    .contains(needle)
}

fn goal_matches_search(
  goal: &Goal,
  needle: &str
) -> bool {
  if needle.is_empty() {
    return true;
  }

  contains_folded(&goal.title, needle)
    || contains_folded(
      &goal.description,
      needle
    )
    || goal
      .category
      .as_deref()
      .is_some_and(|category| {
        contains_folded(category, needle)
      })
}

fn compare_goals(
  sort: GoalSort,
  left: &Goal,
  right: &Goal
) -> Ordering {
  match sort {
    | GoalSort::Recent => right
      .created_at
      .cmp(&left.created_at),
    | GoalSort::DueDate => {
      match (left.end_date, right.end_date)
      {
        | (Some(a), Some(b)) => a.cmp(&b),
        | (Some(_), None) => {
          Ordering::Less
        }
        | (None, Some(_)) => {
          Ordering::Greater
        }
        | (None, None) => Ordering::Equal
      }
    }
    | GoalSort::Priority => left
      .priority
      .rank()
      .cmp(&right.priority.rank()),
    | GoalSort::Progress => {
      goal_progress(right)
        .cmp(&goal_progress(left))
    }
    | GoalSort::Title => left
      .title
      .to_lowercase()
      .cmp(&right.title.to_lowercase())
  }
}

pub fn filter_goals(
  goals: &[Goal],
  query: &GoalQuery
) -> Vec<Goal> {
  let needle =
    query.search.trim().to_lowercase();

  let mut visible: Vec<Goal> = goals
    .iter()
    .filter(|goal| {
      query.tab.matches(goal.status)
    })
    .filter(|goal| {
      query.priority.is_none_or(
        |priority| {
          goal.priority == priority
        }
      )
    })
    .filter(|goal| {
      goal_matches_search(goal, &needle)
    })
    .cloned()
    .collect();

  visible.sort_by(|left, right| {
    compare_goals(query.sort, left, right)
  });
  visible
}

pub fn tab_counts(
  goals: &[Goal]
) -> Vec<(GoalTab, usize)> {
  GoalTab::all()
    .into_iter()
    .map(|tab| {
      let count = goals
        .iter()
        .filter(|goal| {
          tab.matches(goal.status)
        })
        .count();
      (tab, count)
    })
    .collect()
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum TaskFilter {
  #[default]
  All,
  Open,
  Done
}

impl TaskFilter {
  pub fn all() -> [Self; 3] {
    [Self::All, Self::Open, Self::Done]
  }

  pub fn key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Open => "open",
      | Self::Done => "done"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Open => "Open",
      | Self::Done => "Done"
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Open => !task.completed,
      | Self::Done => task.completed
    }
  }
}

pub fn filter_tasks(
  tasks: &[Task],
  filter: TaskFilter
) -> Vec<Task> {
  tasks
    .iter()
    .filter(|task| filter.matches(task))
    .cloned()
    .collect()
}

pub fn search_tasks(
  tasks: &[Task],
  query: &str
) -> Vec<Task> {
  let needle =
    query.trim().to_lowercase();
  tasks
    .iter()
    .filter(|task| {
      needle.is_empty()
        || contains_folded(
          &task.title,
          &needle
        )
        || task
          .description
          .as_deref()
          .is_some_and(|description| {
            contains_folded(
              description,
              &needle
            )
          })
    })
    .cloned()
    .collect()
}

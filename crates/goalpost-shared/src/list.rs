use crate::model::{
  Goal,
  Milestone,
  Task
};

pub trait Identified {
  fn id(&self) -> &str;
}

impl Identified for Goal {
  fn id(&self) -> &str {
    &self.id
  }
}

impl Identified for Milestone {
  fn id(&self) -> &str {
    &self.id
  }
}

impl Identified for Task {
  fn id(&self) -> &str {
    &self.id
  }
}

pub fn position<T: Identified>(
  list: &[T],
  id: &str
) -> Option<usize> {
  list.iter().position(|item| item.id() == id)
}

/// Replaces the item with the same id in
/// place, or appends it.
pub fn upsert<T: Identified>(
  list: &mut Vec<T>,
  item: T
) {
  match position(list, item.id()) {
    | Some(index) => list[index] = item,
    | None => list.push(item)
  }
}

/// Removes an item and reports where it was,
/// so a failed request can put it back.
pub fn remove<T: Identified>(
  list: &mut Vec<T>,
  id: &str
) -> Option<(usize, T)> {
  let index = position(list, id)?;
  Some((index, list.remove(index)))
}

pub fn restore<T>(
  list: &mut Vec<T>,
  index: usize,
  item: T
) {
  let index = index.min(list.len());
  list.insert(index, item);
}

/// Applies `f` to the matching item and
/// returns its previous value.
pub fn update_with<T, F>(
  list: &mut [T],
  id: &str,
  f: F
) -> Option<T>
where
  T: Identified + Clone,
  F: FnOnce(&mut T)
{
  let item = list
    .iter_mut()
    .find(|item| item.id() == id)?;
  let previous = item.clone();
  f(item);
  Some(previous)
}

/// Drag-and-drop reorder. Out-of-range
/// indices leave the list untouched.
pub fn move_item<T>(
  list: &mut Vec<T>,
  from: usize,
  to: usize
) -> bool {
  if from >= list.len()
    || to >= list.len()
    || from == to
  {
    return false;
  }

  let item = list.remove(from);
  list.insert(to, item);
  true
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::Priority;

  fn task(id: &str, done: bool) -> Task {
    Task {
      id:           id.to_string(),
      milestone_id: "m".to_string(),
      title:        id.to_uppercase(),
      description:  None,
      due_date:     None,
      priority:     Priority::Medium,
      completed:    done,
      created_at:   None
    }
  }

  fn ids(list: &[Task]) -> Vec<&str> {
    list
      .iter()
      .map(|task| task.id.as_str())
      .collect()
  }

  #[test]
  fn upsert_replaces_in_place_or_appends() {
    let mut list =
      vec![task("a", false), task("b", false)];
    upsert(&mut list, task("a", true));
    upsert(&mut list, task("c", false));
    assert_eq!(ids(&list), vec![
      "a", "b", "c"
    ]);
    assert!(list[0].completed);
  }

  #[test]
  fn remove_then_restore_keeps_order() {
    let mut list = vec![
      task("a", false),
      task("b", false),
      task("c", false),
    ];
    let (index, removed) =
      remove(&mut list, "b")
        .expect("b present");
    assert_eq!(index, 1);
    assert_eq!(ids(&list), vec!["a", "c"]);

    restore(&mut list, index, removed);
    assert_eq!(ids(&list), vec![
      "a", "b", "c"
    ]);
    assert!(remove(&mut list, "z").is_none());
  }

  #[test]
  fn restore_clamps_stale_index() {
    let mut list = vec![task("a", false)];
    restore(&mut list, 9, task("b", false));
    assert_eq!(ids(&list), vec!["a", "b"]);
  }

  #[test]
  fn update_with_returns_previous_value() {
    let mut list = vec![task("a", false)];
    let previous =
      update_with(&mut list, "a", |task| {
        task.completed = true;
      })
      .expect("a present");
    assert!(!previous.completed);
    assert!(list[0].completed);
    assert!(
      update_with(&mut list, "z", |_| {})
        .is_none()
    );
  }

  #[test]
  fn move_item_reorders_and_ignores_bad_indices(
  ) {
    let mut list = vec![
      task("a", false),
      task("b", false),
      task("c", false),
    ];
    assert!(move_item(&mut list, 0, 2));
    assert_eq!(ids(&list), vec![
      "b", "c", "a"
    ]);
    assert!(move_item(&mut list, 2, 0));
    assert_eq!(ids(&list), vec![
      "a", "b", "c"
    ]);
    assert!(!move_item(&mut list, 1, 1));
    assert!(!move_item(&mut list, 5, 0));
    assert_eq!(ids(&list), vec![
      "a", "b", "c"
    ]);
  }
}

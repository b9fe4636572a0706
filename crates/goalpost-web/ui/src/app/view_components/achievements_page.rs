use goalpost_shared::stats::achievements;
use yew::{
  Html,
  function_component,
  html
};

use super::{
  render_load_state,
  use_goal_list
};
use crate::components::AchievementCard;

#[function_component(AchievementsPage)]
pub fn achievements_page() -> Html {
  let list = use_goal_list();

  if let Some(placeholder) =
    render_load_state(&list.load)
  {
    return placeholder;
  }

  let catalog = achievements(&list.goals);
  let unlocked = catalog
    .iter()
    .filter(|achievement| achievement.unlocked)
    .count();

  html! {
      <section class="page achievements">
          <div class="page-head">
              <h1>{ "Achievements" }</h1>
              <span class="badge">{ format!("{unlocked}/{} unlocked", catalog.len()) }</span>
          </div>
          <div class="achievement-grid">
              {
                  for catalog.into_iter().map(|achievement| {
                      let key = achievement.key;
                      html! { <AchievementCard key={key} {achievement} /> }
                  })
              }
          </div>
      </section>
  }
}

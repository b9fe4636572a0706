use goalpost_shared::stats::Achievement;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::ProgressBar;
use crate::app::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct AchievementCardProps {
  pub achievement: Achievement
}

#[function_component(AchievementCard)]
pub fn achievement_card(
  props: &AchievementCardProps
) -> Html {
  let theme = use_theme();
  let achievement = &props.achievement;

  html! {
      <div class={classes!(
          "panel",
          "achievement",
          theme.is_dark().then_some("panel-dark"),
          if achievement.unlocked { "unlocked" } else { "locked" }
      )}>
          <div class="achievement-icon">{ achievement.icon }</div>
          <div class="achievement-title">{ achievement.title }</div>
          <div class="achievement-description">{ achievement.description }</div>
          {
              if achievement.unlocked {
                  html! { <span class="badge status-completed">{ "Unlocked" }</span> }
              } else {
                  html! {
                      <>
                          <ProgressBar value={achievement.percent()} compact={true} />
                          <div class="stat-hint">
                              { format!("{}/{}", achievement.current.min(achievement.target), achievement.target) }
                          </div>
                      </>
                  }
              }
          }
      </div>
  }
}

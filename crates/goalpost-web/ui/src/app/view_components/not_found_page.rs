use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::routes::Route;
use crate::components::EmptyState;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
  html! {
      <section class="page">
          <EmptyState title="Page not found" detail="The page you asked for does not exist.">
              <Link<Route> to={Route::Dashboard} classes="btn">{ "Back to dashboard" }</Link<Route>>
          </EmptyState>
      </section>
  }
}

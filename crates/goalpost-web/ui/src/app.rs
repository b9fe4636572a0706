use chrono::{
  Local,
  NaiveDate
};
use gloo::console::log;

mod component;
pub mod config;
pub mod forms;
pub mod routes;
pub mod session;
mod state;
mod storage;
pub mod theme;
pub mod toast;
mod view_components;

pub use component::App;

pub(crate) fn today() -> NaiveDate {
  Local::now().date_naive()
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

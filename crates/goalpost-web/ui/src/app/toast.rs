use std::rc::Rc;

use gloo::timers::callback::Timeout;
use uuid::Uuid;
use yew::{
  Callback,
  ContextProvider,
  Html,
  Properties,
  Reducible,
  function_component,
  hook,
  html,
  use_context,
  use_reducer
};

use super::config::use_config;

/// Older toasts beyond this are dropped.
const MAX_VISIBLE_TOASTS: usize = 4;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ToastKind {
  Success,
  Error,
  Info
}

impl ToastKind {
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Success => "toast success",
      | Self::Error => "toast error",
      | Self::Info => "toast info"
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
  pub id:      Uuid,
  pub kind:    ToastKind,
  pub message: String
}

impl Toast {
  pub fn new(
    kind: ToastKind,
    message: impl Into<String>
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      kind,
      message: message.into()
    }
  }
}

pub enum ToastAction {
  Push(Toast),
  Dismiss(Uuid)
}

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct ToastList {
  pub toasts: Vec<Toast>
}

impl Reducible for ToastList {
  type Action = ToastAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut toasts = self.toasts.clone();
    match action {
      | ToastAction::Push(toast) => {
        toasts.push(toast);
        let overflow = toasts
          .len()
          .saturating_sub(MAX_VISIBLE_TOASTS);
        toasts.drain(..overflow);
      }
      | ToastAction::Dismiss(id) => {
        toasts.retain(|toast| toast.id != id);
      }
    }
    Rc::new(Self { toasts })
  }
}

#[derive(Clone, PartialEq)]
pub struct Toaster {
  pub toasts:  Vec<Toast>,
  pub push:    Callback<Toast>,
  pub dismiss: Callback<Uuid>
}

impl Toaster {
  pub fn success(
    &self,
    message: impl Into<String>
  ) {
    self.push.emit(Toast::new(
      ToastKind::Success,
      message
    ));
  }

  pub fn error(
    &self,
    message: impl Into<String>
  ) {
    self
      .push
      .emit(Toast::new(ToastKind::Error, message));
  }

  pub fn info(
    &self,
    message: impl Into<String>
  ) {
    self
      .push
      .emit(Toast::new(ToastKind::Info, message));
  }
}

#[hook]
pub fn use_toaster() -> Toaster {
  use_context::<Toaster>().unwrap_or_else(
    || Toaster {
      toasts:  Vec::new(),
      push:    Callback::from(|toast: Toast| {
        tracing::warn!(
          message = %toast.message,
          "toast raised outside provider"
        );
      }),
      dismiss: Callback::noop()
    }
  )
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
  pub children: Html
}

#[function_component(ToastProvider)]
pub fn toast_provider(
  props: &ToastProviderProps
) -> Html {
  let config = use_config();
  let list = use_reducer(ToastList::default);

  let push = {
    let dispatcher = list.dispatcher();
    let dismiss_ms =
      config.ui.toast_dismiss_ms;
    Callback::from(move |toast: Toast| {
      let id = toast.id;
      tracing::debug!(
        kind = ?toast.kind,
        message = %toast.message,
        "toast"
      );
      dispatcher
        .dispatch(ToastAction::Push(toast));
      let dispatcher = dispatcher.clone();
      Timeout::new(dismiss_ms, move || {
        dispatcher
          .dispatch(ToastAction::Dismiss(id));
      })
      .forget();
    })
  };

  let dismiss = {
    let dispatcher = list.dispatcher();
    Callback::from(move |id: Uuid| {
      dispatcher
        .dispatch(ToastAction::Dismiss(id));
    })
  };

  let toaster = Toaster {
    toasts: list.toasts.clone(),
    push,
    dismiss
  };

  html! {
      <ContextProvider<Toaster> context={toaster}>
          { props.children.clone() }
      </ContextProvider<Toaster>>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn push_caps_visible_toasts() {
    let mut list = Rc::new(ToastList::default());
    for index in 0..6 {
      list = list.reduce(ToastAction::Push(
        Toast::new(
          ToastKind::Info,
          format!("toast {index}")
        )
      ));
    }
    let messages: Vec<&str> = list
      .toasts
      .iter()
      .map(|toast| toast.message.as_str())
      .collect();
    assert_eq!(messages, vec![
      "toast 2", "toast 3", "toast 4",
      "toast 5"
    ]);
  }

  #[test]
  fn dismiss_removes_only_matching_toast() {
    let first =
      Toast::new(ToastKind::Error, "boom");
    let second =
      Toast::new(ToastKind::Success, "saved");
    let list = Rc::new(ToastList::default())
      .reduce(ToastAction::Push(first.clone()))
      .reduce(ToastAction::Push(second.clone()))
      .reduce(ToastAction::Dismiss(first.id));
    assert_eq!(list.toasts, vec![second]);
  }
}

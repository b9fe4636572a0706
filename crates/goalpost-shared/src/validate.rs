use thiserror::Error;

use crate::model::{
  GoalCreate,
  LoginRequest,
  MilestoneCreate,
  RegisterRequest,
  TaskCreate
};

pub const TITLE_MAX_CHARS: usize = 120;
pub const PASSWORD_MIN_CHARS: usize = 6;

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum ValidationError {
  #[error("{0} is required")]
  Required(&'static str),
  #[error(
    "{field} must be at most {max} \
     characters"
  )]
  TooLong {
    field: &'static str,
    max:   usize
  },
  #[error(
    "start date must not be after the end \
     date"
  )]
  DateRange,
  #[error("enter a valid email address")]
  Email,
  #[error(
    "password must be at least {0} \
     characters"
  )]
  PasswordTooShort(usize),
  #[error("passwords do not match")]
  PasswordMismatch
}

fn title(
  field: &'static str,
  value: &str
) -> Result<(), ValidationError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(ValidationError::Required(
      field
    ));
  }
  if trimmed.chars().count()
    > TITLE_MAX_CHARS
  {
    return Err(ValidationError::TooLong {
      field,
      max: TITLE_MAX_CHARS
    });
  }
  Ok(())
}

fn email(
  value: &str
) -> Result<(), ValidationError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(ValidationError::Required(
      "email"
    ));
  }
  match trimmed.split_once('@') {
    | Some((local, domain))
      if !local.is_empty()
        && !domain.is_empty() =>
    {
      Ok(())
    }
    | _ => Err(ValidationError::Email)
  }
}

pub fn validate_goal(
  draft: &GoalCreate
) -> Result<(), ValidationError> {
  title("title", &draft.title)?;
  if let (Some(start), Some(end)) =
    (draft.start_date, draft.end_date)
    && start > end
  {
    return Err(ValidationError::DateRange);
  }
  Ok(())
}

pub fn validate_milestone(
  draft: &MilestoneCreate
) -> Result<(), ValidationError> {
  title("title", &draft.title)
}

pub fn validate_task(
  draft: &TaskCreate
) -> Result<(), ValidationError> {
  title("title", &draft.title)
}

pub fn validate_login(
  request: &LoginRequest
) -> Result<(), ValidationError> {
  email(&request.email)?;
  if request.password.is_empty() {
    return Err(ValidationError::Required(
      "password"
    ));
  }
  Ok(())
}

pub fn validate_register(
  request: &RegisterRequest,
  confirmation: &str
) -> Result<(), ValidationError> {
  if request.name.trim().is_empty() {
    return Err(ValidationError::Required(
      "name"
    ));
  }
  email(&request.email)?;
  if request.password.chars().count()
    < PASSWORD_MIN_CHARS
  {
    return Err(
      ValidationError::PasswordTooShort(
        PASSWORD_MIN_CHARS
      )
    );
  }
  if request.password != confirmation {
    return Err(
      ValidationError::PasswordMismatch
    );
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  #[test]
  fn goal_requires_title_and_ordered_dates()
  {
    let mut draft = GoalCreate {
      title: "   ".to_string(),
      ..GoalCreate::default()
    };
    assert_eq!(
      validate_goal(&draft),
      Err(ValidationError::Required(
        "title"
      ))
    );

    draft.title = "Ship it".to_string();
    draft.start_date =
      NaiveDate::from_ymd_opt(2026, 5, 2);
    draft.end_date =
      NaiveDate::from_ymd_opt(2026, 5, 1);
    assert_eq!(
      validate_goal(&draft),
      Err(ValidationError::DateRange)
    );

    draft.end_date = draft.start_date;
    assert_eq!(validate_goal(&draft), Ok(()));
  }

  #[test]
  fn long_titles_are_rejected() {
    let draft = TaskCreate {
      title: "x".repeat(TITLE_MAX_CHARS + 1),
      ..TaskCreate::default()
    };
    assert!(matches!(
      validate_task(&draft),
      Err(ValidationError::TooLong { .. })
    ));
  }

  #[test]
  fn login_checks_email_shape() {
    let request = LoginRequest {
      email:    "nobody".to_string(),
      password: "secret".to_string()
    };
    assert_eq!(
      validate_login(&request),
      Err(ValidationError::Email)
    );

    let request = LoginRequest {
      email:    "a@b.io".to_string(),
      password: String::new()
    };
    assert_eq!(
      validate_login(&request),
      Err(ValidationError::Required(
        "password"
      ))
    );
  }

  #[test]
  fn register_checks_password_rules() {
    let request = RegisterRequest {
      name:     "Ada".to_string(),
      email:    "ada@example.com".to_string(),
      password: "abc".to_string()
    };
    assert_eq!(
      validate_register(&request, "abc"),
      Err(
        ValidationError::PasswordTooShort(
          6
        )
      )
    );

    let request = RegisterRequest {
      password: "abcdef".to_string(),
      ..request
    };
    assert_eq!(
      validate_register(&request, "abcdeg"),
      Err(ValidationError::PasswordMismatch)
    );
    assert_eq!(
      validate_register(&request, "abcdef"),
      Ok(())
    );
  }

  #[test]
  fn messages_read_naturally() {
    assert_eq!(
      ValidationError::Required("title")
        .to_string(),
      "title is required"
    );
    assert_eq!(
      ValidationError::PasswordTooShort(6)
        .to_string(),
      "password must be at least 6 \
       characters"
    );
  }
}

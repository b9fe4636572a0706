//! Domain types and derived-state helpers for
//! the Goalpost frontend. Everything here is
//! plain data, so it builds and tests natively.

pub mod filter;
pub mod list;
pub mod model;
pub mod progress;
pub mod stats;
pub mod validate;

pub use model::{
  ApiMessage,
  AuthResponse,
  Goal,
  GoalCreate,
  GoalPatch,
  GoalStatus,
  LoginRequest,
  Milestone,
  MilestoneCreate,
  MilestonePatch,
  Priority,
  RegisterRequest,
  Task,
  TaskCreate,
  TaskPatch,
  User
};

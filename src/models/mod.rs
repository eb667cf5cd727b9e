mod user;

pub use user::{CreateUserRequest, Role, User};

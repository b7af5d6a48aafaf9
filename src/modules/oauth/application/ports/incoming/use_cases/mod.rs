pub mod sign_in;

pub use sign_in::{SignInError, SignInUseCase};

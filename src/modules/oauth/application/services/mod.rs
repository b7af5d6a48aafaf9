mod sign_in_service;

pub use sign_in_service::SignInService;

//! Business services sitting between handlers and repositories.

pub mod registration;

pub use registration::RegistrationService;

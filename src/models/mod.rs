pub mod context;
pub mod contractor;
pub mod directory;
pub mod event;
pub mod health;
pub mod localization;
pub mod messaging;
pub mod request;
pub mod result;
pub mod retry;
pub mod template;

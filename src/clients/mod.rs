pub mod directory;
pub mod health;
pub mod localization;
pub mod messaging;
pub mod messenger;

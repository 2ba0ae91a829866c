pub mod check;
pub mod inventory;
pub mod ordinal;
pub mod prompt;
pub mod render;
pub mod status;
pub mod view;

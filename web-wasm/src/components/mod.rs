//! UIコンポーネント

pub mod admin;
pub mod article_form;
pub mod header;
pub mod home;
pub mod inputs;
pub mod list_field;
pub mod login;
pub mod not_found;
pub mod project_case;
pub mod project_form;
pub mod record_list;
pub mod writings;

pub mod get_profile;
pub mod login;
pub mod register;
pub mod update_profile;

mod create;
mod get_for_user;

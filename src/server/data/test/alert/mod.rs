mod create;
mod get_active_for_user;
mod soft_delete;

mod create;
mod get_by_email;
mod get_by_id;

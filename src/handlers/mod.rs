pub mod create;
pub mod delete;
pub mod list;
pub mod not_found;
pub mod replace;

pub use create::create_handler;
pub use delete::delete_handler;
pub use list::list_handler;
pub use not_found::route_not_found;
pub use replace::replace_handler;

pub mod handlers;
pub mod replies;
pub mod summary;

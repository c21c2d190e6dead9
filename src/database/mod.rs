pub mod schema;
pub mod waitlist_repo;

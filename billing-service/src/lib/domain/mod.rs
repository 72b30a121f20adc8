pub mod client;
pub mod complaint;
pub mod invoice;
pub mod user;

pub mod client;
pub mod complaint;
pub mod invoice;
pub mod user;

pub use client::PostgresClientRepository;
pub use complaint::PostgresComplaintRepository;
pub use invoice::PostgresInvoiceRepository;
pub use user::PostgresUserRepository;

pub mod app_config;
pub mod database;
pub mod file_storage;
pub mod offer_repo;
pub mod order_repo;
pub mod profile_repo;
pub mod review_repo;

pub use app_config::Config;
pub use database::DbClient;
pub use file_storage::LocalFileStore;
pub use offer_repo::PgOfferRepository;
pub use order_repo::PgOrderRepository;
pub use profile_repo::PgProfileRepository;
pub use review_repo::PgReviewRepository;

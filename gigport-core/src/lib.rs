pub mod error;
pub mod files;
pub mod identity;
pub mod pagination;
pub mod review;

pub use error::{BoxError, DomainError, FieldErrors};
pub use files::FileStore;
pub use identity::{AuthRecord, NewUser, ProfileRecord, ProfileRepository, ProfileType, ProfileUpdate};
pub use pagination::{paginate, Page};
pub use review::{NewReview, Review, ReviewFilters, ReviewOrdering, ReviewRepository, ReviewUpdate};

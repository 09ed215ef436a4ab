mod error;
mod http_mapping;
mod traits;
mod unit_of_work;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::ItemRepository;
pub use unit_of_work::{AppliedChange, ItemChange, UnitOfWork};

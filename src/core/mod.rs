//! Core domain types and the pure filter/sort/paginate pipeline

pub mod error;
pub mod filter;
pub mod listing;
pub mod model;
pub mod paginate;
pub mod sort;
pub mod validate;

pub use error::{ApiError, ApiResult, ErrorResponse, FieldError, ValidationError};
pub use filter::FilterOptions;
pub use listing::{ListingSession, page_window};
pub use model::{ExperienceLevel, Lawyer, LawyerId, LawyerPatch, NewLawyer, PracticeArea};
pub use paginate::{DEFAULT_PAGE_SIZE, Page, PageMeta, paginate};
pub use sort::{SortKey, sort_lawyers};

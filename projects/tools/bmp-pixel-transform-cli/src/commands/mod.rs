pub mod inspect;
pub mod list_filters;
pub mod transform;

//! UI components for the discovery screen

pub mod adventure_detail;
pub mod adventure_filters;
pub mod adventure_list;
pub mod common;
pub mod map_section;
pub mod prompt_section;

pub use adventure_detail::AdventureDetail;
pub use adventure_filters::AdventureFilters;
pub use adventure_list::AdventureList;
pub use common::NoticeToast;
pub use map_section::MapSection;
pub use prompt_section::PromptSection;

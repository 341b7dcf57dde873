pub mod hierarchy_filter;
pub mod paging;

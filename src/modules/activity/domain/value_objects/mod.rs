mod activity_filter;

pub use activity_filter::ActivityFilter;

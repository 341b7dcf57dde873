mod page;

pub use page::FeedbackFiltersPage;

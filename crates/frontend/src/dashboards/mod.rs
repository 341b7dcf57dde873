pub mod d400_feedback_filters;

pub use d400_feedback_filters::ui::FeedbackFiltersPage;

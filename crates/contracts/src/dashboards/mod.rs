pub mod d400_feedback_filters;

//! Command implementations

pub mod hint;
pub mod simple;
pub mod survey;

pub use hint::{HintResult, hint_for, possible_words};
pub use simple::{play_lines, run_simple};
pub use survey::{RootSurvey, SurveyResult, run_survey};

mod form_vm;
mod results_vm;
mod time_fmt;

pub use form_vm::{FormIntent, FormVm, SubmitPhase, submit_assessment};
pub use results_vm::{CategoryBarVm, RecommendationVm, ResultsVm, map_results};
pub use time_fmt::format_date;

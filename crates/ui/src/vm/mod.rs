mod course_vm;
mod result_vm;
mod time_fmt;
mod user_vm;

pub use course_vm::{CourseCardVm, CourseDetailVm, MaterialVm, map_course_cards, map_materials};
pub use result_vm::{
    ResultRowVm, ResultsOverviewVm, map_result_rows, results_overview,
};
pub use time_fmt::{format_date, format_datetime};
pub use user_vm::{UserRowVm, filter_users, map_user_rows};

use crate::views::layout;

pub fn page() -> String {
    layout::page(
        "Job Tracker",
        "<h1>Job Tracker</h1>\n<p>Track your job applications in one place.</p>",
    )
}

use indicatif::{ProgressBar, ProgressStyle};

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.set_style(ProgressStyle::with_template(" {spinner} {msg}").unwrap());
    spinner
}

use std::io::{BufRead, Write};
use std::path::Path;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::chat::build_request;
use crate::client::ChatCompletion;
use crate::constants::{EMPTY_INPUT_REMINDER, QUESTION_PROMPT, QUIT_COMMAND, WAITING_MESSAGE};
use crate::error::Result;

pub async fn run_loop<C, R, W>(
    client: &C,
    model: &str,
    image_path: &Path,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    C: ChatCompletion,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", QUESTION_PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like quit
            break;
        }
        let prompt = line.trim_end_matches('\n').trim_end_matches('\r');

        if prompt.eq_ignore_ascii_case(QUIT_COMMAND) {
            break;
        }
        if prompt.is_empty() {
            writeln!(output, "{}\n", EMPTY_INPUT_REMINDER.yellow())?;
            continue;
        }

        let request = build_request(model, prompt, image_path)?;
        let spinner = create_spinner(WAITING_MESSAGE.to_string());
        let answer = client.complete(&request).await;
        spinner.finish_and_clear();

        writeln!(output, "{}", answer?)?;
    }

    Ok(())
}

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.magenta} {msg}"),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

use crate::store::{Question, QuestionKind};

pub const WELCOME: &str = "Welcome to the Interactive Quiz Game!\nAnswer the following questions. Good luck!\n";
pub const ANSWER_PROMPT: &str = "> ";
pub const REPLAY_PROMPT: &str = "\nWould you like to play again? (yes/no): ";
pub const FAREWELL: &str = "Thanks for playing!";

/// Renders the full prompt for the question at `index` (0-based) out of `total`.
pub fn render(question: &Question, index: usize, total: usize) -> String {
    let mut text = format!(
        "\nQuestion {}/{}\nPoints: {}\n{}\n",
        index + 1,
        total,
        question.points(),
        question.text()
    );

    match question.kind() {
        QuestionKind::MultipleChoice { .. } => {
            let options = question.options();
            text.push_str(&options_list(&options));
            text.push_str(&format!(
                "Enter the number of your answer (1-{}):\n",
                options.len()
            ));
        }
        QuestionKind::TrueFalse { .. } => {
            text.push_str(&options_list(&question.options()));
            text.push_str("Enter 1 or 2:\n");
        }
        QuestionKind::MultiSelect { .. } => {
            text.push_str(&options_list(&question.options()));
            text.push_str(
                "Enter the numbers of all correct answers separated by commas (e.g., 1,3):\n",
            );
        }
        QuestionKind::FillBlank { .. } => text.push_str("Fill in the blank. Enter your answer:\n"),
        QuestionKind::ShortAnswer { .. } => text.push_str("Enter your answer:\n"),
    }

    text
}

fn options_list(options: &[&str]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}. {}\n", i + 1, option))
        .collect()
}

use dotenvy::dotenv;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use quizgame::console;
use quizgame::error::QuizError;
use quizgame::prompt::{FAREWELL, WELCOME};
use quizgame::runner;
use quizgame::store::{load_questions, JsonFileStore, LoadSource};
use quizgame::{Config, Session};

#[tokio::main]
async fn main() {
    dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from_level(config.log_level))
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_line_number(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(raw) = &config.rejected_log_level {
        tracing::warn!("Ignoring invalid LOG_LEVEL {:?}", raw);
    }

    if let Err(e) = play(&config).await {
        tracing::error!("Quiz aborted: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn play(config: &Config) -> Result<(), QuizError> {
    let mut console = console::stdio();

    let store = JsonFileStore::new(&config.questions_path);
    let loaded = load_questions(&store).await;
    if let LoadSource::Fallback(e) = &loaded.source {
        console.say(&format!("Error loading questions: {e}")).await?;
    }

    let mut session = Session::new(loaded.questions);
    console.say(WELCOME).await?;
    let passes = runner::run(&mut session, &mut console).await?;
    tracing::info!("Session finished after {} passes", passes);
    console.say(FAREWELL).await?;

    Ok(())
}

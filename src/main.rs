//! Terminal front end for the addition drill.
//!
//! Shows the splash for its configured duration, runs one game of numbered
//! multiple-choice questions read from stdin, then prints the results.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use clap::Parser;

use arith_drill_gen::{
    generate_exercises, DifficultyLevel, Feedback, GameSession, GameSettings, QuizRound,
    ResultSummary, RoundStatus, Timeline,
};

#[derive(Debug, Parser)]
#[command(name = "arith-drill", about = "Addition practice for kids")]
struct Cli {
    /// easy (1-10), medium (1-20) or hard (1-50)
    #[arg(short, long)]
    difficulty: Option<DifficultyLevel>,

    /// Number of exercises: 5, 10 or 20
    #[arg(short, long)]
    count: Option<usize>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// JSON settings file; flags override its values
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Skip the splash screen
    #[arg(long)]
    no_splash: bool,
}

#[derive(Debug, Clone, Copy)]
enum AppEvent {
    SplashDone,
}

fn load_settings(cli: &Cli) -> Result<GameSettings, Box<dyn std::error::Error>> {
    let mut settings = match &cli.settings {
        Some(path) => GameSettings::from_json(&std::fs::read_to_string(path)?)?,
        None => GameSettings::default(),
    };
    if let Some(d) = cli.difficulty {
        settings.difficulty = d;
    }
    if let Some(c) = cli.count {
        settings.exercise_count = c;
    }
    settings.validate()?;
    Ok(settings)
}

fn show_splash(settings: &GameSettings) {
    println!();
    println!("  ✨ Addition Adventure ✨");
    println!();
    let mut timeline = Timeline::new();
    timeline.schedule(settings.splash_duration(), AppEvent::SplashDone);
    while let Some(wait) = timeline.until_next() {
        thread::sleep(wait);
        for event in timeline.advance(wait) {
            log::debug!("{event:?}");
        }
    }
}

/// Read a choice 1-4 and map it to the option value.
fn read_choice(input: &mut impl BufRead, options: &[u32; 4]) -> io::Result<Option<u32>> {
    loop {
        print!("  Your answer (1-4): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=4).contains(&n) => return Ok(Some(options[n - 1])),
            _ => println!("  Please type a number from 1 to 4."),
        }
    }
}

fn play(settings: &GameSettings, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let batch = generate_exercises(settings.generation_request(seed))?;
    log::info!(
        "{} exercises at {}",
        batch.len(),
        settings.difficulty.label()
    );

    let mut session = GameSession::new();
    session.start_game(batch);
    let mut round = QuizRound::new(settings.feedback_delay());
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(exercise) = session.current_exercise().cloned() else {
            break;
        };
        println!();
        println!("  [{:>3.0}%] {}", session.progress(), exercise.question);
        for (i, option) in exercise.options.iter().enumerate() {
            println!("    {}) {}", i + 1, option);
        }

        let Some(choice) = read_choice(&mut input, &exercise.options)? else {
            println!();
            println!("  Leaving the game.");
            round.teardown();
            return Ok(());
        };
        match round.select_option(&mut session, choice)? {
            Feedback::Correct => println!("  ✅ Correct! +10"),
            Feedback::Incorrect { correct_answer } => {
                println!("  ❌ Not quite, it was {correct_answer}")
            }
        }

        let wait = round.remaining().unwrap_or_default();
        thread::sleep(wait);
        if round.tick(&mut session, wait)? == RoundStatus::Finished {
            break;
        }
    }

    println!();
    println!("  {}", ResultSummary::from_session(&session));
    println!();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if !cli.no_splash {
        show_splash(&settings);
    }

    match play(&settings, cli.seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("game aborted: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

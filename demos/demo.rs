//! End-to-end demo of the generator and session store.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **One batch per difficulty**: fixed seeds, so the output is
//!    reproducible.
//! 2. **Hybrid batch**: a small static bank topped up with generated
//!    exercises.
//! 3. **Simulated game**: answers through a `QuizRound` on a logical clock
//!    (no real waiting), then prints the results.
//! 4. **Infeasible request**: shows the error instead of a hang.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use arith_drill_gen::{
    generate_exercises, generate_hybrid, generate_with_rng, DifficultyLevel, Exercise,
    ExerciseBank, GameSession, GenerationRequest, QuizRound, ResultSummary, RoundStatus,
};

const BANK: &str = r#"[
    {"id": 1, "operands": [10, 10], "question": "What is 10 + 10?", "correct_answer": 20,
     "options": [18, 20, 21, 19], "category": "addition", "difficulty": 2},
    {"id": 2, "operands": [8, 3], "question": "What is 8 - 3?", "correct_answer": 5,
     "options": [4, 6, 5, 7], "category": "subtraction", "difficulty": 1}
]"#;

fn print_exercise(ex: &Exercise) {
    let options: Vec<String> = ex.options.iter().map(|o| o.to_string()).collect();
    println!(
        "  #{:<2} {:<20} [{}]  answer {:>3}  tier {}  ({})",
        ex.id,
        ex.question,
        options.join(", "),
        ex.correct_answer,
        ex.difficulty,
        ex.category
    );
}

fn main() {
    // ── One batch per difficulty ─────────────────────────────────────────
    for (difficulty, seed) in DifficultyLevel::ALL.into_iter().zip([1u64, 2, 3]) {
        println!();
        println!("══ {} ══", difficulty.label());
        let batch = generate_exercises(GenerationRequest::new(5, difficulty).with_seed(seed))
            .expect("five exercises always fit");
        batch.iter().for_each(print_exercise);
    }

    // ── Hybrid ───────────────────────────────────────────────────────────
    println!();
    println!("══ Hybrid: 2 static + 3 generated ══");
    let bank = ExerciseBank::from_json(BANK).expect("demo bank is valid");
    let mut rng = StdRng::seed_from_u64(42);
    let mixed = generate_hybrid(&mut rng, bank.all(), 5, DifficultyLevel::Easy.operand_range())
        .expect("shortfall fits the easy range");
    mixed.iter().for_each(print_exercise);

    // ── Simulated game ───────────────────────────────────────────────────
    println!();
    println!("══ Simulated game ══");
    let mut session = GameSession::new();
    session.start_game(mixed);
    let mut round = QuizRound::default();
    loop {
        let ex = session.current_exercise().expect("game is running").clone();
        // Answer correctly unless the sum is odd.
        let pick = if ex.correct_answer % 2 == 0 {
            ex.correct_answer
        } else {
            ex.distractors().next().unwrap_or(ex.correct_answer)
        };
        let feedback = round.select_option(&mut session, pick).expect("round accepts answer");
        println!("  {:<20} picked {:>3}  {:?}", ex.question, pick, feedback);
        match round.tick(&mut session, Duration::from_millis(1500)).expect("round alive") {
            RoundStatus::Finished => break,
            _ => continue,
        }
    }
    println!("  {}", ResultSummary::from_session(&session));
    if let Ok(points) = session.double_points() {
        println!("  Bonus! Points doubled to {points}");
    }

    // ── Infeasible request ───────────────────────────────────────────────
    println!();
    println!("══ Infeasible request ══");
    match generate_with_rng(&mut rng, 1000, 1, 5) {
        Ok(batch) => println!("  unexpectedly got {} exercises", batch.len()),
        Err(e) => println!("  error: {e}"),
    }
}

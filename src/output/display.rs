//! Display functions for command results

use super::formatters::{code_to_pegs, create_progress_bar, feedback_to_pegs};
use crate::commands::{SolveResult, TestAllStatistics};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", code_to_pegs(&result.target));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {}  {}  ({})",
            turn,
            code_to_pegs(&step.guess),
            feedback_to_pegs(step.feedback, result.holes),
            step.feedback
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({:.1}x reduction)",
                    reduction.log2(),
                    reduction
                );
            }
        }
    }

    println!();
    let guesses = result.steps.len();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {guesses} guesses")
                .red()
                .bold()
        );
    }
}

/// Print the statistics of one strategy's sweep over all codes
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(
        " Test Results: {} ",
        stats.strategy.bright_yellow().bold()
    );
    println!("{}", "═".repeat(70));

    if stats.total_games == 0 {
        println!("\n  No games played.");
        return;
    }

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Runs:                {}", stats.runs);
    println!("  Games played:        {}", stats.total_games);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_games as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_games as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.4}", stats.average_turns).bright_yellow().bold()
    );
    println!(
        "  Maximum guesses:     {}",
        stats.max_turns.to_string().bright_red().bold()
    );
    println!("  Minimum guesses:     {}", stats.min_turns);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per game:       {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / stats.total_games as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.turn_distribution.values().copied().max().unwrap_or(1);
    for (&turns, &count) in &stats.turn_distribution {
        let percentage = count as f64 / stats.total_games as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {turns:2} guesses: {} {count:6} ({percentage:5.1}%)",
            bar.green()
        );
    }

    if !stats.hardest_codes.is_empty() {
        println!("\n🔥 {}", "Hardest Codes".red().bold());
        for (code, turns) in stats.hardest_codes.iter().take(5) {
            println!("  {}  {turns} guesses", code_to_pegs(code));
        }
    }

    println!("\n{}", "═".repeat(70));
}

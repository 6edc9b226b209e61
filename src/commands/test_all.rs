//! Test all codes - comprehensive strategy evaluation
//!
//! Plays the solver against every possible hidden code, `runs` times over, and
//! gathers average and worst-case turn counts.

use crate::core::Code;
use crate::solver::{GameStatus, Session, SessionConfig, SessionError};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from testing all codes with one strategy
#[derive(Debug)]
pub struct TestAllStatistics {
    pub strategy: &'static str,
    pub runs: usize,
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub turn_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_turns: f64,
    pub max_turns: usize,
    pub min_turns: usize,
    pub hardest_codes: Vec<(Code, usize)>,
}

/// Run one strategy against every hidden code (or the first `limit` of them)
///
/// Each run builds a fresh session, as the sweep is meant to measure the whole
/// pipeline. Turn counts include lost games, which count as `max_turns`.
///
/// # Errors
///
/// Returns an error if the configuration is not a playable board or a game
/// fails to complete.
pub fn run_test_all(
    config: SessionConfig,
    runs: usize,
    limit: Option<usize>,
) -> Result<TestAllStatistics, SessionError> {
    let probe = Session::new(config)?;
    let per_run = limit.map_or(probe.all_candidates().len(), |limit| {
        limit.min(probe.all_candidates().len())
    });
    drop(probe);

    let pb = ProgressBar::new((per_run * runs) as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );
    pb.set_message(config.strategy.name());

    let mut turn_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut hardest: BTreeMap<Code, usize> = BTreeMap::new();
    let mut total_turns = 0;
    let mut solved = 0;
    let mut total_games = 0;

    let total_start = Instant::now();

    for run in 0..runs {
        let mut session = Session::new(config)?;
        let hidden_codes: Vec<Code> = session.all_candidates()[..per_run].to_vec();

        for hidden in hidden_codes {
            session.set_hidden_code(hidden.clone())?;
            let status = session.play_out()?;
            let turns = session.turn_count();

            total_games += 1;
            total_turns += turns;
            *turn_distribution.entry(turns).or_insert(0) += 1;
            if status == GameStatus::Won {
                solved += 1;
            }
            hardest
                .entry(hidden)
                .and_modify(|worst| *worst = (*worst).max(turns))
                .or_insert(turns);

            session.reset();
            pb.inc(1);
        }

        log::debug!("{} run {} of {runs} complete", config.strategy.name(), run + 1);
    }

    pb.finish_with_message(format!("{} complete", config.strategy.name()));

    let total_time = total_start.elapsed();
    let average_turns = if total_games > 0 {
        total_turns as f64 / total_games as f64
    } else {
        0.0
    };

    let mut hardest_codes: Vec<(Code, usize)> = hardest.into_iter().collect();
    hardest_codes.sort_by_key(|(_, turns)| std::cmp::Reverse(*turns));
    hardest_codes.truncate(10);

    let stats = TestAllStatistics {
        strategy: config.strategy.name(),
        runs,
        total_games,
        solved,
        failed: total_games - solved,
        max_turns: turn_distribution.keys().next_back().copied().unwrap_or(0),
        min_turns: turn_distribution.keys().next().copied().unwrap_or(0),
        turn_distribution,
        total_time,
        average_turns,
        hardest_codes,
    };

    log::info!(
        "{}: {} games, average {:.4}, max {}",
        stats.strategy,
        stats.total_games,
        stats.average_turns,
        stats.max_turns
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstAvailableStrategy, MinimaxStrategy, StrategyType};

    #[test]
    fn minimax_sweeps_two_by_two_board() {
        let config = SessionConfig::new(2, 2, StrategyType::Minimax(MinimaxStrategy));
        let stats = run_test_all(config, 1, None).unwrap();

        assert_eq!(stats.strategy, "minimax");
        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.solved, 4);
        assert_eq!(stats.failed, 0);
        assert!(stats.max_turns <= 3);
        assert_eq!(stats.min_turns, 1);
        // 0 0 in one, 0 1 and 1 1 in two, 1 0 in three
        assert!((stats.average_turns - 2.0).abs() < 1e-9);
    }

    #[test]
    fn distribution_sums_to_games() {
        let config = SessionConfig::new(3, 3, StrategyType::FirstAvailable(FirstAvailableStrategy));
        let stats = run_test_all(config, 2, None).unwrap();

        assert_eq!(stats.runs, 2);
        assert_eq!(stats.total_games, 54);
        assert_eq!(stats.turn_distribution.values().sum::<usize>(), 54);
        assert!(stats.average_turns >= stats.min_turns as f64);
        assert!(stats.average_turns <= stats.max_turns as f64);
    }

    #[test]
    fn runs_are_deterministic() {
        let config = SessionConfig::new(3, 3, StrategyType::Minimax(MinimaxStrategy));
        let once = run_test_all(config, 1, None).unwrap();
        let twice = run_test_all(config, 2, None).unwrap();

        assert_eq!(twice.total_games, 2 * once.total_games);
        assert!((once.average_turns - twice.average_turns).abs() < 1e-9);
        assert_eq!(once.max_turns, twice.max_turns);
    }

    #[test]
    fn limit_caps_codes_per_run() {
        let config = SessionConfig::new(4, 6, StrategyType::FirstAvailable(FirstAvailableStrategy));
        let stats = run_test_all(config, 1, Some(10)).unwrap();

        assert_eq!(stats.total_games, 10);
        assert!(stats.hardest_codes.len() <= 10);
    }

    #[test]
    fn tight_budget_reports_failures() {
        let config = SessionConfig::new(3, 3, StrategyType::FirstAvailable(FirstAvailableStrategy))
            .with_max_turns(1);
        let stats = run_test_all(config, 1, None).unwrap();

        // Only the opening code itself is solved in one guess
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed, 26);
        assert_eq!(stats.max_turns, 1);
    }

    #[test]
    fn zero_runs_is_empty() {
        let config = SessionConfig::new(2, 2, StrategyType::default());
        let stats = run_test_all(config, 0, None).unwrap();

        assert_eq!(stats.total_games, 0);
        assert!(stats.average_turns.abs() < f64::EPSILON);
    }
}

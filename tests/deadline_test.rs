// Commit Miner - Free and Open Source Software Statement
//
// This project, commit-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/deadline_test.rs
// Version: 1.0.0
//
// This file contains timing tests for the deadline thread.
//
// Tree Location:
// - tests/deadline_test.rs (deadline tests)
// - Depends on: commit-miner

#[cfg(test)]
mod tests {
    use commit_miner::SolutionRegistry;
    use commit_miner::miner::{Deadline, DeadlineExit};
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    // Scheduler jitter allowance on loaded CI machines
    const SLACK: Duration = Duration::from_millis(750);

    #[test]
    fn test_deadline_elapses_and_requests_stop() {
        let registry = SolutionRegistry::new();
        let deadline = Deadline::new(Duration::from_millis(200));

        let started = Instant::now();
        let exit = deadline.run(&registry);
        let elapsed = started.elapsed();

        assert_eq!(exit, DeadlineExit::Elapsed);
        assert!(registry.is_stopped(), "Deadline must raise the stop flag");
        assert!(elapsed >= Duration::from_millis(200), "Returned early after {:?}", elapsed);
        assert!(
            elapsed < Duration::from_millis(200) + deadline.granularity() + SLACK,
            "Overran the budget: {:?}",
            elapsed
        );
    }

    #[test]
    fn test_zero_duration_waits_one_increment() {
        let registry = SolutionRegistry::new();
        let deadline = Deadline::new(Duration::ZERO).with_granularity(Duration::from_millis(50));
        assert_eq!(deadline.budget(), Duration::from_millis(50));

        let started = Instant::now();
        assert_eq!(deadline.run(&registry), DeadlineExit::Elapsed);
        assert!(started.elapsed() >= Duration::from_millis(50), "Should wait at least one increment");
    }

    #[test]
    fn test_deadline_returns_early_on_stop() {
        let registry = Arc::new(SolutionRegistry::new());
        let stopper = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                registry.request_stop();
            })
        };

        let started = Instant::now();
        let exit = Deadline::new(Duration::from_secs(30)).run(&registry);
        stopper.join().unwrap();

        assert_eq!(exit, DeadlineExit::Cancelled);
        assert!(started.elapsed() < Duration::from_secs(2), "Should not wait for the full budget");
    }

    #[test]
    fn test_deadline_with_stop_already_requested() {
        let registry = SolutionRegistry::new();
        registry.request_stop();
        let started = Instant::now();
        assert_eq!(Deadline::new(Duration::from_secs(30)).run(&registry), DeadlineExit::Cancelled);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_unrepresentable_budget_waits_for_stop() {
        let registry = Arc::new(SolutionRegistry::new());
        let stopper = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                registry.request_stop();
            })
        };
        let exit = Deadline::new(Duration::MAX).run(&registry);
        stopper.join().unwrap();
        assert_eq!(exit, DeadlineExit::Cancelled);
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial deadline test implementation.

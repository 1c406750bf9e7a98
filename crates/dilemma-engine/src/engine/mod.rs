//! The evolution rules applied to a grid of agents.
//!
//! One round of the spatial game is two passes over the whole grid:
//!
//! 1. [`update_scores`] - every cell plays the payoff game against each
//!    cell in its Moore neighborhood (itself included) and accumulates the
//!    rewards into its score.
//! 2. [`update_strategies`] - every cell adopts the strategy of the
//!    highest-scoring cell in that same neighborhood, keeping its own
//!    strategy unless a neighbor scored strictly higher.
//!
//! Both passes observe the round-start state only: scoring reads the
//! committed strategies, and the strategy update stages every cell's next
//! strategy before any of them is committed. [`evolve`] repeats the round
//! for a requested generation count.

pub use self::evolution::*;

mod evolution;

//! Move-selection policies, and parsing of policy names for the command line.

mod greedy;
mod monte_carlo;
mod policy;
mod random;

pub use greedy::GreedyPolicy;
pub use monte_carlo::MonteCarloPolicy;
pub use policy::Policy;
pub use random::RandomPolicy;

use derive_more::{Display, Error};
use std::str::FromStr;

/// A policy named on the command line: `random`, `greedy`, or `mcts:<playouts>`.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum PolicyKind {
    #[display(fmt = "random")]
    Random,
    #[display(fmt = "greedy")]
    Greedy,
    #[display(fmt = "mcts:{}", _0)]
    MonteCarlo(usize),
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParsePolicyError {
    #[display(fmt = "unknown policy {:?}, expected random, greedy, or mcts:<playouts>", _0)]
    UnknownPolicy(#[error(not(source))] String),
    #[display(fmt = "invalid playout count {:?}", _0)]
    InvalidPlayouts(#[error(not(source))] String),
}

impl FromStr for PolicyKind {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(PolicyKind::Random),
            "greedy" => Ok(PolicyKind::Greedy),
            other => match other.strip_prefix("mcts:") {
                Some(count) => count
                    .parse()
                    .ok()
                    .filter(|&playouts| playouts > 0)
                    .map(PolicyKind::MonteCarlo)
                    .ok_or_else(|| ParsePolicyError::InvalidPlayouts(count.to_string())),
                None => Err(ParsePolicyError::UnknownPolicy(s.to_string())),
            },
        }
    }
}

impl PolicyKind {
    /// Construct the policy, seeding its generator with `seed`.
    pub fn build(self, seed: u64) -> Box<dyn Policy> {
        match self {
            PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
            PolicyKind::Greedy => Box::new(GreedyPolicy::new(seed)),
            PolicyKind::MonteCarlo(playouts) => Box::new(MonteCarloPolicy::new(playouts, seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policy_names() {
        assert_eq!("random".parse(), Ok(PolicyKind::Random));
        assert_eq!("Greedy".parse(), Ok(PolicyKind::Greedy));
        assert_eq!("mcts:100".parse(), Ok(PolicyKind::MonteCarlo(100)));
    }

    #[test]
    fn parse_policy_errors() {
        assert_eq!(
            "alphabeta".parse::<PolicyKind>(),
            Err(ParsePolicyError::UnknownPolicy("alphabeta".to_string()))
        );
        assert_eq!(
            "mcts:0".parse::<PolicyKind>(),
            Err(ParsePolicyError::InvalidPlayouts("0".to_string()))
        );
        assert_eq!(
            "mcts:lots".parse::<PolicyKind>(),
            Err(ParsePolicyError::InvalidPlayouts("lots".to_string()))
        );
    }

    #[test]
    fn display_round_trips() {
        for kind in [PolicyKind::Random, PolicyKind::Greedy, PolicyKind::MonteCarlo(7)] {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }
}

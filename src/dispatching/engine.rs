//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence: the next rule is consulted only when every
//! earlier rule ties. Jobs that tie on all rules keep their queue order
//! (the sort is stable).

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Job;

/// A composable rule engine for job ordering.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine};
///
/// let sjf = RuleEngine::new()
///     .with_rule(rules::Spt)
///     .with_tie_breaker(rules::Fifo);
/// assert_eq!(sjf.rule_names(), vec!["SPT", "FIFO"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules, queue order is kept.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns indices into `jobs`, highest priority first.
    pub fn sort_indices(&self, jobs: &[Job]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&jobs[a], &jobs[b]));
        indices
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::JobRecord;

    fn make_jobs(bursts: &[(u32, u64)]) -> Vec<Job> {
        bursts
            .iter()
            .enumerate()
            .map(|(seq, &(id, burst))| Job::from_record(&JobRecord::new(id, burst, 1), seq))
            .collect()
    }

    #[test]
    fn test_spt_ordering() {
        let jobs = make_jobs(&[(1, 5), (2, 1), (3, 3)]);
        let engine = RuleEngine::new().with_rule(rules::Spt);

        let indices = engine.sort_indices(&jobs);
        assert_eq!(jobs[indices[0]].id, 2);
        assert_eq!(jobs[indices[1]].id, 3);
        assert_eq!(jobs[indices[2]].id, 1);
    }

    #[test]
    fn test_spt_ties_keep_arrival_order() {
        // IDs deliberately out of order to show ID is not the tie-break
        let jobs = make_jobs(&[(9, 3), (4, 3), (7, 1), (1, 3)]);
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_tie_breaker(rules::Fifo);

        let order: Vec<u32> = engine
            .sort_indices(&jobs)
            .into_iter()
            .map(|i| jobs[i].id)
            .collect();
        assert_eq!(order, vec![7, 9, 4, 1]);
    }

    #[test]
    fn test_fifo_keeps_queue_order() {
        let jobs = make_jobs(&[(3, 30), (1, 10), (2, 20)]);
        let engine = RuleEngine::new().with_rule(rules::Fifo);
        assert_eq!(engine.sort_indices(&jobs), vec![0, 1, 2]);
    }

    #[test]
    fn test_no_rules_is_identity() {
        let jobs = make_jobs(&[(3, 30), (1, 10)]);
        assert_eq!(RuleEngine::new().sort_indices(&jobs), vec![0, 1]);
    }

    #[test]
    fn test_empty_jobs() {
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert!(engine.sort_indices(&[]).is_empty());
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new()
            .with_rule(rules::Spt)
            .with_tie_breaker(rules::Fifo);
        let dbg = format!("{engine:?}");
        assert!(dbg.contains("SPT"));
        assert!(dbg.contains("FIFO"));
    }
}

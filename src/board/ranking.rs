//! Queue ordering and leaderboard scoring
//!
//! Both functions are pure so every screen derives the same order from the
//! same cache.

use std::cmp::Ordering;

use crate::model::{HouseholdId, StalenessBand, Task, User};

/// Tasks split into the primary queue and the fresh/frozen sidebar
#[derive(Debug, Default)]
pub struct RankedTasks<'a> {
    /// Stale and overdue tasks, most urgent first
    pub queue: Vec<&'a Task>,
    /// Fresh (staleness 0) and frozen tasks
    pub fresh: Vec<&'a Task>,
}

/// Total order used for both lists.
///
/// Band first (overdue, stale, fresh), then higher staleness inside the
/// stale band, then ascending mean completion time, then id.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    let (band_a, band_b) = (a.band(), b.band());
    band_a
        .cmp(&band_b)
        .then_with(|| {
            if band_a == StalenessBand::Stale {
                b.staleness.total_cmp(&a.staleness)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| a.mean_completion_time.total_cmp(&b.mean_completion_time))
        .then_with(|| a.id.cmp(&b.id))
}

/// Split and order tasks for display
pub fn rank_for_queue(tasks: &[Task]) -> RankedTasks<'_> {
    let (mut fresh, mut queue): (Vec<&Task>, Vec<&Task>) = tasks
        .iter()
        .partition(|t| t.frozen || t.band() == StalenessBand::Fresh);

    queue.sort_by(|a, b| compare_tasks(a, b));
    fresh.sort_by(|a, b| compare_tasks(a, b));

    RankedTasks { queue, fresh }
}

/// Top `n` users by net brownie points in `household`, highest first.
///
/// Ties keep their input order.
pub fn top_scorers(users: &[User], household: HouseholdId, n: usize) -> Vec<&User> {
    let mut ranked: Vec<&User> = users.iter().collect();
    ranked.sort_by(|a, b| b.score(household).total_cmp(&a.score(household)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{task, user};

    fn ids(tasks: &[&Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_overdue_first_then_completion_time() {
        let tasks = vec![task(1, 1.0, 50.0), task(2, 0.5, 10.0), task(3, 1.0, 10.0)];
        let ranked = rank_for_queue(&tasks);
        assert_eq!(ids(&ranked.queue), vec![3, 1, 2]);
        assert!(ranked.fresh.is_empty());
    }

    #[test]
    fn test_fresh_and_frozen_go_to_sidebar() {
        let mut frozen = task(4, 0.9, 1.0);
        frozen.frozen = true;
        let tasks = vec![task(1, 0.0, 5.0), task(2, 0.3, 5.0), frozen, task(3, 0.0, 1.0)];
        let ranked = rank_for_queue(&tasks);
        assert_eq!(ids(&ranked.queue), vec![2]);
        assert!(ranked.queue.iter().all(|t| t.staleness != 0.0 && !t.frozen));
        // frozen-but-stale still ranks ahead of fresh in the sidebar
        assert_eq!(ids(&ranked.fresh), vec![4, 3, 1]);
    }

    #[test]
    fn test_stale_band_orders_by_staleness_then_time() {
        let tasks = vec![
            task(1, 0.2, 10.0),
            task(2, 0.8, 99.0),
            task(3, 0.2, 5.0),
            task(4, 0.8, 1.0),
        ];
        let ranked = rank_for_queue(&tasks);
        assert_eq!(ids(&ranked.queue), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let tasks = vec![
            task(5, 0.7, 30.0),
            task(1, 1.0, 30.0),
            task(9, 0.7, 30.0),
            task(2, 0.1, 0.0),
            task(3, 1.0, 30.0),
        ];
        let first: Vec<Task> = rank_for_queue(&tasks).queue.into_iter().cloned().collect();
        let second = rank_for_queue(&first);
        assert_eq!(ids(&second.queue), first.iter().map(|t| t.id).collect::<Vec<_>>());
        // full ties fall back to id
        assert_eq!(ids(&second.queue), vec![1, 3, 5, 9, 2]);
    }

    #[test]
    fn test_comparator_is_total_with_nan() {
        let tasks = vec![
            task(1, f64::NAN, 1.0),
            task(2, 0.5, f64::NAN),
            task(3, 0.5, 2.0),
            task(4, 1.0, 3.0),
        ];
        for a in &tasks {
            assert_eq!(compare_tasks(a, a), Ordering::Equal);
            for b in &tasks {
                assert_eq!(compare_tasks(a, b), compare_tasks(b, a).reverse());
                for c in &tasks {
                    if compare_tasks(a, b) == Ordering::Less
                        && compare_tasks(b, c) == Ordering::Less
                    {
                        assert_eq!(compare_tasks(a, c), Ordering::Less);
                    }
                }
            }
        }
    }

    #[test]
    fn test_top_scorers() {
        let users = vec![user(1, 1, 10.0, 2.0), user(2, 1, 5.0, 0.0)];
        let top = top_scorers(&users, 1, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id, 1);
    }

    #[test]
    fn test_top_scorers_ties_are_stable_and_n_is_capped() {
        let users = vec![
            user(1, 1, 3.0, 0.0),
            user(2, 1, 9.0, 0.0),
            user(3, 1, 3.0, 0.0),
        ];
        let top = top_scorers(&users, 1, 10);
        assert_eq!(top.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 1, 3]);
        assert!(top_scorers(&users, 1, 0).is_empty());
    }

    #[test]
    fn test_top_scorers_other_household_counts_zero() {
        let users = vec![user(1, 1, 3.0, 0.0), user(2, 2, 9.0, 0.0)];
        let top = top_scorers(&users, 1, 2);
        assert_eq!(top[0].id, 1);
    }
}

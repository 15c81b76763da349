//! Cross-user activity aggregation behind the dashboard analytics card.

use std::collections::HashMap;

use crate::models::{Post, Todo, User};

/// Post and completed-todo counts for a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Id of the user.
    pub id: i64,

    /// Handle shown next to each superlative.
    pub username: String,

    /// Number of posts authored by the user.
    pub post_count: usize,

    /// Number of todos the directory reports as completed.
    pub completed_count: usize,
}

/// Aggregated activity over the whole user directory.
///
/// The superlatives resolve ties to the earliest user in directory order: a
/// later candidate only replaces the current champion when it is strictly
/// greater (for a maximum) or strictly smaller (for a minimum).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsSummary {
    /// Number of users in the directory.
    pub total_users: usize,

    /// Per-user counts, in directory order.
    pub per_user: Vec<UserStats>,

    /// User with the most posts.
    pub most_posts: UserStats,

    /// User with the fewest posts.
    pub fewest_posts: UserStats,

    /// User with the most completed todos.
    pub most_completed: UserStats,

    /// User with the fewest completed todos.
    pub fewest_completed: UserStats,
}

/// Posts per author, in one pass.
#[must_use]
pub fn posts_by_user(posts: &[Post]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for post in posts {
        *counts.entry(post.user_id).or_insert(0) += 1;
    }
    counts
}

/// Completed todos per owner, in one pass over the raw remote flags.
///
/// Local completion overrides are deliberately not consulted here; the card
/// reports directory data, not this device's edits.
#[must_use]
pub fn completed_todos_by_user(todos: &[Todo]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for todo in todos {
        if todo.completed {
            *counts.entry(todo.user_id).or_insert(0) += 1;
        }
    }
    counts
}

/// Aggregate the full collections into per-user stats and superlatives.
///
/// Returns `None` when `users` is empty: there is no meaningful reduction
/// over nothing, so the caller renders an explicit "no data" state instead.
/// Posts and todos belonging to unknown users are ignored; users without
/// posts or todos count as zero and still compete for the minima.
#[must_use]
pub fn summarize(users: &[User], posts: &[Post], todos: &[Todo]) -> Option<AnalyticsSummary> {
    let post_counts = posts_by_user(posts);
    let completed_counts = completed_todos_by_user(todos);

    let per_user: Vec<UserStats> = users
        .iter()
        .map(|user| UserStats {
            id: user.id,
            username: user.username.clone(),
            post_count: post_counts.get(&user.id).copied().unwrap_or(0),
            completed_count: completed_counts.get(&user.id).copied().unwrap_or(0),
        })
        .collect();

    let most_posts = pick(&per_user, |stats| stats.post_count, Extreme::Max)?;
    let fewest_posts = pick(&per_user, |stats| stats.post_count, Extreme::Min)?;
    let most_completed = pick(&per_user, |stats| stats.completed_count, Extreme::Max)?;
    let fewest_completed = pick(&per_user, |stats| stats.completed_count, Extreme::Min)?;

    Some(AnalyticsSummary {
        total_users: users.len(),
        most_posts: most_posts.clone(),
        fewest_posts: fewest_posts.clone(),
        most_completed: most_completed.clone(),
        fewest_completed: fewest_completed.clone(),
        per_user,
    })
}

#[derive(Clone, Copy)]
enum Extreme {
    Max,
    Min,
}

/// First entry carrying the extreme value of `metric`. Strict comparisons
/// keep the earliest champion on ties.
fn pick(
    stats: &[UserStats],
    metric: impl Fn(&UserStats) -> usize,
    extreme: Extreme,
) -> Option<&UserStats> {
    let (first, rest) = stats.split_first()?;
    let mut champion = first;
    for candidate in rest {
        let wins = match extreme {
            Extreme::Max => metric(candidate) > metric(champion),
            Extreme::Min => metric(candidate) < metric(champion),
        };
        if wins {
            champion = candidate;
        }
    }
    Some(champion)
}

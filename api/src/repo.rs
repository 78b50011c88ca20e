use std::cmp::Ordering;

use chrono::DateTime;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

// structs and types

pub type RepoId = u64;

pub const GITHUB_USER: &str = "ShyamSanjeyS";

// one page of 50 is plenty since the featured list keeps at most 12
pub const LIST_REPOS_URL: &str =
    "https://api.github.com/users/ShyamSanjeyS/repos?sort=updated&per_page=50";

pub const FEATURED_LIMIT: usize = 12;

// the display projection of one public repository
//
// these fields match what the listing endpoint returns; anything else in the
// payload is ignored by the deserializer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: RepoId,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: String,
}

// messages

// fetch the public repository listing for GITHUB_USER
//
// one request per mount of the projects page, no retry: a failed attempt
// surfaces its error until the page is visited again
pub async fn list_repositories() -> anyhow::Result<Vec<Repository>> {
    let resp = Request::get(LIST_REPOS_URL).send().await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg("failed to fetch repositories"))
    }
}

// featured selection

// score = stars*2 + forks + epoch_secs/1e9
//
// popularity dominates; the scaled-down timestamp only separates repositories
// with near-identical star and fork counts.  the constant is load-bearing for
// the observable order, so it stays exactly as formulated.
pub fn score(repo: &Repository) -> f64 {
    f64::from(repo.stargazers_count) * 2.0
        + f64::from(repo.forks_count)
        + updated_epoch_secs(repo) as f64 / 1_000_000_000.0
}

// drop forks and undescribed repositories, rank the rest by score, keep the
// first FEATURED_LIMIT
pub fn featured_repositories(mut repos: Vec<Repository>) -> Vec<Repository> {
    repos.retain(|repo| !repo.name.contains("fork") && has_description(repo));

    // sort_by is stable, so equal scores keep the listing's recency order
    repos.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));

    repos.truncate(FEATURED_LIMIT);
    repos
}

fn has_description(repo: &Repository) -> bool {
    repo.description.as_deref().is_some_and(|desc| !desc.is_empty())
}

fn updated_epoch_secs(repo: &Repository) -> i64 {
    DateTime::parse_from_rfc3339(&repo.updated_at)
        .map(|dt| dt.timestamp())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(
        id: RepoId,
        name: &str,
        description: Option<&str>,
        stars: u32,
        forks: u32,
        updated_at: &str,
    ) -> Repository {
        Repository {
            id,
            name: name.to_owned(),
            description: description.map(String::from),
            html_url: format!("https://github.com/{GITHUB_USER}/{name}"),
            homepage: None,
            stargazers_count: stars,
            forks_count: forks,
            language: None,
            topics: Vec::new(),
            updated_at: updated_at.to_owned(),
        }
    }

    #[test]
    fn score_matches_hand_computed_formula() {
        // 2024-01-01T00:00:00Z is 1704067200 seconds after the epoch
        let repo = repo(1, "demo", Some("demo"), 10, 2, "2024-01-01T00:00:00Z");

        let expected = 10.0 * 2.0 + 2.0 + 1_704_067_200.0 / 1_000_000_000.0;
        assert!((score(&repo) - expected).abs() < 1e-9);
    }

    #[test]
    fn popularity_outweighs_recency() {
        // the old repo scores 22-and-change, the very recent one barely 9
        let old_popular = repo(1, "old-popular", Some("d"), 10, 2, "2015-06-01T00:00:00Z");
        let new_quiet = repo(2, "new-quiet", Some("d"), 3, 1, "2026-08-01T00:00:00Z");

        let ranked = featured_repositories(vec![new_quiet.clone(), old_popular.clone()]);

        assert_eq!(ranked[0].name, "old-popular");
        assert_eq!(ranked[1].name, "new-quiet");
        assert!(score(&old_popular) > score(&new_quiet));
    }

    #[test]
    fn fork_named_repositories_are_dropped() {
        let repos = vec![
            repo(1, "my-fork-app", Some("described"), 50, 10, "2024-01-01T00:00:00Z"),
            repo(2, "my-app", Some("described"), 1, 0, "2024-01-01T00:00:00Z"),
        ];

        let ranked = featured_repositories(repos);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "my-app");
    }

    #[test]
    fn undescribed_repositories_are_dropped() {
        let repos = vec![
            repo(1, "no-description", None, 50, 10, "2024-01-01T00:00:00Z"),
            repo(2, "empty-description", Some(""), 50, 10, "2024-01-01T00:00:00Z"),
            repo(3, "described", Some("d"), 0, 0, "2024-01-01T00:00:00Z"),
        ];

        let ranked = featured_repositories(repos);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "described");
    }

    #[test]
    fn equal_scores_keep_listing_order() {
        let first = repo(1, "first", Some("d"), 2, 1, "2024-01-01T00:00:00Z");
        let second = repo(2, "second", Some("d"), 2, 1, "2024-01-01T00:00:00Z");

        let ranked = featured_repositories(vec![first, second]);

        assert_eq!(ranked[0].name, "first");
        assert_eq!(ranked[1].name, "second");
    }

    #[test]
    fn featured_list_is_capped() {
        let repos = (0..20)
            .map(|n| {
                repo(
                    n,
                    &format!("repo-{n}"),
                    Some("d"),
                    n as u32,
                    0,
                    "2024-01-01T00:00:00Z",
                )
            })
            .collect();

        let ranked = featured_repositories(repos);

        assert_eq!(ranked.len(), FEATURED_LIMIT);
        // highest score first
        assert_eq!(ranked[0].name, "repo-19");
    }

    #[test]
    fn unparseable_timestamps_score_as_epoch() {
        let broken = repo(1, "broken", Some("d"), 1, 0, "not-a-timestamp");

        assert!((score(&broken) - 2.0).abs() < 1e-9);
    }
}

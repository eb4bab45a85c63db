//! Top-language aggregation

use crate::github::RepositoryLanguages;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of languages kept after ranking
pub const TOP_LANGUAGES: usize = 5;

/// Total bytes of one language across all of a user's repositories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageUsage {
    pub name: String,
    pub size: u64,
}

impl LanguageUsage {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Reduce per-repository language edges into the ranked top languages
///
/// Sizes are summed per exact (case-sensitive) language name. The result is
/// sorted by total size descending, ties keeping first-seen order, and holds
/// at most [`TOP_LANGUAGES`] entries.
pub fn aggregate_languages(repositories: &[RepositoryLanguages]) -> Vec<LanguageUsage> {
    let mut totals: Vec<LanguageUsage> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for edge in repositories.iter().flat_map(|repo| repo.languages.iter()) {
        match index.get(edge.name.as_str()) {
            Some(&i) => totals[i].size = totals[i].size.saturating_add(edge.size),
            None => {
                index.insert(edge.name.as_str(), totals.len());
                totals.push(LanguageUsage::new(edge.name.clone(), edge.size));
            }
        }
    }

    // sort_by is stable, so equal sizes stay in encounter order
    totals.sort_by(|a, b| b.size.cmp(&a.size));
    totals.truncate(TOP_LANGUAGES);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::LanguageEdge;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn repo(name: &str, langs: &[(&str, u64)]) -> RepositoryLanguages {
        RepositoryLanguages {
            name: name.to_string(),
            languages: langs
                .iter()
                .map(|(lang, size)| LanguageEdge::new(*lang, *size))
                .collect(),
        }
    }

    #[test]
    fn test_sums_across_repositories() {
        let repos = vec![
            repo("api", &[("Rust", 500), ("Shell", 20)]),
            repo("web", &[("TypeScript", 300), ("Rust", 100)]),
        ];

        let langs = aggregate_languages(&repos);
        assert_eq!(
            langs,
            vec![
                LanguageUsage::new("Rust", 600),
                LanguageUsage::new("TypeScript", 300),
                LanguageUsage::new("Shell", 20),
            ]
        );
    }

    #[test]
    fn test_keeps_top_five() {
        let repos = vec![repo(
            "mono",
            &[("A", 1), ("B", 2), ("C", 3), ("D", 4), ("E", 5), ("F", 6), ("G", 7)],
        )];

        let names: Vec<String> = aggregate_languages(&repos)
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["G", "F", "E", "D", "C"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let repos = vec![
            repo("one", &[("Zig", 10), ("Go", 10)]),
            repo("two", &[("Ada", 10)]),
        ];

        let names: Vec<String> = aggregate_languages(&repos)
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Zig", "Go", "Ada"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let repos = vec![repo("x", &[("Rust", 1), ("rust", 2)])];
        assert_eq!(aggregate_languages(&repos).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_languages(&[]).is_empty());
        assert!(aggregate_languages(&[repo("bare", &[])]).is_empty());
    }

    fn arb_repos() -> impl Strategy<Value = Vec<RepositoryLanguages>> {
        let edge = ("[A-H]", 0u64..10_000).prop_map(|(n, s)| LanguageEdge::new(n, s));
        prop::collection::vec(prop::collection::vec(edge, 0..8), 0..12).prop_map(|repos| {
            repos
                .into_iter()
                .enumerate()
                .map(|(i, languages)| RepositoryLanguages {
                    name: format!("repo-{i}"),
                    languages,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_ranked_unique_and_bounded(repos in arb_repos()) {
            let langs = aggregate_languages(&repos);

            prop_assert!(langs.len() <= TOP_LANGUAGES);
            prop_assert!(langs.windows(2).all(|w| w[0].size >= w[1].size));

            let unique: HashSet<&str> = langs.iter().map(|l| l.name.as_str()).collect();
            prop_assert_eq!(unique.len(), langs.len());

            let input_total: u64 = repos.iter().flat_map(|r| &r.languages).map(|e| e.size).sum();
            let output_total: u64 = langs.iter().map(|l| l.size).sum();
            prop_assert!(output_total <= input_total);
        }

        #[test]
        fn prop_idempotent(repos in arb_repos()) {
            prop_assert_eq!(aggregate_languages(&repos), aggregate_languages(&repos));
        }

        #[test]
        fn prop_insensitive_to_page_boundaries(repos in arb_repos(), a in 0usize..13, b in 0usize..13) {
            // Regroup the same edges into three "pages" of different shape
            let edges: Vec<LanguageEdge> = repos.iter().flat_map(|r| r.languages.clone()).collect();
            let (lo, hi) = (a.min(b).min(edges.len()), a.max(b).min(edges.len()));
            let regrouped = vec![
                RepositoryLanguages { name: "p1".into(), languages: edges[..lo].to_vec() },
                RepositoryLanguages { name: "p2".into(), languages: edges[lo..hi].to_vec() },
                RepositoryLanguages { name: "p3".into(), languages: edges[hi..].to_vec() },
            ];

            prop_assert_eq!(aggregate_languages(&repos), aggregate_languages(&regrouped));
        }
    }
}

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Search deny-list keywords by fuzzy matching against the query.
/// - Empty query: returns every index in list order (with score 0).
/// - Non-empty query: returns only matching indices, sorted by score descending.
pub fn search(query: &str, keywords: &[String]) -> Vec<(usize, i64)> {
    if query.is_empty() {
        return keywords.iter().enumerate().map(|(i, _)| (i, 0i64)).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut results: Vec<(usize, i64)> = keywords
        .iter()
        .enumerate()
        .filter_map(|(i, word)| matcher.fuzzy_match(word, query).map(|score| (i, score)))
        .collect();

    results.sort_by(|a, b| b.1.cmp(&a.1));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_all() {
        let list = keywords(&["hello", "world", "foo"]);
        let results = search("", &list);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, 0);
        assert_eq!(results[2].0, 2);
    }

    #[test]
    fn test_fuzzy_match_filters() {
        let list = keywords(&["hello world", "goodbye world", "foo bar"]);
        let results = search("helo", &list);
        assert!(!results.is_empty());
        assert!(results.iter().any(|(i, _)| list[*i] == "hello world"));
    }

    #[test]
    fn test_no_match_returns_empty() {
        let list = keywords(&["hello", "world"]);
        let results = search("zzzzz", &list);
        assert!(results.is_empty());
    }

    #[test]
    fn test_results_sorted_by_score() {
        let list = keywords(&["abc", "abcdef", "xyzabc"]);
        let results = search("abc", &list);
        assert!(results.len() >= 2);
        for i in 0..results.len() - 1 {
            assert!(results[i].1 >= results[i + 1].1);
        }
    }
}

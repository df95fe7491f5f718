//! Pre-analysis hypothesis checks.

use crate::core::HypothesisFlag;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Minimum length for a theoretical basis to count as a nontrivial
/// justification.
const MIN_THEORY_LEN: usize = 20;

/// Minimum length for a baseline citation.
const MIN_CITATION_LEN: usize = 10;

/// Word-overlap fraction above which a justification is treated as a
/// restatement of the hypothesis.
const CIRCULAR_OVERLAP: f64 = 0.8;

static YEAR_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(19|20)\d{2}").unwrap());
static KEY_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w{5,}\b").unwrap());

/// Run every hypothesis check and collect all applicable flags.
pub fn hypothesis_flags(
    text: &str,
    baseline_source: &str,
    theoretical_basis: &str,
    testable: bool,
) -> Vec<HypothesisFlag> {
    let mut flags = Vec::new();
    if weak_theory(theoretical_basis) {
        flags.push(HypothesisFlag::WeakTheory);
    }
    if baseline_source.is_empty() || !is_citation_shaped(baseline_source) {
        flags.push(HypothesisFlag::NoBaseline);
    }
    if !testable {
        flags.push(HypothesisFlag::NotTestable);
    }
    if is_circular(text, theoretical_basis) {
        flags.push(HypothesisFlag::Circular);
    }
    flags
}

fn weak_theory(basis: &str) -> bool {
    basis.is_empty() || basis.chars().count() < MIN_THEORY_LEN
}

/// Syntactic citation-shape check: a 4-digit year token plus enough text
/// to plausibly name an author. A shape heuristic, not semantic
/// verification.
fn is_citation_shaped(citation: &str) -> bool {
    YEAR_TOKEN.is_match(citation) && citation.chars().count() > MIN_CITATION_LEN
}

/// Restatement detector: if more than 80% of the hypothesis key terms
/// reappear in the justification, the justification likely assumes its
/// own conclusion. Misfires on short texts sharing domain vocabulary.
fn is_circular(hypothesis: &str, justification: &str) -> bool {
    let hypothesis_terms = key_terms(hypothesis);
    let justification_terms = key_terms(justification);
    if hypothesis_terms.is_empty() || justification_terms.is_empty() {
        return false;
    }
    let shared = hypothesis_terms.intersection(&justification_terms).count();
    shared as f64 / hypothesis_terms.len() as f64 > CIRCULAR_OVERLAP
}

/// Distinct words of at least five characters, case-insensitive.
fn key_terms(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    KEY_TERM
        .find_iter(&lowered)
        .map(|term| term.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_theory_flags_weak_theory() {
        let flags = hypothesis_flags(
            "Support predicts constitutional success",
            "Dixon & Landau (2025) 'Utopian Constitutionalism'",
            "",
            true,
        );
        assert!(flags.contains(&HypothesisFlag::WeakTheory));
    }

    #[test]
    fn short_theory_flags_weak_theory() {
        let flags = hypothesis_flags(
            "Support predicts constitutional success",
            "Dixon & Landau (2025) 'Utopian Constitutionalism'",
            "Because theory.",
            true,
        );
        assert!(flags.contains(&HypothesisFlag::WeakTheory));
    }

    #[test]
    fn citation_without_year_flags_no_baseline() {
        let flags = hypothesis_flags(
            "Support predicts constitutional success",
            "no citation here",
            "Prior comparative work predicts success when popular support is adequate.",
            true,
        );
        assert!(flags.contains(&HypothesisFlag::NoBaseline));
    }

    #[test]
    fn short_citation_flags_no_baseline_despite_year() {
        assert!(!is_citation_shaped("2025"));
    }

    #[test]
    fn untestable_hypothesis_is_flagged() {
        let flags = hypothesis_flags(
            "Support predicts constitutional success",
            "Dixon & Landau (2025) 'Utopian Constitutionalism'",
            "Prior comparative work predicts success when popular support is adequate.",
            false,
        );
        assert_eq!(flags, vec![HypothesisFlag::NotTestable]);
    }

    #[test]
    fn restated_justification_flags_circular() {
        let flags = hypothesis_flags(
            "Colombia succeeded because support was adequate",
            "Dixon & Landau (2025) 'Utopian Constitutionalism'",
            "Colombia succeeded because support was adequate there",
            true,
        );
        assert!(flags.contains(&HypothesisFlag::Circular));
    }

    #[test]
    fn distinct_justification_is_not_circular() {
        assert!(!is_circular(
            "Colombia succeeded due to adequate popular support",
            "Transformative frameworks predict institutional pathways matter most",
        ));
    }

    #[test]
    fn all_checks_are_reported_together() {
        let flags = hypothesis_flags("Something holds", "", "", false);
        assert_eq!(
            flags,
            vec![
                HypothesisFlag::WeakTheory,
                HypothesisFlag::NoBaseline,
                HypothesisFlag::NotTestable,
            ]
        );
    }

    #[test]
    fn clean_hypothesis_has_no_flags() {
        let flags = hypothesis_flags(
            "Colombia 1991 succeeded due to adequate popular support and institutional pathways",
            "Dixon & Landau (2025) 'Utopian Constitutionalism'",
            "The framework predicts transformative success when both support and pathways clear their thresholds.",
            true,
        );
        assert!(flags.is_empty(), "unexpected flags: {flags:?}");
    }
}

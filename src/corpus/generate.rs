// Synthetic corpus generation for benchmarking and demos.
//
// Documents are drawn from themed word pools so that the resulting corpus has
// realistic clusters of similarity: documents in the same quartile share both
// themes, neighbouring quartiles share one, and function words give every
// pair a small baseline overlap.

use rand::seq::IndexedRandom;
use rand::Rng;

const TECH_WORDS: &[&str] = &[
    "algorithm", "machine", "learning", "data", "analysis", "computer", "software",
    "programming", "artificial", "intelligence", "network", "system", "database",
    "application", "development", "technology", "digital", "innovation", "automation",
    "cloud", "computing", "cybersecurity", "blockchain", "neural", "processing",
];

const BUSINESS_WORDS: &[&str] = &[
    "company", "business", "market", "customer", "revenue", "profit", "strategy",
    "management", "operations", "finance", "investment", "growth", "sales",
    "marketing", "product", "service", "enterprise", "organization", "leadership",
    "team", "project", "planning", "execution", "performance", "results",
];

const NATURE_WORDS: &[&str] = &[
    "forest", "tree", "animal", "wildlife", "environment", "ecosystem", "nature",
    "habitat", "species", "biodiversity", "conservation", "climate", "weather",
    "mountain", "river", "ocean", "plant", "flower", "grass", "soil", "rock",
    "bird", "fish", "mammal", "insect", "butterfly", "sustainability",
];

const SCIENCE_WORDS: &[&str] = &[
    "research", "experiment", "laboratory", "hypothesis", "theory", "discovery",
    "investigation", "methodology", "analysis", "observation", "evidence", "study",
    "physics", "chemistry", "biology", "mathematics", "statistics", "variables",
    "measurement", "calculation", "formula", "equation", "scientific", "academic",
];

const COMMON_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
    "from", "by", "about", "through", "during", "before", "after", "over",
    "under", "between", "among", "within", "without", "including", "such",
];

/// Sentence length bounds (inclusive), in words.
const SENTENCE_WORDS: std::ops::RangeInclusive<usize> = 8..=15;

/// Per-document word count jitter around the corpus average.
const LENGTH_JITTER: std::ops::Range<f64> = 0.8..1.2;

/// A themed vocabulary pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Technology,
    Business,
    Nature,
    Science,
}

impl Theme {
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Theme::Technology => TECH_WORDS,
            Theme::Business => BUSINESS_WORDS,
            Theme::Nature => NATURE_WORDS,
            Theme::Science => SCIENCE_WORDS,
        }
    }

    /// The two themes for the 1-based document `index` in a corpus of `total`.
    pub fn pair_for(index: usize, total: usize) -> [Theme; 2] {
        if index <= total / 4 {
            [Theme::Technology, Theme::Business]
        } else if index <= total / 2 {
            [Theme::Business, Theme::Science]
        } else if index <= 3 * total / 4 {
            [Theme::Nature, Theme::Science]
        } else {
            [Theme::Technology, Theme::Nature]
        }
    }
}

/// Built-in corpus sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// ~100 documents, ~5,000 words
    Small,
    /// ~200 documents, ~15,000 words
    Medium,
    /// ~300 documents, ~25,000 words
    Large,
}

/// How big a corpus to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusSpec {
    pub documents: usize,
    pub total_words: usize,
}

impl CorpusSpec {
    pub fn preset(preset: Preset) -> Self {
        let (documents, total_words) = match preset {
            Preset::Small => (100, 5_000),
            Preset::Medium => (200, 15_000),
            Preset::Large => (300, 25_000),
        };
        Self {
            documents,
            total_words,
        }
    }
}

/// Totals for a generated corpus, counted the way a reader of the file would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorpusStats {
    pub documents: usize,
    pub words: usize,
}

impl CorpusStats {
    /// Count documents and content words (the id token is not a word).
    pub fn from_lines(lines: &[String]) -> Self {
        Self {
            documents: lines.len(),
            words: lines
                .iter()
                .map(|l| l.split_whitespace().count().saturating_sub(1))
                .sum(),
        }
    }
}

/// Generate document text of exactly `target_words` words from `themes`.
///
/// Common words appear twice in the pool, so they are drawn twice as often
/// as any single themed word.
pub fn document_text<R: Rng + ?Sized>(rng: &mut R, target_words: usize, themes: &[Theme]) -> String {
    let mut pool: Vec<&str> = themes.iter().flat_map(|t| t.words().iter().copied()).collect();
    pool.extend_from_slice(COMMON_WORDS);
    pool.extend_from_slice(COMMON_WORDS);

    let mut words: Vec<&str> = Vec::with_capacity(target_words);
    while words.len() < target_words {
        let sentence_len = rng.random_range(SENTENCE_WORDS);
        for _ in 0..sentence_len {
            if words.len() >= target_words {
                break;
            }
            if let Some(word) = pool.choose(rng) {
                words.push(*word);
            }
        }
    }

    words.join(" ")
}

/// Generate a full corpus as input lines (`Document<i> <text>`).
pub fn generate<R: Rng + ?Sized>(rng: &mut R, spec: CorpusSpec) -> Vec<String> {
    if spec.documents == 0 {
        return Vec::new();
    }
    let words_per_doc = spec.total_words / spec.documents;

    (1..=spec.documents)
        .map(|i| {
            let doc_words = (words_per_doc as f64 * rng.random_range(LENGTH_JITTER)) as usize;
            let themes = Theme::pair_for(i, spec.documents);
            format!("Document{i} {}", document_text(rng, doc_words, &themes))
        })
        .collect()
}

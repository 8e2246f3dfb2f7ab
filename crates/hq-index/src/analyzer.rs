//! Text analysis pipeline for hq.
//!
//! Implements a six-stage text analysis pipeline:
//! 1. `SimpleTokenizer` - splits on whitespace and punctuation
//! 2. `LowerCaser` - converts tokens to lowercase
//! 3. `RemoveLongFilter` - removes tokens longer than 40 bytes
//! 4. `StopWordFilter` - removes English stop words (optional)
//! 5. `Stemmer` - applies language-specific stemming
//! 6. `ContiguousPositions` - renumbers positions left with gaps by 3 and 4
//!
//! The same pipeline is registered with the index and used to normalize
//! query words, so query terms line up with indexed terms.

use hq_query::Analyzer;
use stop_words::LANGUAGE;
use tantivy::{
    Index,
    tokenizer::{
        Language, LowerCaser, RemoveLongFilter, SimpleTokenizer, Stemmer, StopWordFilter,
        TextAnalyzer, TokenStream,
    },
};

use crate::{IndexError, positions::ContiguousPositions};

/// Name of the custom tokenizer registered with tantivy.
pub const HQ_TOKENIZER: &str = "hq_text";

/// Maximum token length in bytes before filtering.
const MAX_TOKEN_LENGTH: usize = 40;

/// Parses a stemmer language string into a tantivy `Language`.
///
/// Supports lowercase language names matching tantivy's `Language` enum.
/// Returns an error if the language is not recognized.
pub fn parse_language(name: &str) -> Result<Language, IndexError> {
    match name.to_lowercase().as_str() {
        "arabic" => Ok(Language::Arabic),
        "danish" => Ok(Language::Danish),
        "dutch" => Ok(Language::Dutch),
        "english" => Ok(Language::English),
        "finnish" => Ok(Language::Finnish),
        "french" => Ok(Language::French),
        "german" => Ok(Language::German),
        "greek" => Ok(Language::Greek),
        "hungarian" => Ok(Language::Hungarian),
        "italian" => Ok(Language::Italian),
        "norwegian" => Ok(Language::Norwegian),
        "portuguese" => Ok(Language::Portuguese),
        "romanian" => Ok(Language::Romanian),
        "russian" => Ok(Language::Russian),
        "spanish" => Ok(Language::Spanish),
        "swedish" => Ok(Language::Swedish),
        "tamil" => Ok(Language::Tamil),
        "turkish" => Ok(Language::Turkish),
        other => Err(IndexError::InvalidLanguage(other.to_string())),
    }
}

/// Builds the English stop word filter from the ISO stop word list.
fn english_stop_words() -> StopWordFilter {
    StopWordFilter::remove(
        stop_words::get(LANGUAGE::English)
            .iter()
            .map(|word| word.to_string()),
    )
}

/// Builds the hq text analyzer.
///
/// Stop words are only removed for English; the flag is ignored for other
/// languages. Token positions are consecutive after filtering, so a phrase
/// such as "table of contents" is indexed at the offsets a phrase query over
/// its analyzed words expects.
pub fn build_analyzer(language: Language, stop_words: bool) -> TextAnalyzer {
    let builder = TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(RemoveLongFilter::limit(MAX_TOKEN_LENGTH));

    if stop_words && language == Language::English {
        builder
            .filter(english_stop_words())
            .filter(Stemmer::new(language))
            .filter(ContiguousPositions)
            .build()
    } else {
        builder
            .filter(Stemmer::new(language))
            .filter(ContiguousPositions)
            .build()
    }
}

/// Query-side analyzer backed by the tantivy pipeline.
///
/// Cloning the underlying `TextAnalyzer` per call keeps `analyze` usable
/// through a shared reference from several threads.
#[derive(Clone)]
pub struct StemmingAnalyzer {
    /// The tantivy analysis pipeline.
    analyzer: TextAnalyzer,
}

impl StemmingAnalyzer {
    /// Creates an analyzer for the given language.
    pub fn new(language: Language, stop_words: bool) -> Self {
        Self {
            analyzer: build_analyzer(language, stop_words),
        }
    }

    /// Creates an analyzer from a language name such as `"english"`.
    pub fn from_name(language: &str, stop_words: bool) -> Result<Self, IndexError> {
        Ok(Self::new(parse_language(language)?, stop_words))
    }

    /// Returns a copy of the tantivy pipeline, for registration with an index.
    pub fn text_analyzer(&self) -> TextAnalyzer {
        self.analyzer.clone()
    }

    /// Registers this pipeline with the index under [`HQ_TOKENIZER`].
    pub fn register(&self, index: &Index) {
        index.tokenizers().register(HQ_TOKENIZER, self.text_analyzer());
    }
}

impl Analyzer for StemmingAnalyzer {
    fn analyze(&self, word: &str) -> Vec<String> {
        let mut analyzer = self.analyzer.clone();
        let mut stream = analyzer.token_stream(word);
        let mut terms = Vec::new();
        while let Some(token) = stream.next() {
            terms.push(token.text.clone());
        }
        terms
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_common_languages() {
        let languages = [
            ("english", Language::English),
            ("french", Language::French),
            ("german", Language::German),
            ("russian", Language::Russian),
            ("turkish", Language::Turkish),
        ];

        for (name, expected) in languages {
            assert_eq!(
                parse_language(name).unwrap(),
                expected,
                "failed to parse {name}"
            );
        }
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(parse_language("English").unwrap(), Language::English);
        assert_eq!(parse_language("GeRmAn").unwrap(), Language::German);
    }

    #[test]
    fn parse_invalid_language() {
        let err = parse_language("klingon").unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn analyzer_lowercases_and_stems() {
        let analyzer = StemmingAnalyzer::new(Language::English, false);
        assert_eq!(analyzer.analyze("Handling"), vec!["handl"]);
        assert_eq!(analyzer.analyze("TESTING"), vec!["test"]);
    }

    #[test]
    fn analyzer_splits_punctuation() {
        let analyzer = StemmingAnalyzer::new(Language::English, false);
        assert_eq!(analyzer.analyze("foo-bar"), vec!["foo", "bar"]);
    }

    #[test]
    fn analyzer_removes_long_tokens() {
        let analyzer = StemmingAnalyzer::new(Language::English, false);
        assert!(analyzer.analyze(&"a".repeat(50)).is_empty());
    }

    #[test]
    fn stop_words_removed_when_enabled() {
        let with = StemmingAnalyzer::new(Language::English, true);
        let without = StemmingAnalyzer::new(Language::English, false);
        assert!(with.analyze("the").is_empty());
        assert_eq!(without.analyze("the"), vec!["the"]);
        assert_eq!(with.analyze("java"), vec!["java"]);
    }

    #[test]
    fn positions_are_contiguous_after_stop_words() {
        let mut analyzer = build_analyzer(Language::English, true);
        let mut stream = analyzer.token_stream("Open the table of contents view");
        let mut tokens = Vec::new();
        while let Some(token) = stream.next() {
            tokens.push((token.text.clone(), token.position));
        }
        assert_eq!(
            tokens,
            vec![
                ("tabl".to_string(), 0),
                ("content".to_string(), 1),
                ("view".to_string(), 2)
            ]
        );
    }

    #[test]
    fn build_from_name() {
        let analyzer = StemmingAnalyzer::from_name("english", false).unwrap();
        assert_eq!(analyzer.analyze("testing"), vec!["test"]);
    }

    #[test]
    fn build_from_invalid_name() {
        let err = match StemmingAnalyzer::from_name("invalid", true) {
            Err(e) => e,
            Ok(_) => panic!("expected error"),
        };
        assert!(err.to_string().contains("invalid"));
    }
}

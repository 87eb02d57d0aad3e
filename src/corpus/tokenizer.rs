//! Tokenizer collaborator and the built-in script-run fallback.
//!
//! The pipeline only assumes the [`Tokenizer`] contract: document text in,
//! ordered tagged tokens out. Production corpora are tagged by an external
//! morphological analyzer whose output arrives through the token cache;
//! [`ScriptTokenizer`] is the best-effort fallback for untagged text. It
//! segments by Unicode script runs and tags nominal-looking runs as 名詞,
//! recognizing particles only as exact whole-run surfaces — enough to drive
//! the chunker, far from real morphology.

use crate::tagging::TaggedToken;
use logos::Logos;
use std::fmt;

/// Errors raised by tokenization.
#[derive(Debug, Clone)]
pub enum TokenizeError {
    Failed(String),
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::Failed(message) => write!(f, "Tokenization failed: {}", message),
        }
    }
}

impl std::error::Error for TokenizeError {}

/// External tokenizer contract: document text → ordered tagged tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>, TokenizeError>;
}

/// Script-run token classes for the fallback tokenizer.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum ScriptRun {
    // The prolonged sound mark ー is Script=Common, so it needs listing
    // alongside the katakana block explicitly.
    #[regex(r"[\p{Katakana}ー]+")]
    Katakana,

    #[regex(r"\p{Han}+")]
    Han,

    #[regex(r"\p{Hiragana}+")]
    Hiragana,

    #[regex(r"[A-Za-z]+")]
    Latin,

    #[regex(r"[0-9]+")]
    Digits,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

/// Particle surfaces the fallback recognizes, with the tag an external
/// tagger would assign. Exact whole-run matches only.
const PARTICLE_TAGS: &[(&str, &str)] = &[
    ("の", "助詞,連体化"),
    ("を", "助詞,格助詞"),
    ("が", "助詞,格助詞"),
    ("は", "助詞,係助詞"),
    ("に", "助詞,格助詞"),
    ("で", "助詞,格助詞"),
    ("と", "助詞,並立助詞"),
    ("や", "助詞,並立助詞"),
    ("も", "助詞,係助詞"),
    ("て", "助詞,接続助詞"),
    ("ので", "助詞,接続助詞"),
    ("から", "助詞,格助詞"),
];

/// Best-effort tokenizer over Unicode script runs. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptTokenizer;

impl ScriptTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for ScriptTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>, TokenizeError> {
        let mut lexer = ScriptRun::lexer(text);
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next() {
            let surface = lexer.slice();
            let part_of_speech = match result {
                Ok(ScriptRun::Whitespace) => continue,
                Ok(ScriptRun::Katakana)
                | Ok(ScriptRun::Han)
                | Ok(ScriptRun::Latin)
                | Ok(ScriptRun::Digits) => "名詞,一般",
                Ok(ScriptRun::Hiragana) => particle_tag(surface).unwrap_or("その他,一般"),
                Err(()) => "記号,一般",
            };
            tokens.push(TaggedToken::new(surface, part_of_speech, ""));
        }
        Ok(tokens)
    }
}

fn particle_tag(surface: &str) -> Option<&'static str> {
    PARTICLE_TAGS
        .iter()
        .find(|(particle, _)| *particle == surface)
        .map(|(_, tag)| *tag)
}

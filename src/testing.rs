//! Shared factories for unit and integration tests.
//!
//! Tests build token streams from these helpers instead of repeating raw
//! tag strings; the tags mirror what an external morphological tagger
//! emits, so the classifier sees realistic input.

use crate::corpus::Document;
use crate::tagging::{classify, TaggedToken, Token};

pub fn noun(surface: &str) -> TaggedToken {
    TaggedToken::new(surface, "名詞,一般", "")
}

pub fn prefix(surface: &str) -> TaggedToken {
    TaggedToken::new(surface, "接頭詞,名詞接続", "")
}

pub fn verb(surface: &str, inflection: &str) -> TaggedToken {
    TaggedToken::new(surface, "動詞,自立", inflection)
}

pub fn aux(surface: &str) -> TaggedToken {
    TaggedToken::new(surface, "助動詞", "")
}

pub fn adjective(surface: &str) -> TaggedToken {
    TaggedToken::new(surface, "形容詞,自立", "基本形")
}

pub fn adverb(surface: &str) -> TaggedToken {
    TaggedToken::new(surface, "副詞,一般", "")
}

pub fn determiner(surface: &str) -> TaggedToken {
    TaggedToken::new(surface, "連体詞", "")
}

pub fn particle(surface: &str, minor: &str) -> TaggedToken {
    TaggedToken::new(surface, format!("助詞,{}", minor), "")
}

pub fn symbol(surface: &str) -> TaggedToken {
    TaggedToken::new(surface, "記号,一般", "")
}

/// Classify a whole tagged stream.
pub fn classify_all(tagged: &[TaggedToken]) -> Vec<Token> {
    tagged.iter().map(classify).collect()
}

/// A document whose title is its id.
pub fn document(id: &str, content: &str) -> Document {
    Document {
        id: id.to_string(),
        title: id.to_string(),
        content: content.to_string(),
    }
}

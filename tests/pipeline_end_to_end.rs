//! End-to-end pipeline scenario: a small corpus mentioning 東京タワー.
//!
//! Three documents contain the phrase as consecutive noun tokens; the rest
//! are unrelated. The phrase must come out as a keyword mapped to exactly
//! those documents, with its dominated substring pruned — and must vanish
//! entirely when only two documents mention it.

use kakari::corpus::Document;
use kakari::pipeline::Analyzer;
use kakari::tagging::TaggedToken;
use kakari::testing::{adjective, document, noun, particle};
use std::collections::BTreeMap;

struct Corpus {
    documents: Vec<Document>,
    tokens: BTreeMap<String, Vec<TaggedToken>>,
}

/// Build a ten-document corpus where the first `mentions` documents contain
/// 東京タワー in distinct sentences and the rest are unrelated filler.
fn corpus_with_mentions(mentions: usize) -> Corpus {
    let mention_sentences: [(&str, Vec<TaggedToken>); 3] = [
        (
            "東京タワーの歴史",
            vec![
                noun("東京"),
                noun("タワー"),
                particle("の", "連体化"),
                noun("歴史"),
            ],
        ),
        (
            "東京タワーと港",
            vec![
                noun("東京"),
                noun("タワー"),
                particle("と", "並立助詞"),
                noun("港"),
            ],
        ),
        (
            "東京タワーは赤い",
            vec![
                noun("東京"),
                noun("タワー"),
                particle("は", "係助詞"),
                adjective("赤い"),
            ],
        ),
    ];
    assert!(mentions <= mention_sentences.len());

    let mut documents = Vec::new();
    let mut tokens = BTreeMap::new();
    for (i, (content, tagged)) in mention_sentences.iter().take(mentions).enumerate() {
        let id = format!("doc{:02}.md", i);
        documents.push(document(&id, content));
        tokens.insert(id, tagged.clone());
    }
    for i in mentions..10 {
        let id = format!("doc{:02}.md", i);
        documents.push(document(&id, "静かな一日の記録"));
        tokens.insert(id, vec![noun("記録")]);
    }
    Corpus { documents, tokens }
}

#[test]
fn three_mentions_survive_with_their_document_list() {
    let corpus = corpus_with_mentions(3);
    let artifacts = Analyzer::default()
        .analyze(&corpus.documents, &corpus.tokens, &[])
        .unwrap();

    assert_eq!(
        artifacts.keyword_to_documents.get("東京タワー"),
        Some(&vec![
            "doc00.md".to_string(),
            "doc01.md".to_string(),
            "doc02.md".to_string()
        ])
    );

    // The per-document merged phrases occur once each and fall to the
    // frequency bound.
    assert!(!artifacts.keyword_to_documents.contains_key("東京タワーの歴史"));

    // The katakana run タワー occurs in the same three documents as its
    // superstring and is pruned as dominated.
    assert!(!artifacts.keyword_to_documents.contains_key("タワー"));
}

#[test]
fn two_mentions_fall_below_the_frequency_bound() {
    let corpus = corpus_with_mentions(2);
    let artifacts = Analyzer::default()
        .analyze(&corpus.documents, &corpus.tokens, &[])
        .unwrap();
    assert!(!artifacts.keyword_to_documents.contains_key("東京タワー"));
    assert!(!artifacts.keyword_to_documents.contains_key("タワー"));
}

#[test]
fn document_index_lists_keywords_per_document() {
    let corpus = corpus_with_mentions(3);
    let artifacts = Analyzer::default()
        .analyze(&corpus.documents, &corpus.tokens, &[])
        .unwrap();

    for id in ["doc00.md", "doc01.md", "doc02.md"] {
        assert_eq!(
            artifacts.document_to_keywords.get(id),
            Some(&vec!["東京タワー".to_string()]),
            "document {} should index the surviving keyword",
            id
        );
    }
    assert!(!artifacts.document_to_keywords.contains_key("doc05.md"));
}

#[test]
fn surviving_curated_keywords_are_reported() {
    let corpus = corpus_with_mentions(3);
    let curated = vec!["東京タワー".to_string(), "ポッドキャスト".to_string()];
    let artifacts = Analyzer::default()
        .analyze(&corpus.documents, &corpus.tokens, &curated)
        .unwrap();
    assert_eq!(artifacts.curated_keywords, vec!["東京タワー"]);
}

#[test]
fn documents_without_token_streams_still_feed_pattern_candidates() {
    // Tokens are withheld entirely; the katakana extraction still finds the
    // run in raw content, and with four mentions it survives filtering.
    let mut documents = Vec::new();
    for i in 0..4 {
        documents.push(document(
            &format!("doc{:02}.md", i),
            &format!("ポッドキャスト第{}回", i),
        ));
    }
    for i in 4..10 {
        documents.push(document(&format!("doc{:02}.md", i), "別の話"));
    }

    let artifacts = Analyzer::default()
        .analyze(&documents, &BTreeMap::new(), &[])
        .unwrap();
    assert!(artifacts.keyword_to_documents.contains_key("ポッドキャスト"));
}

#[test]
fn an_empty_corpus_produces_empty_artifacts() {
    let artifacts = Analyzer::default()
        .analyze(&[], &BTreeMap::new(), &[])
        .unwrap();
    assert!(artifacts.keyword_to_documents.is_empty());
    assert!(artifacts.document_to_keywords.is_empty());
    assert!(artifacts.curated_keywords.is_empty());
}

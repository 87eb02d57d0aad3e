//! Lexical role classification for tagged tokens.
//!
//! The external tokenizer emits tokens tagged with IPADIC-style
//! comma-joined part-of-speech strings (e.g. `名詞,一般` or `助詞,連体化`).
//! This module maps every tag to exactly one role family. Classification is
//! an ordered table scan, not a hash lookup: the particle chain in
//! particular depends on evaluation order, because a minor tag can capture a
//! surface before a later surface rule sees it (接続助詞 claims ので, so the
//! causal rule only ever fires for particles the earlier rules passed over).

use serde::{Deserialize, Serialize};

/// Raw tokenizer output: a surface form plus the tagger's part-of-speech
/// and inflection strings. This is also the token cache wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub surface: String,
    pub part_of_speech: String,
    #[serde(default)]
    pub inflection_form: String,
}

impl TaggedToken {
    pub fn new(
        surface: impl Into<String>,
        part_of_speech: impl Into<String>,
        inflection_form: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            part_of_speech: part_of_speech.into(),
            inflection_form: inflection_form.into(),
        }
    }

    /// Major part-of-speech field (before the first comma).
    pub fn major(&self) -> &str {
        self.part_of_speech
            .split(',')
            .next()
            .unwrap_or(&self.part_of_speech)
    }

    /// Minor part-of-speech field (between the first and second comma).
    pub fn minor(&self) -> &str {
        self.part_of_speech.split(',').nth(1).unwrap_or("")
    }
}

/// Particle subtypes that matter to the phrase grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParticleKind {
    /// 連体化 — attributive の joining two nominals.
    Attributive,
    /// 格助詞 を — object marker.
    Object,
    /// 格助詞/係助詞 が・は — subject or topic marker.
    Subject,
    /// 接続助詞 — connective chaining predicates.
    Connective,
    /// 並立助詞 — coordination of nominals.
    Coordinating,
    /// Causal conjunction surfaces (ので・から) not claimed above.
    Causal,
    /// Any other particle.
    Plain,
}

/// Coarse grammatical role of one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalRole {
    /// 接頭詞 — prefixes attach to the following nominal run.
    Prefix,
    /// 名詞.
    Noun,
    /// 動詞.
    Verb,
    /// 助動詞.
    Auxiliary,
    /// 形容詞・形容動詞.
    Adjective,
    /// 副詞・連体詞.
    Modifier,
    /// 助詞, refined by subtype.
    Particle(ParticleKind),
    /// Everything else, preserving the raw major tag.
    Other(String),
}

impl LexicalRole {
    /// Roles that participate in a noun-phrase run.
    pub fn is_nominal(&self) -> bool {
        matches!(self, LexicalRole::Prefix | LexicalRole::Noun)
    }
}

/// A token with its role assigned. Immutable once classified.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub surface: String,
    pub role: LexicalRole,
    pub inflection: String,
}

/// Role family a major tag maps to, before particle refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleFamily {
    Prefix,
    Noun,
    Verb,
    Auxiliary,
    Adjective,
    Modifier,
    Particle,
}

/// Ordered major-tag table. First match wins; unlisted majors fall through
/// to [`LexicalRole::Other`].
const TAG_FAMILIES: &[(&str, RoleFamily)] = &[
    ("接頭詞", RoleFamily::Prefix),
    ("名詞", RoleFamily::Noun),
    ("動詞", RoleFamily::Verb),
    ("助動詞", RoleFamily::Auxiliary),
    ("形容詞", RoleFamily::Adjective),
    ("形容動詞", RoleFamily::Adjective),
    ("副詞", RoleFamily::Modifier),
    ("連体詞", RoleFamily::Modifier),
    ("助詞", RoleFamily::Particle),
];

/// Classify one tagged token. Pure and total: every tag maps to exactly one
/// role, unknown tags keep their raw major tag as the role label.
pub fn classify(tagged: &TaggedToken) -> Token {
    Token {
        surface: tagged.surface.clone(),
        role: role_for(tagged.major(), tagged.minor(), &tagged.surface),
        inflection: tagged.inflection_form.clone(),
    }
}

fn role_for(major: &str, minor: &str, surface: &str) -> LexicalRole {
    for (tag, family) in TAG_FAMILIES {
        if *tag != major {
            continue;
        }
        return match family {
            RoleFamily::Prefix => LexicalRole::Prefix,
            RoleFamily::Noun => LexicalRole::Noun,
            RoleFamily::Verb => LexicalRole::Verb,
            RoleFamily::Auxiliary => LexicalRole::Auxiliary,
            RoleFamily::Adjective => LexicalRole::Adjective,
            RoleFamily::Modifier => LexicalRole::Modifier,
            RoleFamily::Particle => LexicalRole::Particle(resolve_particle(minor, surface)),
        };
    }
    LexicalRole::Other(major.to_string())
}

/// Particle subtype resolution. The chain order is load-bearing: a minor tag
/// earlier in the chain claims its surfaces before a later rule can.
fn resolve_particle(minor: &str, surface: &str) -> ParticleKind {
    if minor == "連体化" {
        ParticleKind::Attributive
    } else if minor == "格助詞" && surface == "を" {
        ParticleKind::Object
    } else if (minor == "格助詞" || minor == "係助詞") && (surface == "が" || surface == "は") {
        ParticleKind::Subject
    } else if minor == "接続助詞" {
        ParticleKind::Connective
    } else if minor == "並立助詞" {
        ParticleKind::Coordinating
    } else if surface == "ので" || surface == "から" {
        ParticleKind::Causal
    } else {
        ParticleKind::Plain
    }
}

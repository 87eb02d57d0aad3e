//! Grammar rule definitions for the phrase combination engine.
//!
//! Rules are declared in priority order and tried in declaration order: the
//! first rule whose right-hand side matches the stack tail is applied. Long
//! and high-priority rules come first, which is what disambiguates between
//! overlapping patterns.
//!
//! # Rule order
//!
//! 1. NP → NP P_attr NP   attributive join (東京 の 夜)
//! 2. NP → VP NP          prenominal verb phrase, licensing guard below
//! 3. NP → MOD NP
//! 4. NP → NP P_para NP   coordination
//! 5. VP → NP P_obj VP    object attachment
//! 6. VP → VP P_conn VP   connective chaining
//! 7. VP → MOD VP
//! 8. VP → NP P_subj VP   subject/topic attachment
//! 9. ADJP → NP P_subj ADJP
//! 10. ADJP → MOD ADJP
//! 11. Clause → ADJP P_reason VP  causal clause

use crate::chunking::chunk::{Chunk, ChunkRole};
use crate::tagging::{LexicalRole, ParticleKind};

/// Grammar symbols matched against the roles on the parse stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sym {
    Np,
    Vp,
    Adjp,
    Mod,
    PAttr,
    PObj,
    PSubj,
    PConn,
    PPara,
    PReason,
}

impl Sym {
    pub fn matches(self, role: &ChunkRole) -> bool {
        matches!(
            (self, role),
            (Sym::Np, ChunkRole::NounPhrase)
                | (Sym::Vp, ChunkRole::VerbPhrase)
                | (Sym::Adjp, ChunkRole::AdjectivePhrase)
                | (Sym::Mod, ChunkRole::Modifier)
                | (Sym::PAttr, ChunkRole::Particle(ParticleKind::Attributive))
                | (Sym::PObj, ChunkRole::Particle(ParticleKind::Object))
                | (Sym::PSubj, ChunkRole::Particle(ParticleKind::Subject))
                | (Sym::PConn, ChunkRole::Particle(ParticleKind::Connective))
                | (Sym::PPara, ChunkRole::Particle(ParticleKind::Coordinating))
                | (Sym::PReason, ChunkRole::Particle(ParticleKind::Causal))
        )
    }
}

/// Left-hand side of a production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Production {
    NounPhrase,
    VerbPhrase,
    AdjectivePhrase,
    Clause,
}

impl Production {
    pub fn role(self) -> ChunkRole {
        match self {
            Production::NounPhrase => ChunkRole::NounPhrase,
            Production::VerbPhrase => ChunkRole::VerbPhrase,
            Production::AdjectivePhrase => ChunkRole::AdjectivePhrase,
            Production::Clause => ChunkRole::Clause,
        }
    }
}

/// One production rule. The guard, when present, sees the matched stack tail
/// and can veto the reduction.
pub struct Rule {
    pub name: &'static str,
    pub produces: Production,
    pub pattern: &'static [Sym],
    pub guard: Option<fn(&[Chunk]) -> bool>,
}

/// The ordered grammar. Declaration order is the priority order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "np_attributive",
        produces: Production::NounPhrase,
        pattern: &[Sym::Np, Sym::PAttr, Sym::Np],
        guard: None,
    },
    Rule {
        name: "np_prenominal_verb",
        produces: Production::NounPhrase,
        pattern: &[Sym::Vp, Sym::Np],
        guard: Some(verb_phrase_modifies_noun),
    },
    Rule {
        name: "np_modified",
        produces: Production::NounPhrase,
        pattern: &[Sym::Mod, Sym::Np],
        guard: None,
    },
    Rule {
        name: "np_coordination",
        produces: Production::NounPhrase,
        pattern: &[Sym::Np, Sym::PPara, Sym::Np],
        guard: None,
    },
    Rule {
        name: "vp_object",
        produces: Production::VerbPhrase,
        pattern: &[Sym::Np, Sym::PObj, Sym::Vp],
        guard: None,
    },
    Rule {
        name: "vp_chain",
        produces: Production::VerbPhrase,
        pattern: &[Sym::Vp, Sym::PConn, Sym::Vp],
        guard: None,
    },
    Rule {
        name: "vp_modified",
        produces: Production::VerbPhrase,
        pattern: &[Sym::Mod, Sym::Vp],
        guard: None,
    },
    Rule {
        name: "vp_subject",
        produces: Production::VerbPhrase,
        pattern: &[Sym::Np, Sym::PSubj, Sym::Vp],
        guard: None,
    },
    Rule {
        name: "adjp_subject",
        produces: Production::AdjectivePhrase,
        pattern: &[Sym::Np, Sym::PSubj, Sym::Adjp],
        guard: None,
    },
    Rule {
        name: "adjp_modified",
        produces: Production::AdjectivePhrase,
        pattern: &[Sym::Mod, Sym::Adjp],
        guard: None,
    },
    Rule {
        name: "clause_causal",
        produces: Production::Clause,
        pattern: &[Sym::Adjp, Sym::PReason, Sym::Vp],
        guard: None,
    },
];

/// Inflection forms that license a verb as a prenominal modifier.
const PRENOMINAL_FORMS: &[&str] = &["基本形", "連体形", "体言接続"];

/// Guard for `NP → VP NP`: the verb phrase must be able to modify the
/// following nominal. A VP ending in an auxiliary is licensed outright;
/// otherwise the head verb's inflection must be a base or attributive form.
fn verb_phrase_modifies_noun(window: &[Chunk]) -> bool {
    let vp = &window[0];
    if let Some(last) = vp.last_token() {
        if matches!(last.role, LexicalRole::Auxiliary) {
            return true;
        }
    }
    match vp.head_verb() {
        Some(verb) => PRENOMINAL_FORMS.contains(&verb.inflection.as_str()),
        None => false,
    }
}

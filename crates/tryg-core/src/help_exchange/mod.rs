//! Help exchange: offers, requests, and the rules that pair them.
//!
//! Circle members post offers ("I can cook") and requests ("help with
//! shopping"). A configured rule declares that a given offer and request,
//! or a given presence status and request, make a match worth celebrating.
//! [`compute_matches`] finds every rule satisfied by the current snapshot.

mod matcher;
mod rules;
mod types;

pub use matcher::{compute_matches, ActiveMatch, MatchInput, MatchKind, MatchResult};
pub use rules::{Celebration, MatchPairRule, MatchRules, StatusMatchRule};
pub use types::{HelpEntry, HelpOffer, HelpRequest};

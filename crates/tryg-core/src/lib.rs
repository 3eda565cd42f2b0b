//! # Tryg Core Library
//!
//! Business rules for Tryg, a caregiving app that keeps a senior and their
//! family in touch. Data lives in the app's document store; this library
//! only computes over snapshots of it.
//!
//! ## Architecture
//!
//! - **Help exchange**: detects when an offer, a request and member
//!   presence line up, ranking cross-family matches first
//! - **Briefing**: one-sentence daily summary from tasks and symptoms,
//!   plus medication streaks
//! - **Storage**: TOML configuration holding briefing settings and match
//!   rules
//!
//! ## Key Components
//!
//! - [`compute_matches`]: Help exchange match engine
//! - [`BriefingGenerator`]: Daily briefing generator
//! - [`CircleSnapshot`]: Input bundle for both engines
//! - [`Config`]: Application configuration management
//!
//! Both engines are pure: identical inputs give identical outputs and no
//! call mutates its arguments.

pub mod briefing;
pub mod catalog;
pub mod error;
pub mod help_exchange;
pub mod presence;
pub mod snapshot;
pub mod storage;
pub mod time;

pub use briefing::{
    generate_briefing, medication_streak, streak_message, Briefing, BriefingCase, BriefingConfig,
    BriefingGenerator, BriefingInput, BriefingKind, Locale, SymptomLogEntry, Task,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use help_exchange::{
    compute_matches, ActiveMatch, Celebration, HelpOffer, HelpRequest, MatchInput, MatchKind,
    MatchPairRule, MatchResult, MatchRules, StatusMatchRule,
};
pub use presence::{MemberStatus, Role};
pub use snapshot::CircleSnapshot;
pub use storage::Config;

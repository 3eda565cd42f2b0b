//! Built-in catalogs of help items and symptom vocabulary.
//!
//! Labels are Danish, the language the circles are set up in.

use serde::Serialize;

use crate::presence;

/// A predefined offer or request a member can post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HelpItem {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

const fn item(id: &'static str, label: &'static str, emoji: &'static str) -> HelpItem {
    HelpItem { id, label, emoji }
}

pub const RELATIVE_OFFERS: &[HelpItem] = &[
    item("cook", "Lave mad til dig", "🍳"),
    item("visit", "Komme på besøg", "☕"),
    item("drive", "Køre dig et sted hen", "🚗"),
    item("shop", "Handle ind for dig", "🛒"),
    item("garden", "Hjælpe i haven", "🌿"),
    item("tech", "Hjælpe med teknologi", "💻"),
    item("call", "Ringe og snakke", "📞"),
    item("company", "Holde dig med selskab", "🤗"),
];

pub const RELATIVE_REQUESTS: &[HelpItem] = &[
    item("recipe", "Lære en opskrift", "📖"),
    item("advice", "Gode råd", "💡"),
    item("story", "Høre en historie", "📚"),
    item("babysit", "Hjælp med børnene", "👶"),
    item("craft", "Lave noget kreativt sammen", "🎨"),
];

pub const SENIOR_OFFERS: &[HelpItem] = &[
    item("listen", "Jeg kan hjælpe med at lytte", "👂"),
    item("recipe", "Jeg har en god opskrift", "👩‍🍳"),
    item("stories", "Vil gerne høre om jeres dag", "💬"),
    item("cook", "Kan lave mad til os", "🍳"),
    item("teach", "Vil gerne lære fra mig", "📚"),
];

pub const SENIOR_REQUESTS: &[HelpItem] = &[
    item("call", "Kan nogen ringe mig i dag?", "📞"),
    item("shop", "Hjælp til indkøb denne uge", "🛒"),
    item("transport", "Følgeskab til lægen/aftale", "🚗"),
    item("company", "Bare noget selskab", "☕"),
    item("outdoor", "Gå en tur sammen", "🌿"),
    item("help-tech", "Hjælp med telefon/computer", "📱"),
];

fn all_help_items() -> impl Iterator<Item = &'static HelpItem> {
    RELATIVE_OFFERS
        .iter()
        .chain(RELATIVE_REQUESTS)
        .chain(SENIOR_OFFERS)
        .chain(SENIOR_REQUESTS)
}

/// First catalog entry with this id, offers before requests.
pub fn help_item(id: &str) -> Option<&'static HelpItem> {
    all_help_items().find(|i| i.id == id)
}

pub fn is_known_help_id(id: &str) -> bool {
    help_item(id).is_some()
}

pub fn is_known_status(id: &str) -> bool {
    presence::status_option(id).is_some()
}

/// A body region for pain logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BodyRegion {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

/// Body regions, top to bottom.
pub const BODY_REGIONS: &[BodyRegion] = &[
    BodyRegion { id: "head", label: "Hoved", emoji: "🧠" },
    BodyRegion { id: "neck", label: "Nakke", emoji: "🦴" },
    BodyRegion { id: "chest", label: "Bryst", emoji: "❤️" },
    BodyRegion { id: "back", label: "Ryg", emoji: "🔙" },
    BodyRegion { id: "stomach", label: "Mave", emoji: "🤢" },
    BodyRegion { id: "leftArm", label: "Venstre arm", emoji: "💪" },
    BodyRegion { id: "rightArm", label: "Højre arm", emoji: "💪" },
    BodyRegion { id: "leftLeg", label: "Venstre ben", emoji: "🦵" },
    BodyRegion { id: "rightLeg", label: "Højre ben", emoji: "🦵" },
];

/// Pain severity on a three-step scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityLevel {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

pub const SEVERITY_LEVELS: &[SeverityLevel] = &[
    SeverityLevel { id: "mild", label: "Lidt", emoji: "🙂" },
    SeverityLevel { id: "moderate", label: "Noget", emoji: "😐" },
    SeverityLevel { id: "severe", label: "Meget", emoji: "😣" },
];

/// Label for a body region, or the raw id when unknown.
pub fn body_region_label(id: &str) -> &str {
    BODY_REGIONS
        .iter()
        .find(|r| r.id == id)
        .map_or(id, |r| r.label)
}

/// Emoji for a body region; a pin when unknown.
pub fn body_region_emoji(id: &str) -> &'static str {
    BODY_REGIONS
        .iter()
        .find(|r| r.id == id)
        .map_or("📍", |r| r.emoji)
}

pub fn severity_level(id: &str) -> Option<&'static SeverityLevel> {
    SEVERITY_LEVELS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_item_prefers_offer_entry() {
        // "cook" is both a relative and a senior offer
        assert_eq!(help_item("cook").map(|i| i.label), Some("Lave mad til dig"));
        assert_eq!(help_item("help-tech").map(|i| i.emoji), Some("📱"));
        assert!(!is_known_help_id("talk"));
    }

    #[test]
    fn body_region_label_falls_back_to_id() {
        assert_eq!(body_region_label("leftLeg"), "Venstre ben");
        assert_eq!(body_region_label("elbow"), "elbow");
        assert_eq!(body_region_emoji("elbow"), "📍");
    }

    #[test]
    fn severity_lookup() {
        assert_eq!(severity_level("severe").map(|s| s.label), Some("Meget"));
        assert!(severity_level("extreme").is_none());
    }
}

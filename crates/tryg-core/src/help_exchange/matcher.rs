//! Match detection between offers, requests and member statuses.

use serde::{Deserialize, Serialize};

use super::rules::{Celebration, MatchRules};
use super::types::{HelpOffer, HelpRequest};
use crate::presence::MemberStatus;

/// Which kind of rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    OfferRequest,
    StatusRequest,
}

/// A satisfied rule. Derived on every call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveMatch {
    #[serde(rename = "type")]
    pub kind: MatchKind,

    /// Present for offer-request matches only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<HelpOffer>,

    pub request: HelpRequest,

    pub celebration: Celebration,

    /// Offer and request were posted by members with different roles
    #[serde(default)]
    pub is_cross_family: bool,

    #[serde(default)]
    pub is_status_match: bool,
}

/// The current snapshot the matcher looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchInput<'a> {
    pub offers: &'a [HelpOffer],
    pub requests: &'a [HelpRequest],
    /// The caller's own status, which may not be in `member_statuses` yet
    pub my_status: Option<&'a str>,
    pub member_statuses: &'a [MemberStatus],
}

/// Prioritized matches for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Cross-family matches first, otherwise in rule order
    pub matches: Vec<ActiveMatch>,
    pub has_matches: bool,
    pub top_match: Option<ActiveMatch>,
}

/// Find every rule satisfied by `input`.
///
/// Offer-request rules are checked before status rules, each in
/// configuration order. Every satisfied rule yields its own match even when
/// several rules share an offer or request. The result is then stably
/// partitioned so cross-family matches come first.
pub fn compute_matches(input: &MatchInput<'_>, rules: &MatchRules) -> MatchResult {
    let mut matches: Vec<ActiveMatch> = Vec::new();

    for pair in &rules.match_pairs {
        let offer = input.offers.iter().find(|o| o.id == pair.offer_id);
        let request = input.requests.iter().find(|r| r.id == pair.request_id);

        if let (Some(offer), Some(request)) = (offer, request) {
            matches.push(ActiveMatch {
                kind: MatchKind::OfferRequest,
                offer: Some(offer.clone()),
                request: request.clone(),
                celebration: pair.celebration.clone(),
                is_cross_family: offer.is_other_role_than(request),
                is_status_match: false,
            });
        }
    }

    for rule in &rules.status_matches {
        let status_present = input.member_statuses.iter().any(|m| m.is(&rule.status_id))
            || input.my_status == Some(rule.status_id.as_str());
        if !status_present {
            continue;
        }

        if let Some(request) = input.requests.iter().find(|r| r.id == rule.request_id) {
            matches.push(ActiveMatch {
                kind: MatchKind::StatusRequest,
                offer: None,
                request: request.clone(),
                celebration: rule.celebration.clone(),
                is_cross_family: false,
                is_status_match: true,
            });
        }
    }

    let has_matches = !matches.is_empty();
    if has_matches {
        tracing::debug!(count = matches.len(), "help exchange matches detected");
    }

    // sort_by_key is stable
    matches.sort_by_key(|m| !m.is_cross_family);
    let top_match = matches.first().cloned();

    MatchResult {
        matches,
        has_matches,
        top_match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::help_exchange::{HelpEntry, MatchPairRule};
    use crate::presence::Role;

    fn offer(id: &str, role: Role) -> HelpOffer {
        HelpEntry::new(id).by(role)
    }

    #[test]
    fn empty_input_yields_no_matches() {
        let result = compute_matches(&MatchInput::default(), &MatchRules::default());
        assert!(result.matches.is_empty());
        assert!(!result.has_matches);
        assert!(result.top_match.is_none());
    }

    #[test]
    fn offer_request_pair_matches() {
        let offers = vec![offer("cook", Role::Relative)];
        let requests = vec![offer("shop", Role::Senior)];
        let input = MatchInput {
            offers: &offers,
            requests: &requests,
            ..Default::default()
        };

        let result = compute_matches(&input, &MatchRules::default());
        assert_eq!(result.matches.len(), 1);
        let m = &result.matches[0];
        assert_eq!(m.kind, MatchKind::OfferRequest);
        assert!(m.is_cross_family);
        assert!(!m.is_status_match);
        assert_eq!(m.celebration.action, "plan-meal");
        assert_eq!(result.top_match.as_ref(), Some(m));
    }

    #[test]
    fn same_role_pair_is_not_cross_family() {
        let offers = vec![offer("drive", Role::Relative)];
        let requests = vec![offer("transport", Role::Relative)];
        let input = MatchInput {
            offers: &offers,
            requests: &requests,
            ..Default::default()
        };

        let result = compute_matches(&input, &MatchRules::default());
        assert_eq!(result.matches.len(), 1);
        assert!(!result.matches[0].is_cross_family);
    }

    #[test]
    fn one_missing_role_is_cross_family() {
        let offers = vec![offer("drive", Role::Relative), HelpEntry::new("cook")];
        let requests = vec![HelpEntry::new("transport"), offer("shop", Role::Relative)];
        let input = MatchInput {
            offers: &offers,
            requests: &requests,
            ..Default::default()
        };

        let result = compute_matches(&input, &MatchRules::default());
        assert_eq!(result.matches.len(), 2);
        assert!(result.matches.iter().all(|m| m.is_cross_family));
    }

    #[test]
    fn both_roles_missing_is_not_cross_family() {
        let offers = vec![HelpEntry::new("cook")];
        let requests = vec![HelpEntry::new("shop")];
        let input = MatchInput {
            offers: &offers,
            requests: &requests,
            ..Default::default()
        };

        let result = compute_matches(&input, &MatchRules::default());
        assert!(!result.matches[0].is_cross_family);
    }

    #[test]
    fn different_unknown_roles_are_cross_family() {
        let offers = vec![offer("garden", Role::Other("guest".into()))];
        let requests = vec![offer("outdoor", Role::Other("caregiver".into()))];
        let input = MatchInput {
            offers: &offers,
            requests: &requests,
            ..Default::default()
        };

        let result = compute_matches(&input, &MatchRules::default());
        assert!(result.matches[0].is_cross_family);
    }

    #[test]
    fn offer_without_request_does_not_match() {
        let offers = vec![offer("cook", Role::Relative)];
        let input = MatchInput {
            offers: &offers,
            ..Default::default()
        };
        assert!(!compute_matches(&input, &MatchRules::default()).has_matches);
    }

    #[test]
    fn member_status_matches_request() {
        let requests = vec![offer("talk", Role::Senior)];
        let statuses = vec![MemberStatus::new("u2", "busy"), MemberStatus::new("u3", "available")];
        let input = MatchInput {
            requests: &requests,
            member_statuses: &statuses,
            ..Default::default()
        };

        let result = compute_matches(&input, &MatchRules::default());
        assert_eq!(result.matches.len(), 1);
        let m = &result.matches[0];
        assert_eq!(m.kind, MatchKind::StatusRequest);
        assert!(m.is_status_match);
        assert!(m.offer.is_none());
        assert_eq!(m.request.id, "talk");
    }

    #[test]
    fn own_status_counts_without_member_entry() {
        let requests = vec![offer("visit", Role::Senior)];
        let input = MatchInput {
            requests: &requests,
            my_status: Some("home"),
            ..Default::default()
        };

        let result = compute_matches(&input, &MatchRules::default());
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].celebration.emoji, "🏠");
    }

    #[test]
    fn cross_family_matches_come_first() {
        let offers = vec![offer("cook", Role::Relative), offer("visit", Role::Relative)];
        let requests = vec![
            offer("shop", Role::Relative),
            offer("company", Role::Senior),
            offer("talk", Role::Senior),
        ];
        let statuses = vec![MemberStatus::new("u1", "available")];
        let input = MatchInput {
            offers: &offers,
            requests: &requests,
            my_status: None,
            member_statuses: &statuses,
        };

        let result = compute_matches(&input, &MatchRules::default());
        let order: Vec<&str> = result.matches.iter().map(|m| m.request.id.as_str()).collect();
        assert_eq!(order, ["company", "shop", "talk"]);
        assert_eq!(result.top_match.map(|m| m.request.id), Some("company".to_string()));
    }

    #[test]
    fn rules_sharing_an_entity_each_match() {
        let mut rules = MatchRules::empty();
        let celebration = MatchRules::default().match_pairs[0].celebration.clone();
        for request_id in ["shop", "company"] {
            rules.match_pairs.push(MatchPairRule {
                offer_id: "cook".into(),
                request_id: request_id.into(),
                celebration: celebration.clone(),
            });
        }
        let offers = vec![offer("cook", Role::Relative)];
        let requests = vec![offer("shop", Role::Senior), offer("company", Role::Senior)];
        let input = MatchInput {
            offers: &offers,
            requests: &requests,
            ..Default::default()
        };

        assert_eq!(compute_matches(&input, &rules).matches.len(), 2);
    }

    #[test]
    fn match_serializes_with_wire_names() {
        let requests = vec![offer("talk", Role::Senior)];
        let input = MatchInput {
            requests: &requests,
            my_status: Some("available"),
            ..Default::default()
        };
        let result = compute_matches(&input, &MatchRules::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["hasMatches"], true);
        assert_eq!(json["topMatch"]["type"], "status-request");
        assert_eq!(json["topMatch"]["isStatusMatch"], true);
        assert!(json["topMatch"].get("offer").is_none());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Rendering adapter: view-model output to display rows.
//!
//! The gallery view-model hands back plain [`MediaItem`]s; this module
//! combines them with the viewer session's access decisions into
//! [`MediaCard`]s, the unit a front end renders. UI-only semantics live
//! here and nowhere else - in particular the "no results" sentinel card
//! substituted when a text search matches nothing, which the view-model
//! itself never produces.

use crate::domain::access::{Access, Session};
use crate::domain::media::MediaItem;

/// One renderable gallery cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCard {
    /// Item id, empty for the "no results" placeholder.
    pub id: String,
    /// Display title (or the localized "no results" message).
    pub title: String,
    /// Whether the paywall overlay covers this card.
    pub locked: bool,
    /// Whether the premium badge is shown.
    pub premium: bool,
    /// Duration label for video cards.
    pub duration: Option<String>,
}

impl MediaCard {
    /// Returns `true` if this is the "no results" placeholder card.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.id.is_empty()
    }
}

/// Builds the display row for one item under the given session.
#[must_use]
pub fn card(item: &MediaItem, session: &Session) -> MediaCard {
    MediaCard {
        id: item.id.clone(),
        title: item.title.clone(),
        locked: session.can_view(item) == Access::RequiresSubscription,
        premium: item.is_premium,
        duration: item.duration.clone(),
    }
}

/// Builds display rows for a visible gallery page.
#[must_use]
pub fn cards(items: &[&MediaItem], session: &Session) -> Vec<MediaCard> {
    items.iter().map(|item| card(item, session)).collect()
}

/// Builds display rows for a search results page.
///
/// When the search matched nothing, substitutes a single sentinel
/// placeholder card carrying the (already localized) `no_results_message`.
#[must_use]
pub fn search_cards(
    items: &[&MediaItem],
    session: &Session,
    no_results_message: &str,
) -> Vec<MediaCard> {
    if items.is_empty() {
        vec![placeholder(no_results_message)]
    } else {
        cards(items, session)
    }
}

/// Builds the "no results" sentinel card.
#[must_use]
pub fn placeholder(message: &str) -> MediaCard {
    MediaCard {
        id: String::new(),
        title: message.to_string(),
        locked: false,
        premium: false,
        duration: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::SubscriptionPlan;
    use crate::domain::media::MediaKind;
    use chrono::DateTime;

    fn item(id: &str, is_premium: bool) -> MediaItem {
        MediaItem {
            id: id.to_string(),
            kind: MediaKind::Video,
            title: format!("Video {id}"),
            description: String::new(),
            url: "https://example.com/v.mp4".to_string(),
            thumbnail_url: None,
            duration: Some("5:12".to_string()),
            category: "short".to_string(),
            is_premium,
            timestamp: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn premium_cards_are_locked_for_anonymous_viewers() {
        let session = Session::default();
        let premium = item("video_1", true);
        let free = item("video_2", false);

        let rows = cards(&[&premium, &free], &session);
        assert!(rows[0].locked);
        assert!(rows[0].premium);
        assert!(!rows[1].locked);
    }

    #[test]
    fn subscription_unlocks_premium_cards() {
        let session = Session {
            subscription: Some(SubscriptionPlan::Basic),
            ..Session::default()
        };
        let rows = cards(&[&item("video_1", true)], &session);
        assert!(!rows[0].locked);
        assert!(rows[0].premium); // badge stays, lock goes
    }

    #[test]
    fn duration_label_is_carried_through() {
        let rows = cards(&[&item("video_1", false)], &Session::default());
        assert_eq!(rows[0].duration.as_deref(), Some("5:12"));
    }

    #[test]
    fn empty_search_results_yield_one_placeholder() {
        let rows = search_cards(&[], &Session::default(), "No results found");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_placeholder());
        assert_eq!(rows[0].title, "No results found");
        assert!(!rows[0].locked);
    }

    #[test]
    fn non_empty_search_results_have_no_placeholder() {
        let found = item("video_3", false);
        let rows = search_cards(&[&found], &Session::default(), "No results found");
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].is_placeholder());
        assert_eq!(rows[0].id, "video_3");
    }
}

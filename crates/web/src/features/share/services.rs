use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use storage::models::{ContestWithParticipants, Requester};
use utoipa::ToSchema;

/// Same characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const FALLBACK_SHARE_TEXT: &str = "Check out this epic battle on Blitz! ⚡";

/// Links and texts for sharing a contest's battle card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinks {
    /// Public page showing the battle card
    pub share_url: String,
    /// Battle card image
    pub image_url: String,
    pub x_text: String,
    pub x_url: String,
    pub telegram_text: String,
    pub telegram_url: String,
    pub farcaster_text: String,
    pub farcaster_url: String,
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn share_page_url(base_url: &str, contest_id: &str) -> String {
    format!("{}/contest/{}", base_url, encode(contest_id))
}

pub fn battle_card_image_url(base_url: &str, contest_id: &str, requester: &Requester) -> String {
    let mut url = format!("{}/api/battle-card?contestId={}", base_url, encode(contest_id));
    if let Some(user_id) = requester.as_column() {
        url.push_str("&userId=");
        url.push_str(&encode(user_id));
    }
    url
}

pub fn x_intent_url(text: &str, url: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        encode(text),
        encode(url)
    )
}

pub fn telegram_share_url(text: &str, url: &str) -> String {
    format!(
        "https://t.me/share/url?url={}&text={}",
        encode(url),
        encode(text)
    )
}

pub fn farcaster_compose_url(text: &str, url: &str) -> String {
    format!(
        "https://warpcast.com/~/compose?text={}&embeds[]={}",
        encode(text),
        encode(url)
    )
}

/// Build every share link for a contest. `contest` is `None` when the contest
/// could not be found; the generic text is used then.
pub fn build_share_links(
    base_url: &str,
    contest_id: &str,
    contest: Option<&ContestWithParticipants>,
    requester: &Requester,
) -> ShareLinks {
    let share_url = share_page_url(base_url, contest_id);

    let (x_text, telegram_text, farcaster_text) = match contest {
        Some(c) => {
            let name = &c.contest.name;
            let warriors = c.participants.len();
            (
                format!(
                    "🔥 Epic battle happening on Blitz! {warriors} warriors competing in \"{name}\" ⚡\n\nJoin the action and prove your skills!"
                ),
                format!("🔥 Epic battle: \"{name}\" with {warriors} warriors! Join the action on Blitz ⚡"),
                format!(
                    "🔥 Epic battle \"{name}\" live on Blitz! {warriors} warriors competing. Join the action! ⚡"
                ),
            )
        }
        None => (
            FALLBACK_SHARE_TEXT.to_string(),
            FALLBACK_SHARE_TEXT.to_string(),
            FALLBACK_SHARE_TEXT.to_string(),
        ),
    };

    ShareLinks {
        image_url: battle_card_image_url(base_url, contest_id, requester),
        x_url: x_intent_url(&x_text, &share_url),
        telegram_url: telegram_share_url(&telegram_text, &share_url),
        farcaster_url: farcaster_compose_url(&farcaster_text, &share_url),
        share_url,
        x_text,
        telegram_text,
        farcaster_text,
    }
}

mod battle_card;
mod contest;
mod contest_participant;
mod requester;

pub use battle_card::BattleCard;
pub use contest::{Contest, ContestWithParticipants};
pub use contest_participant::{ContestParticipant, ProfileAvatar, ProfileData};
pub use requester::Requester;

pub mod battle_card;
pub mod contest;

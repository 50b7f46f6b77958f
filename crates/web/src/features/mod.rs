pub mod battle_cards;
pub mod contests;
pub mod share;

pub mod battle_card_allocator;

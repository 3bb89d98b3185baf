pub mod cards;
pub mod deck;
pub mod deck_store;
pub mod pack_store;
pub mod validate;
pub mod vec_map;

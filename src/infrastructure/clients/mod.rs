pub mod bgg;

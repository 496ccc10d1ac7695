//! Typed decoders for the two BoardGameGeek XML API 2 document shapes.

pub mod collection;
pub mod thing;

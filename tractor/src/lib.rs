pub use cards::*;
pub use declaration::*;
pub use errors::*;
pub use hand::*;
pub use matching::*;
pub use protocol_types::*;
pub use suits_set::*;
pub use view::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod declaration;
mod errors;
mod hand;
mod matching;
mod protocol_types;
mod suits_set;
mod view;

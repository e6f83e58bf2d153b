//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). They never mutate and
//! can be applied to any board, including partial or hand-built ones.

mod tie;
mod win;

pub use tie::{is_full, is_tie};
pub use win::{find_winner, winning_line};

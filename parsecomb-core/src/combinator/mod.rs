//! Combinators: parsers built from other parsers.
//!
//! None of these look at raw elements. They decide what to do with their
//! sub-parsers' results:
//!
//! - **map** - transform output, forward failures untouched
//! - **alt** - ordered choice, every branch restarts from the same input
//! - **delimited** - strict left-to-right sequencing (plus `pair`,
//!   `preceded`, `terminated`)
//! - **take_while** - bounded repetition with a minimum success count
//! - **opt** - zero-or-one

mod alt;
mod delimited;
mod map;
mod opt;
mod take_while;

pub use alt::{alt, Alt, Choice};
pub use delimited::{delimited, pair, preceded, terminated, Delimited, Pair, Preceded, Terminated};
pub use map::{map, try_map, Map, TryMap};
pub use opt::{opt, Opt};
pub use take_while::{take_while0, take_while1, take_while_m, EmptyInput, TakeWhile};

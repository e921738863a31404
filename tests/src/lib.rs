//! Black-box rounds played against `guessr-core` the way a presentation
//! driver would: raw strings in, outcomes out.

mod rounds;
mod utils;

// Password composition engine.
// Configuration is validated up front in `config`; the builders below only
// consume randomness through `random::RandomSource`.

pub mod composer;
pub mod config;
pub mod dictionary;
pub mod leet;
pub mod pad;
pub mod random;
pub mod separator;
pub mod words;

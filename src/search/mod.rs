pub mod delegates;
pub mod lexicon;
pub mod preprocessing;
pub mod schemas;

/*! # Gherbal

غربال — a sieve for social media comments.

Gherbal prepares raw YouTube/Instagram comments written in Moroccan
Darija (mixed with MSA, French, English and Arabizi transliteration)
for downstream sentiment labelling. Per comment it decides whether the
text is genuine dialect content worth keeping, and if so produces a
canonical cleaned form and a token list.

Everything is deterministic and lexicon-driven: the same comment under
the same configuration always yields the same verdict.

This project can be used as a command line tool over JSON dumps, or as
a lib to embed normalisation, tokenisation and classification into
other projects.
!*/
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod lexicon;
pub mod normalize;
pub mod pipeline;
pub mod sources;
pub mod tokenize;

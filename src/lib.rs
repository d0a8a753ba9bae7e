#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

pub mod errors;
pub mod word;

pub use word::{decode_word, encode, encode_arg, encode_word, print_word, read_word, write_word, WORD_LEN};

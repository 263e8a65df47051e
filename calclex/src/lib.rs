mod calc_tokenizer;
mod helpers;
mod scanner;

pub use calc_tokenizer::{CalcToken, CalcTokenizer};
pub use scanner::Scanner;

pub use helpers::scan_identifier;
pub use helpers::scan_number;
pub use helpers::scan_operator;

#[cfg(test)]
mod scanner_test;

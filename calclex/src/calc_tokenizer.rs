#![deny(warnings)]

use crate::helpers;
use crate::scanner::Scanner;

#[derive(Clone, PartialEq, Debug)]
pub enum CalcToken {
    Number(f64),
    Ident(String),
    Op(String),
    OParen,
    CParen,
}

// Lexeme-level classification only. Whether an operator is unary, or an
// identifier a known variable, is decided downstream by the parser.
pub struct CalcTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<'a> CalcTokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        CalcTokenizer::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> CalcTokenizer<I> {
    pub fn new(source: I) -> Self {
        CalcTokenizer {
            src: Scanner::new(source),
        }
    }

    fn get_token(&mut self) -> Option<CalcToken> {
        self.src.ignore_ws();
        if let Some(num) = helpers::scan_number(&mut self.src) {
            use std::str::FromStr;
            // the scanned lexeme matches the float grammar by construction
            Some(CalcToken::Number(f64::from_str(&num).unwrap()))
        } else if let Some(id) = helpers::scan_identifier(&mut self.src) {
            Some(CalcToken::Ident(id))
        } else if self.src.accept_char('(') {
            self.src.ignore();
            Some(CalcToken::OParen)
        } else if self.src.accept_char(')') {
            self.src.ignore();
            Some(CalcToken::CParen)
        } else {
            helpers::scan_operator(&mut self.src).map(CalcToken::Op)
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for CalcTokenizer<I> {
    type Item = CalcToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{CalcToken, CalcTokenizer};

    fn op(s: &str) -> CalcToken {
        CalcToken::Op(s.to_string())
    }

    #[test]
    fn basic_ops() {
        let mut lx = CalcTokenizer::from_str("3+4*2/(1-5)^2");
        let expect = [
            CalcToken::Number(3.0),
            op("+"),
            CalcToken::Number(4.0),
            op("*"),
            CalcToken::Number(2.0),
            op("/"),
            CalcToken::OParen,
            CalcToken::Number(1.0),
            op("-"),
            CalcToken::Number(5.0),
            CalcToken::CParen,
            op("^"),
            CalcToken::Number(2.0),
        ];
        for exp_token in expect.iter() {
            assert_eq!(*exp_token, lx.next().unwrap());
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn shift_ops() {
        let mut lx = CalcTokenizer::from_str("1 << 4 >> 2");
        let expect = [
            CalcToken::Number(1.0),
            op("<<"),
            CalcToken::Number(4.0),
            op(">>"),
            CalcToken::Number(2.0),
        ];
        for exp_token in expect.iter() {
            assert_eq!(*exp_token, lx.next().unwrap());
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn idents_and_numbers() {
        let mut lx = CalcTokenizer::from_str("3.4e-2 * _wave % pi2");
        let expect = [
            CalcToken::Number(3.4e-2),
            op("*"),
            CalcToken::Ident("_wave".to_string()),
            op("%"),
            CalcToken::Ident("pi2".to_string()),
        ];
        for exp_token in expect.iter() {
            assert_eq!(*exp_token, lx.next().unwrap());
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn maximal_munch_ops() {
        // '*' and '-' with no separation glue into one (unknown) operator
        let mut lx = CalcTokenizer::from_str("2*-3");
        let expect = [CalcToken::Number(2.0), op("*-"), CalcToken::Number(3.0)];
        for exp_token in expect.iter() {
            assert_eq!(*exp_token, lx.next().unwrap());
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn whitespace_only() {
        let mut lx = CalcTokenizer::from_str("  \t \n ");
        assert_eq!(lx.next(), None);
    }
}

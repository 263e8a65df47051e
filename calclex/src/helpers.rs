#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * The caller of these functions is expected to hand over a scanner set up
 * for a clean start, ie: scanner.ignore() already ran
 */

// scan numbers like [0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?
// A leading sign is never part of the literal: unary +/- belongs to the
// expression layer, which desugars it.
pub fn scan_number<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let digits = "0123456789";
    // require integer part
    if !scanner.skip_all_chars(digits) {
        return None;
    }
    // check for fractional part, else it's just an integer
    let backtrack = scanner.pos();
    if scanner.accept_char('.') && !scanner.skip_all_chars(digits) {
        scanner.set_pos(backtrack);
        return Some(scanner.extract_string()); // integer
    }
    // check for exponent part
    let backtrack = scanner.pos();
    if scanner.accept_any_char("eE").is_some() {
        scanner.accept_any_char("+-"); // exponent sign is optional
        if !scanner.skip_all_chars(digits) {
            scanner.set_pos(backtrack); // plain float
        }
    }
    Some(scanner.extract_string())
}

// scan [a-zA-Z_][a-zA-Z0-9_]*
pub fn scan_identifier<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let alpha = concat!("abcdefghijklmnopqrstuvwxyz", "ABCDEFGHIJKLMNOPQRSTUVWXYZ_");
    let alnum = concat!(
        "0123456789",
        "abcdefghijklmnopqrstuvwxyz",
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ_"
    );
    scanner.accept_any_char(alpha)?;
    scanner.skip_all_chars(alnum);
    Some(scanner.extract_string())
}

// Operators are the maximal run of symbol chars: anything that isn't
// alphanumeric, underscore, whitespace, or a parenthesis. Multi-char
// operators like '<<' fall out of this for free.
pub fn scan_operator<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> Option<String> {
    fn is_op_char(c: char) -> bool {
        !c.is_alphanumeric() && c != '_' && !c.is_whitespace() && c != '(' && c != ')'
    }
    let mut matched = false;
    while let Some(c) = scanner.peek() {
        if !is_op_char(c) {
            break;
        }
        scanner.next();
        matched = true;
    }
    if matched {
        Some(scanner.extract_string())
    } else {
        None
    }
}

///////////////////////////////////////////////////////////////////////////////

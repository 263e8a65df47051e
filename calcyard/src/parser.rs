use crate::rpneval::VarContext;
use calclex::{CalcToken, CalcTokenizer};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;
use tracing::trace;

/// A token of the postfix sequence. `Symbol` carries an operator or, when
/// the name wasn't bound at conversion time, a variable left for the
/// evaluator to resolve.
#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Number(f64),
    Symbol(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("missing opening parenthesis")]
    MissingOParen,
    #[error("missing closing parenthesis")]
    MissingCParen,
    #[error("unrecognized unary operator '{0}'")]
    BadUnaryOp(String),
}

/// Operator precedence ranks. '(' sits below every real operator so it
/// never forces a pop before its matching ')'.
#[derive(Clone, Debug)]
pub struct OpPrecedence(HashMap<String, i32>);

static STANDARD: Lazy<OpPrecedence> = Lazy::new(OpPrecedence::standard);

impl OpPrecedence {
    pub fn standard() -> OpPrecedence {
        let mut ranks = HashMap::new();
        ranks.insert("(".to_string(), -1);
        ranks.insert("<<".to_string(), 1);
        ranks.insert(">>".to_string(), 1);
        ranks.insert("+".to_string(), 2);
        ranks.insert("-".to_string(), 2);
        ranks.insert("*".to_string(), 3);
        ranks.insert("/".to_string(), 3);
        ranks.insert("%".to_string(), 3);
        ranks.insert("^".to_string(), 4);
        OpPrecedence(ranks)
    }

    // The standard table is built once and read-only after that.
    pub(crate) fn shared() -> &'static OpPrecedence {
        &STANDARD
    }

    pub fn set(&mut self, op: &str, rank: i32) {
        self.0.insert(op.to_string(), rank);
    }

    // Unranked operators sort above '(' but below the real ones: they
    // survive conversion and get rejected by the evaluator instead.
    fn rank(&self, op: &str) -> i32 {
        self.0.get(op).copied().unwrap_or(0)
    }
}

impl Default for OpPrecedence {
    fn default() -> Self {
        OpPrecedence::standard()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RpnExpr(pub Vec<Token>);

impl RpnExpr {
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RpnExpr, ParseError> {
        Self::parse(expr, None, OpPrecedence::shared())
    }

    pub fn parse(
        expr: &str,
        vars: Option<&VarContext>,
        prec: &OpPrecedence,
    ) -> Result<RpnExpr, ParseError> {
        Self::convert(CalcTokenizer::from_str(expr), vars, prec)
    }

    pub fn convert(
        lex: impl Iterator<Item = CalcToken>,
        vars: Option<&VarContext>,
        prec: &OpPrecedence,
    ) -> Result<RpnExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack: Vec<String> = Vec::new();
        // starts set: an operator at the head of the input is unary
        let mut last_was_op = true;

        for token in lex {
            trace!(?token, "scanned");
            match token {
                CalcToken::Number(num) => {
                    out.push(Token::Number(num));
                    last_was_op = false;
                }
                CalcToken::Ident(name) => {
                    // names bound right now fold to constants, the rest
                    // stay symbolic until evaluation
                    match vars.and_then(|cx| cx.get(&name)) {
                        Some(value) => out.push(Token::Number(value)),
                        None => out.push(Token::Symbol(name)),
                    }
                    last_was_op = false;
                }
                CalcToken::OParen => stack.push("(".to_string()),
                CalcToken::CParen => loop {
                    match stack.pop() {
                        Some(op) => {
                            if op == "(" {
                                break;
                            }
                            out.push(Token::Symbol(op));
                        }
                        None => return Err(ParseError::MissingOParen),
                    }
                },
                CalcToken::Op(op) => {
                    if last_was_op {
                        // desugar unary +/- into binary with a zero lhs
                        if op == "+" || op == "-" {
                            out.push(Token::Number(0.0));
                        } else {
                            return Err(ParseError::BadUnaryOp(op));
                        }
                    }
                    let rank = prec.rank(&op);
                    while !stack.is_empty() {
                        // left-associative pop rule, equal ranks pop too
                        if rank > prec.rank(stack.last().unwrap()) {
                            break;
                        }
                        out.push(Token::Symbol(stack.pop().unwrap()));
                    }
                    stack.push(op);
                    last_was_op = true;
                }
            }
        }
        while let Some(op) = stack.pop() {
            if op == "(" {
                return Err(ParseError::MissingCParen);
            }
            out.push(Token::Symbol(op));
        }
        Ok(RpnExpr(out))
    }
}

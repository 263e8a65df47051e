use crate::parser::{OpPrecedence, ParseError, RpnExpr, ShuntingParser};
use crate::rpneval::{evaluate, EvalError, VarContext};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// The two failure kinds: syntax errors surface during conversion, domain
/// errors during evaluation.
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),
    #[error("domain error: {0}")]
    Domain(#[from] EvalError),
}

/// One-shot parse and evaluate with the standard precedence table.
pub fn calculate(expr: &str, vars: Option<&VarContext>) -> Result<f64, CalcError> {
    let rpn = ShuntingParser::parse(expr, vars, OpPrecedence::shared())?;
    Ok(evaluate(&rpn, vars)?)
}

/// A compiled expression: conversion runs once, evaluation any number of
/// times. Variables bound at compile time are folded into the sequence as
/// constants; the rest resolve against whatever context `eval` gets.
///
/// Sharing a handle across threads is fine as long as callers don't race
/// on a shared mutable context of their own.
#[derive(Clone, Debug)]
pub struct Calculator {
    rpn: RpnExpr,
}

impl Calculator {
    pub fn new(expr: &str, vars: Option<&VarContext>) -> Result<Calculator, ParseError> {
        Self::with_precedence(expr, vars, OpPrecedence::shared())
    }

    pub fn with_precedence(
        expr: &str,
        vars: Option<&VarContext>,
        prec: &OpPrecedence,
    ) -> Result<Calculator, ParseError> {
        let rpn = ShuntingParser::parse(expr, vars, prec)?;
        debug!(rpn = %rpn, "compiled");
        Ok(Calculator { rpn })
    }

    /// Replace the stored sequence with a fresh compilation of `expr`.
    pub fn compile(&mut self, expr: &str, vars: Option<&VarContext>) -> Result<(), ParseError> {
        self.compile_with(expr, vars, OpPrecedence::shared())
    }

    pub fn compile_with(
        &mut self,
        expr: &str,
        vars: Option<&VarContext>,
        prec: &OpPrecedence,
    ) -> Result<(), ParseError> {
        *self = Self::with_precedence(expr, vars, prec)?;
        Ok(())
    }

    pub fn eval(&self, vars: Option<&VarContext>) -> Result<f64, EvalError> {
        evaluate(&self.rpn, vars)
    }

    pub fn rpn(&self) -> &RpnExpr {
        &self.rpn
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.rpn, f)
    }
}

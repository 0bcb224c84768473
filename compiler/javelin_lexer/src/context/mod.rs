//! Statement context for telling labels, ternaries and wildcards apart.
//!
//! A `:` is ambiguous at the token level: it separates a conditional
//! expression, ends a label, a `case`, an `assert` condition or an enhanced
//! `for` header. The tracker keeps just enough state per brace scope to
//! decide, without parsing:
//!
//! - how many conditional `?` are still waiting for their `:`
//! - whether an `assert` or `case`/`default` is waiting for its `:`
//! - whether the next token begins a statement
//!
//! `{` opens a fresh scope, `}` restores the enclosing one (so the `:` of
//! `c ? () -> { ... } : d` still pairs with its `?`) and `;` clears the
//! current one.

/// Pending state of one brace scope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Scope {
    ternary: u32,
    assert_pending: bool,
    case_pending: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct StatementContext {
    scope: Scope,
    outer: Vec<Scope>,
    at_statement_start: bool,
}

impl Default for StatementContext {
    fn default() -> Self {
        Self {
            scope: Scope::default(),
            outer: Vec::new(),
            at_statement_start: true,
        }
    }
}

impl StatementContext {
    /// Whether an identifier followed by a plain `:` is a label here.
    pub(crate) fn label_allowed(&self) -> bool {
        self.at_statement_start
            && self.scope.ternary == 0
            && !self.scope.assert_pending
            && !self.scope.case_pending
    }

    /// Identifier or literal: nothing pending changes, the statement has begun.
    pub(crate) fn operand(&mut self) {
        self.at_statement_start = false;
    }

    pub(crate) fn keyword(&mut self, word: &str) {
        match word {
            "assert" => self.scope.assert_pending = true,
            "case" | "default" => self.scope.case_pending = true,
            _ => {}
        }
        self.at_statement_start = matches!(word, "else" | "do");
    }

    /// Conditional `?` (not a wildcard).
    pub(crate) fn question(&mut self) {
        self.scope.ternary += 1;
        self.at_statement_start = false;
    }

    /// A single `:`. Returns `true` if it closes a conditional.
    pub(crate) fn colon(&mut self) -> bool {
        if self.scope.ternary > 0 {
            self.scope.ternary -= 1;
            self.at_statement_start = false;
            return true;
        }
        if self.scope.assert_pending {
            // `assert cond : message`
            self.scope.assert_pending = false;
            self.at_statement_start = false;
        } else {
            // label, `case`/`default` or enhanced `for`
            self.scope.case_pending = false;
            self.at_statement_start = true;
        }
        false
    }

    /// `->` ends a `case` head in arrow-form switches.
    pub(crate) fn arrow(&mut self) {
        self.scope.case_pending = false;
        self.at_statement_start = false;
    }

    pub(crate) fn open_brace(&mut self) {
        self.outer.push(std::mem::take(&mut self.scope));
        self.at_statement_start = true;
    }

    pub(crate) fn close_brace(&mut self) {
        self.scope = self.outer.pop().unwrap_or_default();
        self.at_statement_start = true;
    }

    pub(crate) fn semicolon(&mut self) {
        self.scope = Scope::default();
        self.at_statement_start = true;
    }

    /// Brace nesting depth, for tracing.
    pub(crate) fn depth(&self) -> usize {
        self.outer.len()
    }
}

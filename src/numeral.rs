//! Church numerals. The numeral N takes `f` and `a` and applies `f` to `a`
//! N times; that count is all there is to it.
//!
//! Numerals built by [`succ`] chains nest one call per application, so
//! their stack use grows with their value. [`encode`] loops instead.
//! Either way, keep values below [`DEFAULT_CEILING`] or so: arithmetic on
//! unary numerals is slow and `predecessor`-based operations build long
//! `succ` chains.

use crate::combinator::{bluebird, kite, thrush};
use crate::term::Term;

/// Practical upper bound for numeral values.
pub const DEFAULT_CEILING: u64 = 10_000;

/// Applies `f` to `a`, `count` times, with a loop.
pub fn iterate(count: u64, f: &Term, a: Term) -> Term {
    let mut acc = a;
    for _ in 0..count {
        acc = f.apply(acc);
    }
    acc
}

/// The numeral for `n`.
///
/// ```
/// # use church_calc::{numeral::encode, decode::to_number};
/// assert_eq!(to_number(&encode(42)), Some(42));
/// ```
pub fn encode(n: u64) -> Term {
    Term::curry2(move |f, a| iterate(n, &f, a))
}

shared_term! {
    /// `λfa.a`. The same value as `kite()` and `fls()`.
    pub fn zero() = kite();
}

shared_term! {
    /// `λfa.fa`
    pub fn once() = Term::curry2(|f, a| f.apply(a));
}

shared_term! {
    /// `λfa.f(fa)`
    pub fn twice() = Term::curry2(|f, a| f.apply(f.apply(a)));
}

shared_term! {
    /// `λfa.f(f(fa))`
    pub fn thrice() = Term::curry2(|f, a| f.apply(f.apply(f.apply(a))));
}

shared_term! {
    /// Successor, `λnfa.f(nfa)`.
    pub fn succ() = Term::curry3(|n, f, a| f.apply(n.apply(f.clone()).apply(a)));
}

shared_term! {
    /// `λnk.n succ k`
    pub fn add() = Term::curry2(|n, k| n.apply(succ()).apply(k));
}

shared_term! {
    /// Multiplication is composition: `λnkf.n(kf)`, the Bluebird.
    pub fn multiply() = bluebird();
}

shared_term! {
    /// `λnk.kn`, the Thrush: `power n k` is n to the k.
    pub fn power() = thrush();
}

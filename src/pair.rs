//! Pairs built from the Vireo, and the predecessor trick that needs them.

use crate::boolean::{fls, tru};
use crate::combinator::vireo;
use crate::numeral::{succ, zero};
use crate::term::Term;

shared_term! {
    /// `pair a b` holds `a` and `b`; it is the Vireo itself.
    pub fn pair() = vireo();
}

shared_term! {
    /// `λp.pT`
    pub fn first() = Term::lambda(|p| p.apply(tru()));
}

shared_term! {
    /// `λp.pF`
    pub fn second() = Term::lambda(|p| p.apply(fls()));
}

shared_term! {
    /// Steps `(x, y)` to `(y, succ y)`.
    pub fn phi() = Term::lambda(|p| {
        let y = second().apply(p);
        pair().apply(y.clone()).apply(succ().apply(y))
    });
}

shared_term! {
    /// `λn.first(n phi (pair 0 0))`. The predecessor of zero is zero.
    ///
    /// ```
    /// # use church_calc::{pair::predecessor, numeral::encode, decode::to_number};
    /// assert_eq!(to_number(&predecessor().apply(encode(5))), Some(4));
    /// assert_eq!(to_number(&predecessor().apply(encode(0))), Some(0));
    /// ```
    pub fn predecessor() = Term::lambda(|n| {
        let seed = pair().apply(zero()).apply(zero());
        first().apply(n.apply(phi()).apply(seed))
    });
}

shared_term! {
    /// `λnk.k pred n`: `n - k`, never below zero.
    pub fn subtract() = Term::curry2(|n, k| k.apply(predecessor()).apply(n));
}

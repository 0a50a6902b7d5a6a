//! Comparisons between numerals. They all answer with Church booleans.

use crate::boolean::{and, fls, not, tru};
use crate::combinator::kestrel;
use crate::pair::subtract;
use crate::term::Term;

shared_term! {
    /// `λn.n(K F)T`: any application of `K F` turns the answer false.
    pub fn is_zero() = Term::lambda(|n| n.apply(kestrel().apply(fls())).apply(tru()));
}

shared_term! {
    /// `λnk.is0(sub n k)`
    pub fn leq() = Term::curry2(|n, k| is_zero().apply(subtract().apply(n).apply(k)));
}

shared_term! {
    /// `λnk.and(leq n k)(leq k n)`
    pub fn eq() = Term::curry2(|n, k| {
        and()
            .apply(leq().apply(n.clone()).apply(k.clone()))
            .apply(leq().apply(k).apply(n))
    });
}

shared_term! {
    /// `λnk.not(leq n k)`
    pub fn gt() = Term::curry2(|n, k| not().apply(leq().apply(n).apply(k)));
}

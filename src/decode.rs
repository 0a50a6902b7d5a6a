//! The boundary between Church encodings and host values. Nothing in the
//! calculus depends on this module; it only exists to look at results.

use crate::boolean::{fls, tru};
use crate::term::Term;

fn increment() -> Term {
    Term::lambda(|t| {
        let next = t.downcast_ref::<u64>().map(|n| n + 1);
        match next {
            Some(n) => Term::value(n),
            None => t,
        }
    })
}

/// The count a numeral stands for: `n (x => x + 1) 0`.
///
/// Returns `None` if the result is not a count, which means `n` was not a
/// numeral. Other ill-formed inputs may still decode to some count; no
/// validation is done.
///
/// ```
/// # use church_calc::{decode::to_number, numeral::{succ, zero}};
/// let one = succ().apply(zero());
/// assert_eq!(to_number(&one), Some(1));
/// ```
pub fn to_number(n: &Term) -> Option<u64> {
    n.apply(increment())
        .apply(Term::value(0u64))
        .downcast_ref::<u64>()
        .copied()
}

/// Which alternative a Church boolean selects.
pub fn to_bool(p: &Term) -> Option<bool> {
    p.apply(Term::value(true))
        .apply(Term::value(false))
        .downcast_ref::<bool>()
        .copied()
}

pub fn from_bool(b: bool) -> Term {
    if b { tru() } else { fls() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{identity, kestrel, vireo};
    use crate::numeral::{encode, zero};

    #[test]
    fn numbers() {
        assert_eq!(to_number(&zero()), Some(0));
        assert_eq!(to_number(&encode(17)), Some(17));
    }

    #[test]
    fn booleans() {
        assert_eq!(to_bool(&tru()), Some(true));
        assert_eq!(to_bool(&fls()), Some(false));
        assert!(Term::ptr_eq(&from_bool(true), &tru()));
        assert!(Term::ptr_eq(&from_bool(false), &fls()));
    }

    #[test]
    fn zero_and_false_read_the_same() {
        assert_eq!(to_number(&fls()), Some(0));
        assert_eq!(to_bool(&zero()), Some(false));
    }

    #[test]
    fn non_numerals() {
        // K increment 0 is the increment function, not a count.
        assert_eq!(to_number(&kestrel()), None);
        // I f a = f a, so the identity reads as one.
        assert_eq!(to_number(&identity()), Some(1));
        let pair = vireo().apply(Term::value("a")).apply(Term::value("b"));
        assert_eq!(to_number(&pair), None);
    }

    #[test]
    fn host_values_do_not_panic() {
        assert_eq!(to_number(&Term::value(3u64)), Some(3));
        assert_eq!(to_bool(&Term::value("x")), None);
    }
}

//! Church booleans: a boolean selects one of the next two arguments.

use crate::combinator::{kestrel, kite};
use crate::term::Term;

shared_term! {
    /// True is the Kestrel: keeps the first alternative.
    pub fn tru() = kestrel();
}

shared_term! {
    /// False is the Kite: keeps the second alternative.
    pub fn fls() = kite();
}

shared_term! {
    /// `λp.p F T`
    pub fn not() = Term::lambda(|p| p.apply(fls()).apply(tru()));
}

shared_term! {
    /// `λpq.pqp`. When `p` is false the result is `p` itself.
    pub fn and() = Term::curry2(|p, q| p.apply(q).apply(p));
}

shared_term! {
    /// `λpq.ppq`, the Mockingbird once removed.
    pub fn or() = Term::curry2(|p, q| p.apply(p.clone()).apply(q));
}

shared_term! {
    /// Boolean equality, `λpq.p(qTF)(qFT)`.
    pub fn beq() = Term::curry2(|p, q| {
        p.apply(q.apply(tru()).apply(fls()))
            .apply(q.apply(fls()).apply(tru()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{identity, mockingbird};
    use crate::decode::{from_bool, to_bool};
    use rstest::rstest;

    fn binary(op: Term, p: bool, q: bool) -> Option<bool> {
        to_bool(&op.apply(from_bool(p)).apply(from_bool(q)))
    }

    #[test]
    fn true_and_false_are_the_primitives() {
        assert!(Term::ptr_eq(&tru(), &kestrel()));
        assert!(Term::ptr_eq(&fls(), &kite()));
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn double_negation(#[case] b: bool) {
        let p = from_bool(b);
        assert_eq!(to_bool(&not().apply(p.clone())), Some(!b));
        let back = not().apply(not().apply(p.clone()));
        assert!(Term::ptr_eq(&back, &p));
    }

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, false)]
    #[case(false, true, false)]
    #[case(false, false, false)]
    fn and_table(#[case] p: bool, #[case] q: bool, #[case] expected: bool) {
        assert_eq!(binary(and(), p, q), Some(expected));
    }

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, true)]
    #[case(false, true, true)]
    #[case(false, false, false)]
    fn or_table(#[case] p: bool, #[case] q: bool, #[case] expected: bool) {
        assert_eq!(binary(or(), p, q), Some(expected));
    }

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, false)]
    #[case(false, true, false)]
    #[case(false, false, true)]
    fn beq_table(#[case] p: bool, #[case] q: bool, #[case] expected: bool) {
        assert_eq!(binary(beq(), p, q), Some(expected));
    }

    #[rstest]
    #[case(true, true)]
    #[case(true, false)]
    #[case(false, true)]
    #[case(false, false)]
    fn or_is_mockingbird_applied(#[case] p: bool, #[case] q: bool) {
        let m = mockingbird().apply(from_bool(p)).apply(from_bool(q));
        assert_eq!(to_bool(&m), Some(p || q));
    }

    #[test]
    fn and_short_circuits_on_false() {
        // q is never selected, so any value will do.
        let res = and().apply(fls()).apply(identity());
        assert!(Term::ptr_eq(&res, &fls()));
    }

    #[test]
    fn not_selects_the_alternative() {
        let a = Term::value(1u8);
        let b = Term::value(2u8);
        let res = not().apply(tru()).apply(a).apply(b.clone());
        assert!(Term::ptr_eq(&res, &b));
    }
}

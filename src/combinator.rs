//! The bird combinators. Each one is closed: its body only mentions its own
//! parameters.

use crate::term::Term;

shared_term! {
    /// Identity, `λa.a`.
    pub fn identity() = Term::lambda(|a| a);
}

shared_term! {
    /// Mockingbird, `λf.ff`: applies its argument to itself.
    ///
    /// `M M` never terminates; in Rust it exhausts the stack.
    pub fn mockingbird() = Term::lambda(|f| f.apply(f.clone()));
}

shared_term! {
    /// Kestrel, `λab.a`. `K a` is the constant function returning `a`.
    ///
    /// ```
    /// # use church_calc::{combinator::kestrel, term::Term};
    /// let k5 = kestrel().apply(Term::value(5));
    /// assert_eq!(k5.apply(Term::value(9)).downcast_ref::<i32>(), Some(&5));
    /// ```
    pub fn kestrel() = Term::curry2(|a, _| a);
}

shared_term! {
    /// Kite, `λab.b`. Behaves as `K I`.
    pub fn kite() = Term::curry2(|_, b| b);
}

shared_term! {
    /// Cardinal, `λfab.fba`: flips the arguments of `f`.
    pub fn cardinal() = Term::curry3(|f, a, b| f.apply(b).apply(a));
}

shared_term! {
    /// Bluebird, `λfga.f(ga)`: composition.
    pub fn bluebird() = Term::curry3(|f, g, a| f.apply(g.apply(a)));
}

shared_term! {
    /// Thrush, `λaf.fa`.
    pub fn thrush() = Term::curry2(|a, f| f.apply(a));
}

shared_term! {
    /// Vireo, `λabf.fab`: holds two values until given a function to
    /// pass them to. This is the pair constructor.
    #[doc(alias = "vereo")]
    pub fn vireo() = Term::curry3(|a, b, f| f.apply(a).apply(b));
}

shared_term! {
    /// Blackbird, `λfgab.f(gab)`: composes `f` after the two-argument `g`.
    pub fn blackbird() = Term::curry4(|f, g, a, b| f.apply(g.apply(a).apply(b)));
}

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// The only value type of the calculus.
///
/// A `Term` is a unary function from `Term` to `Term`. Booleans, numerals
/// and pairs are all terms and nothing tells them apart at runtime: the
/// Church numeral zero and the Church boolean false are the same value.
///
/// A term may also wrap an opaque host value (see [`Term::value`]), which
/// is how results are observed from Rust. Host values have no behaviour:
/// applying one to anything gives back the host value itself.
///
/// ```
/// # use church_calc::term::Term;
/// let id = Term::lambda(|a| a);
/// let five = id.apply(Term::value(5u64));
/// assert_eq!(five.downcast_ref::<u64>(), Some(&5));
/// ```
#[derive(Clone)]
pub struct Term {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Fun(Rc<dyn Fn(Term) -> Term>),
    Value(Rc<dyn Any>),
}

impl Term {
    pub fn lambda<F>(f: F) -> Term
        where F: Fn(Term) -> Term + 'static
    {
        Term {
            repr: Repr::Fun(Rc::new(f)),
        }
    }

    /// Wraps a host value so it can be stored in pairs or used as the base
    /// of a numeral.
    pub fn value<T: Any>(v: T) -> Term {
        Term {
            repr: Repr::Value(Rc::new(v)),
        }
    }

    /// Curried two-argument function from a native one.
    ///
    /// ```
    /// # use church_calc::term::Term;
    /// let first = Term::curry2(|a, _b| a);
    /// let x = first.apply(Term::value('x')).apply(Term::value('y'));
    /// assert_eq!(x.downcast_ref::<char>(), Some(&'x'));
    /// ```
    pub fn curry2<F>(f: F) -> Term
        where F: Fn(Term, Term) -> Term + 'static
    {
        let f = Rc::new(f);
        Term::lambda(move |a| {
            let f = Rc::clone(&f);
            Term::lambda(move |b| (*f)(a.clone(), b))
        })
    }

    pub fn curry3<F>(f: F) -> Term
        where F: Fn(Term, Term, Term) -> Term + 'static
    {
        let f = Rc::new(f);
        Term::lambda(move |a| {
            let f = Rc::clone(&f);
            Term::curry2(move |b, c| (*f)(a.clone(), b, c))
        })
    }

    pub fn curry4<F>(f: F) -> Term
        where F: Fn(Term, Term, Term, Term) -> Term + 'static
    {
        let f = Rc::new(f);
        Term::lambda(move |a| {
            let f = Rc::clone(&f);
            Term::curry3(move |b, c, d| (*f)(a.clone(), b, c, d))
        })
    }

    /// Applies this term to `arg`.
    ///
    /// Supplying fewer arguments than a combinator needs is not an error,
    /// it just gives back the partially applied function.
    pub fn apply(&self, arg: Term) -> Term {
        match &self.repr {
            Repr::Fun(f) => f(arg),
            Repr::Value(_) => self.clone(),
        }
    }

    pub fn is_value(&self) -> bool {
        match self.repr {
            Repr::Value(_) => true,
            Repr::Fun(_) => false,
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match &self.repr {
            Repr::Value(v) => v.downcast_ref::<T>(),
            Repr::Fun(_) => None,
        }
    }

    /// Whether both terms are the very same value (not merely the same
    /// behaviour).
    pub fn ptr_eq(a: &Term, b: &Term) -> bool {
        match (&a.repr, &b.repr) {
            (Repr::Fun(f), Repr::Fun(g)) => Rc::ptr_eq(f, g),
            (Repr::Value(v), Repr::Value(w)) => Rc::ptr_eq(v, w),
            _ => false,
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.repr {
            Repr::Fun(_) => write!(f, "<function>"),
            Repr::Value(_) => write!(f, "<value>"),
        }
    }
}

// Defines a function returning a shared term. The term is built once per
// thread, so every call hands out the same `Rc` and `Term::ptr_eq` holds
// between aliases such as `tru()` and `kestrel()`.
macro_rules! shared_term {
    ($(#[$attr:meta])* $vis:vis fn $name:ident() = $body:expr;) => {
        $(#[$attr])*
        $vis fn $name() -> $crate::term::Term {
            thread_local! {
                static TERM: $crate::term::Term = $body;
            }
            TERM.with($crate::term::Term::clone)
        }
    };
}

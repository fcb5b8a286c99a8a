use crate::Signed;
use core::fmt::{self, Display};
use core::ops::Neg;

/// Head applied to arguments, such as a signed predicate applied to terms.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct App<H, A> {
    head: H,
    args: A,
}

impl<H, A> App<H, A> {
    pub fn new(head: H, args: A) -> Self {
        Self { head, args }
    }

    pub fn head(&self) -> &H {
        &self.head
    }

    pub fn args(&self) -> &A {
        &self.args
    }

    /// Apply the same head to new arguments.
    ///
    /// ~~~
    /// # use refute::{App, Signed};
    /// let app = App::new(Signed(false, "P"), [1, 2]);
    /// assert_eq!(app.with_args("x").to_string(), "~Px");
    /// ~~~
    pub fn with_args<B>(&self, args: B) -> App<H, B>
    where
        H: Clone,
    {
        App::new(self.head.clone(), args)
    }
}

impl<P: PartialEq, A> App<Signed<P>, A> {
    /// Return true if both heads carry the same symbol with different signs.
    pub fn opposes(&self, other: &Self) -> bool {
        self.head.is_opposite(&other.head)
    }
}

/// Negating an application negates its head.
impl<H: Neg<Output = H>, A> Neg for App<H, A> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.head, self.args)
    }
}

impl<H: Display, A: Display> Display for App<H, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.head.fmt(f)?;
        self.args.fmt(f)
    }
}

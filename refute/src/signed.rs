use core::fmt::{self, Display};
use core::ops::Neg;

/// Symbol together with its polarity.
///
/// `Signed(true, p)` stands for `p`, `Signed(false, p)` for `~p`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Signed<T>(pub bool, pub T);

impl<T> Signed<T> {
    pub fn is_sign_negative(&self) -> bool {
        !self.0
    }

    pub fn symbol(&self) -> &T {
        &self.1
    }
}

impl<T: PartialEq> Signed<T> {
    /// Return true if the symbols are equal, but the signs differ.
    pub fn is_opposite(&self, other: &Self) -> bool {
        self.0 != other.0 && self.1 == other.1
    }
}

impl<T: Display> Display for Signed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sign_negative() {
            write!(f, "~")?;
        }
        self.1.fmt(f)
    }
}

impl<T> Neg for Signed<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(!self.0, self.1)
    }
}

#[test]
fn opposite() {
    use alloc::string::ToString;
    let p = Signed(true, "P");
    assert_eq!((-p.clone()).to_string(), "~P");
    assert!(p.is_opposite(&-p.clone()));
    assert!(!p.is_opposite(&p));
    assert!(!p.is_opposite(&Signed(false, "Q")));
}

use crate::{App, Args, ParseError, Signed, Subst, Term};
use alloc::string::{String, ToString};
use core::str::FromStr;

/// Literal, i.e. a signed predicate applied to term arguments.
///
/// Literals print as `~P(A,x)`, and two literals are equal
/// iff they print the same.
pub type Lit = App<Signed<String>, Args<Term>>;

impl Lit {
    pub fn predicate(&self) -> &str {
        self.head().symbol()
    }

    pub fn is_negated(&self) -> bool {
        self.head().is_sign_negative()
    }

    pub fn arity(&self) -> usize {
        self.args().len()
    }

    /// Returns true iff the literal has the same predicate as the other one,
    /// but opposite sign.
    pub fn is_complement(&self, other: &Self) -> bool {
        self.opposes(other)
    }

    /// Returns true iff no variable occurs in the literal.
    pub fn is_ground(&self) -> bool {
        self.args().is_ground()
    }

    /// Returns true iff some constant occurs in the literal.
    pub fn has_constant(&self) -> bool {
        self.args().has_constant()
    }

    /// Apply a substitution to the arguments.
    pub fn subst(&self, sub: &Subst) -> Self {
        self.with_args(self.args().subst(sub))
    }
}

fn is_symbol(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}

impl FromStr for Lit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || ParseError::MalformedLiteral(s.to_string());
        let (sign, rest) = match s.strip_prefix('~') {
            Some(rest) => (false, rest.trim_start()),
            None => (true, s),
        };
        let open = rest.find('(').ok_or_else(malformed)?;
        let (pred, args) = (rest[..open].trim_end(), &rest[open + 1..]);
        let args = args.strip_suffix(')').ok_or_else(malformed)?;
        if !is_symbol(pred) || args.trim().is_empty() {
            return Err(malformed());
        }
        let args = args.split(',').map(|arg| arg.trim().parse());
        let args = args.collect::<Result<Args<Term>, _>>()?;
        Ok(App::new(Signed(sign, pred.to_string()), args))
    }
}

#[test]
fn parse() {
    let lit: Lit = " ~Knows(x, Alice) ".parse().unwrap();
    assert!(lit.is_negated());
    assert_eq!(lit.predicate(), "Knows");
    assert_eq!(lit.arity(), 2);
    assert_eq!(lit.args()[0], Term::V('x'));
    assert_eq!(lit.to_string(), "~Knows(x,Alice)");
    assert!(!lit.is_ground() && lit.has_constant());

    let neg = -lit.clone();
    assert!(!neg.is_negated());
    assert!(neg.is_complement(&lit));
    assert_eq!(-neg, lit);
}

#[test]
fn parse_malformed() {
    use ParseError::*;
    let lit = |s: &str| s.parse::<Lit>();
    assert_eq!(lit("P(x,ab)"), Err(MalformedTerm("ab".to_string())));
    assert_eq!(lit("P(x,)"), Err(MalformedTerm("".to_string())));
    assert_eq!(lit("P(x"), Err(MalformedLiteral("P(x".to_string())));
    assert_eq!(lit("(x)"), Err(MalformedLiteral("(x)".to_string())));
    assert_eq!(lit("P()"), Err(MalformedLiteral("P()".to_string())));
    assert_eq!(lit("P"), Err(MalformedLiteral("P".to_string())));
}

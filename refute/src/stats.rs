#[cfg(feature = "serde")]
use serde::Serialize;

/// Search statistics.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// iterations of the search loop
    pub iterations: usize,
    /// unordered clause pairs that were tried
    pub tried: usize,
    /// clause pairs with complementary literals that were resolved
    pub attempts: usize,
    /// resolvents passed to observers
    pub resolvents: usize,
    /// resolvents that were new to the knowledge base
    pub growth: usize,
    /// size of the knowledge base when the search ended
    pub clauses: usize,
}

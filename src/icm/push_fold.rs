/// The call equity used when the caller has no better estimate.
///
/// Push/fold EV here deliberately does not solve the villain's
/// calling range against the hero's hand; a coin flip when called
/// is the simplification this model is built on. Callers that do
/// know better (say, from a monte carlo estimate) pass their own
/// number.
pub const DEFAULT_CALL_EQUITY: f64 = 0.5;

/// The expected value of jamming versus folding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PushFoldEv {
    /// Chips gained on average by moving all in.
    pub push_ev: f64,
    /// Always zero: folding forfeits the pot contribution and is
    /// the baseline every push is measured against.
    pub fold_ev: f64,
}

/// Expected value of an all-in push against a single villain.
///
/// `fold_equity` is the chance the villain folds; when they call,
/// `call_equity` decides the effective stacks. The pot is blinds
/// plus antes and only the effective stack, the smaller of the
/// two, is ever at risk.
pub fn push_fold_ev(
    hero_stack: f64,
    villain_stack: f64,
    blinds: f64,
    antes: f64,
    call_equity: f64,
    fold_equity: f64,
) -> PushFoldEv {
    let pot = blinds + antes;
    let effective_stack = hero_stack.min(villain_stack);

    let called_ev =
        call_equity * (pot + effective_stack) - (1.0 - call_equity) * effective_stack;
    let push_ev = fold_equity * pot + (1.0 - fold_equity) * called_ev;

    PushFoldEv {
        push_ev,
        fold_ev: 0.0,
    }
}

/// The tightest tier, for stacks of eight big blinds or less.
const TIGHT_RANGE: &[&str] = &["AA", "KK", "QQ", "JJ", "TT", "AKs", "AKo", "AQs"];

/// Up to twelve big blinds.
const MEDIUM_RANGE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "AKs", "AKo", "AQs", // tight tier
    "99", "88", "AQo", "AJs", "ATs", "KQs",
];

/// Up to eighteen big blinds.
const WIDE_RANGE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "AKs", "AKo", "AQs", // tight tier
    "99", "88", "AQo", "AJs", "ATs", "KQs", // medium tier
    "77", "66", "55", "AJo", "ATo", "A9s", "A8s", "KQo", "KJs", "QJs",
];

/// Everything deeper than eighteen big blinds.
const VERY_WIDE_RANGE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "AKs", "AKo", "AQs", // tight tier
    "99", "88", "AQo", "AJs", "ATs", "KQs", // medium tier
    "77", "66", "55", "AJo", "ATo", "A9s", "A8s", "KQo", "KJs", "QJs", // wide tier
    "44", "33", "22", "A7s", "A5s", "A4s", "A3s", "A2s", "KTs", "K9s", "QTs", "JTs",
    "T9s", "98s",
];

/// Look up the pushing range for a stack depth.
///
/// This is a hand coded table keyed on stack depth in big blinds,
/// with four nested tiers at eight, twelve, and eighteen big
/// blinds. Each tier is a strict superset of the one before it.
/// It is not a solved equilibrium and doesn't account for
/// position or payouts; it exists to give a defensible default
/// answer quickly.
pub fn pushing_range(hero_stack: f64, big_blind: f64) -> &'static [&'static str] {
    let stack_depth = if big_blind > 0.0 {
        hero_stack / big_blind
    } else {
        f64::INFINITY
    };

    if stack_depth <= 8.0 {
        TIGHT_RANGE
    } else if stack_depth <= 12.0 {
        MEDIUM_RANGE
    } else if stack_depth <= 18.0 {
        WIDE_RANGE
    } else {
        VERY_WIDE_RANGE
    }
}

//! # Vocabulary
//!
//! Names a formula may use as bare words: functions (called with `name(`)
//! and constants. The RPN builder only checks membership; meaning is given
//! by the evaluator that owns the registry.

/// Registry of function and constant names. Names are looked up in
/// lowercase.
pub trait Vocabulary {
    /// Whether `name` is a callable function.
    fn is_function(&self, name: &str) -> bool;

    /// Whether `name` is a named constant.
    fn is_constant(&self, name: &str) -> bool;
}

/// Functions known to the standard evaluator.
pub const FUNCTIONS: &[&str] = &[
    "abs",
    "acos",
    "acosh",
    "asin",
    "asinh",
    "atan",
    "atanh",
    "avg",
    "b64decode",
    "b64encode",
    "b64encoden",
    "cbrt",
    "ceil",
    "cos",
    "cosh",
    "erf",
    "erfc",
    "erfcinv",
    "erfinv",
    "exp",
    "exp2",
    "expm1",
    "factorial",
    "floor",
    "gamma",
    "j0",
    "j1",
    "key",
    "length",
    "log",
    "log10",
    "log1p",
    "log2",
    "logb",
    "not",
    "pow10",
    "rand",
    "randint",
    "round",
    "roundtoeven",
    "sin",
    "sinh",
    "size",
    "sqrt",
    "sum",
    "tan",
    "tanh",
    "trunc",
    "y0",
    "y1",
];

/// Constants known to the standard evaluator.
pub const CONSTANTS: &[&str] = &[
    "e", "pi", "phi", "sqrt2", "sqrte", "sqrtpi", "sqrtphi", "ln2", "log2e",
    "ln10", "log10e", "true", "false", "null",
];

/// The built-in registry backed by [`FUNCTIONS`] and [`CONSTANTS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardVocabulary;

impl Vocabulary for StandardVocabulary {
    fn is_function(&self, name: &str) -> bool {
        FUNCTIONS.contains(&name)
    }

    fn is_constant(&self, name: &str) -> bool {
        CONSTANTS.contains(&name)
    }
}

/// A pair of `(is_function, is_constant)` predicates.
impl<F, C> Vocabulary for (F, C)
where
    F: Fn(&str) -> bool,
    C: Fn(&str) -> bool,
{
    fn is_function(&self, name: &str) -> bool {
        (self.0)(name)
    }

    fn is_constant(&self, name: &str) -> bool {
        (self.1)(name)
    }
}

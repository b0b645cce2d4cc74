use std::ops::Range;

/// A byte range into the source line a node was parsed from.
pub type Span = Range<usize>;

/// A `number` leaf.
///
/// The digits are kept as source text; conversion to an integer happens during
/// evaluation so that an out-of-range literal surfaces as a runtime
/// `InvalidNumber` rather than a syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLeaf {
    /// The matched text, including an optional leading `-`.
    pub text: String,
    /// Location of the literal in the source line.
    pub span: Span,
}

/// An `operator` leaf.
///
/// The parser only ever produces `+`, `-`, `*` or `/`, but the symbol is kept
/// as text so trees built by hand can carry anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorLeaf {
    /// The operator symbol as written.
    pub symbol: String,
    /// Location of the operator in the source line.
    pub span: Span,
}

/// An `expr` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A bare number.
    Number(NumberLeaf),
    /// A parenthesized form `( operator expr+ )`.
    Apply(Application),
}

/// An operator applied to one or more operands, left to right.
///
/// Both the parenthesized `expr` form and the `program` root have this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// The operator folded across the operands.
    pub operator: OperatorLeaf,
    /// The first operand, used as the initial accumulator.
    pub first:    Box<Expr>,
    /// The remaining operands in source order. May be empty.
    pub rest:     Vec<Expr>,
    /// Location of the whole form, parentheses included.
    pub span:     Span,
}

/// The root `program` node: a bare application anchored at both ends of the
/// line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub body: Application,
}

impl NumberLeaf {
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self { text: text.into(),
               span }
    }
}

impl OperatorLeaf {
    #[must_use]
    pub fn new(symbol: impl Into<String>, span: Span) -> Self {
        Self { symbol: symbol.into(),
               span }
    }
}

impl Application {
    /// Iterates over every operand, the first one included.
    pub fn operands(&self) -> impl Iterator<Item = &Expr> {
        std::iter::once(self.first.as_ref()).chain(self.rest.iter())
    }

    fn child_count(&self) -> usize {
        // One for the operator leaf, then every operand subtree.
        1 + self.operands().map(Expr::node_count).sum::<usize>()
    }
}

impl Expr {
    /// Returns the location of this expression in the source line.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Number(leaf) => leaf.span.clone(),
            Self::Apply(app) => app.span.clone(),
        }
    }

    /// Counts the nodes of this subtree.
    ///
    /// A bare number is a single node. A parenthesized form counts itself, its
    /// two parenthesis tokens, its operator and all of its operands.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Number(_) => 1,
            Self::Apply(app) => 3 + app.child_count(),
        }
    }
}

impl Program {
    /// Counts the nodes of the whole tree.
    ///
    /// The root counts itself and its two anchors (start and end of input), so
    /// `+ 1 2` has six nodes: root, two anchors, operator and two numbers.
    ///
    /// # Example
    /// ```
    /// let program = lispy::parse("* 2 (+ 1 2)").unwrap();
    /// assert_eq!(program.node_count(), 11);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        3 + self.body.child_count()
    }
}

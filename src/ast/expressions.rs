/// Literal Kind
/// Distinguishes what a literal's text is meant to represent.
///
/// The text itself is stored verbatim and never validated against the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Integer,
    Boolean,
    Address,
}

/// Binary Operator
/// The 13 binary operators a contract expression can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    And,
    Or,
}

impl BinaryOp {
    /// The operator's C++ spelling, padded with single spaces on both sides.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => " + ",
            BinaryOp::Sub => " - ",
            BinaryOp::Mul => " * ",
            BinaryOp::Div => " / ",
            BinaryOp::Mod => " % ",
            BinaryOp::Eq => " == ",
            BinaryOp::Ne => " != ",
            BinaryOp::Gt => " > ",
            BinaryOp::Lt => " < ",
            BinaryOp::Ge => " >= ",
            BinaryOp::Le => " <= ",
            BinaryOp::And => " && ",
            BinaryOp::Or => " || ",
        }
    }
}

/// Unary Operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Negate,
}

/// Expression Node
/// Represents a value-producing node in the AST.
///
/// Expressions own their children exclusively; the tree has no sharing and
/// no back-references.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal whose text is emitted verbatim.
    Literal { kind: LiteralKind, value: String },
    /// An unvalidated reference to a variable or parameter name.
    Identifier { name: String },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary { op: UnaryOp, operand: Box<Expr> },
}

impl Expr {
    /// Renders the expression to a single-line fragment.
    ///
    /// Binary and unary operations are always fully parenthesized, so
    /// operator precedence never has to be modelled.
    pub fn render(&self) -> String {
        match self {
            Expr::Literal { value, .. } => value.clone(),
            Expr::Identifier { name } => name.clone(),
            Expr::Binary { op, left, right } => {
                format!("({}{}{})", left.render(), op.symbol(), right.render())
            }
            Expr::Unary {
                op: UnaryOp::Not,
                operand,
            } => format!("(!{})", operand.render()),
            Expr::Unary {
                op: UnaryOp::Negate,
                operand,
            } => format!("(-{})", operand.render()),
        }
    }
}

/// The ten two-operand Ideographic Description Characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BinaryOperator {
    /// ⿰
    LeftToRight,
    /// ⿱
    AboveToBelow,
    /// ⿴
    FullSurround,
    /// ⿵
    SurroundFromAbove,
    /// ⿶
    SurroundFromBelow,
    /// ⿷
    SurroundFromLeft,
    /// ⿸
    SurroundFromUpperLeft,
    /// ⿹
    SurroundFromUpperRight,
    /// ⿺
    SurroundFromLowerLeft,
    /// ⿻
    Overlaid,
}

/// The two three-operand Ideographic Description Characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TernaryOperator {
    /// ⿲
    LeftToMiddleAndRight,
    /// ⿳
    AboveToMiddleAndBelow,
}

/// Any of the twelve composition operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Binary(BinaryOperator),
    Ternary(TernaryOperator),
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 10] = [
        BinaryOperator::LeftToRight,
        BinaryOperator::AboveToBelow,
        BinaryOperator::FullSurround,
        BinaryOperator::SurroundFromAbove,
        BinaryOperator::SurroundFromBelow,
        BinaryOperator::SurroundFromLeft,
        BinaryOperator::SurroundFromUpperLeft,
        BinaryOperator::SurroundFromUpperRight,
        BinaryOperator::SurroundFromLowerLeft,
        BinaryOperator::Overlaid,
    ];

    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::LeftToRight => '⿰',
            BinaryOperator::AboveToBelow => '⿱',
            BinaryOperator::FullSurround => '⿴',
            BinaryOperator::SurroundFromAbove => '⿵',
            BinaryOperator::SurroundFromBelow => '⿶',
            BinaryOperator::SurroundFromLeft => '⿷',
            BinaryOperator::SurroundFromUpperLeft => '⿸',
            BinaryOperator::SurroundFromUpperRight => '⿹',
            BinaryOperator::SurroundFromLowerLeft => '⿺',
            BinaryOperator::Overlaid => '⿻',
        }
    }
}

impl TernaryOperator {
    pub const ALL: [TernaryOperator; 2] = [
        TernaryOperator::LeftToMiddleAndRight,
        TernaryOperator::AboveToMiddleAndBelow,
    ];

    pub fn symbol(self) -> char {
        match self {
            TernaryOperator::LeftToMiddleAndRight => '⿲',
            TernaryOperator::AboveToMiddleAndBelow => '⿳',
        }
    }

    /// The binary operator this one chains: ⿲ is two ⿰, ⿳ is two ⿱.
    pub fn binary(self) -> BinaryOperator {
        match self {
            TernaryOperator::LeftToMiddleAndRight => BinaryOperator::LeftToRight,
            TernaryOperator::AboveToMiddleAndBelow => BinaryOperator::AboveToBelow,
        }
    }
}

impl Operator {
    /// Recognise an operator symbol. Every other character is a leaf.
    pub fn from_char(ch: char) -> Option<Operator> {
        let op = match ch {
            '⿰' => Operator::Binary(BinaryOperator::LeftToRight),
            '⿱' => Operator::Binary(BinaryOperator::AboveToBelow),
            '⿲' => Operator::Ternary(TernaryOperator::LeftToMiddleAndRight),
            '⿳' => Operator::Ternary(TernaryOperator::AboveToMiddleAndBelow),
            '⿴' => Operator::Binary(BinaryOperator::FullSurround),
            '⿵' => Operator::Binary(BinaryOperator::SurroundFromAbove),
            '⿶' => Operator::Binary(BinaryOperator::SurroundFromBelow),
            '⿷' => Operator::Binary(BinaryOperator::SurroundFromLeft),
            '⿸' => Operator::Binary(BinaryOperator::SurroundFromUpperLeft),
            '⿹' => Operator::Binary(BinaryOperator::SurroundFromUpperRight),
            '⿺' => Operator::Binary(BinaryOperator::SurroundFromLowerLeft),
            '⿻' => Operator::Binary(BinaryOperator::Overlaid),
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Binary(op) => op.symbol(),
            Operator::Ternary(op) => op.symbol(),
        }
    }

    /// Number of operands the operator takes.
    pub fn arity(self) -> usize {
        match self {
            Operator::Binary(_) => 2,
            Operator::Ternary(_) => 3,
        }
    }

    pub fn is_ternary(self) -> bool {
        matches!(self, Operator::Ternary(_))
    }

    pub fn all() -> impl Iterator<Item = Operator> {
        BinaryOperator::ALL
            .into_iter()
            .map(Operator::Binary)
            .chain(TernaryOperator::ALL.into_iter().map(Operator::Ternary))
    }
}

impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Operator::Binary(op)
    }
}

impl From<TernaryOperator> for Operator {
    fn from(op: TernaryOperator) -> Self {
        Operator::Ternary(op)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Exercise primitives
// ---------------------------------------------------------------------------

/// Arithmetic category of an exercise. The generator only emits `Addition`;
/// the other variants appear in hand-written exercise banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Category {
    pub fn symbol(self) -> &'static str {
        match self {
            Category::Addition       => "+",
            Category::Subtraction    => "-",
            Category::Multiplication => "×",
            Category::Division       => "÷",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Addition       => "Addition",
            Category::Subtraction    => "Subtraction",
            Category::Multiplication => "Multiplication",
            Category::Division       => "Division",
        };
        write!(f, "{}", s)
    }
}

/// Order-independent deduplication key for an operand pair (`3+5` == `5+3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperandKey(pub u32, pub u32);

impl OperandKey {
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b { OperandKey(a, b) } else { OperandKey(b, a) }
    }
}

impl fmt::Display for OperandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.0, self.1)
    }
}

/// One question instance. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Sequence number, unique within a generated batch, starting at 1.
    pub id: u32,
    /// Operands in draw order.
    pub operands: [u32; 2],
    pub question: String,
    pub correct_answer: u32,
    /// The correct answer plus three distractors, in presentation order.
    pub options: [u32; 4],
    pub category: Category,
    /// Tier derived from the answer: 1 if `correct_answer <= 10`, else 2.
    pub difficulty: u8,
}

impl Exercise {
    pub fn operand_key(&self) -> OperandKey {
        OperandKey::new(self.operands[0], self.operands[1])
    }

    pub fn is_correct(&self, option: u32) -> bool {
        option == self.correct_answer
    }

    /// Options that are not the correct answer.
    pub fn distractors(&self) -> impl Iterator<Item = u32> + '_ {
        self.options.iter().copied().filter(move |&o| o != self.correct_answer)
    }
}

/// Difficulty tier for a given answer.
pub fn tier_for(correct_answer: u32) -> u8 {
    if correct_answer <= 10 { 1 } else { 2 }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Difficulty chosen on the home screen; selects the operand range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] =
        [DifficultyLevel::Easy, DifficultyLevel::Medium, DifficultyLevel::Hard];

    pub fn operand_range(self) -> OperandRange {
        match self {
            DifficultyLevel::Easy   => OperandRange::new(1, 10),
            DifficultyLevel::Medium => OperandRange::new(1, 20),
            DifficultyLevel::Hard   => OperandRange::new(1, 50),
        }
    }

    pub fn label(self) -> String {
        let r = self.operand_range();
        format!("{} ({}-{})", self, r.min, r.max)
    }
}

impl FromStr for DifficultyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy"            => Ok(DifficultyLevel::Easy),
            "medium" | "med"  => Ok(DifficultyLevel::Medium),
            "hard"            => Ok(DifficultyLevel::Hard),
            _ => Err(format!("unknown difficulty '{s}' (expected easy, medium or hard)")),
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Easy   => write!(f, "Easy"),
            DifficultyLevel::Medium => write!(f, "Medium"),
            DifficultyLevel::Hard   => write!(f, "Hard"),
        }
    }
}

/// Inclusive operand range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandRange {
    pub min: u32,
    pub max: u32,
}

impl OperandRange {
    pub fn new(min: u32, max: u32) -> Self {
        OperandRange { min, max }
    }

    pub fn contains(self, n: u32) -> bool {
        (self.min..=self.max).contains(&n)
    }

    /// Number of distinct unordered operand pairs (repetition allowed).
    /// Zero for an empty range.
    pub fn distinct_pairs(self) -> u64 {
        if self.min > self.max {
            return 0;
        }
        let n = u64::from(self.max - self.min) + 1;
        n * (n + 1) / 2
    }
}

impl fmt::Display for OperandRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub count: usize,
    pub range: OperandRange,
    /// `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl GenerationRequest {
    /// Request `count` exercises for a difficulty level, unseeded.
    pub fn new(count: usize, difficulty: DifficultyLevel) -> Self {
        GenerationRequest { count, range: difficulty.operand_range(), rng_seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

//! Growth-class parsing for complexity labels.
//!
//! The backend reports complexity as free-form big-O strings (`O(1)`,
//! `O(N^2)`, `O(n²)`, `O(2^n)`, ...). Everything here works by string matching
//! on a normalized form of the label, so unknown spellings degrade to
//! [`GrowthClass::Unknown`] instead of failing.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static POLYNOMIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^n\^\(?(\d+)\)?$").expect("valid polynomial regex"));
static EXPONENTIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+|n)\^\(?n\)?$").expect("valid exponential regex"));

/// Asymptotic growth class, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthClass {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    /// `n^k` with `k >= 2`
    Polynomial(u32),
    Exponential,
    Factorial,
    Unknown,
}

impl GrowthClass {
    /// Parse a complexity label such as `O(n log n)`.
    pub fn parse(label: &str) -> Self {
        let normalized = normalize(label);
        let inner = strip_wrapper(&normalized);

        match inner {
            "1" | "c" | "k" => return GrowthClass::Constant,
            "logn" | "log(n)" | "lgn" | "log2n" => return GrowthClass::Logarithmic,
            "n" => return GrowthClass::Linear,
            "nlogn" | "n*logn" | "nlog(n)" | "n*log(n)" | "n.logn" => {
                return GrowthClass::Linearithmic
            }
            "n!" => return GrowthClass::Factorial,
            _ => {}
        }

        if let Some(caps) = POLYNOMIAL.captures(inner) {
            return match caps[1].parse::<u32>() {
                Ok(0) => GrowthClass::Constant,
                Ok(1) => GrowthClass::Linear,
                Ok(k) => GrowthClass::Polynomial(k),
                Err(_) => GrowthClass::Unknown,
            };
        }

        if let Some(caps) = EXPONENTIAL.captures(inner) {
            // 1^n is constant; anything larger grows exponentially
            return if &caps[1] == "1" {
                GrowthClass::Constant
            } else {
                GrowthClass::Exponential
            };
        }

        GrowthClass::Unknown
    }

    /// Share of a complexity category's points this class earns.
    pub fn score_fraction(&self) -> f64 {
        match self {
            GrowthClass::Constant => 1.0,
            GrowthClass::Logarithmic => 0.9,
            GrowthClass::Linear => 0.75,
            GrowthClass::Linearithmic => 0.6,
            GrowthClass::Polynomial(2) => 0.35,
            GrowthClass::Polynomial(3) => 0.15,
            GrowthClass::Polynomial(_)
            | GrowthClass::Exponential
            | GrowthClass::Factorial
            | GrowthClass::Unknown => 0.0,
        }
    }
}

impl fmt::Display for GrowthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthClass::Constant => f.write_str("constant"),
            GrowthClass::Logarithmic => f.write_str("logarithmic"),
            GrowthClass::Linear => f.write_str("linear"),
            GrowthClass::Linearithmic => f.write_str("linearithmic"),
            GrowthClass::Polynomial(2) => f.write_str("quadratic"),
            GrowthClass::Polynomial(3) => f.write_str("cubic"),
            GrowthClass::Polynomial(k) => write!(f, "polynomial (n^{})", k),
            GrowthClass::Exponential => f.write_str("exponential"),
            GrowthClass::Factorial => f.write_str("factorial"),
            GrowthClass::Unknown => f.write_str("unrecognized"),
        }
    }
}

/// Verdict shown next to a complexity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLabel {
    Excellent,
    Good,
    Poor,
    Review,
}

impl StatusLabel {
    /// Classify a complexity label; absent labels need review.
    pub fn classify(label: Option<&str>) -> Self {
        match label.map(GrowthClass::parse) {
            Some(GrowthClass::Constant | GrowthClass::Logarithmic) => StatusLabel::Excellent,
            Some(GrowthClass::Linear | GrowthClass::Linearithmic) => StatusLabel::Good,
            Some(
                GrowthClass::Polynomial(_) | GrowthClass::Exponential | GrowthClass::Factorial,
            ) => StatusLabel::Poor,
            Some(GrowthClass::Unknown) | None => StatusLabel::Review,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Excellent => "Excellent",
            StatusLabel::Good => "Good",
            StatusLabel::Poor => "Poor",
            StatusLabel::Review => "Review",
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase, drop whitespace and fold superscript digits into `^k`.
fn normalize(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            c if c.is_whitespace() => {}
            '⁰' => out.push_str("^0"),
            '¹' => out.push_str("^1"),
            '²' => out.push_str("^2"),
            '³' => out.push_str("^3"),
            '⁴' => out.push_str("^4"),
            'ⁿ' => out.push_str("^n"),
            '·' | '×' => out.push('*'),
            c => out.extend(c.to_lowercase()),
        }
    }
    out.replace("**", "^")
}

/// Strip an optional `O(...)` / `Θ(...)` wrapper.
fn strip_wrapper(normalized: &str) -> &str {
    for prefix in ["o(", "θ(", "ω("] {
        if let Some(rest) = normalized.strip_prefix(prefix) {
            return rest.strip_suffix(')').unwrap_or(rest);
        }
    }
    normalized
}

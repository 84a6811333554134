use serde::{Deserialize, Serialize};
use tracing::trace;

/// A card network known to the issuer catalog.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Issuer {
    Visa,
    MasterCard,
    AmericanExpress,
    DinersClub,
    Discover,
    Jcb,
    UnionPay,
    Maestro,
    Dankort,
    Forbrugsforeningen,
    Switch,
    Solo,
    Laser,
}

impl Issuer {
    /// Every issuer, in catalog order.
    pub fn all() -> impl Iterator<Item = Issuer> {
        <Issuer as strum::IntoEnumIterator>::iter()
    }

    /// Human-readable network name.
    pub fn name(self) -> &'static str {
        match self {
            Issuer::Visa => "Visa",
            Issuer::MasterCard => "MasterCard",
            Issuer::AmericanExpress => "American Express",
            Issuer::DinersClub => "Diners Club",
            Issuer::Discover => "Discover",
            Issuer::Jcb => "JCB",
            Issuer::UnionPay => "UnionPay",
            Issuer::Maestro => "Maestro",
            Issuer::Dankort => "Dankort",
            Issuer::Forbrugsforeningen => "Forbrugsforeningen",
            Issuer::Switch => "Switch",
            Issuer::Solo => "Solo",
            Issuer::Laser => "Laser",
        }
    }
}

/// An inclusive range over the leading `width` digits of a card number.
///
/// A fixed prefix is a range whose bounds are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRange {
    start: u32,
    end: u32,
    width: usize,
}

impl PrefixRange {
    pub const fn exact(prefix: u32) -> Self {
        Self::range(prefix, prefix)
    }

    pub const fn range(start: u32, end: u32) -> Self {
        let width = digit_count(start);
        assert!(width == digit_count(end), "prefix bounds must have equal width");
        assert!(start <= end, "prefix range must not be empty");
        Self { start, end, width }
    }

    /// Number of leading digits this pattern inspects.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn matches(&self, digits: &str) -> bool {
        let Some(head) = digits.get(..self.width) else {
            return false;
        };
        match head.parse::<u32>() {
            Ok(prefix) => (self.start..=self.end).contains(&prefix),
            Err(_) => false,
        }
    }
}

const fn digit_count(mut value: u32) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

/// Prefix patterns and accepted lengths for one issuer.
#[derive(Debug)]
pub struct IssuerRule {
    pub issuer: Issuer,
    pub prefixes: &'static [PrefixRange],
    pub lengths: &'static [usize],
}

impl IssuerRule {
    /// Width of the longest prefix matching `digits`, if its length is accepted.
    fn match_width(&self, digits: &str) -> Option<usize> {
        if !self.lengths.contains(&digits.len()) {
            return None;
        }
        self.prefixes
            .iter()
            .filter(|prefix| prefix.matches(digits))
            .map(PrefixRange::width)
            .max()
    }
}

const fn exact(prefix: u32) -> PrefixRange {
    PrefixRange::exact(prefix)
}

const fn range(start: u32, end: u32) -> PrefixRange {
    PrefixRange::range(start, end)
}

pub static CATALOG: &[IssuerRule] = &[
    IssuerRule {
        issuer: Issuer::Visa,
        prefixes: &[exact(4)],
        lengths: &[13, 16, 19],
    },
    IssuerRule {
        issuer: Issuer::MasterCard,
        prefixes: &[range(51, 55), range(2221, 2720)],
        lengths: &[16],
    },
    IssuerRule {
        issuer: Issuer::AmericanExpress,
        prefixes: &[exact(34), exact(37)],
        lengths: &[15],
    },
    IssuerRule {
        issuer: Issuer::DinersClub,
        prefixes: &[range(300, 305), exact(3095), exact(36), exact(38), exact(39)],
        lengths: &[14, 16],
    },
    IssuerRule {
        issuer: Issuer::Discover,
        prefixes: &[
            exact(6011),
            range(644, 649),
            exact(65),
            range(622126, 622925),
        ],
        lengths: &[16, 19],
    },
    IssuerRule {
        issuer: Issuer::Jcb,
        prefixes: &[range(3528, 3589)],
        lengths: &[16, 17, 18, 19],
    },
    IssuerRule {
        issuer: Issuer::UnionPay,
        prefixes: &[exact(62)],
        lengths: &[16, 17, 18, 19],
    },
    IssuerRule {
        issuer: Issuer::Maestro,
        prefixes: &[
            exact(5018),
            exact(5020),
            exact(5038),
            exact(5893),
            exact(6759),
            range(6761, 6763),
        ],
        lengths: &[12, 13, 14, 15, 16, 17, 18, 19],
    },
    IssuerRule {
        issuer: Issuer::Dankort,
        prefixes: &[exact(5019)],
        lengths: &[16],
    },
    IssuerRule {
        issuer: Issuer::Forbrugsforeningen,
        prefixes: &[exact(600722)],
        lengths: &[16],
    },
    IssuerRule {
        issuer: Issuer::Switch,
        prefixes: &[exact(564182), exact(633110), exact(6333)],
        lengths: &[16, 18, 19],
    },
    IssuerRule {
        issuer: Issuer::Solo,
        prefixes: &[exact(6334), exact(6767)],
        lengths: &[16, 18, 19],
    },
    IssuerRule {
        issuer: Issuer::Laser,
        prefixes: &[exact(6304), exact(6706), exact(6709), exact(6771)],
        lengths: &[16, 17, 18, 19],
    },
];

/// Finds the issuer of a normalized digit string.
///
/// Only rules accepting the number's length take part. The longest matching
/// prefix wins; equal widths resolve to catalog order.
pub fn identify(digits: &str) -> Option<Issuer> {
    let mut best: Option<(Issuer, usize)> = None;
    for rule in CATALOG {
        if let Some(width) = rule.match_width(digits)
            && best.is_none_or(|(_, best_width)| width > best_width)
        {
            best = Some((rule.issuer, width));
        }
    }

    let issuer = best.map(|(issuer, _)| issuer);
    trace!(len = digits.len(), issuer = ?issuer, "issuer resolved");
    issuer
}

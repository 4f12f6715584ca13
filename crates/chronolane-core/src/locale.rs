//! Localized text for timeline annotations.
//!
//! Language is an explicit parameter everywhere; nothing in this crate reads
//! shared language state. The layout engine itself never calls into this
//! module -- it positions opaque records, and the caller formats labels.

use serde::{Deserialize, Serialize};

use crate::month::Month;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Es,
    Ja,
    Ko,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Ja => "ja",
            Self::Ko => "ko",
        }
    }

    /// Parse a language code; unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "ja" => Some(Self::Ja),
            "ko" => Some(Self::Ko),
            _ => None,
        }
    }

    /// Year-first date order (CJK convention).
    fn year_first(&self) -> bool {
        matches!(self, Self::Ja | Self::Ko)
    }
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_ES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];
const MONTHS_JA: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];
const MONTHS_KO: [&str; 12] = [
    "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
];

/// Abbreviated month name.
pub fn month_name(month: &Month, lang: Lang) -> &'static str {
    let table = match lang {
        Lang::En => &MONTHS_EN,
        Lang::Es => &MONTHS_ES,
        Lang::Ja => &MONTHS_JA,
        Lang::Ko => &MONTHS_KO,
    };
    table[(month.month - 1) as usize]
}

/// Axis label for a month: `Jan 2024` in Western order, `2024 1月` in CJK.
pub fn month_label(month: &Month, lang: Lang) -> String {
    let name = month_name(month, lang);
    if lang.year_first() {
        format!("{} {}", month.year, name)
    } else {
        format!("{} {}", name, month.year)
    }
}

/// Localized duration units.
struct DurationUnits {
    months: &'static str,
    years: &'static str,
}

fn units(lang: Lang) -> DurationUnits {
    match lang {
        Lang::En => DurationUnits { months: "mo", years: "y" },
        Lang::Es => DurationUnits { months: "meses", years: "años" },
        Lang::Ja => DurationUnits { months: "ヶ月", years: "年" },
        Lang::Ko => DurationUnits { months: "개월", years: "년" },
    }
}

/// Compact duration string for a month count: `7mo`, `2y`, `2y 3mo`.
pub fn format_duration(total_months: i32, lang: Lang) -> String {
    let total = total_months.max(1);
    let u = units(lang);
    let years = total / 12;
    let months = total % 12;
    if years >= 1 {
        if months > 0 {
            format!("{}{} {}{}", years, u.years, months, u.months)
        } else {
            format!("{}{}", years, u.years)
        }
    } else {
        format!("{}{}", total, u.months)
    }
}

/// Period string: `2020-01 — 2021-06`, or `2020-01 — Present` when ongoing.
pub fn format_period(start: &Month, end: Option<&Month>) -> String {
    match end {
        Some(e) => format!("{start} — {e}"),
        None => format!("{start} — Present"),
    }
}

/// Flag emoji for a country name, via a fixed alias table.
///
/// Unknown countries yield `None`; callers decide the fallback. This is a
/// declarative lookup, not a guessing heuristic.
pub fn country_flag(country: &str) -> Option<&'static str> {
    const ALIASES: &[(&str, &str)] = &[
        ("united states", "🇺🇸"),
        ("usa", "🇺🇸"),
        ("u.s.a.", "🇺🇸"),
        ("us", "🇺🇸"),
        ("colombia", "🇨🇴"),
        ("japan", "🇯🇵"),
        ("korea", "🇰🇷"),
        ("south korea", "🇰🇷"),
        ("republic of korea", "🇰🇷"),
        ("france", "🇫🇷"),
        ("spain", "🇪🇸"),
        ("germany", "🇩🇪"),
        ("canada", "🇨🇦"),
        ("united kingdom", "🇬🇧"),
        ("uk", "🇬🇧"),
        ("england", "🇬🇧"),
        ("china", "🇨🇳"),
        ("singapore", "🇸🇬"),
        ("mexico", "🇲🇽"),
        ("brazil", "🇧🇷"),
        ("argentina", "🇦🇷"),
        ("chile", "🇨🇱"),
        ("peru", "🇵🇪"),
        ("netherlands", "🇳🇱"),
    ];

    let needle = country.trim().to_ascii_lowercase();
    ALIASES
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, flag)| *flag)
}

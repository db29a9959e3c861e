//! The closed grant taxonomy: grant type, share class, bonus sub-type.

use std::fmt;
use std::str::FromStr;

/// The reason a grant was issued.
///
/// A closed set: the configuration resolver matches exhaustively over
/// these variants, so a new grant category is a compile-time-checked
/// addition rather than a silent fallthrough.
///
/// # Examples
///
/// ```
/// use vesting_models::grants::GrantType;
///
/// let gt: GrantType = "new_hire".parse().unwrap();
/// assert_eq!(gt, GrantType::NewHire);
/// assert_eq!(gt.name(), "new_hire");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GrantType {
    /// Initial grant issued on hire.
    NewHire,
    /// Annual performance bonus grant, qualified by a [`super::BonusType`].
    AnnualPerformance,
    /// Grant issued on promotion.
    Promotion,
    /// Discretionary special-award grant.
    SpecialAward,
    /// Qualified employee stock purchase plan allotment.
    Espp,
    /// Non-qualified employee stock purchase plan allotment.
    NqEspp,
}

impl GrantType {
    /// Returns the canonical snake_case name, as stored in grant records.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GrantType::NewHire => "new_hire",
            GrantType::AnnualPerformance => "annual_performance",
            GrantType::Promotion => "promotion",
            GrantType::SpecialAward => "special_award",
            GrantType::Espp => "espp",
            GrantType::NqEspp => "nqespp",
        }
    }

    /// Returns whether this taxonomy vests immediately on the grant date.
    ///
    /// Purchase-plan allotments have no vesting period at all: the full
    /// quantity is owned on the purchase date.
    #[inline]
    pub fn is_purchase_plan(&self) -> bool {
        matches!(self, GrantType::Espp | GrantType::NqEspp)
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GrantType {
    type Err = String;

    /// Parses a grant type from its snake_case name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "new_hire" => Ok(GrantType::NewHire),
            "annual_performance" => Ok(GrantType::AnnualPerformance),
            "promotion" => Ok(GrantType::Promotion),
            "special_award" => Ok(GrantType::SpecialAward),
            "espp" => Ok(GrantType::Espp),
            "nqespp" | "nq_espp" => Ok(GrantType::NqEspp),
            _ => Err(format!("Unknown grant type: {}", s)),
        }
    }
}

/// The class of shares delivered by a grant.
///
/// # Examples
///
/// ```
/// use vesting_models::grants::ShareClass;
///
/// assert_eq!("iso_5y".parse::<ShareClass>().unwrap(), ShareClass::Iso5Year);
/// assert!(ShareClass::Iso5Year.is_option());
/// assert!(!ShareClass::Rsu.is_option());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShareClass {
    /// Restricted stock unit.
    Rsu,
    /// Incentive stock option, 5-year exercise class (vesting clock
    /// starts one year after grant).
    #[cfg_attr(feature = "serde", serde(rename = "iso_5y"))]
    Iso5Year,
    /// Incentive stock option, 6-year exercise class (vesting clock
    /// starts two years after grant).
    #[cfg_attr(feature = "serde", serde(rename = "iso_6y"))]
    Iso6Year,
    /// Cash-settled equivalent; vests on the paired RSU schedule.
    Cash,
}

impl ShareClass {
    /// Returns the canonical snake_case name, as stored in grant records.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ShareClass::Rsu => "rsu",
            ShareClass::Iso5Year => "iso_5y",
            ShareClass::Iso6Year => "iso_6y",
            ShareClass::Cash => "cash",
        }
    }

    /// Returns whether this class is an incentive stock option.
    #[inline]
    pub fn is_option(&self) -> bool {
        matches!(self, ShareClass::Iso5Year | ShareClass::Iso6Year)
    }
}

impl fmt::Display for ShareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShareClass {
    type Err = String;

    /// Parses a share class from its snake_case name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "rsu" => Ok(ShareClass::Rsu),
            "iso_5y" | "iso5y" => Ok(ShareClass::Iso5Year),
            "iso_6y" | "iso6y" => Ok(ShareClass::Iso6Year),
            "cash" => Ok(ShareClass::Cash),
            _ => Err(format!("Unknown share class: {}", s)),
        }
    }
}

/// Payout horizon of an annual performance bonus.
///
/// Only meaningful when the grant type is
/// [`GrantType::AnnualPerformance`]; other taxonomies carry no sub-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BonusType {
    /// Paid out in full on the first anniversary.
    ShortTerm,
    /// Vests semiannually over five years after a one-year start offset.
    LongTerm,
}

impl BonusType {
    /// Returns the canonical snake_case name, as stored in grant records.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BonusType::ShortTerm => "short_term",
            BonusType::LongTerm => "long_term",
        }
    }
}

impl fmt::Display for BonusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BonusType {
    type Err = String;

    /// Parses a bonus sub-type from its snake_case name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "short_term" => Ok(BonusType::ShortTerm),
            "long_term" => Ok(BonusType::LongTerm),
            _ => Err(format!("Unknown bonus type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_type_names() {
        assert_eq!(GrantType::NewHire.name(), "new_hire");
        assert_eq!(GrantType::AnnualPerformance.name(), "annual_performance");
        assert_eq!(GrantType::Promotion.name(), "promotion");
        assert_eq!(GrantType::SpecialAward.name(), "special_award");
        assert_eq!(GrantType::Espp.name(), "espp");
        assert_eq!(GrantType::NqEspp.name(), "nqespp");
    }

    #[test]
    fn test_grant_type_from_str() {
        assert_eq!("new_hire".parse::<GrantType>().unwrap(), GrantType::NewHire);
        assert_eq!("New-Hire".parse::<GrantType>().unwrap(), GrantType::NewHire);
        assert_eq!("nqespp".parse::<GrantType>().unwrap(), GrantType::NqEspp);
        assert!("options".parse::<GrantType>().is_err());
    }

    #[test]
    fn test_purchase_plan_flag() {
        assert!(GrantType::Espp.is_purchase_plan());
        assert!(GrantType::NqEspp.is_purchase_plan());
        assert!(!GrantType::NewHire.is_purchase_plan());
        assert!(!GrantType::AnnualPerformance.is_purchase_plan());
    }

    #[test]
    fn test_share_class_from_str() {
        assert_eq!("rsu".parse::<ShareClass>().unwrap(), ShareClass::Rsu);
        assert_eq!("ISO_5Y".parse::<ShareClass>().unwrap(), ShareClass::Iso5Year);
        assert_eq!("iso_6y".parse::<ShareClass>().unwrap(), ShareClass::Iso6Year);
        assert_eq!("cash".parse::<ShareClass>().unwrap(), ShareClass::Cash);
        assert!("common".parse::<ShareClass>().is_err());
    }

    #[test]
    fn test_share_class_is_option() {
        assert!(ShareClass::Iso5Year.is_option());
        assert!(ShareClass::Iso6Year.is_option());
        assert!(!ShareClass::Rsu.is_option());
        assert!(!ShareClass::Cash.is_option());
    }

    #[test]
    fn test_bonus_type_from_str() {
        assert_eq!(
            "short_term".parse::<BonusType>().unwrap(),
            BonusType::ShortTerm
        );
        assert_eq!(
            "Long-Term".parse::<BonusType>().unwrap(),
            BonusType::LongTerm
        );
        assert!("deferred".parse::<BonusType>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(format!("{}", GrantType::SpecialAward), "special_award");
        assert_eq!(format!("{}", ShareClass::Iso6Year), "iso_6y");
        assert_eq!(format!("{}", BonusType::LongTerm), "long_term");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names_match_records() {
        let json = serde_json::to_string(&ShareClass::Iso5Year).unwrap();
        assert_eq!(json, "\"iso_5y\"");
        let gt: GrantType = serde_json::from_str("\"annual_performance\"").unwrap();
        assert_eq!(gt, GrantType::AnnualPerformance);
    }
}

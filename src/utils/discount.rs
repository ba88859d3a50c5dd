use crate::core::error::DiscountError;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserType {
    Standard,
    Silver,
    Gold,
    Platinum,
}

impl UserType {
    /// Fraction of the price taken off
    pub fn rate(self) -> f64 {
        match self {
            UserType::Standard => 0.0,
            UserType::Silver => 0.1,
            UserType::Gold => 0.15,
            UserType::Platinum => 0.2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Standard => "standard",
            UserType::Silver => "silver",
            UserType::Gold => "gold",
            UserType::Platinum => "platinum",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = DiscountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(UserType::Standard),
            "silver" => Ok(UserType::Silver),
            "gold" => Ok(UserType::Gold),
            "platinum" => Ok(UserType::Platinum),
            _ => Err(DiscountError::UnknownUserType(s.to_string())),
        }
    }
}

/// Legacy numeric tier codes
impl TryFrom<u8> for UserType {
    type Error = DiscountError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(UserType::Standard),
            1 => Ok(UserType::Silver),
            2 => Ok(UserType::Gold),
            3 => Ok(UserType::Platinum),
            other => Err(DiscountError::UnknownUserType(other.to_string())),
        }
    }
}

pub fn calculate_discount(price: f64, user_type: UserType) -> f64 {
    price * user_type.rate()
}

/// Discount computed from an untrusted user type
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountQuote {
    pub amount: f64,
    /// Set when the user type was not recognized and no discount applied
    pub unrecognized: Option<DiscountError>,
}

/// Compute a discount for a textual user type.
///
/// Unknown types yield an amount of 0 together with the reason.
pub fn quote_discount(price: f64, user_type: &str) -> DiscountQuote {
    match user_type.parse::<UserType>() {
        Ok(user_type) => DiscountQuote {
            amount: calculate_discount(price, user_type),
            unrecognized: None,
        },
        Err(e) => {
            warn!(user_type = %user_type, "Unrecognized user type, no discount applied");
            DiscountQuote {
                amount: 0.0,
                unrecognized: Some(e),
            }
        }
    }
}

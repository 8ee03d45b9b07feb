//! Product record and its value objects.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CatalogError, CatalogResult};

/// Product price.
///
/// Stored in integer cents internally; the persisted wire format carries a
/// plain JSON decimal number (e.g. `29.99`), so (de)serialization converts.
/// Deserialization rejects negative and non-finite values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(u64);

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Convert a decimal amount (e.g. `29.99`) into a price, rounding to the
    /// nearest cent.
    pub fn from_decimal(amount: f64) -> CatalogResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CatalogError::validation(format!(
                "price must be a non-negative number, got {amount}"
            )));
        }
        Ok(Self((amount * 100.0).round() as u64))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Price::from_decimal(amount).map_err(serde::de::Error::custom)
    }
}

/// Closed set of promotional flags on a product.
///
/// The wire format keeps the original optional `isNew` / `isBestseller`
/// fields; an unset flag is omitted from the serialized record rather than
/// written as `false`, so clean snapshots round-trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoFlags {
    #[serde(rename = "isNew", default, skip_serializing_if = "Option::is_none")]
    new: Option<bool>,

    #[serde(
        rename = "isBestseller",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    bestseller: Option<bool>,
}

impl PromoFlags {
    /// No promotional flags set.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new_arrival() -> Self {
        Self {
            new: Some(true),
            bestseller: None,
        }
    }

    pub fn bestseller() -> Self {
        Self {
            new: None,
            bestseller: Some(true),
        }
    }

    pub fn is_new(&self) -> bool {
        self.new.unwrap_or(false)
    }

    pub fn is_bestseller(&self) -> bool {
        self.bestseller.unwrap_or(false)
    }
}

/// One product record in the catalog.
///
/// This struct is also the persisted wire record:
/// `{ id, name, price, image, category, isNew?, isBestseller? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: String,
    #[serde(flatten)]
    pub promo: PromoFlags,
}

impl Product {
    /// Construct a validated product record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
        category: impl Into<String>,
        promo: PromoFlags,
    ) -> CatalogResult<Self> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(CatalogError::validation("id cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(CatalogError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            price,
            image: image.into(),
            category: category.into(),
            promo,
        })
    }
}

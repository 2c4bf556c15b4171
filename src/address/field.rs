//! Address field identifiers and the template token table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// One of the eleven address components a template can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Field {
    /// State, province, prefecture
    AdminArea,
    /// City or town
    Locality,
    /// Addressee name
    Recipient,
    Organization,
    #[serde(rename = "ADDRESS_LINE_1")]
    AddressLine1,
    #[serde(rename = "ADDRESS_LINE_2")]
    AddressLine2,
    /// District or suburb within a locality
    DependentLocality,
    PostalCode,
    /// CEDEX and similar sorting codes
    SortingCode,
    /// Deprecated single-field street address, superseded by the address lines
    StreetAddress,
    Country,
}

/// Template token table, `%<token>` expands to the value of the paired field.
///
/// Order is fixed and identical for every locale.
pub const TOKENS: [(char, Field); 11] = [
    ('S', Field::AdminArea),
    ('C', Field::Locality),
    ('N', Field::Recipient),
    ('O', Field::Organization),
    ('1', Field::AddressLine1),
    ('2', Field::AddressLine2),
    ('D', Field::DependentLocality),
    ('Z', Field::PostalCode),
    ('X', Field::SortingCode),
    ('A', Field::StreetAddress),
    ('R', Field::Country),
];

impl Field {
    /// Every field, in token table order
    pub const ALL: [Field; 11] = [
        Field::AdminArea,
        Field::Locality,
        Field::Recipient,
        Field::Organization,
        Field::AddressLine1,
        Field::AddressLine2,
        Field::DependentLocality,
        Field::PostalCode,
        Field::SortingCode,
        Field::StreetAddress,
        Field::Country,
    ];

    /// Canonical attribute name
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::AdminArea => "ADMIN_AREA",
            Field::Locality => "LOCALITY",
            Field::Recipient => "RECIPIENT",
            Field::Organization => "ORGANIZATION",
            Field::AddressLine1 => "ADDRESS_LINE_1",
            Field::AddressLine2 => "ADDRESS_LINE_2",
            Field::DependentLocality => "DEPENDENT_LOCALITY",
            Field::PostalCode => "POSTAL_CODE",
            Field::SortingCode => "SORTING_CODE",
            Field::StreetAddress => "STREET_ADDRESS",
            Field::Country => "COUNTRY",
        }
    }

    /// Template token character for this field
    pub fn token(&self) -> char {
        match self {
            Field::AdminArea => 'S',
            Field::Locality => 'C',
            Field::Recipient => 'N',
            Field::Organization => 'O',
            Field::AddressLine1 => '1',
            Field::AddressLine2 => '2',
            Field::DependentLocality => 'D',
            Field::PostalCode => 'Z',
            Field::SortingCode => 'X',
            Field::StreetAddress => 'A',
            Field::Country => 'R',
        }
    }

    /// Look up the field a template token stands for
    pub fn from_token(token: char) -> Option<Field> {
        TOKENS
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, field)| *field)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormatError::AttributeInvalid(s.to_string()))
    }
}

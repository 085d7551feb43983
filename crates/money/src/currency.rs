// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Represents a medium of exchange in a specified denomination with a fixed decimal precision.
//!
//! The built-in table covers every active ISO 4217 currency with a minor unit, including the
//! three and four decimal place currencies (`IQD`, `KWD`, `CLF`, `UYW`, ...). Precious metals,
//! bond market units and the testing codes (`XAU`, `XDR`, `XTS`, `XXX`, ...) have no minor unit
//! and are not listed.

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    str::FromStr,
    sync::LazyLock,
};

use ahash::AHashMap;
use axiom_core::correctness::{
    FAILED, check_in_range_inclusive_u8, check_predicate_true, check_valid_string_ascii,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

/// The maximum number of decimal places (minor-unit exponent) a currency may declare.
pub const CURRENCY_MAX_PRECISION: u8 = 9;

// (code, precision, ISO 4217 numeric, name)
const ISO_4217: &[(&str, u8, u16, &str)] = &[
    ("AED", 2, 784, "UAE Dirham"),
    ("AFN", 2, 971, "Afghani"),
    ("ALL", 2, 8, "Lek"),
    ("AMD", 2, 51, "Armenian Dram"),
    ("ANG", 2, 532, "Netherlands Antillean Guilder"),
    ("AOA", 2, 973, "Kwanza"),
    ("ARS", 2, 32, "Argentine Peso"),
    ("AUD", 2, 36, "Australian Dollar"),
    ("AWG", 2, 533, "Aruban Florin"),
    ("AZN", 2, 944, "Azerbaijan Manat"),
    ("BAM", 2, 977, "Convertible Mark"),
    ("BBD", 2, 52, "Barbados Dollar"),
    ("BDT", 2, 50, "Taka"),
    ("BGN", 2, 975, "Bulgarian Lev"),
    ("BHD", 3, 48, "Bahraini Dinar"),
    ("BIF", 0, 108, "Burundi Franc"),
    ("BMD", 2, 60, "Bermudian Dollar"),
    ("BND", 2, 96, "Brunei Dollar"),
    ("BOB", 2, 68, "Boliviano"),
    ("BOV", 2, 984, "Mvdol"),
    ("BRL", 2, 986, "Brazilian Real"),
    ("BSD", 2, 44, "Bahamian Dollar"),
    ("BTN", 2, 64, "Ngultrum"),
    ("BWP", 2, 72, "Pula"),
    ("BYN", 2, 933, "Belarusian Ruble"),
    ("BZD", 2, 84, "Belize Dollar"),
    ("CAD", 2, 124, "Canadian Dollar"),
    ("CDF", 2, 976, "Congolese Franc"),
    ("CHE", 2, 947, "WIR Euro"),
    ("CHF", 2, 756, "Swiss Franc"),
    ("CHW", 2, 948, "WIR Franc"),
    ("CLF", 4, 990, "Unidad de Fomento"),
    ("CLP", 0, 152, "Chilean Peso"),
    ("CNY", 2, 156, "Yuan Renminbi"),
    ("COP", 2, 170, "Colombian Peso"),
    ("COU", 2, 970, "Unidad de Valor Real"),
    ("CRC", 2, 188, "Costa Rican Colon"),
    ("CUC", 2, 931, "Peso Convertible"),
    ("CUP", 2, 192, "Cuban Peso"),
    ("CVE", 2, 132, "Cabo Verde Escudo"),
    ("CZK", 2, 203, "Czech Koruna"),
    ("DJF", 0, 262, "Djibouti Franc"),
    ("DKK", 2, 208, "Danish Krone"),
    ("DOP", 2, 214, "Dominican Peso"),
    ("DZD", 2, 12, "Algerian Dinar"),
    ("EGP", 2, 818, "Egyptian Pound"),
    ("ERN", 2, 232, "Nakfa"),
    ("ETB", 2, 230, "Ethiopian Birr"),
    ("EUR", 2, 978, "Euro"),
    ("FJD", 2, 242, "Fiji Dollar"),
    ("FKP", 2, 238, "Falkland Islands Pound"),
    ("GBP", 2, 826, "Pound Sterling"),
    ("GEL", 2, 981, "Lari"),
    ("GHS", 2, 936, "Ghana Cedi"),
    ("GIP", 2, 292, "Gibraltar Pound"),
    ("GMD", 2, 270, "Dalasi"),
    ("GNF", 0, 324, "Guinean Franc"),
    ("GTQ", 2, 320, "Quetzal"),
    ("GYD", 2, 328, "Guyana Dollar"),
    ("HKD", 2, 344, "Hong Kong Dollar"),
    ("HNL", 2, 340, "Lempira"),
    ("HTG", 2, 332, "Gourde"),
    ("HUF", 2, 348, "Forint"),
    ("IDR", 2, 360, "Rupiah"),
    ("ILS", 2, 376, "New Israeli Sheqel"),
    ("INR", 2, 356, "Indian Rupee"),
    ("IQD", 3, 368, "Iraqi Dinar"),
    ("IRR", 2, 364, "Iranian Rial"),
    ("ISK", 0, 352, "Iceland Krona"),
    ("JMD", 2, 388, "Jamaican Dollar"),
    ("JOD", 3, 400, "Jordanian Dinar"),
    ("JPY", 0, 392, "Yen"),
    ("KES", 2, 404, "Kenyan Shilling"),
    ("KGS", 2, 417, "Som"),
    ("KHR", 2, 116, "Riel"),
    ("KMF", 0, 174, "Comorian Franc"),
    ("KPW", 2, 408, "North Korean Won"),
    ("KRW", 0, 410, "Won"),
    ("KWD", 3, 414, "Kuwaiti Dinar"),
    ("KYD", 2, 136, "Cayman Islands Dollar"),
    ("KZT", 2, 398, "Tenge"),
    ("LAK", 2, 418, "Lao Kip"),
    ("LBP", 2, 422, "Lebanese Pound"),
    ("LKR", 2, 144, "Sri Lanka Rupee"),
    ("LRD", 2, 430, "Liberian Dollar"),
    ("LSL", 2, 426, "Loti"),
    ("LYD", 3, 434, "Libyan Dinar"),
    ("MAD", 2, 504, "Moroccan Dirham"),
    ("MDL", 2, 498, "Moldovan Leu"),
    ("MGA", 2, 969, "Malagasy Ariary"),
    ("MKD", 2, 807, "Denar"),
    ("MMK", 2, 104, "Kyat"),
    ("MNT", 2, 496, "Tugrik"),
    ("MOP", 2, 446, "Pataca"),
    ("MRU", 2, 929, "Ouguiya"),
    ("MUR", 2, 480, "Mauritius Rupee"),
    ("MVR", 2, 462, "Rufiyaa"),
    ("MWK", 2, 454, "Malawi Kwacha"),
    ("MXN", 2, 484, "Mexican Peso"),
    ("MXV", 2, 979, "Mexican Unidad de Inversion"),
    ("MYR", 2, 458, "Malaysian Ringgit"),
    ("MZN", 2, 943, "Mozambique Metical"),
    ("NAD", 2, 516, "Namibia Dollar"),
    ("NGN", 2, 566, "Naira"),
    ("NIO", 2, 558, "Cordoba Oro"),
    ("NOK", 2, 578, "Norwegian Krone"),
    ("NPR", 2, 524, "Nepalese Rupee"),
    ("NZD", 2, 554, "New Zealand Dollar"),
    ("OMR", 3, 512, "Rial Omani"),
    ("PAB", 2, 590, "Balboa"),
    ("PEN", 2, 604, "Sol"),
    ("PGK", 2, 598, "Kina"),
    ("PHP", 2, 608, "Philippine Peso"),
    ("PKR", 2, 586, "Pakistan Rupee"),
    ("PLN", 2, 985, "Zloty"),
    ("PYG", 0, 600, "Guarani"),
    ("QAR", 2, 634, "Qatari Rial"),
    ("RON", 2, 946, "Romanian Leu"),
    ("RSD", 2, 941, "Serbian Dinar"),
    ("RUB", 2, 643, "Russian Ruble"),
    ("RWF", 0, 646, "Rwanda Franc"),
    ("SAR", 2, 682, "Saudi Riyal"),
    ("SBD", 2, 90, "Solomon Islands Dollar"),
    ("SCR", 2, 690, "Seychelles Rupee"),
    ("SDG", 2, 938, "Sudanese Pound"),
    ("SEK", 2, 752, "Swedish Krona"),
    ("SGD", 2, 702, "Singapore Dollar"),
    ("SHP", 2, 654, "Saint Helena Pound"),
    ("SLE", 2, 925, "Leone"),
    ("SOS", 2, 706, "Somali Shilling"),
    ("SRD", 2, 968, "Surinam Dollar"),
    ("SSP", 2, 728, "South Sudanese Pound"),
    ("STN", 2, 930, "Dobra"),
    ("SVC", 2, 222, "El Salvador Colon"),
    ("SYP", 2, 760, "Syrian Pound"),
    ("SZL", 2, 748, "Lilangeni"),
    ("THB", 2, 764, "Baht"),
    ("TJS", 2, 972, "Somoni"),
    ("TMT", 2, 934, "Turkmenistan New Manat"),
    ("TND", 3, 788, "Tunisian Dinar"),
    ("TOP", 2, 776, "Pa'anga"),
    ("TRY", 2, 949, "Turkish Lira"),
    ("TTD", 2, 780, "Trinidad and Tobago Dollar"),
    ("TWD", 2, 901, "New Taiwan Dollar"),
    ("TZS", 2, 834, "Tanzanian Shilling"),
    ("UAH", 2, 980, "Hryvnia"),
    ("UGX", 0, 800, "Uganda Shilling"),
    ("USD", 2, 840, "US Dollar"),
    ("USN", 2, 997, "US Dollar (Next day)"),
    ("UYI", 0, 940, "Uruguay Peso en Unidades Indexadas"),
    ("UYU", 2, 858, "Peso Uruguayo"),
    ("UYW", 4, 927, "Unidad Previsional"),
    ("UZS", 2, 860, "Uzbekistan Sum"),
    ("VED", 2, 926, "Bolivar Soberano"),
    ("VES", 2, 928, "Bolivar Soberano"),
    ("VND", 0, 704, "Dong"),
    ("VUV", 0, 548, "Vatu"),
    ("WST", 2, 882, "Tala"),
    ("XAF", 0, 950, "CFA Franc BEAC"),
    ("XCD", 2, 951, "East Caribbean Dollar"),
    ("XCG", 2, 532, "Caribbean Guilder"),
    ("XOF", 0, 952, "CFA Franc BCEAO"),
    ("XPF", 0, 953, "CFP Franc"),
    ("YER", 2, 886, "Yemeni Rial"),
    ("ZAR", 2, 710, "Rand"),
    ("ZMW", 2, 967, "Zambian Kwacha"),
    ("ZWG", 2, 924, "Zimbabwe Gold"),
    ("ZWL", 2, 932, "Zimbabwe Dollar"),
];

static CURRENCY_MAP: LazyLock<AHashMap<Ustr, Currency>> = LazyLock::new(|| {
    ISO_4217
        .iter()
        .map(|(code, precision, iso4217, name)| {
            let currency = Currency {
                code: Ustr::from(*code),
                precision: *precision,
                iso4217: *iso4217,
                name: Ustr::from(*name),
            };
            (currency.code, currency)
        })
        .collect()
});

/// Represents a medium of exchange in a specified denomination with a fixed decimal precision.
///
/// Equality and hashing consider the currency `code` only.
#[derive(Clone, Copy, Eq)]
pub struct Currency {
    /// The three-letter currency code (e.g. "EUR").
    pub code: Ustr,
    /// The number of decimal places of the minor unit (e.g. 2 for cents).
    pub precision: u8,
    /// The ISO 4217 numeric code.
    pub iso4217: u16,
    /// The full name of the currency.
    pub name: Ustr,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` is not three uppercase ASCII letters.
    /// - `precision` exceeds [`CURRENCY_MAX_PRECISION`].
    /// - `name` is empty or not ASCII.
    pub fn new_checked<T: AsRef<str>>(
        code: T,
        precision: u8,
        iso4217: u16,
        name: T,
    ) -> anyhow::Result<Self> {
        let code = code.as_ref();
        let name = name.as_ref();
        check_valid_string_ascii(code, "code")?;
        check_predicate_true(
            code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()),
            &format!("invalid currency code '{code}', expected three uppercase letters"),
        )?;
        check_valid_string_ascii(name, "name")?;
        check_in_range_inclusive_u8(precision, 0, CURRENCY_MAX_PRECISION, "precision")?;

        Ok(Self {
            code: Ustr::from(code),
            precision,
            iso4217,
            name: Ustr::from(name),
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Currency::new_checked`] for more details.
    pub fn new<T: AsRef<str>>(code: T, precision: u8, iso4217: u16, name: T) -> Self {
        Self::new_checked(code, precision, iso4217, name).expect(FAILED)
    }

    /// Returns the built-in currency for `code`, if known.
    #[must_use]
    pub fn try_from_code(code: &str) -> Option<Self> {
        CURRENCY_MAP.get(&Ustr::from(code)).copied()
    }

    /// Returns `true` if this currency has the same code as `other`.
    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        self.code == other.code
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn EUR() -> Self {
        CURRENCY_MAP[&Ustr::from("EUR")]
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn GBP() -> Self {
        CURRENCY_MAP[&Ustr::from("GBP")]
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn USD() -> Self {
        CURRENCY_MAP[&Ustr::from("USD")]
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn JPY() -> Self {
        CURRENCY_MAP[&Ustr::from("JPY")]
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code='{}', precision={}, iso4217={}, name='{}')",
            stringify!(Currency),
            self.code,
            self.precision,
            self.iso4217,
            self.name,
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::try_from_code(s).ok_or_else(|| anyhow::anyhow!("Unknown currency code '{s}'"))
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.code.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code: Ustr = Deserialize::deserialize(deserializer)?;
        Self::from_str(code.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("EUR", 2)]
    #[case("GBP", 2)]
    #[case("JPY", 0)]
    #[case("IQD", 3)]
    #[case("UYW", 4)]
    #[case("UYU", 2)]
    #[case("RUB", 2)]
    #[case("COP", 2)]
    #[case("BIF", 0)]
    #[case("TND", 3)]
    #[case("XCD", 2)]
    #[case("ZMW", 2)]
    fn test_builtin_precision(#[case] code: &str, #[case] precision: u8) {
        let currency = Currency::from_str(code).unwrap();
        assert_eq!(currency.code.as_str(), code);
        assert_eq!(currency.precision, precision);
    }

    #[rstest]
    #[case("ABC")]
    #[case("XAU")]
    #[case("XXX")]
    #[case("eur")]
    #[case("")]
    fn test_unknown_currency(#[case] code: &str) {
        let err = Currency::from_str(code).unwrap_err();
        assert_eq!(err.to_string(), format!("Unknown currency code '{code}'"));
    }

    #[rstest]
    fn test_equality_by_code() {
        let custom = Currency::new("EUR", 3, 0, "Other Euro");
        assert_eq!(custom, Currency::EUR());
        assert!(custom.is(&Currency::EUR()));
        assert_ne!(Currency::EUR(), Currency::USD());
    }

    #[rstest]
    #[case("EU", 2)]
    #[case("EURO", 2)]
    #[case("eur", 2)]
    #[case("XYZ", 10)]
    fn test_new_checked_invalid(#[case] code: &str, #[case] precision: u8) {
        assert!(Currency::new_checked(code, precision, 0, "Test").is_err());
    }

    #[rstest]
    fn test_table_codes_are_unique_and_valid() {
        assert_eq!(CURRENCY_MAP.len(), ISO_4217.len());
        for (code, precision, iso4217, name) in ISO_4217 {
            let currency = Currency::new_checked(*code, *precision, *iso4217, *name).unwrap();
            assert_eq!(Currency::from_str(code).unwrap().precision, currency.precision);
        }
    }

    #[rstest]
    fn test_display_and_debug() {
        let eur = Currency::EUR();
        assert_eq!(eur.to_string(), "EUR");
        assert_eq!(
            format!("{eur:?}"),
            "Currency(code='EUR', precision=2, iso4217=978, name='Euro')"
        );
    }

    #[rstest]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Currency::GBP()).unwrap();
        assert_eq!(json, "\"GBP\"");
        let currency: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(currency, Currency::GBP());
    }

    #[rstest]
    fn test_deserialize_unknown_code_fails() {
        assert!(serde_json::from_str::<Currency>("\"ZZZ\"").is_err());
    }
}

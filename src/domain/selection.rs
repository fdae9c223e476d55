use {
    crate::{
        config::{COINGECKO, POLLING},
        utils::TimeUtils,
    },
    std::{fmt, time::Duration},
    strum_macros::{Display, EnumIter, EnumString},
};

/// CoinGecko coin id (e.g. "bitcoin"). Forwarded to the API untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Asset(String);

impl Asset {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    /// Human name for the known assets, the raw id for anything else.
    pub fn display_name(&self) -> &str {
        COINGECKO
            .known_assets
            .iter()
            .find(|(id, _)| *id == self.0)
            .map(|(_, name)| *name)
            .unwrap_or(&self.0)
    }

    /// The assets offered by the selector.
    pub fn known() -> impl Iterator<Item = Asset> {
        COINGECKO.known_assets.iter().map(|(id, _)| Asset::new(*id))
    }
}

impl Default for Asset {
    fn default() -> Self {
        Self::new(COINGECKO.default_asset)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Asset {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Quote currency (`vs_currency`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    #[default]
    #[strum(serialize = "usd", to_string = "USD")]
    Usd,
    #[strum(serialize = "jpy", to_string = "JPY")]
    Jpy,
}

impl Currency {
    /// Code sent as `vs_currency`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Jpy => "jpy",
        }
    }
}

/// Look-back window, sent as the `days` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display)]
pub enum TimeRange {
    #[default]
    #[strum(serialize = "1", to_string = "Last 1 Day")]
    Day,
    #[strum(serialize = "7", to_string = "Last 1 Week")]
    Week,
    #[strum(serialize = "30", to_string = "Last 1 Month")]
    Month,
    #[strum(serialize = "365", to_string = "Last 1 Year")]
    Year,
}

impl TimeRange {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Day => "1",
            Self::Week => "7",
            Self::Month => "30",
            Self::Year => "365",
        }
    }

    /// Intraday ranges label the time axis with hour:minute, everything else with month/day.
    pub fn is_intraday(&self) -> bool {
        matches!(self, Self::Day)
    }
}

/// How often the poller re-fetches. Parsed from a minute count on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
pub enum RefreshInterval {
    #[strum(serialize = "1", to_string = "1 min")]
    M1,
    #[strum(serialize = "5", to_string = "5 min")]
    M5,
    #[strum(serialize = "15", to_string = "15 min")]
    M15,
    #[strum(serialize = "30", to_string = "30 min")]
    M30,
    #[strum(serialize = "60", to_string = "1 hour")]
    H1,
}

impl RefreshInterval {
    pub const fn as_millis(&self) -> i64 {
        match self {
            Self::M1 => TimeUtils::MS_IN_MIN,
            Self::M5 => TimeUtils::MS_IN_5_MIN,
            Self::M15 => TimeUtils::MS_IN_15_MIN,
            Self::M30 => TimeUtils::MS_IN_30_MIN,
            Self::H1 => TimeUtils::MS_IN_H,
        }
    }

    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.as_millis() as u64)
    }
}

impl Default for RefreshInterval {
    fn default() -> Self {
        POLLING.default_interval
    }
}

impl From<RefreshInterval> for Duration {
    fn from(interval: RefreshInterval) -> Self {
        interval.duration()
    }
}

/// Everything the user picked. One value per axis; changing any of them restarts polling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub asset: Asset,
    pub currency: Currency,
    pub range: TimeRange,
    pub interval: RefreshInterval,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} days={} every {}",
            self.asset,
            self.currency.code(),
            self.range.code(),
            self.interval
        )
    }
}

/// Plot style. A render preference only, never part of the fetch parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum ChartKind {
    #[strum(serialize = "line", to_string = "Line")]
    Line,
    #[default]
    #[strum(serialize = "area", to_string = "Area")]
    Area,
}

/// Locale used for axis ticks and hover labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum ChartLocale {
    #[strum(serialize = "en-US", serialize = "en", to_string = "en-US")]
    EnUs,
    #[strum(serialize = "ja-JP", serialize = "ja", to_string = "ja-JP")]
    JaJp,
}

impl Default for ChartLocale {
    /// The build variant decides: the `locale_ja` feature produces the Japanese build.
    fn default() -> Self {
        if cfg!(feature = "locale_ja") {
            Self::JaJp
        } else {
            Self::EnUs
        }
    }
}

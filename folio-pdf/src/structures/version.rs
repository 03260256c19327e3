use std::str::FromStr;

use snafu::Snafu;

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

/// Version written in the file header.
///
/// Nothing the engine writes needs more than PDF 1.3, which is the
/// default. Later versions only change the header line.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Version {
    /// PDF Version 1.0 (1993)
    Pdf1_0,
    /// PDF Version 1.1 (1996)
    Pdf1_1,
    /// PDF Version 1.2 (1996)
    Pdf1_2,
    /// PDF Version 1.3 (2000)
    #[default]
    Pdf1_3,
    /// PDF Version 1.4 (2001)
    Pdf1_4,
    /// PDF Version 1.5 (2003)
    Pdf1_5,
    /// PDF Version 1.6 (2004)
    Pdf1_6,
    /// PDF Version 1.7 (2006)
    Pdf1_7,
    /// PDF Version 2.0 (2017)
    Pdf2_0,
}

impl Version {
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Pdf1_0 => "1.0",
            Version::Pdf1_1 => "1.1",
            Version::Pdf1_2 => "1.2",
            Version::Pdf1_3 => "1.3",
            Version::Pdf1_4 => "1.4",
            Version::Pdf1_5 => "1.5",
            Version::Pdf1_6 => "1.6",
            Version::Pdf1_7 => "1.7",
            Version::Pdf2_0 => "2.0",
        }
    }

    /// Header line, `%PDF-1.3` and a line feed for the default version.
    pub fn header(&self) -> String {
        format!("%PDF-{}\n", self.as_str())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        match source {
            "1.0" => Ok(Version::Pdf1_0),
            "1.1" => Ok(Version::Pdf1_1),
            "1.2" => Ok(Version::Pdf1_2),
            "1.3" => Ok(Version::Pdf1_3),
            "1.4" => Ok(Version::Pdf1_4),
            "1.5" => Ok(Version::Pdf1_5),
            "1.6" => Ok(Version::Pdf1_6),
            "1.7" => Ok(Version::Pdf1_7),
            "2.0" => Ok(Version::Pdf2_0),
            _ => Err(error::Error::UnknownVersion {
                data: source.to_string(),
            }
            .into()),
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

mod error {
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)))]
    pub(super) enum Error {
        #[snafu(display("Unknown version string passed: {data}"))]
        UnknownVersion { data: String },
    }
}

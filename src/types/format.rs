//! Output image formats accepted by the render endpoint.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::FigsliceError;

/// Image format, used both as the render parameter and the file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    #[default]
    Png,
    #[value(alias = "jpeg")]
    Jpg,
    Svg,
    Pdf,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Svg => "svg",
            ImageFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = FigsliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpg),
            "svg" => Ok(ImageFormat::Svg),
            "pdf" => Ok(ImageFormat::Pdf),
            _ => Err(FigsliceError::Config {
                message: format!("Unknown image format '{}'", s),
                help: Some("Supported formats: png, jpg, svg, pdf".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_png() {
        assert_eq!(ImageFormat::default(), ImageFormat::Png);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("PNG".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!("jpeg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpg);
        assert_eq!("svg".parse::<ImageFormat>().unwrap(), ImageFormat::Svg);
        assert!("gif".parse::<ImageFormat>().is_err());
    }

    #[test]
    fn test_flag_accepts_jpeg_alias() {
        let format = <ImageFormat as ValueEnum>::from_str("jpeg", true).unwrap();
        assert_eq!(format, ImageFormat::Jpg);
        assert_eq!(<ImageFormat as ValueEnum>::from_str("JPG", true).unwrap(), ImageFormat::Jpg);
    }

    #[test]
    fn test_display_is_extension() {
        assert_eq!(ImageFormat::Pdf.to_string(), "pdf");
    }
}

use snafu::ResultExt;

use crate::{
    content::{Result, error},
    image::XObject,
    types::Numeric,
};

/// Paints an image XObject at a position.
///
/// Without an explicit size the image is drawn at its pixel size, one
/// point per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    xobject: XObject,
    x: f64,
    y: f64,
    size: Option<(f64, f64)>,
}

impl Image {
    pub fn new(xobject: XObject) -> Self {
        Self {
            xobject,
            x: 0.0,
            y: 0.0,
            size: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn scaled(mut self, width: f64, height: f64) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn xobject(&self) -> &XObject {
        &self.xobject
    }

    /// Drawn size in points.
    pub fn size(&self) -> Result<(f64, f64)> {
        match self.size {
            Some(size) => Ok(size),
            None => {
                let header = self.xobject.header().context(error::ImageSnafu)?;
                Ok((f64::from(header.width), f64::from(header.height)))
            }
        }
    }

    pub fn stream(&self) -> Result<Vec<u8>> {
        let (width, height) = self.size()?;

        Ok(format!(
            "q {} 0 0 {} {} {} cm /{} Do Q",
            Numeric::Real(width),
            Numeric::Real(height),
            Numeric::Real(self.x),
            Numeric::Real(self.y),
            self.xobject.label(),
        )
        .into_bytes())
    }
}

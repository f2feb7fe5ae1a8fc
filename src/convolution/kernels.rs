use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::KernelParseError;

/// Flat table of weights of a square convolution kernel in row-major order.
///
/// The table isn't validated on creation, a kernel with a count of
/// weights that is not a perfect square is rejected by
/// [apply](crate::apply).
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Cow<'static, [f32]>,
}

impl Kernel {
    pub fn new(weights: Vec<f32>) -> Self {
        Self {
            weights: Cow::Owned(weights),
        }
    }

    pub const fn from_static(weights: &'static [f32]) -> Self {
        Self {
            weights: Cow::Borrowed(weights),
        }
    }

    /// Parse comma-separated list of numbers, e.g. `"0,-1,0,-1,5,-1,0,-1,0"`.
    ///
    /// Whitespaces around numbers are ignored, as well as empty items
    /// between consecutive commas.
    pub fn parse(text: &str) -> Result<Self, KernelParseError> {
        let mut weights = Vec::new();
        for (position, token) in text.split(',').enumerate() {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let value = token
                .parse::<f32>()
                .map_err(|_| KernelParseError::InvalidToken {
                    position,
                    token: token.to_owned(),
                })?;
            weights.push(value);
        }
        Ok(Self::new(weights))
    }

    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// Length of the kernel side, `floor(sqrt(len))`.
    pub fn side(&self) -> usize {
        integer_sqrt(self.len())
    }

    /// Radius of the window around a pixel, `side / 2`.
    ///
    /// For kernels with even side the window is one pixel wider than the side.
    pub fn radius(&self) -> usize {
        self.side() / 2
    }

    pub fn is_square(&self) -> bool {
        let side = self.side();
        side > 0 && side * side == self.len()
    }
}

impl From<Vec<f32>> for Kernel {
    fn from(weights: Vec<f32>) -> Self {
        Self::new(weights)
    }
}

impl FromStr for Kernel {
    type Err = KernelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn integer_sqrt(value: usize) -> usize {
    let mut res = (value as f64).sqrt() as usize;
    while res > 0 && res.saturating_mul(res) > value {
        res -= 1;
    }
    while (res + 1).saturating_mul(res + 1) <= value {
        res += 1;
    }
    res
}

/// Despite the name, this kernel sharpens the image. Its weights are equal
/// to the weights of [SHARPEN].
pub const IDENTITY: Kernel = Kernel::from_static(&[
    0., -1., 0., //
    -1., 5., -1., //
    0., -1., 0.,
]);

pub const GAUSSIAN_BLUR: Kernel = Kernel::from_static(&[
    0.0625, 0.125, 0.0625, //
    0.125, 0.25, 0.125, //
    0.0625, 0.125, 0.0625,
]);

pub const EDGE_DETECTION: Kernel = Kernel::from_static(&[
    -1., -1., -1., //
    -1., 8., -1., //
    -1., -1., -1.,
]);

pub const BOX_BLUR: Kernel = Kernel::from_static(&[
    0.1111, 0.1111, 0.1111, //
    0.1111, 0.1111, 0.1111, //
    0.1111, 0.1111, 0.1111,
]);

pub const SHARPEN: Kernel = Kernel::from_static(&[
    0., -1., 0., //
    -1., 5., -1., //
    0., -1., 0.,
]);

/// Names of predefined 3x3 kernels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernelName {
    /// Center-weighted kernel `[0,-1,0,-1,5,-1,0,-1,0]`.
    Identity,
    /// 3x3 approximation of Gaussian, weights sum to 1.0.
    GaussianBlur,
    /// Laplacian-like kernel, weights sum to zero so flat areas become black.
    EdgeDetection,
    /// Mean of 3x3 neighbourhood with weights rounded to `0.1111`.
    BoxBlur,
    Sharpen,
}

impl KernelName {
    pub const ALL: [KernelName; 5] = [
        Self::Identity,
        Self::GaussianBlur,
        Self::EdgeDetection,
        Self::BoxBlur,
        Self::Sharpen,
    ];

    pub fn kernel(self) -> Kernel {
        match self {
            Self::Identity => IDENTITY,
            Self::GaussianBlur => GAUSSIAN_BLUR,
            Self::EdgeDetection => EDGE_DETECTION,
            Self::BoxBlur => BOX_BLUR,
            Self::Sharpen => SHARPEN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::GaussianBlur => "gaussian-blur",
            Self::EdgeDetection => "edge-detection",
            Self::BoxBlur => "box-blur",
            Self::Sharpen => "sharpen",
        }
    }
}

impl fmt::Display for KernelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelName {
    type Err = KernelParseError;

    /// Names are case-insensitive, `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|name| name.name() == normalized)
            .ok_or_else(|| KernelParseError::UnknownKernelName(s.to_owned()))
    }
}
